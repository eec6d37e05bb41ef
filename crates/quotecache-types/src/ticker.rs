//! Validated ticker symbols.

use std::str::FromStr;

use crate::TickerError;

/// A validated ticker symbol.
///
/// The symbol doubles as the cache file name (`{datadir}/{ticker}.csv`), so
/// it must be non-empty and must not contain whitespace or path separators.
/// Case is preserved as given; Yahoo Finance treats symbols
/// case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ticker(String);

impl Ticker {
    /// Creates a ticker from a symbol string, validating it.
    ///
    /// # Errors
    ///
    /// Returns an error if the symbol is empty or contains whitespace or
    /// path separators.
    pub fn new(symbol: impl Into<String>) -> Result<Self, TickerError> {
        let symbol = symbol.into();

        if symbol.is_empty() {
            return Err(TickerError::Empty);
        }

        if let Some(ch) = symbol
            .chars()
            .find(|c| c.is_whitespace() || matches!(c, '/' | '\\'))
        {
            return Err(TickerError::InvalidChar { symbol, ch });
        }

        Ok(Self(symbol))
    }

    /// Returns the symbol as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Ticker {
    type Err = TickerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl std::fmt::Display for Ticker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Ticker {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
