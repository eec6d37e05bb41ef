//! Error types for quotecache.

use thiserror::Error;

/// Result type alias for quotecache operations.
pub type Result<T> = std::result::Result<T, QuoteCacheError>;

/// Errors that can occur while fetching or caching price history.
#[derive(Error, Debug)]
pub enum QuoteCacheError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The provider returned no price history for the ticker.
    #[error("No price data available for {ticker}")]
    NoData {
        /// The ticker that had no data.
        ticker: String,
    },

    /// The provider response could not be decoded.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Invalid ticker symbol.
    #[error(transparent)]
    Ticker(#[from] TickerError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Error for invalid ticker symbols.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TickerError {
    /// The symbol is empty or whitespace-only.
    #[error("Ticker symbol is empty")]
    Empty,

    /// The symbol contains a character that cannot appear in a file name.
    #[error("Invalid character {ch:?} in ticker symbol '{symbol}'")]
    InvalidChar {
        /// The offending symbol.
        symbol: String,
        /// The character that was rejected.
        ch: char,
    },
}
