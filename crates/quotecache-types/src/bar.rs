//! Daily price bar representation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single day of price history for one ticker.
///
/// The serde field names double as the CSV header row, so the cached file
/// carries the same column names the upstream provider uses, with the date
/// column first.
///
/// Price fields that the provider left null for an otherwise-present row are
/// carried as NaN; a missing volume is carried as 0. Dividend and split
/// columns are zero on days without a corporate action.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    /// Trading day.
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    /// Opening price.
    #[serde(rename = "Open")]
    pub open: f64,
    /// Highest price of the day.
    #[serde(rename = "High")]
    pub high: f64,
    /// Lowest price of the day.
    #[serde(rename = "Low")]
    pub low: f64,
    /// Closing price.
    #[serde(rename = "Close")]
    pub close: f64,
    /// Traded volume.
    #[serde(rename = "Volume")]
    pub volume: u64,
    /// Dividend paid per share on this day, 0 if none.
    #[serde(rename = "Dividends", default)]
    pub dividends: f64,
    /// Split ratio effective this day (e.g. 4.0 for a 4:1 split), 0 if none.
    #[serde(rename = "Stock Splits", default)]
    pub stock_splits: f64,
}

impl PriceBar {
    /// Creates a new price bar.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        date: NaiveDate,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: u64,
        dividends: f64,
        stock_splits: f64,
    ) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
            volume,
            dividends,
            stock_splits,
        }
    }

    /// Returns the price range (high - low).
    #[must_use]
    pub fn range(&self) -> f64 {
        self.high - self.low
    }

    /// Returns true if the close is above the open.
    #[must_use]
    pub fn is_bullish(&self) -> bool {
        self.close > self.open
    }

    /// Returns true if a dividend was paid on this day.
    #[must_use]
    pub fn has_dividend(&self) -> bool {
        self.dividends > 0.0
    }

    /// Returns true if a stock split took effect on this day.
    #[must_use]
    pub fn has_split(&self) -> bool {
        self.stock_splits > 0.0
    }
}
