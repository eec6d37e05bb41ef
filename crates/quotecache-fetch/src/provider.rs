//! History provider abstraction.

use async_trait::async_trait;
use quotecache_types::{PriceBar, Result, Ticker};

/// A source of full daily price history for a ticker.
///
/// The cache loader fetches through this trait so the production client can
/// be swapped out in tests. Implementations return the complete history the
/// provider has for the symbol; the loader owns persistence and freshness.
#[async_trait]
pub trait HistoryProvider: Send + Sync {
    /// Human-readable name of this provider.
    fn name(&self) -> &str;

    /// Fetches the maximum available daily history for a ticker.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider is unreachable, returns no data for
    /// the symbol, or the response cannot be decoded.
    async fn fetch_history(&self, ticker: &Ticker) -> Result<Vec<PriceBar>>;
}
