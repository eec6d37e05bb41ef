//! Cached historical price fetcher for Yahoo Finance.
//!
//! This is a facade crate that re-exports functionality from the quotecache
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```ignore
//! use quotecache_lib::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Served from data/AAPL.csv when it is under 24 hours old,
//!     // fetched from Yahoo Finance and rewritten otherwise.
//!     let prices = get_prices("AAPL", DEFAULT_DATA_DIR).await?;
//!
//!     if let Some(latest) = prices.last() {
//!         println!("{}: close {}", latest.date, latest.close);
//!     }
//!
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/quotecache/quotecache/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use quotecache_types::*;

// Re-export fetch functionality
#[cfg(feature = "fetch")]
pub use quotecache_fetch::{ClientConfig, FetchError, HistoryProvider, YahooClient, url};

// Re-export the cache store
#[cfg(feature = "store")]
pub use quotecache_store::{CacheState, PriceCache, is_expired};

// Re-export the resolver
#[cfg(feature = "loader")]
pub use quotecache_loader::{
    DEFAULT_DATA_DIR, DEFAULT_MAX_AGE, LoaderConfig, PriceLoader, get_prices,
};

/// Prelude module for convenient imports.
///
/// ```
/// use quotecache_lib::prelude::*;
/// ```
pub mod prelude {
    pub use quotecache_types::{
        PriceBar, PriceSeries, QuoteCacheError, Result, Ticker, TickerError,
    };

    #[cfg(feature = "fetch")]
    pub use quotecache_fetch::{ClientConfig, HistoryProvider, YahooClient};

    #[cfg(feature = "store")]
    pub use quotecache_store::{CacheState, PriceCache};

    #[cfg(feature = "loader")]
    pub use quotecache_loader::{
        DEFAULT_DATA_DIR, DEFAULT_MAX_AGE, LoaderConfig, PriceLoader, get_prices,
    };
}
