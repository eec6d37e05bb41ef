//! Serve-from-cache-or-fetch resolution.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use quotecache_fetch::{ClientConfig, HistoryProvider, YahooClient};
use quotecache_store::{CacheState, PriceCache};
use quotecache_types::{PriceSeries, QuoteCacheError, Result, Ticker};

/// Default data directory, relative to the working directory.
pub const DEFAULT_DATA_DIR: &str = "data";

/// Default staleness threshold: 24 hours.
pub const DEFAULT_MAX_AGE: Duration = Duration::from_secs(24 * 60 * 60);

/// Configuration for a [`PriceLoader`].
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// Directory holding the per-ticker cache files.
    pub data_dir: PathBuf,
    /// Maximum cache file age before a re-fetch.
    pub max_age: Duration,
    /// HTTP client settings for the default provider. Ignored when a custom
    /// provider is supplied.
    pub client: ClientConfig,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            max_age: DEFAULT_MAX_AGE,
            client: ClientConfig::default(),
        }
    }
}

/// Resolves price history requests against the local cache.
///
/// A fresh cache file is served from disk; a missing or stale one triggers a
/// remote fetch that overwrites the file. Both paths return the series
/// ordered and keyed by date. Fetch and filesystem failures propagate to the
/// caller.
pub struct PriceLoader {
    provider: Box<dyn HistoryProvider>,
    cache: PriceCache,
    max_age: Duration,
}

impl PriceLoader {
    /// Creates a loader backed by the Yahoo Finance client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: LoaderConfig) -> Result<Self> {
        let client = YahooClient::new(config.client.clone())
            .map_err(|e| QuoteCacheError::Http(e.to_string()))?;
        Ok(Self::with_provider(Box::new(client), config))
    }

    /// Creates a loader with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self> {
        Self::new(LoaderConfig::default())
    }

    /// Creates a loader fetching through the given provider.
    pub fn with_provider(provider: Box<dyn HistoryProvider>, config: LoaderConfig) -> Self {
        Self {
            provider,
            cache: PriceCache::new(config.data_dir),
            max_age: config.max_age,
        }
    }

    /// Returns the cache this loader resolves against.
    #[must_use]
    pub const fn cache(&self) -> &PriceCache {
        &self.cache
    }

    /// Returns the staleness threshold.
    #[must_use]
    pub const fn max_age(&self) -> Duration {
        self.max_age
    }

    /// Returns the name of the backing provider.
    #[must_use]
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Returns the price history for a ticker, fetching only when the cache
    /// file is missing or stale.
    ///
    /// # Errors
    ///
    /// Returns an error if the ticker is invalid, the cache file cannot be
    /// read or written, or a required remote fetch fails.
    pub async fn get_prices(&self, ticker: &str) -> Result<PriceSeries> {
        let ticker: Ticker = ticker.parse()?;

        match self.cache.state(&ticker, self.max_age)? {
            CacheState::Fresh { .. } => self.cache.read(&ticker),
            CacheState::Missing | CacheState::Stale { .. } => self.refresh(&ticker).await,
        }
    }

    /// Fetches a ticker's history from the provider and overwrites its cache
    /// file, regardless of freshness.
    ///
    /// # Errors
    ///
    /// Returns an error if the fetch fails or the file cannot be written.
    pub async fn refresh(&self, ticker: &Ticker) -> Result<PriceSeries> {
        let bars = self.provider.fetch_history(ticker).await?;
        let series = PriceSeries::from_bars(bars);
        self.cache.write(ticker, &series)?;
        Ok(series)
    }
}

impl fmt::Debug for PriceLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriceLoader")
            .field("provider", &self.provider.name())
            .field("cache", &self.cache)
            .field("max_age", &self.max_age)
            .finish()
    }
}

/// Returns the price history for a ticker using a default-configured loader
/// rooted at `data_dir`.
///
/// Pass [`DEFAULT_DATA_DIR`] to get the conventional `data/` layout.
///
/// # Errors
///
/// Returns an error if the ticker is invalid, the cache cannot be accessed,
/// or a required remote fetch fails.
pub async fn get_prices(ticker: &str, data_dir: impl Into<PathBuf>) -> Result<PriceSeries> {
    let config = LoaderConfig {
        data_dir: data_dir.into(),
        ..LoaderConfig::default()
    };
    PriceLoader::new(config)?.get_prices(ticker).await
}
