//! Per-ticker cache files and the freshness check.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use quotecache_types::{PriceSeries, Result, Ticker};

use crate::csv;

/// Freshness of a ticker's cache file.
///
/// The file's modification time is the sole staleness signal: no versioning,
/// no checksum, no content validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheState {
    /// No cache file exists for the ticker.
    Missing,
    /// The cache file is within the staleness threshold.
    Fresh {
        /// Time since the file was last written.
        age: Duration,
    },
    /// The cache file is older than the staleness threshold.
    Stale {
        /// Time since the file was last written.
        age: Duration,
    },
}

impl CacheState {
    /// Returns true if a cached file can be served without a fetch.
    #[must_use]
    pub const fn is_fresh(&self) -> bool {
        matches!(self, Self::Fresh { .. })
    }

    /// Returns the file age, if a file exists.
    #[must_use]
    pub const fn age(&self) -> Option<Duration> {
        match self {
            Self::Missing => None,
            Self::Fresh { age } | Self::Stale { age } => Some(*age),
        }
    }
}

/// Returns true if a cache file of the given age must be refreshed.
///
/// The comparison is strictly greater-than: a file exactly `max_age` old is
/// still fresh.
#[must_use]
pub fn is_expired(age: Duration, max_age: Duration) -> bool {
    age > max_age
}

/// Per-ticker CSV cache under a data directory.
///
/// Layout: `{data_dir}/{ticker}.csv`, one file per ticker. Writes truncate
/// the previous file in place; two racing writers are last-writer-wins.
#[derive(Debug, Clone)]
pub struct PriceCache {
    data_dir: PathBuf,
}

impl PriceCache {
    /// Creates a cache rooted at the given data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Returns the root directory of the cache.
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Returns the cache file path for a ticker: `{data_dir}/{ticker}.csv`.
    #[must_use]
    pub fn ticker_path(&self, ticker: &Ticker) -> PathBuf {
        self.data_dir.join(format!("{ticker}.csv"))
    }

    /// Reports the freshness of a ticker's cache file.
    ///
    /// A modification time in the future reads as age zero. Filesystem
    /// errors other than the file being absent propagate.
    ///
    /// # Errors
    ///
    /// Returns an error if the file metadata cannot be read.
    pub fn state(&self, ticker: &Ticker, max_age: Duration) -> Result<CacheState> {
        let path = self.ticker_path(ticker);

        let metadata = match fs::metadata(&path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(CacheState::Missing),
            Err(e) => return Err(e.into()),
        };

        let age = metadata.modified()?.elapsed().unwrap_or(Duration::ZERO);

        if is_expired(age, max_age) {
            Ok(CacheState::Stale { age })
        } else {
            Ok(CacheState::Fresh { age })
        }
    }

    /// Reads a ticker's cached series, parsing the date column.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or a row fails to parse.
    pub fn read(&self, ticker: &Ticker) -> Result<PriceSeries> {
        csv::read_series(&self.ticker_path(ticker))
    }

    /// Writes a ticker's series, overwriting any existing cache file.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be created or the file
    /// cannot be written.
    pub fn write(&self, ticker: &Ticker, series: &PriceSeries) -> Result<()> {
        csv::write_series(&self.ticker_path(ticker), series)
    }

    /// Lists the tickers that have a cache file, sorted by symbol.
    ///
    /// A data directory that does not exist yet is an empty cache, not an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be enumerated.
    pub fn cached_tickers(&self) -> Result<Vec<String>> {
        let entries = match fs::read_dir(&self.data_dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut tickers = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("csv") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                tickers.push(stem.to_string());
            }
        }

        tickers.sort();
        Ok(tickers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use quotecache_types::PriceBar;
    use std::fs::File;
    use std::time::SystemTime;

    const DAY: Duration = Duration::from_secs(24 * 60 * 60);

    fn ticker(symbol: &str) -> Ticker {
        Ticker::new(symbol).unwrap()
    }

    fn sample_series(rows: u32) -> PriceSeries {
        let bars = (1..=rows)
            .map(|d| {
                let date = NaiveDate::from_ymd_opt(2024, 1, d).unwrap();
                PriceBar::new(date, 100.0, 101.0, 99.0, 100.5, 1_000, 0.0, 0.0)
            })
            .collect();
        PriceSeries::from_bars(bars)
    }

    /// Rewinds a cache file's mtime by `age`.
    fn backdate(path: &Path, age: Duration) {
        let file = File::options().write(true).open(path).unwrap();
        file.set_modified(SystemTime::now() - age).unwrap();
    }

    #[test]
    fn test_is_expired_boundary() {
        let max_age = Duration::from_secs(86_400);

        // Exactly at the threshold is still fresh.
        assert!(!is_expired(Duration::from_secs(86_400), max_age));
        assert!(is_expired(Duration::from_secs(86_401), max_age));
        assert!(!is_expired(Duration::from_secs(82_800), max_age)); // 23h
        assert!(is_expired(Duration::from_secs(90_000), max_age)); // 25h
    }

    #[test]
    fn test_ticker_path() {
        let cache = PriceCache::new("data");
        assert_eq!(
            cache.ticker_path(&ticker("AAPL")),
            PathBuf::from("data/AAPL.csv")
        );
    }

    #[test]
    fn test_state_missing() {
        let dir = tempfile::tempdir().unwrap();
        let cache = PriceCache::new(dir.path());

        assert_eq!(
            cache.state(&ticker("AAPL"), DAY).unwrap(),
            CacheState::Missing
        );
    }

    #[test]
    fn test_state_fresh_and_stale() {
        let dir = tempfile::tempdir().unwrap();
        let cache = PriceCache::new(dir.path());
        let aapl = ticker("AAPL");

        cache.write(&aapl, &sample_series(3)).unwrap();
        assert!(cache.state(&aapl, DAY).unwrap().is_fresh());

        // 23 hours old: still fresh.
        backdate(&cache.ticker_path(&aapl), Duration::from_secs(23 * 3600));
        assert!(cache.state(&aapl, DAY).unwrap().is_fresh());

        // 25 hours old: stale.
        backdate(&cache.ticker_path(&aapl), Duration::from_secs(25 * 3600));
        let state = cache.state(&aapl, DAY).unwrap();
        assert!(matches!(state, CacheState::Stale { .. }));
        assert!(state.age().unwrap() >= Duration::from_secs(25 * 3600));
    }

    #[test]
    fn test_state_future_mtime_is_fresh() {
        let dir = tempfile::tempdir().unwrap();
        let cache = PriceCache::new(dir.path());
        let aapl = ticker("AAPL");

        cache.write(&aapl, &sample_series(1)).unwrap();
        let file = File::options()
            .write(true)
            .open(cache.ticker_path(&aapl))
            .unwrap();
        file.set_modified(SystemTime::now() + Duration::from_secs(3600))
            .unwrap();

        let state = cache.state(&aapl, DAY).unwrap();
        assert_eq!(state.age(), Some(Duration::ZERO));
        assert!(state.is_fresh());
    }

    #[test]
    fn test_write_overwrites_previous_file() {
        let dir = tempfile::tempdir().unwrap();
        let cache = PriceCache::new(dir.path());
        let aapl = ticker("AAPL");

        cache.write(&aapl, &sample_series(5)).unwrap();
        cache.write(&aapl, &sample_series(2)).unwrap();

        assert_eq!(cache.read(&aapl).unwrap().len(), 2);
    }

    #[test]
    fn test_read_parses_dates() {
        let dir = tempfile::tempdir().unwrap();
        let cache = PriceCache::new(dir.path());
        let aapl = ticker("AAPL");

        cache.write(&aapl, &sample_series(3)).unwrap();
        let loaded = cache.read(&aapl).unwrap();

        assert_eq!(
            loaded.start_date(),
            Some(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
        );
        assert_eq!(
            loaded.end_date(),
            Some(NaiveDate::from_ymd_opt(2024, 1, 3).unwrap())
        );
    }

    #[test]
    fn test_cached_tickers() {
        let dir = tempfile::tempdir().unwrap();
        let cache = PriceCache::new(dir.path());

        cache.write(&ticker("MSFT"), &sample_series(1)).unwrap();
        cache.write(&ticker("AAPL"), &sample_series(1)).unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        assert_eq!(cache.cached_tickers().unwrap(), vec!["AAPL", "MSFT"]);
    }

    #[test]
    fn test_cached_tickers_missing_dir_is_empty() {
        let cache = PriceCache::new("/nonexistent/quotecache-test");
        assert!(cache.cached_tickers().unwrap().is_empty());
    }
}
