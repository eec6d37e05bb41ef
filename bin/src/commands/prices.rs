//! Prices command implementation.
//!
//! Resolves a ticker through the cache loader: a fresh cache file is read
//! straight from disk, anything else goes out to Yahoo Finance and rewrites
//! the file.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use quotecache_lib::prelude::*;

use crate::display;

/// Show price history for a ticker, fetching only when the cache is stale.
pub(crate) async fn prices(
    ticker: &str,
    data_dir: PathBuf,
    max_age_hours: u64,
    refresh: bool,
    tail: usize,
    quiet: bool,
) -> Result<()> {
    let ticker: Ticker = ticker
        .parse()
        .with_context(|| format!("Invalid ticker: {ticker}"))?;

    let config = LoaderConfig {
        data_dir,
        max_age: Duration::from_secs(max_age_hours * 3600),
        ..LoaderConfig::default()
    };
    let loader = PriceLoader::new(config).context("Failed to create HTTP client")?;

    let state = loader.cache().state(&ticker, loader.max_age())?;
    let from_cache = state.is_fresh() && !refresh;

    let series = if from_cache {
        loader.cache().read(&ticker)?
    } else {
        let spinner = if quiet {
            ProgressBar::hidden()
        } else {
            fetch_spinner(&ticker)
        };

        let series = loader.refresh(&ticker).await?;
        spinner.finish_with_message(format!("Fetched {} rows for {ticker}", series.len()));
        series
    };

    display::print_series(
        &ticker,
        &series,
        tail,
        from_cache,
        &loader.cache().ticker_path(&ticker),
    );

    Ok(())
}

/// Spinner shown while the remote fetch is in flight.
fn fetch_spinner(ticker: &Ticker) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("Invalid spinner template"),
    );
    spinner.set_message(format!("Fetching {ticker} from Yahoo Finance..."));
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
