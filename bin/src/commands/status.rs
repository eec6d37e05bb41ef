//! Cache status command.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use quotecache_lib::prelude::*;

use crate::display;

/// Show cache freshness for one ticker, or all cached tickers.
pub(crate) fn status(ticker: Option<&str>, data_dir: PathBuf, max_age_hours: u64) -> Result<()> {
    let cache = PriceCache::new(data_dir);
    let max_age = Duration::from_secs(max_age_hours * 3600);

    let symbols = match ticker {
        Some(symbol) => vec![symbol.to_string()],
        None => cache.cached_tickers()?,
    };

    if symbols.is_empty() {
        println!("No cached tickers in {}", cache.data_dir().display());
        return Ok(());
    }

    for symbol in &symbols {
        let ticker: Ticker = symbol
            .parse()
            .with_context(|| format!("Invalid ticker: {symbol}"))?;
        let state = cache.state(&ticker, max_age)?;
        println!("{symbol:<10} {}", display::describe_state(state));
    }

    Ok(())
}
