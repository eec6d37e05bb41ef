//! List command implementation.

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use quotecache_lib::prelude::*;

use crate::display;

/// List cached tickers with file size and age.
pub(crate) fn list(data_dir: PathBuf) -> Result<()> {
    let cache = PriceCache::new(data_dir);
    let tickers = cache.cached_tickers()?;

    if tickers.is_empty() {
        println!("No cached tickers in {}", cache.data_dir().display());
        return Ok(());
    }

    for symbol in &tickers {
        let path = cache.data_dir().join(format!("{symbol}.csv"));
        let metadata = fs::metadata(&path)?;
        let age = metadata.modified()?.elapsed().unwrap_or_default();

        println!(
            "{symbol:<10} {:>10} bytes  modified {} ago",
            metadata.len(),
            display::format_age(age)
        );
    }

    println!();
    println!("{} cached ticker(s)", tickers.len());

    Ok(())
}
