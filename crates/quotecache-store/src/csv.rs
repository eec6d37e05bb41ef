//! CSV serialization of price series.
//!
//! The file layout is fixed: UTF-8, comma-delimited, one header row, date
//! column first. Field names on [`PriceBar`] double as the header, so a
//! cached file reads back into the same typed rows it was written from.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

use quotecache_types::{PriceBar, PriceSeries, Result};

/// Writes a series to `path`, truncating any existing file.
///
/// The parent directory is created if it does not exist yet.
pub(crate) fn write_series(path: &Path, series: &PriceSeries) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let file = File::create(path)?;
    let mut writer = ::csv::Writer::from_writer(BufWriter::new(file));

    for bar in series {
        writer.serialize(bar)?;
    }

    writer.flush()?;
    Ok(())
}

/// Reads a series back from `path`, parsing the date column.
pub(crate) fn read_series(path: &Path) -> Result<PriceSeries> {
    let mut reader = ::csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)?;

    let mut bars = Vec::new();
    for record in reader.deserialize::<PriceBar>() {
        bars.push(record?);
    }

    Ok(PriceSeries::from_bars(bars))
}
