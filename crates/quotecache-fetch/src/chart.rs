//! Chart API response decoding.
//!
//! Yahoo Finance has no official public API; the v8 chart endpoint serves a
//! JSON document with parallel arrays for timestamps and OHLCV values, plus
//! optional event maps for dividends and splits. Decoding tolerates
//! per-element nulls (non-trading days) but treats structural surprises as
//! errors.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate};
use quotecache_types::PriceBar;
use serde::Deserialize;

use crate::client::FetchError;

/// Top-level chart API response.
#[derive(Debug, Deserialize)]
pub(crate) struct ChartResponse {
    chart: Chart,
}

#[derive(Debug, Deserialize)]
struct Chart {
    result: Option<Vec<ChartResult>>,
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    timestamp: Option<Vec<i64>>,
    indicators: Indicators,
    events: Option<Events>,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    quote: Vec<Quote>,
}

#[derive(Debug, Deserialize)]
struct Quote {
    open: Vec<Option<f64>>,
    high: Vec<Option<f64>>,
    low: Vec<Option<f64>>,
    close: Vec<Option<f64>>,
    volume: Vec<Option<u64>>,
}

#[derive(Debug, Deserialize)]
struct Events {
    dividends: Option<HashMap<String, Dividend>>,
    splits: Option<HashMap<String, Split>>,
}

#[derive(Debug, Deserialize)]
struct Dividend {
    amount: f64,
    date: i64,
}

#[derive(Debug, Deserialize)]
struct Split {
    date: i64,
    numerator: f64,
    denominator: f64,
}

/// Converts a Unix timestamp to the UTC calendar date it falls on.
fn timestamp_date(ts: i64) -> Result<NaiveDate, FetchError> {
    DateTime::from_timestamp(ts, 0)
        .map(|dt| dt.date_naive())
        .ok_or_else(|| FetchError::Decode(format!("invalid timestamp: {ts}")))
}

/// Converts a decoded chart response into price bars.
///
/// Rows where every quote field is null (holidays, halted sessions) are
/// skipped. Dividend and split events are merged onto the bars for their
/// dates. An empty result is reported as no data for the ticker.
pub(crate) fn parse_chart(
    ticker: &str,
    response: ChartResponse,
) -> Result<Vec<PriceBar>, FetchError> {
    let Chart { result, error } = response.chart;

    let result = result.ok_or_else(|| {
        error.map_or_else(
            || FetchError::Decode("empty result with no error".into()),
            |err| {
                if err.code == "Not Found" {
                    FetchError::NoData {
                        ticker: ticker.to_string(),
                    }
                } else {
                    FetchError::Decode(format!("{}: {}", err.code, err.description))
                }
            },
        )
    })?;

    let data = result
        .into_iter()
        .next()
        .ok_or_else(|| FetchError::Decode("result array is empty".into()))?;

    let Some(timestamps) = data.timestamp else {
        // A well-formed response with no timestamps means the provider has
        // nothing for this symbol in the requested range.
        return Err(FetchError::NoData {
            ticker: ticker.to_string(),
        });
    };

    let quote = data
        .indicators
        .quote
        .into_iter()
        .next()
        .ok_or_else(|| FetchError::Decode("no quote data".into()))?;

    let (dividends, splits) = index_events(data.events)?;

    let mut bars = Vec::with_capacity(timestamps.len());

    for (i, &ts) in timestamps.iter().enumerate() {
        let open = quote.open.get(i).copied().flatten();
        let high = quote.high.get(i).copied().flatten();
        let low = quote.low.get(i).copied().flatten();
        let close = quote.close.get(i).copied().flatten();
        let volume = quote.volume.get(i).copied().flatten();

        if open.is_none() && high.is_none() && low.is_none() && close.is_none() && volume.is_none()
        {
            continue;
        }

        let date = timestamp_date(ts)?;

        bars.push(PriceBar {
            date,
            open: open.unwrap_or(f64::NAN),
            high: high.unwrap_or(f64::NAN),
            low: low.unwrap_or(f64::NAN),
            close: close.unwrap_or(f64::NAN),
            volume: volume.unwrap_or(0),
            dividends: dividends.get(&date).copied().unwrap_or(0.0),
            stock_splits: splits.get(&date).copied().unwrap_or(0.0),
        });
    }

    if bars.is_empty() {
        return Err(FetchError::NoData {
            ticker: ticker.to_string(),
        });
    }

    Ok(bars)
}

/// Re-keys the event maps by calendar date.
#[allow(clippy::type_complexity)]
fn index_events(
    events: Option<Events>,
) -> Result<(HashMap<NaiveDate, f64>, HashMap<NaiveDate, f64>), FetchError> {
    let mut dividends = HashMap::new();
    let mut splits = HashMap::new();

    let Some(events) = events else {
        return Ok((dividends, splits));
    };

    for div in events.dividends.into_iter().flat_map(HashMap::into_values) {
        dividends.insert(timestamp_date(div.date)?, div.amount);
    }

    for split in events.splits.into_iter().flat_map(HashMap::into_values) {
        let ratio = if split.denominator == 0.0 {
            0.0
        } else {
            split.numerator / split.denominator
        };
        splits.insert(timestamp_date(split.date)?, ratio);
    }

    Ok((dividends, splits))
}
