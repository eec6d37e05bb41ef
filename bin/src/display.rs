//! Display utilities and output formatting for the quotecache CLI.

use std::path::Path;
use std::time::Duration;

use quotecache_lib::prelude::*;

/// Formats an age as the two largest non-zero units, e.g. "3h 12m".
pub(crate) fn format_age(age: Duration) -> String {
    let secs = age.as_secs();
    let (days, hours, minutes) = (secs / 86_400, (secs % 86_400) / 3_600, (secs % 3_600) / 60);

    if days > 0 {
        format!("{days}d {hours}h")
    } else if hours > 0 {
        format!("{hours}h {minutes}m")
    } else if minutes > 0 {
        format!("{minutes}m {}s", secs % 60)
    } else {
        format!("{secs}s")
    }
}

/// Describes a cache state for status output, e.g. "fresh (3h 12m old)".
pub(crate) fn describe_state(state: CacheState) -> String {
    match state {
        CacheState::Missing => "not cached".to_string(),
        CacheState::Fresh { age } => format!("fresh ({} old)", format_age(age)),
        CacheState::Stale { age } => format!("stale ({} old)", format_age(age)),
    }
}

/// Prints a series summary followed by its most recent rows.
pub(crate) fn print_series(
    ticker: &Ticker,
    series: &PriceSeries,
    tail: usize,
    from_cache: bool,
    path: &Path,
) {
    let source = if from_cache {
        "served from cache"
    } else {
        "fetched from Yahoo Finance"
    };

    match (series.start_date(), series.end_date()) {
        (Some(start), Some(end)) => println!(
            "{ticker}: {} rows, {start} to {end} ({source}: {})",
            series.len(),
            path.display()
        ),
        _ => println!("{ticker}: no rows ({source}: {})", path.display()),
    }

    if tail == 0 || series.is_empty() {
        return;
    }

    println!();
    println!(
        "{:<12} {:>10} {:>10} {:>10} {:>10} {:>12}",
        "Date", "Open", "High", "Low", "Close", "Volume"
    );

    let skip = series.len().saturating_sub(tail);
    for bar in series.iter().skip(skip) {
        println!(
            "{:<12} {:>10.2} {:>10.2} {:>10.2} {:>10.2} {:>12}",
            bar.date.to_string(),
            bar.open,
            bar.high,
            bar.low,
            bar.close,
            bar.volume
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_age() {
        assert_eq!(format_age(Duration::from_secs(42)), "42s");
        assert_eq!(format_age(Duration::from_secs(5 * 60 + 3)), "5m 3s");
        assert_eq!(format_age(Duration::from_secs(3 * 3600 + 12 * 60)), "3h 12m");
        assert_eq!(format_age(Duration::from_secs(2 * 86_400 + 3_600)), "2d 1h");
    }

    #[test]
    fn test_describe_state() {
        assert_eq!(describe_state(CacheState::Missing), "not cached");
        assert_eq!(
            describe_state(CacheState::Fresh {
                age: Duration::from_secs(60)
            }),
            "fresh (1m 0s old)"
        );
        assert!(
            describe_state(CacheState::Stale {
                age: Duration::from_secs(90_000)
            })
            .starts_with("stale")
        );
    }
}
