//! Yahoo Finance chart API URL construction.

/// Base URL for the Yahoo Finance query API.
pub const BASE_URL: &str = "https://query2.finance.yahoo.com";

/// Builds the chart API URL for a ticker's full daily history.
///
/// URL format:
/// `{base}/v8/finance/chart/{TICKER}?range=max&interval=1d&events=div%2Csplits`
///
/// `range=max` requests the maximum history window the provider has for the
/// symbol; the dividend and split event streams ride along in the same
/// response.
///
/// # Example
///
/// ```
/// use quotecache_fetch::url::{BASE_URL, chart_url};
///
/// let url = chart_url(BASE_URL, "AAPL");
/// assert_eq!(
///     url,
///     "https://query2.finance.yahoo.com/v8/finance/chart/AAPL?range=max&interval=1d&events=div%2Csplits"
/// );
/// ```
#[must_use]
pub fn chart_url(base: &str, ticker: &str) -> String {
    format!("{base}/v8/finance/chart/{ticker}?range=max&interval=1d&events=div%2Csplits")
}
