//! HTTP client for the chart API.

use std::time::Duration;

use async_trait::async_trait;
use quotecache_types::{PriceBar, QuoteCacheError, Ticker};
use reqwest::Client;
use thiserror::Error;

use crate::chart::{self, ChartResponse};
use crate::provider::HistoryProvider;
use crate::url::{BASE_URL, chart_url};

/// Configuration for the chart API client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the chart API.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
    /// User agent string.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: format!("quotecache/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Errors that can occur while fetching history from the provider.
#[derive(Error, Debug)]
pub enum FetchError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider has no price history for the ticker.
    #[error("No price data available for {ticker}")]
    NoData {
        /// The ticker that had no data.
        ticker: String,
    },

    /// The response body could not be decoded.
    #[error("Decode error: {0}")]
    Decode(String),
}

impl From<FetchError> for QuoteCacheError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::Http(e) => Self::Http(e.to_string()),
            FetchError::NoData { ticker } => Self::NoData { ticker },
            FetchError::Decode(msg) => Self::Parse(msg),
        }
    }
}

/// HTTP client requesting full daily history from Yahoo Finance.
///
/// One GET per fetch. Failures propagate to the caller unretried; callers
/// that want retry semantics own them.
#[derive(Debug, Clone)]
pub struct YahooClient {
    client: Client,
    config: ClientConfig,
}

impl YahooClient {
    /// Creates a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(Duration::from_secs(10))
            .user_agent(&config.user_agent)
            .gzip(true)
            .build()?;
        Ok(Self { client, config })
    }

    /// Creates a client with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, reqwest::Error> {
        Self::new(ClientConfig::default())
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Requests the chart document for a ticker's full history.
    async fn fetch_chart(&self, ticker: &Ticker) -> Result<ChartResponse, FetchError> {
        let url = chart_url(&self.config.base_url, ticker.as_str());

        let response = self.client.get(&url).send().await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(FetchError::NoData {
                ticker: ticker.to_string(),
            });
        }

        response.error_for_status_ref()?;

        response
            .json::<ChartResponse>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }
}

#[async_trait]
impl HistoryProvider for YahooClient {
    fn name(&self) -> &str {
        "yahoo-finance"
    }

    async fn fetch_history(&self, ticker: &Ticker) -> quotecache_types::Result<Vec<PriceBar>> {
        let response = self.fetch_chart(ticker).await?;
        let bars = chart::parse_chart(ticker.as_str(), response)?;
        Ok(bars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"{
        "chart": {
            "result": [{
                "timestamp": [1704205800, 1704292200],
                "indicators": {
                    "quote": [{
                        "open": [185.0, 186.2],
                        "high": [187.5, 188.0],
                        "low": [184.0, 185.5],
                        "close": [186.2, 187.1],
                        "volume": [42000000, 39000000]
                    }]
                }
            }],
            "error": null
        }
    }"#;

    fn client_for(server: &mockito::Server) -> YahooClient {
        let config = ClientConfig {
            base_url: server.url(),
            ..Default::default()
        };
        YahooClient::new(config).unwrap()
    }

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.user_agent.starts_with("quotecache/"));
    }

    #[tokio::test]
    async fn test_client_creation() {
        assert!(YahooClient::with_defaults().is_ok());
    }

    #[tokio::test]
    async fn test_fetch_history() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/v8/finance/chart/AAPL")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(BODY)
            .create_async()
            .await;

        let client = client_for(&server);
        let ticker = Ticker::new("AAPL").unwrap();
        let bars = client.fetch_history(&ticker).await.unwrap();

        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0].close, 186.2);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_history_404_is_no_data() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/v8/finance/chart/NOSUCH")
            .match_query(mockito::Matcher::Any)
            .with_status(404)
            .create_async()
            .await;

        let client = client_for(&server);
        let ticker = Ticker::new("NOSUCH").unwrap();
        let err = client.fetch_history(&ticker).await.unwrap_err();

        assert!(matches!(err, QuoteCacheError::NoData { ticker } if ticker == "NOSUCH"));
    }

    #[tokio::test]
    async fn test_fetch_history_server_error_propagates() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/v8/finance/chart/AAPL")
            .match_query(mockito::Matcher::Any)
            .with_status(500)
            .expect(1)
            .create_async()
            .await;

        let client = client_for(&server);
        let ticker = Ticker::new("AAPL").unwrap();
        let err = client.fetch_history(&ticker).await.unwrap_err();

        assert!(matches!(err, QuoteCacheError::Http(_)));
        // A single attempt only: server errors are not retried.
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_history_garbage_body() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/v8/finance/chart/AAPL")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body("<html>rate limited</html>")
            .create_async()
            .await;

        let client = client_for(&server);
        let ticker = Ticker::new("AAPL").unwrap();
        let err = client.fetch_history(&ticker).await.unwrap_err();

        assert!(matches!(err, QuoteCacheError::Parse(_)));
    }
}
