//! HTTP client for the upstream quote provider.
//!
//! Each lookup is a single GET: build the URI, send, check the status, decode the body,
//! then normalize. Any failure before normalization is reported as
//! `StockError::Upstream` and normalization never runs. There is no retry.
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use stock_common::{HistoricalStockData, Result, StockError, StockPrice};

use crate::config::ProviderConfig;
use crate::normalize::{normalize_quote, normalize_series};
use crate::provider::ProviderFunction;
use crate::provider::payload::{GlobalQuoteResponse, TimeSeriesDailyResponse};
use crate::provider::request::build_request_uri;

const USER_AGENT: &str = concat!("stock_server/", env!("CARGO_PKG_VERSION"));

/// Provider client shared by all request handlers.
#[derive(Debug, Clone)]
pub struct ProviderClient {
    http: Client,
    config: ProviderConfig,
}

impl ProviderClient {
    /// Create a client with a default HTTP connection pool.
    pub fn new(config: ProviderConfig) -> Result<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| StockError::Config(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self::with_http_client(config, http))
    }

    /// Create a client on top of an already configured `reqwest::Client`.
    pub fn with_http_client(config: ProviderConfig, http: Client) -> Self {
        Self { http, config }
    }

    /// Fetch the current quote for `symbol`.
    pub async fn fetch_quote(&self, symbol: &str) -> Result<StockPrice> {
        let response: GlobalQuoteResponse = self.fetch(symbol, ProviderFunction::GlobalQuote).await?;
        normalize_quote(response, symbol)
    }

    /// Fetch the daily series for `symbol`.
    pub async fn fetch_historical(&self, symbol: &str) -> Result<HistoricalStockData> {
        let response: TimeSeriesDailyResponse =
            self.fetch(symbol, ProviderFunction::TimeSeriesDaily).await?;
        normalize_series(response, symbol)
    }

    async fn fetch<T: DeserializeOwned>(&self, symbol: &str, function: ProviderFunction) -> Result<T> {
        // The URI carries the API key; only the function and symbol are logged.
        let uri = build_request_uri(&self.config, symbol, function);
        debug!("Requesting {function} for {symbol}");

        let upstream = |e: reqwest::Error| {
            StockError::Upstream(format!("{function} request for {symbol} failed: {}", e.without_url()))
        };

        let response = self.http.get(uri).send().await.map_err(upstream)?;
        let response = response.error_for_status().map_err(upstream)?;
        let body = response.json::<T>().await.map_err(upstream)?;
        debug!("Received {function} payload for {symbol}");
        Ok(body)
    }
}
