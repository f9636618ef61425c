//! Blocking HTTP client for the stock price API.
//!
//! A `404` from the service is surfaced as `StockError::NotFound`; every other
//! non-success status becomes `StockError::Upstream` carrying the service's error text.
use log::debug;
use reqwest::Url;
use reqwest::blocking::{Client, Response};
use serde::de::DeserializeOwned;
use stock_common::net::{HISTORICAL_SEGMENT, PRICE_SEGMENT};
use stock_common::{HistoricalStockData, Result, StockError, StockPrice};

/// Client of the `/api/stocks` routes.
pub struct StockApiClient {
    http: Client,
    base_url: Url,
}

impl StockApiClient {
    /// Create a client for the API rooted at `base_url`.
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url.trim())
            .map_err(|e| StockError::Config(format!("Invalid server URL `{base_url}`: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(StockError::Config(format!(
                "Server URL `{base_url}` cannot carry a path"
            )));
        }
        let http = Client::builder()
            .build()
            .map_err(|e| StockError::Config(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { http, base_url })
    }

    /// `GET {base}/{symbol}/price`
    pub fn price(&self, symbol: &str) -> Result<StockPrice> {
        self.get_json(self.endpoint(symbol, PRICE_SEGMENT)?)
    }

    /// `GET {base}/{symbol}/historical`
    pub fn historical(&self, symbol: &str) -> Result<HistoricalStockData> {
        self.get_json(self.endpoint(symbol, HISTORICAL_SEGMENT)?)
    }

    fn endpoint(&self, symbol: &str, segment: &str) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| StockError::Config(format!("Server URL `{}` cannot carry a path", self.base_url)))?
            .pop_if_empty()
            .push(symbol)
            .push(segment);
        Ok(url)
    }

    fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        debug!("GET {}", url);
        let response = self
            .http
            .get(url)
            .send()
            .map_err(|e| StockError::Upstream(e.to_string()))?;

        if !response.status().is_success() {
            return Err(error_from_response(response));
        }
        response
            .json::<T>()
            .map_err(|e| StockError::Upstream(format!("Undecodable response: {e}")))
    }
}

fn error_from_response(response: Response) -> StockError {
    let status = response.status();
    let message = response
        .json::<serde_json::Value>()
        .ok()
        .and_then(|body| body.get("error").and_then(|e| e.as_str()).map(str::to_string))
        .unwrap_or_else(|| status.to_string());

    if status == reqwest::StatusCode::NOT_FOUND {
        StockError::NotFound(message)
    } else {
        StockError::Upstream(format!("{status}: {message}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_appends_symbol_and_segment() {
        let client = StockApiClient::new("http://localhost:8080/api/stocks").unwrap();
        assert_eq!(
            client.endpoint("AAPL", PRICE_SEGMENT).unwrap().as_str(),
            "http://localhost:8080/api/stocks/AAPL/price"
        );
    }

    #[test]
    fn endpoint_tolerates_trailing_slash_and_escapes_symbol() {
        let client = StockApiClient::new("http://localhost:8080/api/stocks/").unwrap();
        assert_eq!(
            client.endpoint("BRK B", HISTORICAL_SEGMENT).unwrap().as_str(),
            "http://localhost:8080/api/stocks/BRK%20B/historical"
        );
    }

    #[test]
    fn rejects_unusable_base_url() {
        assert!(matches!(
            StockApiClient::new("not a url"),
            Err(StockError::Config(_))
        ));
        assert!(matches!(
            StockApiClient::new("mailto:someone@example.com"),
            Err(StockError::Config(_))
        ));
    }
}
