//! Service configuration loaded once at process start.
//!
//! Values come from environment variables (a `.env` file is read by `main` beforehand):
//! - `ALPHAVANTAGE_API_URL` — provider base URL, required.
//! - `ALPHAVANTAGE_API_KEY` — provider API key, required.
//! - `STOCK_SERVICE_ADDR` — bind address, defaults to `0.0.0.0:8080`.
//!
//! The API key is never printed: `ProviderConfig`'s `Debug` output redacts it.
use std::fmt;
use std::net::SocketAddr;

use reqwest::Url;
use stock_common::net::{DEFAULT_PORT, addr};
use stock_common::{Result, StockError};

/// Environment variable holding the provider base URL.
pub const API_URL_VAR: &str = "ALPHAVANTAGE_API_URL";
/// Environment variable holding the provider API key.
pub const API_KEY_VAR: &str = "ALPHAVANTAGE_API_KEY";
/// Environment variable overriding the HTTP bind address.
pub const BIND_ADDR_VAR: &str = "STOCK_SERVICE_ADDR";

/// Connection settings for the upstream quote provider.
#[derive(Clone)]
pub struct ProviderConfig {
    api_url: Url,
    api_key: String,
}

impl ProviderConfig {
    /// Validate and build a provider configuration.
    ///
    /// The URL must be an absolute `http`/`https` URL and the key must not be blank.
    pub fn new(api_url: &str, api_key: &str) -> Result<Self> {
        let api_url = Url::parse(api_url.trim())
            .map_err(|e| StockError::Config(format!("{API_URL_VAR} is not a valid URL: {e}")))?;
        if !matches!(api_url.scheme(), "http" | "https") {
            return Err(StockError::Config(format!(
                "{API_URL_VAR} must use http or https, got `{}`",
                api_url.scheme()
            )));
        }
        let api_key = api_key.trim();
        if api_key.is_empty() {
            return Err(StockError::Config(format!("{API_KEY_VAR} must not be empty")));
        }
        Ok(Self {
            api_url,
            api_key: api_key.to_string(),
        })
    }

    /// Provider base URL.
    pub fn api_url(&self) -> &Url {
        &self.api_url
    }

    /// Provider API key.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("api_url", &self.api_url.as_str())
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// Full process configuration.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Address the HTTP server binds to.
    pub bind_addr: SocketAddr,
    /// Upstream provider settings.
    pub provider: ProviderConfig,
}

impl ServiceConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = lookup(API_URL_VAR)
            .ok_or_else(|| StockError::Config(format!("{API_URL_VAR} is not set")))?;
        let api_key = lookup(API_KEY_VAR)
            .ok_or_else(|| StockError::Config(format!("{API_KEY_VAR} is not set")))?;
        let provider = ProviderConfig::new(&api_url, &api_key)?;

        let raw_addr = lookup(BIND_ADDR_VAR).unwrap_or_else(|| addr("0.0.0.0", DEFAULT_PORT));
        let bind_addr = raw_addr.trim().parse::<SocketAddr>().map_err(|e| {
            StockError::Config(format!("{BIND_ADDR_VAR} `{raw_addr}` is invalid: {e}"))
        })?;

        Ok(Self {
            bind_addr,
            provider,
        })
    }
}
