//! Stock price HTTP facade.
//!
//! Forwards symbol lookups to an external quote provider and reshapes the provider's JSON
//! into the service's own records:
//!
//! - `GET /api/stocks/{symbol}/price` — current `StockPrice`.
//! - `GET /api/stocks/{symbol}/historical` — daily `HistoricalStockData`.
//! - `GET /health` — liveness probe.
//!
//! Modules:
//! - `config` — environment-driven `ServiceConfig` / `ProviderConfig`.
//! - `provider` — provider payloads, request URI builder and HTTP client.
//! - `normalize` — payload validation and mapping into response records.
//! - `routes` — axum handlers.
//! - `error` — `StockError` to HTTP status mapping.
//!
//! Every request is independent: the only shared state is the read-only `ProviderClient`.
#![warn(missing_docs)]
use std::sync::Arc;

use axum::{Router, routing::get};
use stock_common::net::API_PREFIX;

use crate::provider::ProviderClient;

pub mod config;
pub mod error;
pub mod normalize;
pub mod provider;
pub mod routes;

/// State shared across handlers.
#[derive(Clone)]
pub struct AppState {
    provider: Arc<ProviderClient>,
}

impl AppState {
    /// Wrap a provider client for use by the handlers.
    pub fn new(provider: ProviderClient) -> Self {
        Self {
            provider: Arc::new(provider),
        }
    }
}

/// Build the service router.
pub fn router(state: AppState) -> Router {
    let stocks = Router::new()
        .route("/{symbol}/price", get(routes::get_price))
        .route("/{symbol}/historical", get(routes::get_historical));

    Router::new()
        .route("/health", get(routes::health))
        .nest(API_PREFIX, stocks)
        .with_state(state)
}
