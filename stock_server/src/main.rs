//! Stock price service binary.
//!
//! Loads configuration once (environment, optionally seeded from `.env`), builds the
//! provider client and serves the HTTP API until Ctrl+C. In-flight requests are allowed to
//! finish on shutdown.
//!
//! Required environment:
//! - `ALPHAVANTAGE_API_URL` — e.g. `https://www.alphavantage.co/query`
//! - `ALPHAVANTAGE_API_KEY`
//!
//! Optional: `STOCK_SERVICE_ADDR` (default `0.0.0.0:8080`), `RUST_LOG`.
#![warn(missing_docs)]
use log::{error, info};
use stock_common::{Result, StockError};
use stock_server::config::ServiceConfig;
use stock_server::provider::ProviderClient;
use stock_server::{AppState, router};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), StockError> {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            return Err(StockError::Config(format!("Failed to read .env: {e}")));
        }
    }
    init_logger();

    let config = ServiceConfig::from_env()?;
    info!("Using provider {:?}", config.provider);

    let provider = ProviderClient::new(config.provider)?;
    let app = router(AppState::new(provider));

    let listener = TcpListener::bind(config.bind_addr).await?;
    info!(
        "stock_server v{} listening on {}",
        env!("CARGO_PKG_VERSION"),
        listener.local_addr()?
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Ctrl+C received. Shutting down server..."),
        Err(e) => {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    }
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
