//! API route handlers

use axum::{
    Json,
    extract::{Path, State},
};
use log::info;
use stock_common::{HistoricalStockData, StockPrice};

use crate::AppState;
use crate::error::ApiError;

/// `GET /api/stocks/{symbol}/price`
pub async fn get_price(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
) -> Result<Json<StockPrice>, ApiError> {
    info!("Price requested for {symbol}");
    let price = state.provider.fetch_quote(&symbol).await?;
    Ok(Json(price))
}

/// `GET /api/stocks/{symbol}/historical`
pub async fn get_historical(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
) -> Result<Json<HistoricalStockData>, ApiError> {
    info!("Historical data requested for {symbol}");
    let data = state.provider.fetch_historical(&symbol).await?;
    info!(
        "Returning {} daily bars for {}",
        data.time_series_daily.len(),
        data.symbol
    );
    Ok(Json(data))
}

/// Liveness probe
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "alive",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
