//!
//! Common types and utilities shared by the stock price server and client.
//!
//! This crate aggregates:
//! - `error` — unified error type `StockError` used across the workspace.
//! - `result` — handy `Result<T, StockError>` alias.
//! - `model` — response records returned by the service (`StockPrice`, `HistoricalStockData`).
//! - `net` — route and port constants shared by both sides.
#![warn(missing_docs)]
pub mod error;
pub mod result;
pub mod model;
pub mod net;

pub use error::StockError;
pub use result::Result;
pub use model::{DailyStockData, HistoricalStockData, StockPrice};
