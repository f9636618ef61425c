//! Daily bar history returned by `GET /api/stocks/{symbol}/historical`.
//!
//! `DailyStockData` keeps the provider's numbered field names (`"1. open"` and so on)
//! on the wire in both directions, so a bar is copied from the provider payload to the
//! response without any conversion. Values stay strings; this layer never checks them.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Open/high/low/close/volume for one trading day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyStockData {
    /// Opening price.
    #[serde(rename = "1. open")]
    pub open: String,
    /// Highest price.
    #[serde(rename = "2. high")]
    pub high: String,
    /// Lowest price.
    #[serde(rename = "3. low")]
    pub low: String,
    /// Closing price.
    #[serde(rename = "4. close")]
    pub close: String,
    /// Traded volume.
    #[serde(rename = "5. volume")]
    pub volume: String,
}

/// Daily series keyed by trading date.
pub type TimeSeries = BTreeMap<NaiveDate, DailyStockData>;

/// Daily history for a single ticker symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalStockData {
    /// Uppercased ticker symbol.
    pub symbol: String,
    /// One bar per trading day, keyed by ISO date.
    pub time_series_daily: TimeSeries,
}
