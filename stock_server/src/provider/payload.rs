//! Provider response payloads.
//!
//! The provider only includes a field when it has something to say, so every part
//! of the payload is optional. An unknown symbol comes back as an empty or missing
//! quote object, and throttling comes back as a `Note`/`Information` text in place
//! of the data. Turning absence into `NotFound` is left to `crate::normalize`.
use std::collections::BTreeMap;

use serde::Deserialize;
use stock_common::model::historical::TimeSeries;

/// Advisory messages the provider may send instead of data.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ProviderNotice {
    /// Throttling notice.
    #[serde(rename = "Note")]
    pub note: Option<String>,
    /// Informational message, also used for throttling and premium endpoints.
    #[serde(rename = "Information")]
    pub information: Option<String>,
    /// Rejected call, e.g. an invalid symbol or key.
    #[serde(rename = "Error Message")]
    pub error_message: Option<String>,
}

impl ProviderNotice {
    /// First advisory message present, if any.
    pub fn message(&self) -> Option<&str> {
        self.error_message
            .as_deref()
            .or(self.note.as_deref())
            .or(self.information.as_deref())
    }
}

/// Quote object of a `GLOBAL_QUOTE` response.
#[allow(missing_docs)]
#[derive(Debug, Default, Clone, Deserialize)]
pub struct GlobalQuote {
    #[serde(rename = "01. symbol")]
    pub symbol: Option<String>,
    #[serde(rename = "02. open")]
    pub open: Option<String>,
    #[serde(rename = "03. high")]
    pub high: Option<String>,
    #[serde(rename = "04. low")]
    pub low: Option<String>,
    /// Last traded price, free-form string.
    #[serde(rename = "05. price")]
    pub price: Option<String>,
    #[serde(rename = "06. volume")]
    pub volume: Option<String>,
    /// Provider's as-of date. Not carried into the response.
    #[serde(rename = "07. latest trading day")]
    pub latest_trading_day: Option<String>,
    #[serde(rename = "08. previous close")]
    pub previous_close: Option<String>,
    #[serde(rename = "09. change")]
    pub change: Option<String>,
    #[serde(rename = "10. change percent")]
    pub change_percent: Option<String>,
}

/// Body of a `GLOBAL_QUOTE` response.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct GlobalQuoteResponse {
    /// Present only when the provider knows the symbol.
    #[serde(rename = "Global Quote")]
    pub global_quote: Option<GlobalQuote>,
    /// Advisory text sent in place of the quote.
    #[serde(flatten)]
    pub notice: ProviderNotice,
}

/// Body of a `TIME_SERIES_DAILY` response.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct TimeSeriesDailyResponse {
    /// Request echo; unused beyond decoding.
    #[serde(rename = "Meta Data")]
    pub meta_data: Option<BTreeMap<String, String>>,
    /// Bars keyed by trading date.
    #[serde(rename = "Time Series (Daily)")]
    pub time_series_daily: Option<TimeSeries>,
    /// Advisory text sent in place of the series.
    #[serde(flatten)]
    pub notice: ProviderNotice,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn decodes_full_global_quote() {
        let body = r#"{
            "Global Quote": {
                "01. symbol": "IBM",
                "02. open": "169.8500",
                "03. high": "171.3300",
                "04. low": "169.1700",
                "05. price": "170.9100",
                "06. volume": "3416719",
                "07. latest trading day": "2024-01-05",
                "08. previous close": "169.5600",
                "09. change": "1.3500",
                "10. change percent": "0.7962%"
            }
        }"#;
        let response: GlobalQuoteResponse = serde_json::from_str(body).unwrap();
        let quote = response.global_quote.unwrap();
        assert_eq!(quote.symbol.as_deref(), Some("IBM"));
        assert_eq!(quote.price.as_deref(), Some("170.9100"));
        assert_eq!(quote.latest_trading_day.as_deref(), Some("2024-01-05"));
        assert!(response.notice.message().is_none());
    }

    #[test]
    fn decodes_throttling_note_without_quote() {
        let body = r#"{"Note": "Thank you for using our API. Our standard call frequency is 5 calls per minute."}"#;
        let response: GlobalQuoteResponse = serde_json::from_str(body).unwrap();
        assert!(response.global_quote.is_none());
        assert!(response.notice.message().unwrap().contains("call frequency"));
    }

    #[test]
    fn decodes_daily_series_with_metadata() {
        let body = r#"{
            "Meta Data": {
                "1. Information": "Daily Prices (open, high, low, close) and Volumes",
                "2. Symbol": "IBM"
            },
            "Time Series (Daily)": {
                "2024-01-05": {
                    "1. open": "162.6000",
                    "2. high": "162.7000",
                    "3. low": "160.8200",
                    "4. close": "161.1000",
                    "5. volume": "3463419"
                }
            }
        }"#;
        let response: TimeSeriesDailyResponse = serde_json::from_str(body).unwrap();
        assert_eq!(
            response.meta_data.unwrap().get("2. Symbol").map(String::as_str),
            Some("IBM")
        );
        let series = response.time_series_daily.unwrap();
        let bar = &series[&NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()];
        assert_eq!(bar.close, "161.1000");
    }

    #[test]
    fn error_message_takes_precedence() {
        let notice = ProviderNotice {
            note: Some("slow down".into()),
            information: None,
            error_message: Some("Invalid API call.".into()),
        };
        assert_eq!(notice.message(), Some("Invalid API call."));
    }
}
