//! Provider payload normalization.
//!
//! Two pure steps turn a decoded provider payload into a response record:
//!
//! - `normalize_quote` — requires a quote with a price, parses the price, uppercases the
//!   symbol and stamps the capture time.
//! - `normalize_series` — requires a non-empty daily series and copies it through with the
//!   symbol uppercased.
//!
//! This is the only place where a missing payload field becomes `StockError::NotFound`.
//! A provider advisory (throttling note, error message) is logged but does not change the
//! outcome: an unknown symbol and a throttled call are reported the same way.
use chrono::{DateTime, SecondsFormat, Utc};
use log::warn;
use stock_common::model::normalize_symbol;
use stock_common::{HistoricalStockData, Result, StockError, StockPrice};

use crate::provider::payload::{GlobalQuoteResponse, ProviderNotice, TimeSeriesDailyResponse};

/// Provider field holding the quote price.
const PRICE_FIELD: &str = "05. price";

/// Convert a `GLOBAL_QUOTE` payload into a `StockPrice` captured now.
pub fn normalize_quote(response: GlobalQuoteResponse, symbol: &str) -> Result<StockPrice> {
    normalize_quote_at(response, symbol, Utc::now())
}

/// Convert a `GLOBAL_QUOTE` payload into a `StockPrice` captured at `captured_at`.
pub fn normalize_quote_at(
    response: GlobalQuoteResponse,
    symbol: &str,
    captured_at: DateTime<Utc>,
) -> Result<StockPrice> {
    let raw_price = match response.global_quote.and_then(|quote| quote.price) {
        Some(price) => price,
        None => {
            log_notice(&response.notice, symbol);
            return Err(StockError::NotFound(format!(
                "Stock price not found for symbol: {symbol}"
            )));
        }
    };

    // NaN and infinities parse as f64 but have no JSON representation.
    let price = match raw_price.trim().parse::<f64>() {
        Ok(price) if price.is_finite() => price,
        _ => {
            return Err(StockError::Parse {
                field: PRICE_FIELD,
                value: raw_price,
            });
        }
    };

    Ok(StockPrice {
        symbol: normalize_symbol(symbol),
        price,
        timestamp: captured_at.to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}

/// Convert a `TIME_SERIES_DAILY` payload into `HistoricalStockData`.
///
/// An empty series is rejected exactly like a missing one.
pub fn normalize_series(response: TimeSeriesDailyResponse, symbol: &str) -> Result<HistoricalStockData> {
    match response.time_series_daily {
        Some(series) if !series.is_empty() => Ok(HistoricalStockData {
            symbol: normalize_symbol(symbol),
            time_series_daily: series,
        }),
        _ => {
            log_notice(&response.notice, symbol);
            Err(StockError::NotFound(format!(
                "Historical data not found for symbol: {symbol}"
            )))
        }
    }
}

fn log_notice(notice: &ProviderNotice, symbol: &str) {
    if let Some(message) = notice.message() {
        warn!("Provider returned no data for {symbol}: {message}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::payload::GlobalQuote;
    use chrono::NaiveDate;
    use stock_common::DailyStockData;
    use stock_common::model::historical::TimeSeries;

    fn quote_response(price: &str) -> GlobalQuoteResponse {
        GlobalQuoteResponse {
            global_quote: Some(GlobalQuote {
                symbol: Some("AAPL".to_string()),
                price: Some(price.to_string()),
                latest_trading_day: Some("2024-01-02".to_string()),
                ..GlobalQuote::default()
            }),
            notice: ProviderNotice::default(),
        }
    }

    fn bar(open: &str, high: &str, low: &str, close: &str, volume: &str) -> DailyStockData {
        DailyStockData {
            open: open.to_string(),
            high: high.to_string(),
            low: low.to_string(),
            close: close.to_string(),
            volume: volume.to_string(),
        }
    }

    #[test]
    fn quote_price_is_parsed_and_symbol_uppercased() {
        let started = Utc::now();
        let price = normalize_quote(quote_response("172.35"), "aapl").unwrap();

        assert_eq!(price.symbol, "AAPL");
        assert_eq!(price.price, 172.35);
        let stamped = DateTime::parse_from_rfc3339(&price.timestamp).unwrap();
        // Millisecond precision may round the start time down.
        assert!(stamped.with_timezone(&Utc) >= started - chrono::TimeDelta::milliseconds(1));
    }

    #[test]
    fn quote_timestamp_is_capture_time_not_provider_date() {
        let captured = DateTime::parse_from_rfc3339("2025-03-04T10:11:12.345Z")
            .unwrap()
            .with_timezone(&Utc);
        let price = normalize_quote_at(quote_response("1.5"), "msft", captured).unwrap();
        assert_eq!(price.timestamp, "2025-03-04T10:11:12.345Z");
    }

    #[test]
    fn symbol_case_does_not_change_output() {
        let lower = normalize_quote(quote_response("10"), "aapl").unwrap();
        let upper = normalize_quote(quote_response("10"), "AAPL").unwrap();
        assert_eq!(lower.symbol, upper.symbol);
        assert_eq!(lower.price, upper.price);
    }

    #[test]
    fn missing_quote_is_not_found() {
        let err = normalize_quote(GlobalQuoteResponse::default(), "ZZZZ").unwrap_err();
        assert!(matches!(err, StockError::NotFound(ref msg) if msg.ends_with("ZZZZ")));
    }

    #[test]
    fn empty_quote_object_is_not_found() {
        let response: GlobalQuoteResponse = serde_json::from_str(r#"{"Global Quote": {}}"#).unwrap();
        let err = normalize_quote(response, "ZZZZ").unwrap_err();
        assert!(matches!(err, StockError::NotFound(_)));
    }

    #[test]
    fn throttled_quote_is_reported_as_not_found() {
        let response: GlobalQuoteResponse =
            serde_json::from_str(r#"{"Note": "5 calls per minute"}"#).unwrap();
        assert!(matches!(
            normalize_quote(response, "AAPL"),
            Err(StockError::NotFound(_))
        ));
    }

    #[test]
    fn non_numeric_price_is_parse_error() {
        let err = normalize_quote(quote_response("not-a-number"), "aapl").unwrap_err();
        match err {
            StockError::Parse { field, value } => {
                assert_eq!(field, PRICE_FIELD);
                assert_eq!(value, "not-a-number");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn non_finite_price_is_parse_error() {
        for raw in ["NaN", "inf", "-infinity"] {
            let err = normalize_quote(quote_response(raw), "aapl").unwrap_err();
            assert!(
                matches!(err, StockError::Parse { ref value, .. } if value == raw),
                "{raw} gave {err:?}"
            );
        }
    }

    #[test]
    fn surrounding_whitespace_in_price_is_ignored() {
        let price = normalize_quote(quote_response(" 172.35\n"), "aapl").unwrap();
        assert_eq!(price.price, 172.35);

        let json = serde_json::to_string(&price).unwrap();
        let back: StockPrice = serde_json::from_str(&json).unwrap();
        assert_eq!(back, price);
    }

    #[test]
    fn missing_series_is_not_found() {
        let err = normalize_series(TimeSeriesDailyResponse::default(), "msft").unwrap_err();
        assert!(matches!(err, StockError::NotFound(ref msg) if msg.contains("Historical data")));
    }

    #[test]
    fn empty_series_is_not_found() {
        let response = TimeSeriesDailyResponse {
            time_series_daily: Some(TimeSeries::new()),
            ..TimeSeriesDailyResponse::default()
        };
        assert!(matches!(
            normalize_series(response, "msft"),
            Err(StockError::NotFound(_))
        ));
    }

    #[test]
    fn series_is_copied_through_unchanged() {
        let jan2 = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let jan3 = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
        let mut series = TimeSeries::new();
        series.insert(jan2, bar("187.1500", "188.4400", "183.8850", "185.6400", "82488674"));
        // Bars are not checked for numeric content.
        series.insert(jan3, bar("184.2200", "n/a", "183.4300", "184.2500", "58414460"));
        let response = TimeSeriesDailyResponse {
            time_series_daily: Some(series.clone()),
            ..TimeSeriesDailyResponse::default()
        };

        let data = normalize_series(response, "aapl").unwrap();
        assert_eq!(data.symbol, "AAPL");
        assert_eq!(data.time_series_daily.len(), 2);
        assert_eq!(data.time_series_daily, series);
        assert_eq!(data.time_series_daily[&jan3].high, "n/a");
    }
}
