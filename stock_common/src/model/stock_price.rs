//! Current price snapshot returned by `GET /api/stocks/{symbol}/price`.

use serde::{Deserialize, Serialize};

/// Market quote for a single ticker symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockPrice {
    /// Uppercased ticker symbol.
    pub symbol: String,
    /// Last traded price as reported by the provider.
    pub price: f64,
    /// RFC 3339 UTC instant at which the quote was captured by this service.
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_round_trip_preserves_fields() {
        let price = StockPrice {
            symbol: "AAPL".to_string(),
            price: 172.35,
            timestamp: "2024-01-03T15:04:05.123Z".to_string(),
        };
        let json = serde_json::to_string(&price).unwrap();
        assert_eq!(
            json,
            r#"{"symbol":"AAPL","price":172.35,"timestamp":"2024-01-03T15:04:05.123Z"}"#
        );
        let back: StockPrice = serde_json::from_str(&json).unwrap();
        assert_eq!(back, price);
    }
}
