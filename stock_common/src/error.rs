//! Error types shared between client and server.
//!
//! The `StockError` enum is the closed set of failure kinds a lookup can end in.
//! Callers branch on the variant: `NotFound` when the provider had nothing usable
//! for a symbol, `Upstream` when the outbound fetch itself failed, and `Parse`
//! when a field that must be numeric was not.
use std::io;

use thiserror::Error;

/// Unified error type shared by client and server.
#[derive(Error, Debug)]
pub enum StockError {
    /// The provider returned no usable data for the requested symbol.
    ///
    /// Covers an absent quote, an empty quote, and an absent or empty daily series.
    /// Provider rate-limit notices end up here as well since the provider signals
    /// them by omitting the same fields.
    #[error("{0}")]
    NotFound(String),

    /// The outbound request failed: network error, non-success status or a body
    /// that could not be decoded.
    #[error("Upstream failure: {0}")]
    Upstream(String),

    /// A provider field expected to be numeric could not be parsed.
    #[error("Parse error: field `{field}` is not numeric: {value:?}")]
    Parse {
        /// Provider field name.
        field: &'static str,
        /// Raw value as received.
        value: String,
    },

    /// Missing or invalid configuration value.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error originating from sockets or files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Failure while encoding/decoding JSON via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}

impl StockError {
    /// Short machine-friendly name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            StockError::NotFound(_) => "not_found",
            StockError::Upstream(_) => "upstream_failure",
            StockError::Parse { .. } => "parse_error",
            StockError::Config(_) => "config",
            StockError::Io(_) => "io",
            StockError::SerdeJson(_) => "json",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_names_field_and_value() {
        let err = StockError::Parse {
            field: "05. price",
            value: "n/a".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Parse error: field `05. price` is not numeric: \"n/a\""
        );
        assert_eq!(err.kind(), "parse_error");
    }

    #[test]
    fn not_found_message_is_passed_through() {
        let err = StockError::NotFound("Stock price not found for symbol: ZZZZ".into());
        assert_eq!(err.to_string(), "Stock price not found for symbol: ZZZZ");
    }
}
