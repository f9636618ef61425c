//! Response records produced by the service.
//!
//! - `stock_price` — current quote snapshot (`StockPrice`).
//! - `historical` — daily bars keyed by trading date (`HistoricalStockData`, `DailyStockData`).
//!
//! All records are request-scoped values: built fresh for each lookup and never mutated.

pub mod historical;
pub mod stock_price;

pub use historical::{DailyStockData, HistoricalStockData};
pub use stock_price::StockPrice;

/// Canonical form of a ticker symbol in responses.
///
/// Only the response side is normalized; outbound requests carry the symbol as given.
pub fn normalize_symbol(symbol: &str) -> String {
    symbol.to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_symbol_is_idempotent() {
        assert_eq!(normalize_symbol("aapl"), "AAPL");
        assert_eq!(normalize_symbol("AAPL"), "AAPL");
        assert_eq!(normalize_symbol(&normalize_symbol("brk-b")), "BRK-B");
    }
}
