//! Shared routing constants and helpers used by client and server.

/// Default HTTP port of the stock price service.
pub const DEFAULT_PORT: u16 = 8080;
/// Prefix under which all stock routes are mounted.
pub const API_PREFIX: &str = "/api/stocks";
/// Path segment of the current price route.
pub const PRICE_SEGMENT: &str = "price";
/// Path segment of the daily history route.
pub const HISTORICAL_SEGMENT: &str = "historical";

/// Helper to format an address with a port like "ip:port".
pub fn addr(ip: &str, port: u16) -> String {
    format!("{}:{}", ip, port)
}

/// Base URL of a service running locally on the default port.
pub fn default_base_url() -> String {
    format!("http://{}{}", addr("localhost", DEFAULT_PORT), API_PREFIX)
}
