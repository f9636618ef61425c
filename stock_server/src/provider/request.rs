//! Outbound request URI construction.
use reqwest::Url;

use crate::config::ProviderConfig;
use crate::provider::ProviderFunction;

/// Build the provider URI for `symbol` and `function`.
///
/// Appends `function`, `symbol` and `apikey` to the configured base URL, keeping any
/// query parameters the base already carries. The symbol is sent exactly as the caller
/// supplied it. The result contains the API key and must not be logged.
pub fn build_request_uri(config: &ProviderConfig, symbol: &str, function: ProviderFunction) -> Url {
    let mut uri = config.api_url().clone();
    uri.query_pairs_mut()
        .append_pair("function", function.as_ref())
        .append_pair("symbol", symbol)
        .append_pair("apikey", config.api_key());
    uri
}
