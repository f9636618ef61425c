//! Upstream quote provider integration.
//!
//! - `function` — provider function codes (`GLOBAL_QUOTE`, `TIME_SERIES_DAILY`).
//! - `payload` — the provider's JSON shapes, with every optional field modelled as `Option`.
//! - `request` — builds the outbound request URI from configuration.
//! - `client` — performs the fetch and hands the decoded payload to the normalizers.

pub mod client;
pub mod function;
pub mod payload;
pub mod request;

pub use client::ProviderClient;
pub use function::ProviderFunction;
