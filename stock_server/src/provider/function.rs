//! Provider function codes.
use strum_macros::{AsRefStr, Display, EnumString};

/// Provider API function selected by the `function` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ProviderFunction {
    /// Latest quote for a symbol.
    GlobalQuote,
    /// Daily open/high/low/close/volume bars.
    TimeSeriesDaily,
}
