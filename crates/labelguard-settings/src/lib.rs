//! Settings parsing and policy resolution.
//!
//! This crate is intentionally IO-free: it decodes settings provided as JSON and compiles them
//! into the [`LabelPolicy`] used by the engine.

#![forbid(unsafe_code)]

mod error;
mod model;
mod pattern;
mod resolve;

pub use error::ConfigError;
pub use labelguard_domain::policy::LabelPolicy;
pub use model::LabelSettingsV1;
pub use pattern::{PatternError, compile_pattern};

/// Decode a settings document into the typed model.
///
/// Only structure is checked here; patterns and conflicts are checked by [`resolve_settings`].
pub fn parse_settings_json(input: &str) -> serde_json::Result<LabelSettingsV1> {
    serde_json::from_str(input)
}

/// Decode settings already held as a JSON value. `null` yields the default (empty) settings.
pub fn settings_from_value(value: serde_json::Value) -> serde_json::Result<LabelSettingsV1> {
    if value.is_null() {
        return Ok(LabelSettingsV1::default());
    }
    serde_json::from_value(value)
}

/// Compile settings into the policy used by the engine.
pub fn resolve_settings(settings: &LabelSettingsV1) -> Result<LabelPolicy, ConfigError> {
    resolve::resolve_settings(settings)
}
