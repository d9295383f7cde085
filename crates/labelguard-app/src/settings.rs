//! The `validate_settings` use case: report whether a settings document is usable.

use crate::envelope;
use crate::response::{settings_accepted, settings_rejected};
use labelguard_types::{SettingsValidationResponse, ids};
use tracing::{debug, debug_span};

/// Validate a standalone settings payload.
///
/// Never fails: decode errors, broken patterns and conflicts all become `valid: false`.
pub fn validate_settings(payload: &[u8]) -> SettingsValidationResponse {
    let _entered = debug_span!("validate_settings").entered();

    let settings = match envelope::decode_settings(payload) {
        Ok(settings) => settings,
        Err(err) => {
            debug!(code = ids::CODE_MALFORMED_INPUT, error = %err, "settings not decodable");
            return settings_rejected(&err);
        }
    };

    match labelguard_settings::resolve_settings(&settings) {
        Ok(policy) => {
            debug!(
                denied = policy.denied_labels().count(),
                constrained = policy.constrained_labels().count(),
                "settings valid"
            );
            settings_accepted()
        }
        Err(err) => {
            debug!(code = err.code(), error = %err, "settings invalid");
            settings_rejected(&err)
        }
    }
}
