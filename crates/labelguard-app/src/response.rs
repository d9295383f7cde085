//! Response construction for both entry points.

use labelguard_domain::verdict::Verdict;
use labelguard_types::{SettingsValidationResponse, ValidationResponse};
use serde::Serialize;
use std::fmt::Display;

/// Prefix of every settings validation failure message.
pub const SETTINGS_INVALID_PREFIX: &str = "Provided settings are not valid: ";

pub fn accept_request() -> ValidationResponse {
    ValidationResponse {
        allowed: true,
        message: None,
        code: None,
    }
}

pub fn reject_request(message: impl Into<String>, code: Option<u16>) -> ValidationResponse {
    ValidationResponse {
        allowed: false,
        message: Some(message.into()),
        code,
    }
}

/// Policy rejections carry no code; the host applies its default.
pub fn verdict_response(verdict: &Verdict) -> ValidationResponse {
    match verdict {
        Verdict::Accepted => accept_request(),
        Verdict::Rejected(violation) => reject_request(violation.to_string(), None),
    }
}

pub fn settings_accepted() -> SettingsValidationResponse {
    SettingsValidationResponse {
        valid: true,
        message: None,
    }
}

pub fn settings_rejected(error: &dyn Display) -> SettingsValidationResponse {
    SettingsValidationResponse {
        valid: false,
        message: Some(format!("{SETTINGS_INVALID_PREFIX}{error}")),
    }
}

/// Serialize a response as compact JSON bytes.
pub fn serialize_response<T: Serialize>(response: &T) -> serde_json::Result<Vec<u8>> {
    serde_json::to_vec(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use labelguard_domain::verdict::Violation;
    use serde_json::json;

    #[test]
    fn rejected_verdict_has_message_and_no_code() {
        let verdict = Verdict::Rejected(Violation::DeniedLabel {
            label: "foo".to_string(),
        });
        let resp = verdict_response(&verdict);
        assert!(!resp.allowed);
        assert_eq!(resp.message.as_deref(), Some("Label foo is on the deny list"));
        assert_eq!(resp.code, None);
    }

    #[test]
    fn settings_rejection_is_prefixed() {
        let resp = settings_rejected(&"boom");
        assert_eq!(
            resp.message.as_deref(),
            Some("Provided settings are not valid: boom")
        );
    }

    #[test]
    fn serialized_rejection_shape() {
        let bytes = serialize_response(&reject_request("bad input", Some(400))).expect("encode");
        let value: serde_json::Value = serde_json::from_slice(&bytes).expect("decode");
        assert_eq!(
            value,
            json!({"allowed": false, "message": "bad input", "code": 400})
        );
    }
}
