use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Status code attached to rejections caused by input that could not be processed.
///
/// Policy rejections never carry a code; the host supplies its own default.
pub const CODE_BAD_REQUEST: u16 = 400;

/// Payload of the `validate` entry point.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ValidationRequest {
    /// Raw policy settings. Decoded separately so that settings errors can be told
    /// apart from envelope errors.
    #[serde(default, skip_serializing_if = "JsonValue::is_null")]
    pub settings: JsonValue,

    /// A missing member is read as an empty request, which carries no labels.
    #[serde(default)]
    pub request: AdmissionRequest,
}

/// The admission request forwarded by the host.
///
/// Only `object` is evaluated; the remaining fields are carried for diagnostics.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AdmissionRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<GroupVersionKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<GroupVersionResource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The workload description, kept as raw JSON.
    #[serde(default, skip_serializing_if = "JsonValue::is_null")]
    pub object: JsonValue,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GroupVersionKind {
    #[serde(default)]
    pub group: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub kind: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GroupVersionResource {
    #[serde(default)]
    pub group: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub resource: String,
}

/// Response of the `validate` entry point.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ValidationResponse {
    pub allowed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Only set for input that could not be processed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
}

/// Response of the `validate_settings` entry point.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SettingsValidationResponse {
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_ignores_unknown_admission_fields() {
        let req: ValidationRequest = serde_json::from_value(json!({
            "request": {
                "uid": "abc",
                "kind": {"group": "", "version": "v1", "kind": "Pod"},
                "dryRun": false,
                "userInfo": {"username": "alice"},
                "object": {"metadata": {"name": "nginx"}}
            }
        }))
        .expect("decode");

        assert_eq!(req.request.uid.as_deref(), Some("abc"));
        assert_eq!(req.request.kind.expect("kind").kind, "Pod");
        assert!(req.settings.is_null());
        assert_eq!(req.request.object["metadata"]["name"], "nginx");
    }

    #[test]
    fn missing_request_member_is_empty() {
        let req = serde_json::from_value::<ValidationRequest>(json!({"settings": {}}))
            .expect("decode");
        assert_eq!(req.request, AdmissionRequest::default());
        assert!(req.request.object.is_null());
    }

    #[test]
    fn request_member_must_be_an_object() {
        let err = serde_json::from_value::<ValidationRequest>(json!({"request": "pod"}))
            .expect_err("mistyped request");
        assert!(err.to_string().contains("invalid type"));
    }

    #[test]
    fn accepted_response_omits_message_and_code() {
        let resp = ValidationResponse {
            allowed: true,
            message: None,
            code: None,
        };
        assert_eq!(serde_json::to_value(&resp).expect("encode"), json!({"allowed": true}));
    }
}
