//! Decoding of host payloads.

use labelguard_settings::LabelSettingsV1;
use labelguard_types::ValidationRequest;

/// Input that cannot be decoded into the expected shape.
///
/// The message is the decoder's own text.
#[derive(Debug, thiserror::Error)]
pub enum EnvelopeError {
    #[error(transparent)]
    Request(serde_json::Error),

    #[error(transparent)]
    Settings(serde_json::Error),
}

/// Decode a `validate` payload.
pub fn decode_request(payload: &[u8]) -> Result<ValidationRequest, EnvelopeError> {
    serde_json::from_slice(payload).map_err(EnvelopeError::Request)
}

/// Decode the `settings` member of a request. A missing member means default settings.
pub(crate) fn decode_embedded_settings(
    request: &ValidationRequest,
) -> Result<LabelSettingsV1, EnvelopeError> {
    labelguard_settings::settings_from_value(request.settings.clone())
        .map_err(EnvelopeError::Settings)
}

/// Decode a standalone settings document.
pub(crate) fn decode_settings(payload: &[u8]) -> Result<LabelSettingsV1, EnvelopeError> {
    serde_json::from_slice(payload).map_err(EnvelopeError::Settings)
}
