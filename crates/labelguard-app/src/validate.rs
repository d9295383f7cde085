//! The `validate` use case: decide whether a workload may be admitted.

use crate::envelope::{self, EnvelopeError};
use crate::extract::extract_labels;
use crate::response::{reject_request, verdict_response};
use labelguard_types::{CODE_BAD_REQUEST, ValidationResponse, ids};
use tracing::{debug, debug_span, warn};

/// Evaluate a validation request payload.
///
/// Never fails: undecodable input and unusable settings become 400-coded rejections, policy
/// violations become rejections without a code.
pub fn validate(payload: &[u8]) -> ValidationResponse {
    let request = match envelope::decode_request(payload) {
        Ok(request) => request,
        Err(err) => return malformed(&err),
    };

    let span = debug_span!(
        "validate",
        uid = request.request.uid.as_deref().unwrap_or(""),
        kind = request
            .request
            .kind
            .as_ref()
            .map(|k| k.kind.as_str())
            .unwrap_or(""),
    );
    let _entered = span.enter();

    let settings = match envelope::decode_embedded_settings(&request) {
        Ok(settings) => settings,
        Err(err) => return malformed(&err),
    };

    let policy = match labelguard_settings::resolve_settings(&settings) {
        Ok(policy) => policy,
        Err(err) => {
            warn!(code = err.code(), error = %err, "settings rejected");
            return reject_request(err.to_string(), Some(CODE_BAD_REQUEST));
        }
    };

    let labels = extract_labels(&request.request.object);
    let verdict = labelguard_domain::evaluate(&policy, &labels);

    match verdict.violation() {
        None => debug!(labels = labels.len(), "accepted"),
        Some(violation) => debug!(
            labels = labels.len(),
            code = violation.code(),
            label = violation.label(),
            "rejected"
        ),
    }

    verdict_response(&verdict)
}

fn malformed(err: &EnvelopeError) -> ValidationResponse {
    warn!(code = ids::CODE_MALFORMED_INPUT, error = %err, "malformed validation request");
    reject_request(err.to_string(), Some(CODE_BAD_REQUEST))
}
