//! Use case orchestration for labelguard.
//!
//! This crate is the envelope layer around the pure engine: it decodes host payloads, extracts
//! labels from the workload, drives settings resolution and evaluation, and builds responses.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod envelope;
mod explain;
mod extract;
mod response;
mod settings;
mod validate;

pub use envelope::{EnvelopeError, decode_request};
pub use explain::{ExplainOutput, format_explanation, format_not_found, run_explain};
pub use extract::extract_labels;
pub use response::{
    SETTINGS_INVALID_PREFIX, accept_request, reject_request, serialize_response,
    settings_accepted, settings_rejected, verdict_response,
};
pub use settings::validate_settings;
pub use validate::validate;
