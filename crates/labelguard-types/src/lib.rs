//! Stable DTOs and IDs used across the labelguard workspace.
//!
//! This crate is intentionally boring:
//! - the request/response envelope exchanged with the policy host
//! - stable string codes for every outcome class
//! - explain registry for remediation guidance

#![forbid(unsafe_code)]

pub mod explain;
pub mod ids;
pub mod protocol;

pub use explain::{ExamplePair, Explanation, lookup_explanation};
pub use protocol::{
    AdmissionRequest, CODE_BAD_REQUEST, GroupVersionKind, GroupVersionResource,
    SettingsValidationResponse, ValidationRequest, ValidationResponse,
};
