//! Stable identifiers for outcome codes.
//!
//! A `code` is a short snake_case discriminator. Codes never appear in the response
//! message; they tag log events and key the explain registry.

// Codes: policy violations
pub const CODE_LABEL_DENIED: &str = "label_denied";
pub const CODE_CONSTRAINT_FAILED: &str = "constraint_failed";
pub const CODE_CONSTRAINED_LABEL_MISSING: &str = "constrained_label_missing";

// Codes: settings
pub const CODE_INVALID_PATTERN: &str = "invalid_pattern";
pub const CODE_CONFLICTING_LABELS: &str = "conflicting_labels";

// Codes: envelope
pub const CODE_MALFORMED_INPUT: &str = "malformed_input";
