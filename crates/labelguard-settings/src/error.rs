use crate::pattern::PatternError;
use labelguard_domain::policy::PolicyConflict;
use labelguard_types::ids;

/// Why a settings document does not describe a usable policy.
#[derive(Clone, Debug, thiserror::Error)]
pub enum ConfigError {
    /// The pattern compiler's diagnostic, as a single line.
    #[error("{error}")]
    InvalidPattern { label: String, error: PatternError },

    #[error(transparent)]
    ConflictingLabels(#[from] PolicyConflict),
}

impl ConfigError {
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::InvalidPattern { .. } => ids::CODE_INVALID_PATTERN,
            ConfigError::ConflictingLabels(_) => ids::CODE_CONFLICTING_LABELS,
        }
    }
}
