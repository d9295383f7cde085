use labelguard_types::ids;
use std::fmt;

/// A single policy violation. Its `Display` text is the user-facing rejection message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Violation {
    DeniedLabel { label: String },
    ConstraintFailed { label: String },
    MissingConstrainedLabel { label: String },
}

impl Violation {
    pub fn label(&self) -> &str {
        match self {
            Violation::DeniedLabel { label }
            | Violation::ConstraintFailed { label }
            | Violation::MissingConstrainedLabel { label } => label,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Violation::DeniedLabel { .. } => ids::CODE_LABEL_DENIED,
            Violation::ConstraintFailed { .. } => ids::CODE_CONSTRAINT_FAILED,
            Violation::MissingConstrainedLabel { .. } => ids::CODE_CONSTRAINED_LABEL_MISSING,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::DeniedLabel { label } => write!(f, "Label {label} is on the deny list"),
            Violation::ConstraintFailed { label } => {
                write!(f, "The value of {label} doesn't pass user-defined constraint")
            }
            Violation::MissingConstrainedLabel { label } => {
                write!(f, "Constrained label {label} not found inside of Pod")
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    Rejected(Violation),
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted)
    }

    pub fn violation(&self) -> Option<&Violation> {
        match self {
            Verdict::Accepted => None,
            Verdict::Rejected(v) => Some(v),
        }
    }

    /// Rejection message, if any.
    pub fn reason(&self) -> Option<String> {
        self.violation().map(ToString::to_string)
    }
}
