use crate::model::LabelSet;
use crate::policy::LabelPolicy;
use crate::verdict::{Verdict, Violation};

/// Evaluate `labels` against `policy`.
///
/// Labels are visited once; the first deny or constraint violation wins. Only when every
/// label passes are the constrained keys checked for presence.
pub fn evaluate(policy: &LabelPolicy, labels: &LabelSet) -> Verdict {
    for (label, value) in labels.iter() {
        if let Some(violation) = check_label(policy, label, value) {
            return Verdict::Rejected(violation);
        }
    }

    for (label, _) in policy.constrained_labels() {
        if !labels.contains(label) {
            return Verdict::Rejected(Violation::MissingConstrainedLabel {
                label: label.to_string(),
            });
        }
    }

    Verdict::Accepted
}

fn check_label(policy: &LabelPolicy, label: &str, value: &str) -> Option<Violation> {
    if policy.is_denied(label) {
        return Some(Violation::DeniedLabel {
            label: label.to_string(),
        });
    }

    let re = policy.constraint(label)?;
    // Unanchored search: the pattern may match anywhere in the value.
    if !re.is_match(value) {
        return Some(Violation::ConstraintFailed {
            label: label.to_string(),
        });
    }

    None
}
