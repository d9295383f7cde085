//! Explain registry for outcome codes.
//!
//! Maps codes to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a code.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the code.
    pub title: &'static str,
    /// When the outcome is produced and what it means.
    pub description: &'static str,
    /// How to fix it.
    pub remediation: &'static str,
    /// Before/after examples.
    pub examples: ExamplePair,
}

/// Before and after examples.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// Input that produces the outcome.
    pub before: &'static str,
    /// Input that does not.
    pub after: &'static str,
}

/// Look up an explanation by code.
///
/// Returns `None` if the code is not recognized.
pub fn lookup_explanation(code: &str) -> Option<Explanation> {
    match code {
        ids::CODE_LABEL_DENIED => Some(explain_label_denied()),
        ids::CODE_CONSTRAINT_FAILED => Some(explain_constraint_failed()),
        ids::CODE_CONSTRAINED_LABEL_MISSING => Some(explain_constrained_label_missing()),
        ids::CODE_INVALID_PATTERN => Some(explain_invalid_pattern()),
        ids::CODE_CONFLICTING_LABELS => Some(explain_conflicting_labels()),
        ids::CODE_MALFORMED_INPUT => Some(explain_malformed_input()),
        _ => None,
    }
}

/// List all known codes.
pub fn all_codes() -> &'static [&'static str] {
    &[
        ids::CODE_LABEL_DENIED,
        ids::CODE_CONSTRAINT_FAILED,
        ids::CODE_CONSTRAINED_LABEL_MISSING,
        ids::CODE_INVALID_PATTERN,
        ids::CODE_CONFLICTING_LABELS,
        ids::CODE_MALFORMED_INPUT,
    ]
}

// --- Policy violations ---

fn explain_label_denied() -> Explanation {
    Explanation {
        title: "Denied Label",
        description: "\
The workload carries a label whose key is listed in `denied_labels`.

Denied keys may not appear on a workload at all, whatever their value.",
        remediation: "\
Remove the label from the workload metadata, or ask the policy owner to drop the
key from `denied_labels`.",
        examples: ExamplePair {
            before: r#"settings: {"denied_labels": ["owner"]}
labels:   {"owner": "alice", "app": "web"}"#,
            after: r#"settings: {"denied_labels": ["owner"]}
labels:   {"app": "web"}"#,
        },
    }
}

fn explain_constraint_failed() -> Explanation {
    Explanation {
        title: "Label Constraint Failed",
        description: "\
The value of a constrained label does not match the pattern configured for it in
`constrained_labels`.

Patterns are regular expressions searched anywhere inside the value. They are not
anchored; use `^` and `$` to require a full match.",
        remediation: "\
Change the label value so that the configured pattern finds a match in it.",
        examples: ExamplePair {
            before: r#"settings: {"constrained_labels": {"cost-center": "cc-\\d+"}}
labels:   {"cost-center": "cc-abc"}"#,
            after: r#"settings: {"constrained_labels": {"cost-center": "cc-\\d+"}}
labels:   {"cost-center": "cc-42"}"#,
        },
    }
}

fn explain_constrained_label_missing() -> Explanation {
    Explanation {
        title: "Constrained Label Missing",
        description: "\
Every key listed in `constrained_labels` is mandatory. The workload does not carry
one of them.

Only the first missing key is reported.",
        remediation: "\
Add the label to the workload metadata with a value that matches its pattern.",
        examples: ExamplePair {
            before: r#"settings: {"constrained_labels": {"team": ".*"}}
labels:   {}"#,
            after: r#"settings: {"constrained_labels": {"team": ".*"}}
labels:   {"team": "platform"}"#,
        },
    }
}

// --- Settings ---

fn explain_invalid_pattern() -> Explanation {
    Explanation {
        title: "Invalid Constraint Pattern",
        description: "\
A pattern in `constrained_labels` is not a valid regular expression.

One broken pattern invalidates the whole configuration. The message names the
problem and the part of the pattern it points at. Note that `\\d`, `\\w` and `\\s`
match ASCII characters only.",
        remediation: "\
Fix the pattern syntax. Remember that JSON strings need a doubled backslash for
regex escapes such as `\\d`.",
        examples: ExamplePair {
            before: r#"{"constrained_labels": {"cost-center": "cc-[a+"}}"#,
            after: r#"{"constrained_labels": {"cost-center": "cc-[a]+"}}"#,
        },
    }
}

fn explain_conflicting_labels() -> Explanation {
    Explanation {
        title: "Conflicting Labels",
        description: "\
A key appears both in `denied_labels` and in `constrained_labels`.

A denied label can never be present while a constrained label must always be
present, so no workload could ever be admitted.",
        remediation: "\
Remove the key from one of the two lists.",
        examples: ExamplePair {
            before: r#"{"denied_labels": ["cost-center"], "constrained_labels": {"cost-center": ".*"}}"#,
            after: r#"{"denied_labels": [], "constrained_labels": {"cost-center": ".*"}}"#,
        },
    }
}

// --- Envelope ---

fn explain_malformed_input() -> Explanation {
    Explanation {
        title: "Malformed Input",
        description: "\
The validation request or the settings document could not be decoded into the
expected shape. Requests rejected this way carry code 400.",
        remediation: "\
Send a JSON object with a `request` member (and optionally `settings`). Settings
must use a list of strings for `denied_labels` and an object of strings for
`constrained_labels`.",
        examples: ExamplePair {
            before: r#"{"settings": {"denied_labels": "owner"}, "request": {}}"#,
            after: r#"{"settings": {"denied_labels": ["owner"]}, "request": {}}"#,
        },
    }
}
