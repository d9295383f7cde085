use regex::Regex;
use std::collections::{BTreeMap, HashSet};

/// Compiled, read-only label policy.
///
/// Denied and constrained keys are disjoint; [`LabelPolicy::new`] is the only way to
/// build a non-empty policy and it rejects overlaps.
#[derive(Clone, Debug, Default)]
pub struct LabelPolicy {
    denied_labels: HashSet<String>,
    constrained_labels: BTreeMap<String, Regex>,
}

/// Keys that are both denied and constrained.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error(
    "These labels cannot be constrained and denied at the same time: Set{{{}}}",
    .labels.join(", ")
)]
pub struct PolicyConflict {
    labels: Vec<String>,
}

impl PolicyConflict {
    /// Conflicting keys, ascending.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}

impl LabelPolicy {
    pub fn new(
        denied_labels: HashSet<String>,
        constrained_labels: BTreeMap<String, Regex>,
    ) -> Result<Self, PolicyConflict> {
        // BTreeMap keys come out ascending, so the conflict list is already sorted.
        let conflicting: Vec<String> = constrained_labels
            .keys()
            .filter(|key| denied_labels.contains(key.as_str()))
            .cloned()
            .collect();

        if !conflicting.is_empty() {
            return Err(PolicyConflict {
                labels: conflicting,
            });
        }

        Ok(Self {
            denied_labels,
            constrained_labels,
        })
    }

    pub fn is_denied(&self, label: &str) -> bool {
        self.denied_labels.contains(label)
    }

    pub fn constraint(&self, label: &str) -> Option<&Regex> {
        self.constrained_labels.get(label)
    }

    pub fn denied_labels(&self) -> impl Iterator<Item = &str> {
        self.denied_labels.iter().map(String::as_str)
    }

    /// Constrained keys with their patterns, ascending by key.
    pub fn constrained_labels(&self) -> impl Iterator<Item = (&str, &Regex)> {
        self.constrained_labels.iter().map(|(k, re)| (k.as_str(), re))
    }

    pub fn is_empty(&self) -> bool {
        self.denied_labels.is_empty() && self.constrained_labels.is_empty()
    }
}
