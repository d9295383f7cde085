//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - conflict detection between denied and constrained keys
//! - acceptance of compliant label sets
//! - determinism of the verdict
//! - rejection of empty and denied label sets
//! - constraint failures on anchored literal patterns

use crate::engine::evaluate;
use crate::model::LabelSet;
use crate::policy::LabelPolicy;
use crate::verdict::{Verdict, Violation};
use proptest::prelude::*;
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet, HashSet};

// ============================================================================
// Strategies
// ============================================================================

/// Label keys: lowercase DNS-ish names.
fn arb_label_key() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9-]{0,15}").unwrap()
}

fn arb_label_value() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9._-]{0,20}").unwrap()
}

/// Disjoint denied and constrained key sets.
fn arb_disjoint_keys() -> impl Strategy<Value = (BTreeSet<String>, BTreeSet<String>)> {
    prop::collection::btree_set(arb_label_key(), 0..12).prop_flat_map(|keys| {
        let keys: Vec<String> = keys.into_iter().collect();
        let len = keys.len();
        prop::collection::vec(any::<bool>(), len).prop_map(move |sides| {
            let mut denied = BTreeSet::new();
            let mut constrained = BTreeSet::new();
            for (key, is_denied) in keys.iter().zip(sides) {
                if is_denied {
                    denied.insert(key.clone());
                } else {
                    constrained.insert(key.clone());
                }
            }
            (denied, constrained)
        })
    })
}

fn any_value_pattern() -> Regex {
    Regex::new(".*").unwrap()
}

/// Constrained keys, each with an anchored literal token and a flag for whether the
/// label carries that token or a different value.
fn arb_literal_constraints() -> impl Strategy<Value = BTreeMap<String, (String, bool)>> {
    prop::collection::btree_map(
        arb_label_key(),
        (
            prop::string::string_regex("[a-z0-9]{1,8}").unwrap(),
            any::<bool>(),
        ),
        1..8,
    )
}

fn build(denied: &BTreeSet<String>, constrained: &BTreeSet<String>) -> LabelPolicy {
    let denied: HashSet<String> = denied.iter().cloned().collect();
    let constrained: BTreeMap<String, Regex> = constrained
        .iter()
        .map(|k| (k.clone(), any_value_pattern()))
        .collect();
    LabelPolicy::new(denied, constrained).unwrap()
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn disjoint_policy_accepts_compliant_labels(
        (denied, constrained) in arb_disjoint_keys(),
        value in arb_label_value(),
        extra in prop::collection::btree_map(arb_label_key(), arb_label_value(), 0..6),
    ) {
        let policy = build(&denied, &constrained);

        let mut labels: BTreeMap<String, String> = extra
            .into_iter()
            .filter(|(k, _)| !denied.contains(k))
            .collect();
        for key in &constrained {
            labels.insert(key.clone(), value.clone());
        }

        prop_assert_eq!(evaluate(&policy, &LabelSet::from(labels)), Verdict::Accepted);
    }

    #[test]
    fn overlapping_keys_are_reported_sorted(
        shared in prop::collection::btree_set(arb_label_key(), 1..6),
        denied_only in prop::collection::btree_set(arb_label_key(), 0..4),
    ) {
        let denied: HashSet<String> = shared.iter().chain(denied_only.iter()).cloned().collect();
        let constrained: BTreeMap<String, Regex> = shared
            .iter()
            .map(|k| (k.clone(), any_value_pattern()))
            .collect();

        let err = LabelPolicy::new(denied, constrained).unwrap_err();
        let expected: Vec<String> = shared.into_iter().collect();
        prop_assert_eq!(err.labels(), expected.as_slice());
        let expected_message = format!(
            "These labels cannot be constrained and denied at the same time: Set{{{}}}",
            expected.join(", ")
        );
        prop_assert_eq!(err.to_string(), expected_message);
    }

    #[test]
    fn evaluation_is_deterministic(
        (denied, constrained) in arb_disjoint_keys(),
        labels in prop::collection::btree_map(arb_label_key(), arb_label_value(), 0..10),
    ) {
        let policy = build(&denied, &constrained);
        let labels = LabelSet::from(labels);
        prop_assert_eq!(evaluate(&policy, &labels), evaluate(&policy, &labels));
    }

    #[test]
    fn empty_labels_reject_when_constrained(
        (denied, constrained) in arb_disjoint_keys(),
    ) {
        prop_assume!(!constrained.is_empty());
        let policy = build(&denied, &constrained);

        match evaluate(&policy, &LabelSet::new()) {
            Verdict::Rejected(Violation::MissingConstrainedLabel { label }) => {
                prop_assert!(constrained.contains(&label));
            }
            other => prop_assert!(false, "unexpected verdict: {:?}", other),
        }
    }

    #[test]
    fn denied_key_always_rejects(
        (denied, constrained) in arb_disjoint_keys(),
        value in arb_label_value(),
    ) {
        prop_assume!(!denied.is_empty());
        let policy = build(&denied, &constrained);

        let mut labels: BTreeMap<String, String> = BTreeMap::new();
        for key in &constrained {
            labels.insert(key.clone(), value.clone());
        }
        let denied_key = denied.iter().next().unwrap().clone();
        labels.insert(denied_key, value);

        let verdict = evaluate(&policy, &LabelSet::from(labels));
        prop_assert!(
            matches!(verdict, Verdict::Rejected(Violation::DeniedLabel { .. })),
            "expected deny rejection, got {:?}",
            verdict
        );
    }

    #[test]
    fn first_mismatched_literal_constraint_is_reported(
        constraints in arb_literal_constraints(),
    ) {
        let constrained: BTreeMap<String, Regex> = constraints
            .iter()
            .map(|(key, (token, _))| (key.clone(), Regex::new(&format!("^{token}$")).unwrap()))
            .collect();
        let policy = LabelPolicy::new(HashSet::new(), constrained).unwrap();

        let labels: BTreeMap<String, String> = constraints
            .iter()
            .map(|(key, (token, matches))| {
                let value = if *matches { token.clone() } else { format!("{token}-x") };
                (key.clone(), value)
            })
            .collect();

        let expected = constraints
            .iter()
            .find(|(_, (_, matches))| !matches)
            .map_or(Verdict::Accepted, |(key, _)| {
                Verdict::Rejected(Violation::ConstraintFailed { label: key.clone() })
            });
        prop_assert_eq!(evaluate(&policy, &LabelSet::from(labels)), expected);
    }
}
