use crate::model::LabelSet;
use crate::policy::LabelPolicy;
use regex::Regex;
use std::collections::{BTreeMap, HashSet};

pub fn policy(denied: &[&str], constrained: &[(&str, &str)]) -> LabelPolicy {
    let denied: HashSet<String> = denied.iter().map(|s| s.to_string()).collect();
    let constrained: BTreeMap<String, Regex> = constrained
        .iter()
        .map(|(k, p)| (k.to_string(), Regex::new(p).expect("test pattern compiles")))
        .collect();
    LabelPolicy::new(denied, constrained).expect("test policy has no conflicts")
}

pub fn labels(pairs: &[(&str, &str)]) -> LabelSet {
    pairs.iter().copied().collect()
}
