use crate::error::ConfigError;
use crate::model::LabelSettingsV1;
use crate::pattern::compile_pattern;
use labelguard_domain::policy::LabelPolicy;
use regex::Regex;
use std::collections::{BTreeMap, HashSet};

pub fn resolve_settings(settings: &LabelSettingsV1) -> Result<LabelPolicy, ConfigError> {
    // Every pattern must compile before conflicts are considered.
    let mut constrained: BTreeMap<String, Regex> = BTreeMap::new();
    for (label, pattern) in &settings.constrained_labels {
        let re = compile_pattern(pattern).map_err(|error| ConfigError::InvalidPattern {
            label: label.clone(),
            error,
        })?;
        constrained.insert(label.clone(), re);
    }

    let denied: HashSet<String> = settings.denied_labels.iter().cloned().collect();

    Ok(LabelPolicy::new(denied, constrained)?)
}
