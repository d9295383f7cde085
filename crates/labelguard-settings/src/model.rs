use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Policy settings schema v1.
///
/// This is the *user-facing* model: patterns are still raw strings and overlapping keys are
/// allowed to exist until resolution.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LabelSettingsV1 {
    /// Label keys that must not appear on a workload.
    #[serde(default)]
    pub denied_labels: Vec<String>,

    /// Map of label key -> regular expression its value must match.
    ///
    /// Every key listed here must be present on the workload.
    #[serde(default)]
    pub constrained_labels: BTreeMap<String, String>,
}
