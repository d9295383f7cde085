//! Label extraction from a raw workload description.

use labelguard_domain::model::LabelSet;
use serde_json::Value;

const LABELS_POINTER: &str = "/metadata/labels";

/// Read `metadata.labels` from a workload object.
///
/// Anything that is not an object at that path yields an empty set. Non-string values are
/// rendered as their JSON text, `null` as the empty string.
pub fn extract_labels(object: &Value) -> LabelSet {
    let Some(Value::Object(labels)) = object.pointer(LABELS_POINTER) else {
        return LabelSet::new();
    };

    labels
        .iter()
        .map(|(key, value)| (key.as_str(), value_text(value)))
        .collect()
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
