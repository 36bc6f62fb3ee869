//! Shared test utilities for the mergesignal workspace.
//!
//! This crate exists because `xtask` needs `normalize_nondeterministic` at
//! runtime (not behind `#[cfg(test)]`), so a `#[cfg(test)]` module inside
//! `mergesignal-types` would not suffice.

use serde_json::Value;

const TIMESTAMP_KEYS: [&str; 2] = ["started_at", "finished_at"];

/// Normalize non-deterministic JSON fields for golden-file comparison.
///
/// 1. **Root-only**: `tool.version` becomes `"__VERSION__"` only when the
///    root object looks like a report envelope (`schema`, `tool`, `behavior`,
///    `verdict` and `evaluations` all present).
///
/// 2. **Recursive**: `started_at` and `finished_at` become `"__TIMESTAMP__"`
///    at any depth.
pub fn normalize_nondeterministic(mut value: Value) -> Value {
    if let Some(obj) = value.as_object_mut() {
        let is_envelope = ["schema", "tool", "behavior", "verdict", "evaluations"]
            .iter()
            .all(|k| obj.contains_key(*k));
        if is_envelope
            && let Some(tool_obj) = obj.get_mut("tool").and_then(Value::as_object_mut)
            && tool_obj.contains_key("name")
            && tool_obj.contains_key("version")
        {
            tool_obj.insert(
                "version".to_string(),
                Value::String("__VERSION__".to_string()),
            );
        }
    }
    normalize_timestamps_recursive(&mut value);
    value
}

fn normalize_timestamps_recursive(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for key in TIMESTAMP_KEYS {
                if let Some(v) = map.get_mut(key) {
                    *v = Value::String("__TIMESTAMP__".to_string());
                }
            }
            for val in map.values_mut() {
                normalize_timestamps_recursive(val);
            }
        }
        Value::Array(arr) => {
            for val in arr.iter_mut() {
                normalize_timestamps_recursive(val);
            }
        }
        _ => {}
    }
}
