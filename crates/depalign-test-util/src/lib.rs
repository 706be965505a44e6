//! Shared test utilities for the depalign workspace.
//!
//! `xtask` needs these at runtime (not behind `#[cfg(test)]`), so they live in their own crate.

use serde_json::Value;
use std::path::{Path, PathBuf};

/// Normalize non-deterministic JSON fields for golden-file comparison.
///
/// `tool.version` is replaced with `"__VERSION__"` only when the root object looks like a
/// receipt (`schema`, `tool`, `verdict`, `counts`). Timestamp keys are normalized at any depth.
pub fn normalize_nondeterministic(mut value: Value) -> Value {
    if let Some(obj) = value.as_object_mut() {
        let is_receipt = obj.contains_key("schema")
            && obj.contains_key("tool")
            && obj.contains_key("verdict")
            && obj.contains_key("counts");
        if is_receipt
            && let Some(tool) = obj.get_mut("tool")
            && let Some(tool_obj) = tool.as_object_mut()
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
            for key in ["started_at", "finished_at"] {
                if map.contains_key(key) {
                    map.insert(key.to_string(), Value::String("__TIMESTAMP__".to_string()));
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

/// `tests/fixtures` under the workspace root, given any workspace crate's manifest dir.
pub fn fixtures_dir(manifest_dir: &Path) -> PathBuf {
    let root = manifest_dir
        .ancestors()
        .find(|p| p.join("crates").is_dir())
        .unwrap_or(manifest_dir);
    root.join("tests").join("fixtures")
}
