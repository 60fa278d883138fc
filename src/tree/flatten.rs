use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One leaf of a flattened translation tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatEntry {
    /// The full dot-notation key (e.g. "forms.labels.email")
    pub key: String,
    /// The translation value (e.g. "Email address")
    pub value: String,
}

/// Flatten a translation tree into (dot-path, leaf value) pairs.
///
/// Entries come out in source declaration order, one per leaf. Numbers and
/// booleans are stringified, array elements get numeric index segments, and
/// nulls are dropped.
pub fn flatten(tree: &Value) -> Vec<FlatEntry> {
    let mut entries = Vec::new();
    walk(tree, String::new(), &mut entries);
    entries
}

fn walk(value: &Value, prefix: String, entries: &mut Vec<FlatEntry>) {
    match value {
        Value::Object(map) => {
            for (key, val) in map {
                let new_prefix = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                walk(val, new_prefix, entries);
            }
        }
        Value::Array(arr) => {
            for (index, val) in arr.iter().enumerate() {
                let new_prefix = if prefix.is_empty() {
                    index.to_string()
                } else {
                    format!("{}.{}", prefix, index)
                };
                walk(val, new_prefix, entries);
            }
        }
        Value::String(s) => {
            entries.push(FlatEntry {
                key: prefix,
                value: s.clone(),
            });
        }
        Value::Number(n) => {
            entries.push(FlatEntry {
                key: prefix,
                value: n.to_string(),
            });
        }
        Value::Bool(b) => {
            entries.push(FlatEntry {
                key: prefix,
                value: b.to_string(),
            });
        }
        Value::Null => {}
    }
}
