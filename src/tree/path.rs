use crate::error::{AssistError, Result};
use serde_json::{Map, Value};

/// Resolve a dot-path against a translation tree.
///
/// Walks the tree one segment at a time and returns `None` as soon as a
/// segment is missing or an intermediate value is not an object. Absence is
/// a normal outcome, not an error.
pub fn get<'a>(tree: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = tree;
    for segment in path.split('.') {
        if segment.is_empty() {
            return None;
        }
        current = current.as_object()?.get(segment)?;
    }
    Some(current)
}

/// Resolve a dot-path to a string leaf, or `None` if the path is missing or
/// names a sub-tree.
pub fn get_str<'a>(tree: &'a Value, path: &str) -> Option<&'a str> {
    get(tree, path).and_then(Value::as_str)
}

/// Assign `value` at `path`, creating intermediate objects for every segment
/// except the last. A non-object value found along the way is replaced with
/// a fresh empty object (create-path semantics). Mutates the tree in place;
/// the caller owns persistence.
pub fn set(tree: &mut Value, path: &str, value: Value) {
    if !tree.is_object() {
        *tree = Value::Object(Map::new());
    }

    let segments: Vec<&str> = path.split('.').collect();
    let mut current = tree;

    for segment in &segments[..segments.len() - 1] {
        current = current
            .as_object_mut()
            .unwrap()
            .entry(segment.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if !current.is_object() {
            *current = Value::Object(Map::new());
        }
    }

    let last = segments[segments.len() - 1];
    current
        .as_object_mut()
        .unwrap()
        .insert(last.to_string(), value);
}

/// Guarded variant of [`set`] used by add-key operations: refuses to touch a
/// path that already resolves to anything (leaf or sub-tree) and reports
/// `PathAlreadyExists` instead, leaving the tree unmodified.
pub fn insert(tree: &mut Value, path: &str, value: Value) -> Result<()> {
    if get(tree, path).is_some() {
        return Err(AssistError::path_already_exists(path));
    }
    set(tree, path, value);
    Ok(())
}
