//! Typed accessors for optional JSON fields
//!
//! Missing keys and explicit `null` both read as empty. A value of the wrong
//! JSON type is a shape error naming the full path.

use serde_json::{Map, Value};

use crate::core::{DiagramError, Result};

/// Path of `key` below `parent`, e.g. `values.root_module`
pub(crate) fn child_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", parent, key)
    }
}

/// Path of element `index` of the array at `parent`
pub(crate) fn index_path(parent: &str, index: usize) -> String {
    format!("{}[{}]", parent, index)
}

/// Object at `key`, or `None` when absent
pub(crate) fn object<'a>(
    value: &'a Value,
    key: &str,
    path: &str,
) -> Result<Option<&'a Map<String, Value>>> {
    match value.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Object(map)) => Ok(Some(map)),
        Some(_) => Err(DiagramError::shape(child_path(path, key), "object")),
    }
}

/// Array at `key`, or an empty slice when absent
pub(crate) fn array<'a>(value: &'a Value, key: &str, path: &str) -> Result<&'a [Value]> {
    match value.get(key) {
        None | Some(Value::Null) => Ok(&[]),
        Some(Value::Array(items)) => Ok(items),
        Some(_) => Err(DiagramError::shape(child_path(path, key), "array")),
    }
}

/// String at `key`, or `""` when absent
pub(crate) fn string<'a>(value: &'a Value, key: &str, path: &str) -> Result<&'a str> {
    match value.get(key) {
        None | Some(Value::Null) => Ok(""),
        Some(Value::String(s)) => Ok(s),
        Some(_) => Err(DiagramError::shape(child_path(path, key), "string")),
    }
}

/// String at `key`, or `None` when absent
pub(crate) fn optional_string<'a>(
    value: &'a Value,
    key: &str,
    path: &str,
) -> Result<Option<&'a str>> {
    match value.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(_) => Err(DiagramError::shape(child_path(path, key), "string")),
    }
}

/// Array of strings at `key`, or empty when absent
pub(crate) fn string_list(value: &Value, key: &str, path: &str) -> Result<Vec<String>> {
    let list_path = child_path(path, key);
    array(value, key, path)?
        .iter()
        .enumerate()
        .map(|(index, item)| {
            item.as_str()
                .map(str::to_string)
                .ok_or_else(|| DiagramError::shape(index_path(&list_path, index), "string"))
        })
        .collect()
}
