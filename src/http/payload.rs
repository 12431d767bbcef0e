//! Small accessors for loosely-shaped JSON payloads.

use serde_json::Value;

/// An id that may be a string or a number.
pub fn id_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Number of items when the payload is a JSON array.
pub fn item_count(value: &Value) -> Option<usize> {
    value.as_array().map(Vec::len)
}

/// Render a scalar JSON value without quotes.
pub fn display_scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
