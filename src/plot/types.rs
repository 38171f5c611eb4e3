//! Input value helpers for chatplot configurations
//!
//! Model output arrives as untyped JSON. These helpers give the constructors a
//! single place to decide what counts as "present", how heterogeneous values
//! are normalized, and how type mismatches are reported.

use serde_json::{Map, Value};

use crate::{ChatplotError, Result};

/// JSON object as produced by `serde_json`
pub type Mapping = Map<String, Value>;

// =============================================================================
// Truthiness
// =============================================================================

/// Whether a value counts as present
///
/// `null`, `false`, `0`, the empty string, the empty array and the empty
/// object are all treated as absent. Everything else is present.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(arr) => !arr.is_empty(),
        Value::Object(obj) => !obj.is_empty(),
    }
}

/// Look up a key and keep it only if it is truthy
pub fn get_truthy<'a>(mapping: &'a Mapping, key: &str) -> Option<&'a Value> {
    mapping.get(key).filter(|v| is_truthy(v))
}

/// JSON type name used in error messages
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn invalid_type(field: &str, expected: &'static str, value: &Value) -> ChatplotError {
    ChatplotError::InvalidType {
        field: field.to_string(),
        expected,
        found: json_type_name(value),
    }
}

// =============================================================================
// Typed Accessors
// =============================================================================

/// Require a value to be a JSON object
pub fn as_mapping<'a>(value: &'a Value, field: &str) -> Result<&'a Mapping> {
    value
        .as_object()
        .ok_or_else(|| invalid_type(field, "object", value))
}

/// Require a value to be a JSON string
pub fn as_str<'a>(value: &'a Value, field: &str) -> Result<&'a str> {
    value
        .as_str()
        .ok_or_else(|| invalid_type(field, "string", value))
}

/// Fetch a key that must be present
pub fn require<'a>(mapping: &'a Mapping, key: &str) -> Result<&'a Value> {
    mapping
        .get(key)
        .ok_or_else(|| ChatplotError::MissingRequiredField {
            field: key.to_string(),
        })
}

/// Optional number, passed through without coercion
///
/// Absent keys and `null` give `None`. Any other non-number is a type error.
pub fn optional_number(mapping: &Mapping, key: &str) -> Result<Option<f64>> {
    match mapping.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value
            .as_f64()
            .map(Some)
            .ok_or_else(|| invalid_type(key, "number", value)),
    }
}

/// Optional string, passed through verbatim
pub fn optional_string(mapping: &Mapping, key: &str) -> Result<Option<String>> {
    match mapping.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => as_str(value, key).map(|s| Some(s.to_string())),
    }
}

// =============================================================================
// Normalization
// =============================================================================

/// Normalize a "string or list of strings" value into a list
///
/// - absent or falsy non-list → empty list
/// - truthy non-list → single-element list
/// - list → passed through unchanged
///
/// Every resulting element must be a string.
pub fn normalize_to_sequence(value: Option<&Value>, field: &str) -> Result<Vec<String>> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| as_str(item, field).map(str::to_string))
            .collect(),
        Some(value) if is_truthy(value) => Ok(vec![as_str(value, field)?.to_string()]),
        _ => Ok(Vec::new()),
    }
}
