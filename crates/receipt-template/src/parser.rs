//! Layout JSON parsing and data path resolution

use crate::{Layout, LayoutRegistry, Result, TemplateError};
use serde_json::Value;

/// Parse a single layout from JSON string
pub fn parse_layout(json: &str) -> Result<Layout> {
    serde_json::from_str(json).map_err(|e| TemplateError::ParseError(e.to_string()))
}

/// Parse a layout registry (`{ "name": { "rows": [...] }, ... }`) from JSON string
pub fn parse_registry(json: &str) -> Result<LayoutRegistry> {
    serde_json::from_str(json).map_err(|e| TemplateError::ParseError(e.to_string()))
}

/// Resolve a dotted path against data
///
/// Walks one segment at a time through objects only:
/// - `name` - Root field
/// - `customer.address.city` - Nested field
///
/// Arrays are never indexed; lists are reached through iterator rows.
/// Returns `None` when a segment is missing or the current value is not an
/// object. A present `null` resolves to `Some(&Value::Null)`.
pub fn resolve_path<'a>(data: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(data, |current, segment| match current {
        Value::Object(map) => map.get(segment),
        _ => None,
    })
}

/// Convert a JSON value to string for printing
pub fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => number_to_string(n),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Integral floats print in plain digits (`2.0` -> `2`, `1e16` ->
/// `10000000000000000`) up to 1e21, where JS number printing switches to
/// exponent form
fn number_to_string(n: &serde_json::Number) -> String {
    if n.is_f64() {
        if let Some(f) = n.as_f64() {
            if f == 0.0 {
                return "0".to_string();
            }
            if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e21 {
                return format!("{f:.0}");
            }
        }
    }
    n.to_string()
}
