//! Duck-typed value coercion.
//!
//! Column values arrive as numbers, numeric strings, or null depending on
//! how the SQL layer serialized them. All numeric interpretation in the
//! sniffer and normalizer goes through this module; no inline type checks
//! elsewhere.

use serde_json::Value;

/// Try to interpret a value as a number.
///
/// JSON numbers pass through; strings are trimmed and parsed. Booleans,
/// nulls, and structured values never coerce.
pub fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    }
}

/// Strict check: is this value a JSON number (not a numeric string)?
pub fn is_numeric(value: &Value) -> bool {
    matches!(value, Value::Number(_))
}

/// Render a value as display text: strings unquoted, null as "null".
pub fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        other => other.to_string(),
    }
}
