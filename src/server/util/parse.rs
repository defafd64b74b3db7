//! Lenient coercions for values read out of game server JSON payloads.
//!
//! Game server scripts write numbers as integers, floats or numeric strings depending on
//! which resource last touched the row, so every projection goes through these helpers
//! instead of failing on the first unexpected representation.

use sea_orm::JsonValue;

/// Parses an i64 from a JSON value
///
/// Accepts integers, floats (truncated towards zero) and numeric strings.
///
/// # Arguments
/// - `value` - The JSON value to coerce
///
/// # Returns
/// - `Some(i64)` - Value holds a representable number
/// - `None` - Value is absent, not numeric, or out of range
pub fn parse_i64_from_json(value: Option<&JsonValue>) -> Option<i64> {
    match value? {
        JsonValue::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().and_then(f64_to_i64)),
        JsonValue::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(f64_to_i64))
        }
        _ => None,
    }
}

/// Parses a String from a JSON value
///
/// Strings are returned as-is, numbers and booleans are rendered. Null, arrays and
/// objects yield `None`.
pub fn parse_string_from_json(value: Option<&JsonValue>) -> Option<String> {
    match value? {
        JsonValue::String(s) => Some(s.clone()),
        JsonValue::Number(n) => Some(n.to_string()),
        JsonValue::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn f64_to_i64(value: f64) -> Option<i64> {
    if value.is_finite() && value >= i64::MIN as f64 && value <= i64::MAX as f64 {
        Some(value.trunc() as i64)
    } else {
        None
    }
}
