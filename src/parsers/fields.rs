//! Lenient readers over untyped JSON objects.
//!
//! Export schemas differ between versions, so fields are looked up by name in a fixed
//! order and the first *present* one wins. A value counts as present unless it is
//! missing, `null`, `false`, `0` or the empty string; objects and arrays always count.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::{Map, Value};

/// Whether a value counts as present in a fallback chain
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Render a value as text: strings verbatim, everything else as compact JSON
pub fn value_to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// First present value among `keys`, checked in order
pub fn first_present<'a>(object: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().filter_map(|key| object.get(*key)).find(|value| is_truthy(value))
}

/// First present value among `keys` rendered as text
pub fn field_text(object: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    first_present(object, keys).map(value_to_text)
}

/// Like [`field_text`] with a terminal fallback
pub fn field_text_or(object: &Map<String, Value>, keys: &[&str], fallback: &str) -> String {
    field_text(object, keys).unwrap_or_else(|| fallback.to_string())
}

/// Whether `value` is an object carrying at least one present field from `keys`
pub fn has_any_field(value: &Value, keys: &[&str]) -> bool {
    value.as_object().is_some_and(|object| first_present(object, keys).is_some())
}

/// Interpret a creation timestamp as a UTC calendar date
///
/// Accepts integers (Unix milliseconds), RFC3339 strings, naive date-times and bare dates.
pub fn parse_date(value: &Value) -> Option<NaiveDate> {
    match value {
        Value::Number(n) => {
            let ms = n.as_i64().or_else(|| n.as_f64().map(|f| f as i64))?;
            DateTime::from_timestamp_millis(ms).map(|dt| dt.date_naive())
        }
        Value::String(s) => parse_date_str(s.trim()),
        _ => None,
    }
}

fn parse_date_str(s: &str) -> Option<NaiveDate> {
    if let Ok(dt) = s.parse::<DateTime<Utc>>() {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Some(dt.date());
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}
