//! Generic input validation predicates
//!
//! Loosely typed values from process data arrive as JSON; the predicates
//! here take [`serde_json::Value`] where the input may be of any type and
//! plain Rust types otherwise.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use regex::Regex;
use serde_json::Value;

use super::dates::parse_date;
use super::strings::utf8_length;

/// Whether a value is a string with non-whitespace content
#[must_use]
pub fn is_non_empty_string(value: &Value) -> bool {
    value.as_str().is_some_and(|s| !s.trim().is_empty())
}

/// Whether a value is missing: JSON `null`, or the literal strings
/// `"undefined"` / `"null"` that leak out of script serialisation
#[must_use]
pub fn is_invalid(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s == "undefined" || s == "null",
        Some(_) => false,
    }
}

/// A present, non-placeholder, non-blank string
#[must_use]
pub fn is_valid_string(value: Option<&Value>) -> bool {
    !is_invalid(value) && value.is_some_and(is_non_empty_string)
}

/// A finite number
#[must_use]
pub fn is_valid_number(value: Option<&Value>) -> bool {
    value
        .and_then(Value::as_f64)
        .is_some_and(f64::is_finite)
}

/// A non-empty array
#[must_use]
pub fn is_valid_array(value: &Value) -> bool {
    value.as_array().is_some_and(|items| !items.is_empty())
}

/// Whether `value` parses as an RFC 3339 timestamp or a bare `YYYY-MM-DD`
///
/// Accepts exactly what [`parse_date`] accepts.
#[must_use]
pub fn is_valid_date(value: &str) -> bool {
    parse_date(value).is_ok()
}

/// Strictly after `now`
#[must_use]
pub fn is_date_in_future(date: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    date > now
}

/// Strictly before `now`
#[must_use]
pub fn is_date_in_past(date: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    date < now
}

/// Whether `value` is an object holding every field in `required`, none null
#[must_use]
pub fn has_required_fields(value: &Value, required: &[&str]) -> bool {
    value.as_object().is_some_and(|object| {
        required
            .iter()
            .all(|field| object.get(*field).is_some_and(|v| !v.is_null()))
    })
}

/// Key-wise equality of two JSON objects
///
/// Nested objects are walked recursively and reported with dotted keys
/// (`address.city`). A key present on one side only compares unequal.
#[must_use]
pub fn compare_objects(left: &Value, right: &Value) -> BTreeMap<String, bool> {
    let mut result = BTreeMap::new();
    compare_keys(left, right, "", &mut result);
    result
}

fn compare_keys(left: &Value, right: &Value, prefix: &str, result: &mut BTreeMap<String, bool>) {
    let empty = serde_json::Map::new();
    let left_map = left.as_object().unwrap_or(&empty);
    let right_map = right.as_object().unwrap_or(&empty);

    let keys: BTreeSet<&String> = left_map.keys().chain(right_map.keys()).collect();
    for key in keys {
        let full_key = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };

        match (left_map.get(key), right_map.get(key)) {
            (Some(a @ Value::Object(_)), Some(b @ Value::Object(_))) => {
                compare_keys(a, b, &full_key, result);
            },
            (a, b) => {
                result.insert(full_key, a == b);
            },
        }
    }
}

/// Whether `pattern` matches the whole of `value`, not just a substring
///
/// Returns an error only for an invalid pattern.
pub fn match_exact(pattern: &str, value: &str) -> Result<bool, regex::Error> {
    let re = Regex::new(pattern)?;
    Ok(re
        .find(value)
        .is_some_and(|m| m.start() == 0 && m.end() == value.len()))
}

/// Whether the character count of `value` lies in `min..=max`
///
/// An absent or empty value passes only when `min` is zero.
#[must_use]
pub fn string_in_range(value: Option<&str>, min: usize, max: usize) -> bool {
    let len = value.map_or(0, |s| s.chars().count());
    (min..=max).contains(&len)
}

/// Whether `value` fits in `max_bytes` UTF-8 bytes
#[must_use]
pub const fn fits_max_length(value: &str, max_bytes: usize) -> bool {
    utf8_length(value) <= max_bytes
}
