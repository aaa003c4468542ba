//! Value conversions between process-data representations
//!
//! Process variables travel as strings, numbers and name/value pairs, and a
//! blank or zero often stands for "no value". These helpers map those
//! conventions onto `Option`.

use serde::{Deserialize, Serialize};

/// A name/value pair as stored in selection lists
///
/// The value is always a string; an empty string means no value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameValue {
    /// Display name
    pub name: String,
    /// Stored value, `""` when absent
    pub value: String,
}

impl NameValue {
    /// Pair a number with a name; `None` is stored as the empty string
    #[must_use]
    pub fn from_number(value: Option<f64>, name: &str) -> Self {
        Self {
            name: name.to_string(),
            value: value.map(|v| v.to_string()).unwrap_or_default(),
        }
    }

    /// The value, `None` when it is empty
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        Some(self.value.as_str()).filter(|v| !v.is_empty())
    }

    /// The value as a number, `None` when empty or not numeric
    #[must_use]
    pub fn number(&self) -> Option<f64> {
        self.value().and_then(|v| string_to_number(Some(v)))
    }
}

/// Value of an optional pair, `None` when the pair or its value is missing
#[must_use]
pub fn nvp_value(pair: Option<&NameValue>) -> Option<&str> {
    pair.and_then(NameValue::value)
}

/// Numeric value of an optional pair
#[must_use]
pub fn nvp_number(pair: Option<&NameValue>) -> Option<f64> {
    pair.and_then(NameValue::number)
}

/// Parse a numeric string
///
/// Absent or blank input and text that is not a finite number give `None`.
/// Surrounding whitespace is ignored.
#[must_use]
pub fn string_to_number(value: Option<&str>) -> Option<f64> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .and_then(|v| v.parse::<f64>().ok())
        .filter(|n| n.is_finite())
}

/// Render a number as a string
///
/// Zero, NaN and `None` all count as no value. Whole numbers print without
/// a fractional part.
#[must_use]
pub fn number_to_string(value: Option<f64>) -> Option<String> {
    value
        .filter(|n| *n != 0.0 && !n.is_nan())
        .map(|n| n.to_string())
}

/// Map zero to `None`, for columns where zero is not a legal value
#[must_use]
pub const fn zero_to_none(value: i64) -> Option<i64> {
    if value == 0 { None } else { Some(value) }
}

/// Render a nullable boolean as one of two option labels
#[must_use]
pub fn bool_to_label<'a>(value: Option<bool>, yes: &'a str, no: &'a str) -> Option<&'a str> {
    value.map(|b| if b { yes } else { no })
}

/// Read a nullable boolean back from its option label
///
/// Anything other than exactly `yes` or `no` gives `None`.
#[must_use]
pub fn label_to_bool(label: &str, yes: &str, no: &str) -> Option<bool> {
    if label == yes {
        Some(true)
    } else if label == no {
        Some(false)
    } else {
        None
    }
}
