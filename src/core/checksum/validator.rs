//! Eleven-test validation of 7 to 9 digit candidates

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{MAX_LENGTH, MIN_LENGTH, mod11, parse_digits, weight, weighted_sum};

static SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{7,9}$").expect("shape pattern is valid"));

/// Check a candidate identifier against the eleven-test
///
/// Accepts exactly 7, 8 or 9 ASCII digits and nothing else: surrounding
/// whitespace, separators and other lengths are rejected. The all-zero
/// identifier is rejected although its weighted sum is divisible by 11.
///
/// Malformed input is an ordinary `false`, never an error. Use
/// [`Bsn::parse`] when the reason for a rejection matters.
///
/// # Examples
///
/// ```
/// use elfproef::core::checksum::validate;
///
/// assert!(validate("123456782"));
/// assert!(validate("1855013"));
/// assert!(!validate("000000000"));
/// assert!(!validate(" 123456782"));
/// ```
#[must_use]
pub fn validate(candidate: &str) -> bool {
    if !SHAPE.is_match(candidate) {
        return false;
    }

    let len = candidate.len();
    let mut sum = 0i64;
    let mut outcome = 0i64;
    for (pos, b) in candidate.bytes().enumerate() {
        let digit = i64::from(b - b'0');
        sum += digit;
        outcome += digit * weight(len, pos);
    }

    sum != 0 && mod11(outcome) == 0
}

/// Reasons a candidate is not a valid identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BsnError {
    /// A character other than an ASCII digit was found
    #[error("invalid character {character:?} at position {position}")]
    NonDigit {
        /// The offending character
        character: char,
        /// 0-based character position
        position: usize,
    },

    /// Digit count outside 7..=9
    #[error("expected 7 to 9 digits, got {0}")]
    Length(usize),

    /// Every digit is zero
    #[error("all-zero identifier")]
    AllZero,

    /// The weighted sum is not divisible by 11
    #[error("eleven-test failed: weighted sum {sum} leaves remainder {remainder}")]
    Checksum {
        /// Signed weighted sum of the digits
        sum: i64,
        /// Remainder of the sum modulo 11
        remainder: i64,
    },
}

/// An identifier that passed the eleven-test
///
/// Holds the digit string exactly as given (7 to 9 digits, no padding).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Bsn(String);

impl Bsn {
    /// Parse and validate a candidate
    ///
    /// Checks run in order: characters, length, all-zero, checksum. The
    /// first failing check is reported. Accepts exactly the strings for
    /// which [`validate`] returns `true`.
    pub fn parse(candidate: &str) -> Result<Self, BsnError> {
        if let Some((position, character)) =
            candidate.chars().enumerate().find(|(_, c)| !c.is_ascii_digit())
        {
            return Err(BsnError::NonDigit {
                character,
                position,
            });
        }

        let len = candidate.len();
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&len) {
            return Err(BsnError::Length(len));
        }

        let digits = parse_digits(candidate).ok_or(BsnError::Length(len))?;
        if digits.iter().all(|&d| d == 0) {
            return Err(BsnError::AllZero);
        }

        let sum = weighted_sum(&digits);
        let remainder = mod11(sum);
        if remainder != 0 {
            return Err(BsnError::Checksum { sum, remainder });
        }

        Ok(Self(candidate.to_string()))
    }

    /// The digit string
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of digits (7, 8 or 9)
    #[must_use]
    pub fn digit_count(&self) -> usize {
        self.0.len()
    }

    /// The last digit, which carries weight -1
    #[must_use]
    pub fn check_digit(&self) -> u8 {
        self.0.bytes().last().map_or(0, |b| b - b'0')
    }

    /// Left-pad with zeros to the full 9 digits
    ///
    /// Leading zeros do not change the weighted sum, so the padded form is
    /// valid as well.
    #[must_use]
    pub fn to_padded(&self) -> String {
        format!("{:0>width$}", self.0, width = MAX_LENGTH)
    }
}

impl std::fmt::Display for Bsn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Bsn {
    type Err = BsnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Bsn {
    type Error = BsnError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Bsn> for String {
    fn from(bsn: Bsn) -> Self {
        bsn.0
    }
}

impl AsRef<str> for Bsn {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
