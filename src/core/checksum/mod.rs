//! Eleven-test (elfproef) checksum for BSN-style identifiers
//!
//! An identifier of `n` digits is weighted left to right with
//! `n, n-1, ..., 2` and a final `-1`. The signed weighted sum must be
//! divisible by 11.
//!
//! - [`validate`] - predicate over candidates of 7 to 9 digits
//! - [`Bsn`] - a parsed, already validated identifier
//! - [`generate`] - fresh 9-digit identifiers, no retries
//!
//! The validator and the generator are written independently; the
//! generator uses fixed body weights `9..=2` and appends the remainder as
//! check digit. Tests cross-check the two.
//!
//! # Examples
//!
//! ```
//! use elfproef::core::checksum::{generate, validate};
//!
//! assert!(validate("111222333"));
//! assert!(!validate("123456789"));
//! assert!(validate(&generate()));
//! ```

mod generator;
mod validator;

pub use generator::{
    BODY_LENGTH, BODY_WEIGHTS, Body, BodyError, GeneratedBsn, Resolution, body_sum,
    check_generated, complete, generate, generate_with, incremental_sum, perturb,
};
pub use validator::{Bsn, BsnError, validate};

/// Divisor of the eleven-test
pub const MODULUS: i64 = 11;

/// Shortest candidate the validator accepts
pub const MIN_LENGTH: usize = 7;

/// Longest candidate the validator accepts, and the generated length
pub const MAX_LENGTH: usize = 9;

/// Weight of the digit at 0-based `pos` in an identifier of `len` digits
///
/// The last position weighs `-1`, every other position `len - pos`.
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub const fn weight(len: usize, pos: usize) -> i64 {
    if pos + 1 == len { -1 } else { (len - pos) as i64 }
}

/// Weight vector for an identifier of `len` digits, left to right
#[must_use]
pub fn weights(len: usize) -> Vec<i64> {
    (0..len).map(|pos| weight(len, pos)).collect()
}

/// Signed weighted sum of `digits` under the weights for their length
#[must_use]
pub fn weighted_sum(digits: &[u8]) -> i64 {
    let len = digits.len();
    digits
        .iter()
        .enumerate()
        .map(|(pos, &digit)| i64::from(digit) * weight(len, pos))
        .sum()
}

/// Remainder modulo 11, in `0..11` for negative values too
#[must_use]
pub const fn mod11(value: i64) -> i64 {
    value.rem_euclid(MODULUS)
}

/// Digit values of an ASCII digit string, `None` if any other character occurs
#[must_use]
pub fn parse_digits(s: &str) -> Option<Vec<u8>> {
    s.bytes()
        .map(|b| b.is_ascii_digit().then(|| b - b'0'))
        .collect()
}
