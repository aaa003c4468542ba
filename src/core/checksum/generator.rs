//! Generation of fresh 9-digit identifiers
//!
//! Eight body digits are drawn from `1..=9` and weighted `9, 8, ..., 2`.
//! The remainder of that sum modulo 11 becomes the check digit. A
//! remainder of 10 has no single-digit check digit, so the eighth body
//! digit is nudged once (`d + 1`, or `8` when it is `9`) and the sum is
//! recomputed in full. Should the remainder still be 10 the check digit
//! falls back to `0`. There is no retry loop.
//!
//! Zero is never drawn for a body digit, so generated values cover only
//! part of the space [`super::validate`] accepts.

use log::debug;
use rand::Rng;
use thiserror::Error;

use super::{MAX_LENGTH, mod11};

/// Number of randomly drawn digits before the check digit
pub const BODY_LENGTH: usize = 8;

/// Weights of the body digits, left to right
pub const BODY_WEIGHTS: [i64; BODY_LENGTH] = [9, 8, 7, 6, 5, 4, 3, 2];

/// Position of the body digit that is nudged on remainder 10
const NUDGED: usize = BODY_LENGTH - 1;

/// How the check digit was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The remainder was already a single digit
    Direct,
    /// The eighth digit was changed from `original` and the remainder recomputed
    Perturbed {
        /// The eighth digit before the change
        original: u8,
    },
    /// The remainder stayed 10 after the change and the check digit was forced to 0
    ZeroFallback {
        /// The eighth digit before the change
        original: u8,
    },
}

/// A completed identifier: body digits plus check digit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratedBsn {
    /// The eight body digits, after any perturbation
    pub body: [u8; BODY_LENGTH],
    /// The appended check digit, `0..=9`
    pub check: u8,
    /// Which path produced `check`
    pub resolution: Resolution,
}

impl GeneratedBsn {
    /// Whether the eighth body digit was changed
    #[must_use]
    pub const fn was_perturbed(&self) -> bool {
        !matches!(self.resolution, Resolution::Direct)
    }
}

impl std::fmt::Display for GeneratedBsn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for digit in self.body.iter().chain(std::iter::once(&self.check)) {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}

/// Reasons a digit array cannot be used as a body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BodyError {
    /// A value outside `0..=9`
    #[error("body digit {digit} at position {position} is not in 0..=9")]
    DigitOutOfRange {
        /// 0-based position in the body
        position: usize,
        /// The offending value
        digit: u8,
    },

    /// Every digit is zero, which would complete to the rejected all-zero identifier
    #[error("all-zero body")]
    AllZero,
}

/// Eight body digits, each in `0..=9` and not all zero
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Body([u8; BODY_LENGTH]);

impl Body {
    /// Check `digits` and wrap them
    pub fn new(digits: [u8; BODY_LENGTH]) -> Result<Self, BodyError> {
        if let Some((position, &digit)) = digits.iter().enumerate().find(|(_, d)| **d > 9) {
            return Err(BodyError::DigitOutOfRange { position, digit });
        }
        if digits.iter().all(|&d| d == 0) {
            return Err(BodyError::AllZero);
        }
        Ok(Self(digits))
    }

    /// The wrapped digits
    #[must_use]
    pub const fn digits(&self) -> [u8; BODY_LENGTH] {
        self.0
    }
}

impl TryFrom<[u8; BODY_LENGTH]> for Body {
    type Error = BodyError;

    fn try_from(digits: [u8; BODY_LENGTH]) -> Result<Self, Self::Error> {
        Self::new(digits)
    }
}

/// Weighted sum of the body digits with weights `9..=2`
#[must_use]
pub fn body_sum(body: &[u8; BODY_LENGTH]) -> i64 {
    body.iter()
        .zip(BODY_WEIGHTS)
        .map(|(&digit, weight)| i64::from(digit) * weight)
        .sum()
}

/// The replacement for the eighth digit on remainder 10
///
/// `d + 1` for `0..=8`; `9` and anything above map to `8`.
#[must_use]
pub const fn perturb(digit: u8) -> u8 {
    if digit >= 9 { 8 } else { digit + 1 }
}

/// Body sum after changing the eighth digit from `old` to `new`, without
/// recomputing the other seven products
///
/// Must equal [`body_sum`] of the changed body.
#[must_use]
pub fn incremental_sum(sum: i64, old: u8, new: u8) -> i64 {
    sum + (i64::from(new) - i64::from(old)) * BODY_WEIGHTS[NUDGED]
}

/// Derive the check digit for `body`, perturbing the eighth digit if needed
///
/// Deterministic part of [`generate`]. [`Body`] guarantees single digits
/// and a non-zero body, so the result always passes [`super::validate`].
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn complete(body: Body) -> GeneratedBsn {
    let mut body = body.digits();
    let mut remainder = mod11(body_sum(&body));
    let mut resolution = Resolution::Direct;

    if remainder == 10 {
        let original = body[NUDGED];
        body[NUDGED] = perturb(original);
        remainder = mod11(body_sum(&body));
        debug!(
            "remainder 10: eighth digit {original} -> {}, new remainder {remainder}",
            body[NUDGED]
        );

        if remainder == 10 {
            remainder = 0;
            resolution = Resolution::ZeroFallback { original };
        } else {
            resolution = Resolution::Perturbed { original };
        }
    }

    GeneratedBsn {
        body,
        check: remainder as u8,
        resolution,
    }
}

/// Generate an identifier using the caller's random source
pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    let body = Body(std::array::from_fn(|_| rng.gen_range(1..=9)));
    complete(body).to_string()
}

/// Generate a fresh 9-digit identifier
///
/// Always terminates after a fixed number of steps and never fails.
///
/// ```
/// let bsn = elfproef::core::checksum::generate();
/// assert_eq!(bsn.len(), 9);
/// assert!(elfproef::core::checksum::check_generated(&bsn));
/// ```
#[must_use]
pub fn generate() -> String {
    generate_with(&mut rand::thread_rng())
}

/// Check a 9-digit string against the generator's own rule
///
/// The first eight digits weighted `9..=2`, modulo 11, must equal the
/// ninth digit. Unlike [`super::validate`] this accepts only 9 digits.
#[must_use]
pub fn check_generated(candidate: &str) -> bool {
    let bytes = candidate.as_bytes();
    if bytes.len() != MAX_LENGTH || !bytes.iter().all(u8::is_ascii_digit) {
        return false;
    }

    let mut body = [0u8; BODY_LENGTH];
    for (slot, b) in body.iter_mut().zip(bytes) {
        *slot = b - b'0';
    }
    let check = i64::from(bytes[BODY_LENGTH] - b'0');

    mod11(body_sum(&body)) == check
}
