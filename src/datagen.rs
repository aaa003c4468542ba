//! Random test data
//!
//! Filler for seeding test processes: numbers, strings, dates, words and
//! whole documents. Every generator takes the random source as a parameter
//! so tests can seed it; none of the output carries meaning.
//!
//! Identifiers that must pass the eleven-test come from
//! [`crate::core::checksum::generate`].

use chrono::{DateTime, Utc};
use rand::Rng;
use rand::distributions::Alphanumeric;
use uuid::Uuid;

/// Shortest generated word
pub const MIN_WORD_LENGTH: usize = 5;

/// Longest generated word
pub const MAX_WORD_LENGTH: usize = 10;

/// Random integer in `min..=max`; the bounds may come in either order
pub fn random_int<R: Rng + ?Sized>(rng: &mut R, min: i64, max: i64) -> i64 {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    rng.gen_range(lo..=hi)
}

/// Random string of `length` ASCII letters and digits
pub fn random_string<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    (0..length).map(|_| char::from(rng.sample(Alphanumeric))).collect()
}

/// Random instant in `start..=end`, millisecond resolution
pub fn random_date<R: Rng + ?Sized>(
    rng: &mut R,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> DateTime<Utc> {
    let millis = random_int(rng, start.timestamp_millis(), end.timestamp_millis());
    DateTime::from_timestamp_millis(millis).unwrap_or(start)
}

/// `length` random integers in `min..=max`
pub fn random_int_array<R: Rng + ?Sized>(rng: &mut R, length: usize, min: i64, max: i64) -> Vec<i64> {
    (0..length).map(|_| random_int(rng, min, max)).collect()
}

/// A pseudo-word of 5 to 10 alphanumeric characters
pub fn word<R: Rng + ?Sized>(rng: &mut R) -> String {
    let length = rng.gen_range(MIN_WORD_LENGTH..=MAX_WORD_LENGTH);
    random_string(rng, length)
}

/// `words` pseudo-words joined by spaces
pub fn sentence<R: Rng + ?Sized>(rng: &mut R, words: usize) -> String {
    (0..words).map(|_| word(rng)).collect::<Vec<_>>().join(" ")
}

/// `sentences` sentences of `words` words, joined by `". "`
pub fn paragraph<R: Rng + ?Sized>(rng: &mut R, sentences: usize, words: usize) -> String {
    (0..sentences)
        .map(|_| sentence(rng, words))
        .collect::<Vec<_>>()
        .join(". ")
}

/// `paragraphs` paragraphs separated by newlines
pub fn document<R: Rng + ?Sized>(
    rng: &mut R,
    paragraphs: usize,
    sentences: usize,
    words: usize,
) -> String {
    (0..paragraphs)
        .map(|_| paragraph(rng, sentences, words))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Random GUID in the `8-4-4-4-12` hex layout
#[must_use]
pub fn guid() -> String {
    Uuid::new_v4().to_string()
}
