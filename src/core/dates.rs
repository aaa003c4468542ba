//! Date helpers
//!
//! All functions take the reference instant explicitly instead of reading
//! the clock, so callers decide what "now" is. Dates are UTC; "ignoring
//! time" means comparing the calendar dates of the UTC instants.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeDelta, Utc};
use thiserror::Error;

/// Errors from date arithmetic and parsing
#[derive(Debug, Error)]
pub enum DateError {
    /// The result does not fit chrono's supported range
    #[error("date out of range: {0}")]
    OutOfRange(String),

    /// Input is neither RFC 3339 nor `YYYY-MM-DD`
    #[error("unparseable date: {0}")]
    Unparseable(String),
}

/// How a date is compared against a reference instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    /// Strictly earlier
    Less,
    /// Earlier or equal
    LessOrEqual,
    /// Strictly later
    Greater,
    /// Later or equal
    GreaterOrEqual,
    /// Same instant, to the millisecond
    Equal,
}

impl Comparison {
    fn holds(self, left: DateTime<Utc>, right: DateTime<Utc>) -> bool {
        match self {
            Self::Less => left < right,
            Self::LessOrEqual => left <= right,
            Self::Greater => left > right,
            Self::GreaterOrEqual => left >= right,
            Self::Equal => left.timestamp_millis() == right.timestamp_millis(),
        }
    }
}

/// Convert unix seconds to a UTC instant
pub fn from_unix(seconds: i64) -> Result<DateTime<Utc>, DateError> {
    DateTime::from_timestamp(seconds, 0)
        .ok_or_else(|| DateError::OutOfRange(format!("{seconds} seconds")))
}

/// Unix seconds of an instant, sub-second part dropped
#[must_use]
pub fn to_unix(date: DateTime<Utc>) -> i64 {
    date.timestamp()
}

/// Format as `YYYY-MM-DD`
#[must_use]
pub fn format_date(date: DateTime<Utc>) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse RFC 3339 or a bare `YYYY-MM-DD` (taken as midnight UTC)
pub fn parse_date(input: &str) -> Result<DateTime<Utc>, DateError> {
    let input = input.trim();
    if let Ok(date) = DateTime::parse_from_rfc3339(input) {
        return Ok(date.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map(|d| d.and_time(NaiveTime::MIN).and_utc())
        .map_err(|_| DateError::Unparseable(input.to_string()))
}

/// `a` strictly before `b`
#[must_use]
pub fn is_before(a: DateTime<Utc>, b: DateTime<Utc>) -> bool {
    a < b
}

/// `a` strictly after `b`
#[must_use]
pub fn is_after(a: DateTime<Utc>, b: DateTime<Utc>) -> bool {
    a > b
}

fn days(count: i64) -> Result<TimeDelta, DateError> {
    TimeDelta::try_days(count).ok_or_else(|| DateError::OutOfRange(format!("{count} days")))
}

/// Add whole days (24 hours each)
pub fn add_days(date: DateTime<Utc>, count: i64) -> Result<DateTime<Utc>, DateError> {
    date.checked_add_signed(days(count)?)
        .ok_or_else(|| DateError::OutOfRange(format!("{date} + {count} days")))
}

/// Subtract whole days (24 hours each)
pub fn subtract_days(date: DateTime<Utc>, count: i64) -> Result<DateTime<Utc>, DateError> {
    date.checked_sub_signed(days(count)?)
        .ok_or_else(|| DateError::OutOfRange(format!("{date} - {count} days")))
}

/// Compare `date` against `now` plus `count` days
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use elfproef::core::dates::{Comparison, compare_to_now_plus_days};
///
/// let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
/// let due = Utc.with_ymd_and_hms(2024, 3, 5, 12, 0, 0).unwrap();
/// assert!(compare_to_now_plus_days(due, 5, now, Comparison::Less).unwrap());
/// assert!(compare_to_now_plus_days(due, 4, now, Comparison::Equal).unwrap());
/// ```
pub fn compare_to_now_plus_days(
    date: DateTime<Utc>,
    count: i64,
    now: DateTime<Utc>,
    comparison: Comparison,
) -> Result<bool, DateError> {
    let reference = add_days(now, count)?;
    Ok(comparison.holds(date, reference))
}

/// Whether `latest` lies more than `limit` days after `earliest`, by calendar date
#[must_use]
pub fn exceeds_days_between(earliest: DateTime<Utc>, latest: DateTime<Utc>, limit: i64) -> bool {
    day_difference(latest, earliest) > limit
}

/// Same calendar date
#[must_use]
pub fn same_day(a: DateTime<Utc>, b: DateTime<Utc>) -> bool {
    a.date_naive() == b.date_naive()
}

/// Later calendar date
#[must_use]
pub fn is_later_ignoring_time(a: DateTime<Utc>, b: DateTime<Utc>) -> bool {
    a.date_naive() > b.date_naive()
}

/// Whole calendar days from `b` to `a`; negative when `a` is earlier
#[must_use]
pub fn day_difference(a: DateTime<Utc>, b: DateTime<Utc>) -> i64 {
    (a.date_naive() - b.date_naive()).num_days()
}
