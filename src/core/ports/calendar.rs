//! Business calendar port
//!
//! Business-date arithmetic (working hours, holidays, time zones) belongs to
//! the host's scheduling service. This port fixes the call contract and the
//! way missing or unknown schedule names fall back to configured defaults.

use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors reported by a calendar implementation
#[derive(Debug, Error)]
pub enum CalendarError {
    /// No time schedule could be resolved, not even the default
    #[error("unknown time schedule: {0}")]
    UnknownTimeSchedule(String),

    /// The scheduling service failed
    #[error("calendar service error: {0}")]
    Service(String),
}

/// Fallback names used when a request leaves them out
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDefaults {
    /// Time schedule used when none is requested or the requested one is unknown
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_schedule: Option<String>,
    /// Holiday schedule used likewise; `None` means the service's own default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub holiday_schedule: Option<String>,
    /// Time zone used when none is requested
    #[serde(default = "default_time_zone")]
    pub time_zone: String,
}

fn default_time_zone() -> String {
    "Europe/Amsterdam".to_string()
}

impl Default for CalendarDefaults {
    fn default() -> Self {
        Self {
            time_schedule: None,
            holiday_schedule: None,
            time_zone: default_time_zone(),
        }
    }
}

/// A request for the business date `days` working days after `start`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessDateRequest {
    /// Date to count from
    pub start: DateTime<Utc>,
    /// Number of business days to add
    pub days: i64,
    /// Requested time schedule name
    pub time_schedule: Option<String>,
    /// Requested holiday schedule name
    pub holiday_schedule: Option<String>,
    /// Requested time zone
    pub time_zone: Option<String>,
}

impl BusinessDateRequest {
    /// Request with every schedule left to the defaults
    #[must_use]
    pub const fn new(start: DateTime<Utc>, days: i64) -> Self {
        Self {
            start,
            days,
            time_schedule: None,
            holiday_schedule: None,
            time_zone: None,
        }
    }
}

/// Fully resolved schedule handed to the calendar service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkSchedule {
    /// Time schedule name
    pub time_schedule: String,
    /// Holiday schedule name; `None` selects the service default
    pub holiday_schedule: Option<String>,
    /// Time zone name
    pub time_zone: String,
}

/// The host's business calendar
pub trait BusinessCalendar: Send + Sync {
    /// Whether a time schedule with this name exists
    fn has_time_schedule(&self, name: &str) -> bool;

    /// Whether a holiday schedule with this name exists
    fn has_holiday_schedule(&self, name: &str) -> bool;

    /// Add `days` business days to `start` under `schedule`
    fn add_business_days(
        &self,
        start: DateTime<Utc>,
        days: i64,
        schedule: &WorkSchedule,
    ) -> Result<DateTime<Utc>, CalendarError>;

    /// Resolve the schedule for `request`
    ///
    /// A requested name is used only if the calendar knows it; otherwise the
    /// default applies. An empty time zone counts as missing.
    fn resolve(
        &self,
        request: &BusinessDateRequest,
        defaults: &CalendarDefaults,
    ) -> Result<WorkSchedule, CalendarError> {
        let time_schedule = request
            .time_schedule
            .as_deref()
            .filter(|name| self.has_time_schedule(name))
            .or(defaults.time_schedule.as_deref())
            .ok_or_else(|| {
                CalendarError::UnknownTimeSchedule(
                    request.time_schedule.clone().unwrap_or_default(),
                )
            })?
            .to_string();

        let holiday_schedule = request
            .holiday_schedule
            .as_deref()
            .filter(|name| self.has_holiday_schedule(name))
            .or(defaults.holiday_schedule.as_deref())
            .map(String::from);

        let time_zone = request
            .time_zone
            .as_deref()
            .filter(|tz| !tz.is_empty())
            .unwrap_or(&defaults.time_zone)
            .to_string();

        debug!("resolved schedule {time_schedule} / {holiday_schedule:?} / {time_zone}");
        Ok(WorkSchedule {
            time_schedule,
            holiday_schedule,
            time_zone,
        })
    }

    /// Business date for `request`, resolving schedules first
    fn business_date(
        &self,
        request: &BusinessDateRequest,
        defaults: &CalendarDefaults,
    ) -> Result<DateTime<Utc>, CalendarError> {
        let schedule = self.resolve(request, defaults)?;
        self.add_business_days(request.start, request.days, &schedule)
    }
}
