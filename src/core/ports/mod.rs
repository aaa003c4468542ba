//! Port traits for external services
//!
//! The helpers in `core` never talk to the process engine directly. Where a
//! helper needs something only the host environment can answer, it goes
//! through a trait defined here, and the host (or a test) supplies the
//! implementation.

mod calendar;

pub use calendar::{
    BusinessCalendar, BusinessDateRequest, CalendarDefaults, CalendarError, WorkSchedule,
};
