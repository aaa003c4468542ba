//! Core helpers with no I/O dependencies
//!
//! ## Layout
//!
//! - `checksum/` - eleven-test validation and generation of identifiers
//! - `convert` - string, number and name/value pair conversions
//! - `strings` - trimming, capitalisation, UTF-8 and diacritic helpers
//! - `validation` - generic predicates over loosely typed input
//! - `dates` - date arithmetic and comparisons against an explicit "now"
//! - `ports/` - traits for services only the host can provide

pub mod checksum;
pub mod convert;
pub mod dates;
pub mod ports;
pub mod strings;
pub mod validation;
