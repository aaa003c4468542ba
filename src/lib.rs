//! elfproef - eleven-test validation and generation of BSN identifiers
//!
//! The checksum core lives in [`crate::core::checksum`]. Around it sit the small
//! helpers process scripts lean on: string, date and validation utilities,
//! log message formatting and random test data.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod core;
pub mod datagen;
pub mod logging;
pub mod output;
pub mod paths;

pub use crate::core::checksum::{Bsn, BsnError, generate, validate};
