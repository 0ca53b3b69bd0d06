//! Civil calendar handling for four-pillar charts.
//!
//! This crate provides:
//! - Birth input validation (proleptic Gregorian dates, time of day)
//! - A static timezone-offset table with an explicit fallback policy
//! - Normalization of local birth times to the reference timezone (UTC+08:00)
//! - Day counting from the 1900-01-01 epoch

pub mod civil;
pub mod error;
pub mod timezone;

pub use civil::{BirthInput, DAY_EPOCH, NormalizedBirth, civil_date, civil_time, day_number};
pub use error::{TimeError, UnrecognizedTimezone};
pub use timezone::{
    DEFAULT_OFFSET, REFERENCE_OFFSET, REFERENCE_TIMEZONE, TzOffset, known_timezones,
    lookup_offset, offset_or_default,
};
