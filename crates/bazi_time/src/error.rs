//! Error types for civil date/time handling.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from birth date/time validation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TimeError {
    /// The year/month/day combination does not exist (e.g. Feb 30).
    InvalidCalendarDate { year: i32, month: u32, day: u32 },
    /// Hour or minute out of range while the birth time is marked known.
    InvalidTimeOfDay { hour: u32, minute: u32 },
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCalendarDate { year, month, day } => {
                write!(f, "invalid calendar date: {year:04}-{month:02}-{day:02}")
            }
            Self::InvalidTimeOfDay { hour, minute } => {
                write!(f, "invalid time of day: {hour:02}:{minute:02}")
            }
        }
    }
}

impl Error for TimeError {}

/// A timezone identifier missing from the offset table.
///
/// Not fatal: callers fall back to [`DEFAULT_OFFSET`](crate::DEFAULT_OFFSET)
/// and may surface this as a warning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnrecognizedTimezone(pub String);

impl Display for UnrecognizedTimezone {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unrecognized timezone: {:?}", self.0)
    }
}

impl Error for UnrecognizedTimezone {}
