//! Birth input validation and normalization to the reference timezone.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{TimeError, UnrecognizedTimezone};
use crate::timezone::{REFERENCE_OFFSET, REFERENCE_TIMEZONE, offset_or_default};

/// Epoch for day counting: 1900-01-01 (proleptic Gregorian).
pub const DAY_EPOCH: (i32, u32, u32) = (1900, 1, 1);

/// Raw birth data as entered by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthInput {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub hour_unknown: bool,
    pub timezone: String,
}

impl BirthInput {
    /// Birth with a known time of day.
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, timezone: &str) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            hour_unknown: false,
            timezone: timezone.to_string(),
        }
    }

    /// Birth with an unknown time of day.
    pub fn date_only(year: i32, month: u32, day: u32, timezone: &str) -> Self {
        Self {
            year,
            month,
            day,
            hour: 0,
            minute: 0,
            hour_unknown: true,
            timezone: timezone.to_string(),
        }
    }

    /// Same birth, interpreted in the reference timezone.
    pub fn in_reference_timezone(mut self) -> Self {
        self.timezone = REFERENCE_TIMEZONE.to_string();
        self
    }

    /// Validate the civil date and, when known, the time of day.
    pub fn validate(&self) -> Result<(), TimeError> {
        civil_date(self.year, self.month, self.day)?;
        if !self.hour_unknown {
            civil_time(self.hour, self.minute)?;
        }
        Ok(())
    }

    /// Shift the local timestamp into the reference timezone.
    ///
    /// With an unknown hour there is nothing to shift: the civil date is
    /// kept as entered.
    pub fn normalize(&self) -> Result<NormalizedBirth, TimeError> {
        let date = civil_date(self.year, self.month, self.day)?;
        let (offset, timezone_fallback) = offset_or_default(&self.timezone);

        if self.hour_unknown {
            return Ok(NormalizedBirth {
                date,
                time: None,
                timezone_fallback,
            });
        }

        let time = civil_time(self.hour, self.minute)?;
        let shift = Duration::minutes((REFERENCE_OFFSET.minutes_east - offset.minutes_east) as i64);
        let shifted = NaiveDateTime::new(date, time)
            .checked_add_signed(shift)
            .ok_or(TimeError::InvalidCalendarDate {
                year: self.year,
                month: self.month,
                day: self.day,
            })?;
        Ok(NormalizedBirth {
            date: shifted.date(),
            time: Some(shifted.time()),
            timezone_fallback,
        })
    }
}

/// A birth moment expressed in the reference timezone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedBirth {
    pub date: NaiveDate,
    /// `None` when the birth time is unknown.
    pub time: Option<NaiveTime>,
    /// Set when the source timezone was not recognized and the default
    /// offset was applied.
    pub timezone_fallback: Option<UnrecognizedTimezone>,
}

/// Validate a proleptic Gregorian date.
pub fn civil_date(year: i32, month: u32, day: u32) -> Result<NaiveDate, TimeError> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(TimeError::InvalidCalendarDate { year, month, day })
}

/// Validate an hour (0..=23) and minute (0..=59).
pub fn civil_time(hour: u32, minute: u32) -> Result<NaiveTime, TimeError> {
    NaiveTime::from_hms_opt(hour, minute, 0).ok_or(TimeError::InvalidTimeOfDay { hour, minute })
}

/// Whole days from [`DAY_EPOCH`] to `date` (negative before the epoch).
pub fn day_number(date: NaiveDate) -> i64 {
    let (y, m, d) = DAY_EPOCH;
    // The epoch is a fixed valid date; from_ymd_opt cannot fail here.
    let epoch = NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN);
    date.signed_duration_since(epoch).num_days()
}
