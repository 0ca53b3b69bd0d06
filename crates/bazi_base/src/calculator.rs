//! Pillar calculator: four stem/branch pairs from a birth timestamp.
//!
//! Year and day pillars come from fixed cycle offsets (no lunar new year,
//! no ephemeris); the month pillar follows the approximate solar-term table.

use bazi_time::{BirthInput, UnrecognizedTimezone, day_number};
use chrono::{Datelike, NaiveDate, Timelike};

use crate::branch::Branch;
use crate::error::ChartError;
use crate::pillar::{Pillar, Pillars};
use crate::solar_term::{SolarMonthInfo, solar_month_of};
use crate::stem::Stem;

/// Year whose pillar is Jia-Zi (cycle position 0).
pub const CYCLE_EPOCH_YEAR: i32 = 4;

/// Cycle position of the day-count epoch 1900-01-01 (Jia-Xu).
pub const DAY_EPOCH_CYCLE: i64 = 10;

/// Pillars plus the calendar facts gathered while computing them.
#[derive(Debug, Clone, PartialEq)]
pub struct PillarChart {
    pub pillars: Pillars,
    pub day_stem: Stem,
    /// Solar month of the normalized birth date.
    pub solar_month: SolarMonthInfo,
    /// Set when the birth timezone fell back to the default offset.
    pub timezone_fallback: Option<UnrecognizedTimezone>,
}

/// Year pillar: `(year - 4)` on both cycles.
pub const fn year_pillar(year: i32) -> Pillar {
    Pillar::from_cycle(year as i64 - CYCLE_EPOCH_YEAR as i64)
}

/// Month pillar from the year stem and a 1-based solar month.
pub const fn month_pillar(year_stem: Stem, solar_month: u8) -> Pillar {
    let sm = solar_month as i64;
    Pillar::new(
        Stem::from_cycle(year_stem.index() as i64 * 2 + sm),
        Branch::from_cycle(sm + 2),
    )
}

/// Day pillar from the day count since 1900-01-01.
pub fn day_pillar(date: NaiveDate) -> Pillar {
    let n = day_number(date);
    Pillar::new(Stem::from_cycle(n), Branch::from_cycle(DAY_EPOCH_CYCLE + n))
}

/// Hour branch: Zi covers 23:00-00:59, then two-hour windows.
pub const fn hour_branch(hour: u32) -> Branch {
    Branch::from_cycle(((hour + 1) / 2) as i64)
}

/// Hour pillar from the day stem and the hour of day.
pub const fn hour_pillar(day_stem: Stem, hour: u32) -> Pillar {
    let branch = hour_branch(hour);
    Pillar::new(
        Stem::from_cycle(day_stem.index() as i64 * 2 + branch.index() as i64),
        branch,
    )
}

/// Compute the four pillars for a birth.
///
/// The local timestamp is first shifted to the reference timezone. With an
/// unknown hour the hour pillar is absent and the date is used as entered.
pub fn compute_pillars(birth: &BirthInput) -> Result<PillarChart, ChartError> {
    let normalized = birth.normalize()?;
    let date = normalized.date;

    let year = year_pillar(date.year());
    let solar_month = solar_month_of(date.month(), date.day());
    let month = month_pillar(year.stem, solar_month.solar_month);
    let day = day_pillar(date);
    let hour = normalized.time.map(|t| hour_pillar(day.stem, t.hour()));

    Ok(PillarChart {
        pillars: Pillars {
            year,
            month,
            day,
            hour,
        },
        day_stem: day.stem,
        solar_month,
        timezone_fallback: normalized.timezone_fallback,
    })
}

#[cfg(test)]
mod tests {
    use bazi_time::{REFERENCE_TIMEZONE, TimeError};

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn year_pillar_examples() {
        assert_eq!(year_pillar(1984), Pillar::new(Stem::Jia, Branch::Zi));
        assert_eq!(year_pillar(1990), Pillar::new(Stem::Geng, Branch::Wu));
        assert_eq!(year_pillar(2026), Pillar::new(Stem::Bing, Branch::Wu));
        assert_eq!(year_pillar(4), Pillar::new(Stem::Jia, Branch::Zi));
        assert_eq!(year_pillar(3), Pillar::new(Stem::Gui, Branch::Hai));
    }

    #[test]
    fn month_pillar_formula() {
        assert_eq!(month_pillar(Stem::Geng, 11), Pillar::new(Stem::Ding, Branch::Chou));
        assert_eq!(month_pillar(Stem::Jia, 1), Pillar::new(Stem::Yi, Branch::Mao));
    }

    #[test]
    fn day_pillar_epoch() {
        assert_eq!(day_pillar(date(1900, 1, 1)), Pillar::new(Stem::Jia, Branch::Xu));
        assert_eq!(day_pillar(date(1990, 1, 1)), Pillar::new(Stem::Bing, Branch::Yin));
        assert_eq!(day_pillar(date(2000, 1, 1)), Pillar::new(Stem::Wu, Branch::Wu));
    }

    #[test]
    fn day_pillar_before_epoch_wraps() {
        assert_eq!(day_pillar(date(1899, 12, 31)), Pillar::new(Stem::Gui, Branch::You));
    }

    #[test]
    fn hour_branches() {
        assert_eq!(hour_branch(23), Branch::Zi);
        assert_eq!(hour_branch(0), Branch::Zi);
        assert_eq!(hour_branch(1), Branch::Chou);
        assert_eq!(hour_branch(12), Branch::Wu);
        assert_eq!(hour_branch(22), Branch::Hai);
    }

    #[test]
    fn hour_pillar_stem() {
        assert_eq!(hour_pillar(Stem::Bing, 12), Pillar::new(Stem::Jia, Branch::Wu));
        assert_eq!(hour_pillar(Stem::Wu, 0), Pillar::new(Stem::Ren, Branch::Zi));
    }

    #[test]
    fn compute_reference_scenario() {
        let chart = compute_pillars(&BirthInput::new(1990, 1, 1, 12, 0, REFERENCE_TIMEZONE)).unwrap();
        let p = chart.pillars;
        assert_eq!(p.year.to_string(), "Geng-Wu");
        assert_eq!(p.month.to_string(), "Ding-Mao");
        assert_eq!(p.day.to_string(), "Bing-Yin");
        assert_eq!(p.hour.map(|h| h.to_string()).as_deref(), Some("Jia-Wu"));
        assert_eq!(chart.day_stem, Stem::Bing);
        assert!(chart.timezone_fallback.is_none());
    }

    #[test]
    fn mid_february_uses_civil_month() {
        let chart = compute_pillars(&BirthInput::new(1990, 2, 15, 12, 0, REFERENCE_TIMEZONE)).unwrap();
        assert_eq!(chart.solar_month.solar_month, 2);
        assert!(!chart.solar_month.near_boundary);
        assert_eq!(chart.pillars.month.to_string(), "Wu-Chen");
    }

    #[test]
    fn unknown_hour_has_no_hour_pillar() {
        let chart = compute_pillars(&BirthInput::date_only(1990, 1, 1, REFERENCE_TIMEZONE)).unwrap();
        assert!(chart.pillars.hour.is_none());
        assert_eq!(chart.pillars.day.to_string(), "Bing-Yin");
    }

    #[test]
    fn unknown_hour_ignores_time_fields() {
        let mut birth = BirthInput::date_only(1990, 1, 1, REFERENCE_TIMEZONE);
        birth.hour = 99;
        assert!(compute_pillars(&birth).is_ok());
    }

    #[test]
    fn timezone_shift_can_change_day() {
        // 20:00 UTC on Dec 31 1989 is 04:00 Jan 1 1990 in the reference zone.
        let chart = compute_pillars(&BirthInput::new(1989, 12, 31, 20, 0, "UTC")).unwrap();
        assert_eq!(chart.pillars.year.to_string(), "Geng-Wu");
        assert_eq!(chart.pillars.day.to_string(), "Bing-Yin");
        assert_eq!(chart.pillars.hour.map(|h| h.branch), Some(Branch::Yin));
    }

    #[test]
    fn unrecognized_timezone_falls_back() {
        let chart = compute_pillars(&BirthInput::new(1990, 1, 1, 12, 0, "Mars/Olympus")).unwrap();
        assert!(chart.timezone_fallback.is_some());
        assert_eq!(chart.pillars.day.to_string(), "Bing-Yin");
    }

    #[test]
    fn invalid_date_rejected() {
        let err = compute_pillars(&BirthInput::new(2023, 2, 30, 12, 0, REFERENCE_TIMEZONE)).unwrap_err();
        assert!(matches!(
            err,
            ChartError::Time(TimeError::InvalidCalendarDate { .. })
        ));
    }

    #[test]
    fn shift_past_last_representable_date_is_an_error() {
        let err = compute_pillars(&BirthInput::new(262142, 12, 31, 23, 0, "UTC")).unwrap_err();
        assert!(matches!(
            err,
            ChartError::Time(TimeError::InvalidCalendarDate { year: 262142, .. })
        ));
    }

    #[test]
    fn invalid_time_rejected_when_known() {
        let err = compute_pillars(&BirthInput::new(1990, 1, 1, 24, 0, REFERENCE_TIMEZONE)).unwrap_err();
        assert!(matches!(err, ChartError::Time(TimeError::InvalidTimeOfDay { .. })));
    }
}
