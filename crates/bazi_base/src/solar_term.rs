//! Approximate solar terms (jie qi) used to delimit solar months.
//!
//! Only the 12 "jie" terms that open a month are needed. Each is given as a
//! fixed calendar-day range covering the dates it falls on in practice. A
//! date inside a range takes that term's ordinal; other dates keep their
//! civil month number. No orbital computation is involved.

use serde::{Deserialize, Serialize};

/// The 12 month-opening solar terms, starting from Lichun.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SolarTerm {
    Lichun,
    Jingzhe,
    Qingming,
    Lixia,
    Mangzhong,
    Xiaoshu,
    Liqiu,
    Bailu,
    Hanlu,
    Lidong,
    Daxue,
    Xiaohan,
}

/// All 12 terms in solar-month order (index 0 = Lichun).
pub const ALL_SOLAR_TERMS: [SolarTerm; 12] = [
    SolarTerm::Lichun,
    SolarTerm::Jingzhe,
    SolarTerm::Qingming,
    SolarTerm::Lixia,
    SolarTerm::Mangzhong,
    SolarTerm::Xiaoshu,
    SolarTerm::Liqiu,
    SolarTerm::Bailu,
    SolarTerm::Hanlu,
    SolarTerm::Lidong,
    SolarTerm::Daxue,
    SolarTerm::Xiaohan,
];

/// Calendar window of a term: Gregorian month and inclusive day range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermWindow {
    pub month: u32,
    pub first_day: u32,
    pub last_day: u32,
}

impl SolarTerm {
    /// Pinyin name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Lichun => "Lichun",
            Self::Jingzhe => "Jingzhe",
            Self::Qingming => "Qingming",
            Self::Lixia => "Lixia",
            Self::Mangzhong => "Mangzhong",
            Self::Xiaoshu => "Xiaoshu",
            Self::Liqiu => "Liqiu",
            Self::Bailu => "Bailu",
            Self::Hanlu => "Hanlu",
            Self::Lidong => "Lidong",
            Self::Daxue => "Daxue",
            Self::Xiaohan => "Xiaohan",
        }
    }

    /// English gloss.
    pub const fn english(self) -> &'static str {
        match self {
            Self::Lichun => "Start of Spring",
            Self::Jingzhe => "Awakening of Insects",
            Self::Qingming => "Clear and Bright",
            Self::Lixia => "Start of Summer",
            Self::Mangzhong => "Grain in Ear",
            Self::Xiaoshu => "Minor Heat",
            Self::Liqiu => "Start of Autumn",
            Self::Bailu => "White Dew",
            Self::Hanlu => "Cold Dew",
            Self::Lidong => "Start of Winter",
            Self::Daxue => "Major Snow",
            Self::Xiaohan => "Minor Cold",
        }
    }

    /// 0-based index (Lichun=0 .. Xiaohan=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Lichun => 0,
            Self::Jingzhe => 1,
            Self::Qingming => 2,
            Self::Lixia => 3,
            Self::Mangzhong => 4,
            Self::Xiaoshu => 5,
            Self::Liqiu => 6,
            Self::Bailu => 7,
            Self::Hanlu => 8,
            Self::Lidong => 9,
            Self::Daxue => 10,
            Self::Xiaohan => 11,
        }
    }

    /// Approximate calendar window.
    pub const fn window(self) -> TermWindow {
        let (month, first_day, last_day) = match self {
            Self::Lichun => (2, 4, 6),
            Self::Jingzhe => (3, 5, 7),
            Self::Qingming => (4, 4, 6),
            Self::Lixia => (5, 5, 7),
            Self::Mangzhong => (6, 5, 7),
            Self::Xiaoshu => (7, 6, 8),
            Self::Liqiu => (8, 7, 9),
            Self::Bailu => (9, 7, 9),
            Self::Hanlu => (10, 8, 10),
            Self::Lidong => (11, 7, 9),
            Self::Daxue => (12, 6, 8),
            Self::Xiaohan => (1, 5, 7),
        };
        TermWindow {
            month,
            first_day,
            last_day,
        }
    }

    /// 1-based solar month this term opens (Lichun=1 .. Xiaohan=12).
    pub const fn solar_month(self) -> u8 {
        self.index() + 1
    }

    /// Term opening a 1-based solar month. Out-of-range values wrap.
    pub const fn from_solar_month(solar_month: u8) -> Self {
        ALL_SOLAR_TERMS[((solar_month + 11) % 12) as usize]
    }
}

/// The solar month index assigned to a calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolarMonthInfo {
    /// Term whose ordinal equals `solar_month`.
    pub term: SolarTerm,
    /// 1-based solar month index (Lichun=1 .. Xiaohan=12).
    pub solar_month: u8,
    /// True when the date lies inside a term's approximate window, i.e. the
    /// month assignment may differ from an exact ephemeris.
    pub near_boundary: bool,
}

/// Assign a solar month index to a Gregorian (month, day).
///
/// A date inside a term's window takes that term's ordinal; every other date
/// keeps its civil month number as the index.
pub fn solar_month_of(month: u32, day: u32) -> SolarMonthInfo {
    let in_window = ALL_SOLAR_TERMS.into_iter().find(|t| {
        let w = t.window();
        w.month == month && (w.first_day..=w.last_day).contains(&day)
    });

    match in_window {
        Some(term) => SolarMonthInfo {
            term,
            solar_month: term.solar_month(),
            near_boundary: true,
        },
        None => {
            let term = SolarTerm::from_solar_month(month as u8);
            SolarMonthInfo {
                term,
                solar_month: term.solar_month(),
                near_boundary: false,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, t) in ALL_SOLAR_TERMS.iter().enumerate() {
            assert_eq!(t.index() as usize, i);
        }
    }

    #[test]
    fn windows_are_ordered() {
        for t in ALL_SOLAR_TERMS {
            let w = t.window();
            assert!(w.first_day <= w.last_day);
            assert!((1..=12).contains(&w.month));
        }
    }

    #[test]
    fn lichun_window_is_month_one() {
        for day in 4..=6 {
            let info = solar_month_of(2, day);
            assert_eq!(info.term, SolarTerm::Lichun);
            assert_eq!(info.solar_month, 1);
            assert!(info.near_boundary);
        }
    }

    #[test]
    fn outside_windows_keeps_civil_month() {
        let info = solar_month_of(1, 1);
        assert_eq!(info.solar_month, 1);
        assert!(!info.near_boundary);
        assert_eq!(solar_month_of(2, 3).solar_month, 2);
        assert_eq!(solar_month_of(2, 15).solar_month, 2);
        assert_eq!(solar_month_of(7, 31).solar_month, 7);
        assert_eq!(solar_month_of(12, 31).solar_month, 12);
        for month in 1..=12 {
            assert_eq!(solar_month_of(month, 20).solar_month as u32, month);
        }
    }

    #[test]
    fn xiaohan_window_is_month_twelve() {
        let info = solar_month_of(1, 6);
        assert_eq!(info.term, SolarTerm::Xiaohan);
        assert_eq!(info.solar_month, 12);
        assert!(info.near_boundary);
        assert_eq!(solar_month_of(1, 8).solar_month, 1);
    }

    #[test]
    fn window_ordinals() {
        assert_eq!(solar_month_of(3, 6).solar_month, 2);
        assert_eq!(solar_month_of(7, 8).solar_month, 6);
        assert_eq!(solar_month_of(10, 8).term, SolarTerm::Hanlu);
        assert_eq!(solar_month_of(12, 7).solar_month, 11);
        assert_eq!(solar_month_of(6, 4).solar_month, 6);
    }

    #[test]
    fn from_solar_month_round_trip() {
        for t in ALL_SOLAR_TERMS {
            assert_eq!(SolarTerm::from_solar_month(t.solar_month()), t);
        }
        assert_eq!(SolarTerm::from_solar_month(0), SolarTerm::Xiaohan);
    }
}
