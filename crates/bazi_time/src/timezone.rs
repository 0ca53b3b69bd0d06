//! Static timezone-offset table.
//!
//! Birth times are normalized to the reference timezone (China Standard
//! Time, UTC+08:00) before any pillar is derived. Offsets are fixed
//! standard-time values; daylight saving is not modelled.

use serde::{Deserialize, Serialize};

use crate::error::UnrecognizedTimezone;

/// Fixed offset from UTC, in minutes east.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TzOffset {
    pub minutes_east: i32,
}

impl TzOffset {
    pub const fn from_minutes(minutes_east: i32) -> Self {
        Self { minutes_east }
    }

    pub const fn from_hours(hours_east: i32) -> Self {
        Self {
            minutes_east: hours_east * 60,
        }
    }
}

impl std::fmt::Display for TzOffset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.minutes_east < 0 { '-' } else { '+' };
        let abs = self.minutes_east.abs();
        write!(f, "UTC{sign}{:02}:{:02}", abs / 60, abs % 60)
    }
}

/// Identifier of the reference timezone.
pub const REFERENCE_TIMEZONE: &str = "Asia/Shanghai";

/// Offset of the reference timezone.
pub const REFERENCE_OFFSET: TzOffset = TzOffset::from_hours(8);

/// Offset substituted for identifiers missing from the table.
pub const DEFAULT_OFFSET: TzOffset = REFERENCE_OFFSET;

/// Known identifiers and their standard-time offsets.
const TIMEZONE_TABLE: [(&str, i32); 32] = [
    ("Asia/Shanghai", 480),
    ("Asia/Chongqing", 480),
    ("Asia/Harbin", 480),
    ("Asia/Urumqi", 360),
    ("Asia/Hong_Kong", 480),
    ("Asia/Macau", 480),
    ("Asia/Taipei", 480),
    ("Asia/Singapore", 480),
    ("Asia/Kuala_Lumpur", 480),
    ("Asia/Manila", 480),
    ("Asia/Tokyo", 540),
    ("Asia/Seoul", 540),
    ("Asia/Bangkok", 420),
    ("Asia/Jakarta", 420),
    ("Asia/Ho_Chi_Minh", 420),
    ("Asia/Kolkata", 330),
    ("Asia/Dubai", 240),
    ("Europe/Moscow", 180),
    ("Europe/Berlin", 60),
    ("Europe/Paris", 60),
    ("Europe/London", 0),
    ("UTC", 0),
    ("Etc/UTC", 0),
    ("GMT", 0),
    ("America/Sao_Paulo", -180),
    ("America/New_York", -300),
    ("America/Toronto", -300),
    ("America/Chicago", -360),
    ("America/Denver", -420),
    ("America/Los_Angeles", -480),
    ("America/Vancouver", -480),
    ("Australia/Sydney", 600),
];

/// Look up the offset for a timezone identifier.
///
/// Accepts table identifiers and fixed-offset forms `UTC+8`, `GMT-05:30`.
/// Anything else is [`UnrecognizedTimezone`]; use [`offset_or_default`] to
/// apply the fallback.
pub fn lookup_offset(id: &str) -> Result<TzOffset, UnrecognizedTimezone> {
    let id = id.trim();
    if let Some((_, minutes)) = TIMEZONE_TABLE.iter().find(|(name, _)| *name == id) {
        return Ok(TzOffset::from_minutes(*minutes));
    }
    parse_fixed_offset(id).ok_or_else(|| UnrecognizedTimezone(id.to_string()))
}

/// Resolve an identifier, falling back to [`DEFAULT_OFFSET`].
///
/// The second element carries the lookup failure when the fallback was taken.
pub fn offset_or_default(id: &str) -> (TzOffset, Option<UnrecognizedTimezone>) {
    match lookup_offset(id) {
        Ok(offset) => (offset, None),
        Err(e) => (DEFAULT_OFFSET, Some(e)),
    }
}

/// Table identifiers, in table order.
pub fn known_timezones() -> impl Iterator<Item = &'static str> {
    TIMEZONE_TABLE.iter().map(|(name, _)| *name)
}

fn parse_fixed_offset(id: &str) -> Option<TzOffset> {
    let rest = id.strip_prefix("UTC").or_else(|| id.strip_prefix("GMT"))?;
    let (sign, body) = match rest.as_bytes().first()? {
        b'+' => (1, &rest[1..]),
        b'-' => (-1, &rest[1..]),
        _ => return None,
    };
    if !body.bytes().all(|b| b.is_ascii_digit() || b == b':') {
        return None;
    }
    let (h, m) = match body.split_once(':') {
        Some((h, m)) => (h.parse::<i32>().ok()?, m.parse::<i32>().ok()?),
        None => (body.parse::<i32>().ok()?, 0),
    };
    if !(0..=14).contains(&h) || !(0..60).contains(&m) {
        return None;
    }
    Some(TzOffset::from_minutes(sign * (h * 60 + m)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_is_utc_plus_8() {
        assert_eq!(lookup_offset(REFERENCE_TIMEZONE), Ok(REFERENCE_OFFSET));
        assert_eq!(REFERENCE_OFFSET.minutes_east, 480);
    }

    #[test]
    fn table_lookup() {
        assert_eq!(lookup_offset("Asia/Tokyo").unwrap().minutes_east, 540);
        assert_eq!(lookup_offset("Asia/Kolkata").unwrap().minutes_east, 330);
        assert_eq!(lookup_offset("America/New_York").unwrap().minutes_east, -300);
    }

    #[test]
    fn fixed_offsets() {
        assert_eq!(lookup_offset("UTC+8").unwrap().minutes_east, 480);
        assert_eq!(lookup_offset("GMT-05:30").unwrap().minutes_east, -330);
        assert_eq!(lookup_offset("UTC+00:00").unwrap().minutes_east, 0);
    }

    #[test]
    fn malformed_fixed_offsets_rejected() {
        assert!(lookup_offset("UTC8").is_err());
        assert!(lookup_offset("UTC+15").is_err());
        assert!(lookup_offset("GMT+3:75").is_err());
    }

    #[test]
    fn repeated_sign_rejected() {
        for id in ["UTC++5", "GMT+-3", "UTC-+05:30", "UTC+5:+30", "UTC+ 5"] {
            assert!(lookup_offset(id).is_err(), "{id}");
        }
        assert_eq!(lookup_offset("UTC+5").unwrap().minutes_east, 300);
    }

    #[test]
    fn unknown_falls_back() {
        let (offset, fallback) = offset_or_default("Mars/Olympus_Mons");
        assert_eq!(offset, DEFAULT_OFFSET);
        assert_eq!(fallback, Some(UnrecognizedTimezone("Mars/Olympus_Mons".into())));
    }

    #[test]
    fn known_has_no_fallback() {
        let (offset, fallback) = offset_or_default("Europe/London");
        assert_eq!(offset.minutes_east, 0);
        assert!(fallback.is_none());
    }

    #[test]
    fn display_offset() {
        assert_eq!(TzOffset::from_minutes(330).to_string(), "UTC+05:30");
        assert_eq!(TzOffset::from_minutes(-480).to_string(), "UTC-08:00");
    }

    #[test]
    fn table_names_unique() {
        let names: Vec<_> = known_timezones().collect();
        for (i, a) in names.iter().enumerate() {
            assert!(!names[i + 1..].contains(a), "duplicate {a}");
        }
    }
}
