//! Error types for chart derivation.

use std::error::Error;
use std::fmt::{Display, Formatter};

use bazi_time::TimeError;

/// Errors from chart derivation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ChartError {
    /// Birth date or time failed validation.
    Time(TimeError),
    /// Balance thresholds violate their ordering constraints.
    InvalidThresholds(&'static str),
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::InvalidThresholds(msg) => write!(f, "invalid balance thresholds: {msg}"),
        }
    }
}

impl Error for ChartError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Time(e) => Some(e),
            Self::InvalidThresholds(_) => None,
        }
    }
}

impl From<TimeError> for ChartError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_wraps_time_error() {
        let e = ChartError::from(TimeError::InvalidTimeOfDay {
            hour: 24,
            minute: 0,
        });
        assert_eq!(e.to_string(), "time error: invalid time of day: 24:00");
        assert!(e.source().is_some());
    }

    #[test]
    fn display_thresholds() {
        let e = ChartError::InvalidThresholds("elevated_ratio must exceed 1");
        assert!(e.to_string().contains("elevated_ratio"));
    }
}
