//! Unified error type for the facade.

use std::error::Error;
use std::fmt::{Display, Formatter};

use bazi_base::ChartError;
use bazi_config::ConfigError;
use bazi_report::ContextError;
use bazi_store::StoreError;
use bazi_time::TimeError;

/// Any failure surfaced by [`FortuneService`](crate::FortuneService).
#[derive(Debug)]
#[non_exhaustive]
pub enum BaziError {
    Time(TimeError),
    Chart(ChartError),
    Context(ContextError),
    Store(StoreError),
    Config(ConfigError),
    /// Birth year precedes the configured minimum.
    BirthYearTooEarly { year: i32, min: i32 },
    /// Birth year lies after the current year.
    BirthYearInFuture { year: i32, current: i32 },
}

impl Display for BaziError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Time(e) => write!(f, "{e}"),
            Self::Chart(e) => write!(f, "{e}"),
            Self::Context(e) => write!(f, "{e}"),
            Self::Store(e) => write!(f, "{e}"),
            Self::Config(e) => write!(f, "{e}"),
            Self::BirthYearTooEarly { year, min } => {
                write!(f, "birth year {year} is before the earliest supported year {min}")
            }
            Self::BirthYearInFuture { year, current } => {
                write!(f, "birth year {year} is after the current year {current}")
            }
        }
    }
}

impl Error for BaziError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Time(e) => Some(e),
            Self::Chart(e) => Some(e),
            Self::Context(e) => Some(e),
            Self::Store(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::BirthYearTooEarly { .. } | Self::BirthYearInFuture { .. } => None,
        }
    }
}

impl From<TimeError> for BaziError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}

impl From<ChartError> for BaziError {
    fn from(e: ChartError) -> Self {
        Self::Chart(e)
    }
}

impl From<ContextError> for BaziError {
    fn from(e: ContextError) -> Self {
        Self::Context(e)
    }
}

impl From<StoreError> for BaziError {
    fn from(e: StoreError) -> Self {
        Self::Store(e)
    }
}

impl From<ConfigError> for BaziError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_birth_year() {
        let e = BaziError::BirthYearTooEarly { year: 1850, min: 1900 };
        assert_eq!(
            e.to_string(),
            "birth year 1850 is before the earliest supported year 1900"
        );
        assert!(e.source().is_none());
    }

    #[test]
    fn wraps_with_source() {
        let e: BaziError = ContextError::EmptySituation.into();
        assert!(e.source().is_some());
    }
}
