//! Convenience facade for the bazi chart and report engine.
//!
//! [`FortuneService`] runs the whole pipeline: birth-year checks, pillar
//! computation, chart analysis, seeded report generation, sealing and
//! storage of the latest result.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use bazi_rs::*;
//!
//! let mut service = FortuneService::in_memory(AnalysisConfig::default());
//! let birth = BirthInput::new(1990, 1, 1, 12, 0, "Asia/Shanghai");
//! let context = UserContext::new(
//!     FocusArea::Career,
//!     "Considering a job change",
//!     Strategy::DefendThenAdvance,
//!     vec![Avoidance::Overwork],
//!     Energy::Steady,
//! )?;
//! let record = service.submit(&birth, context)?;
//! println!("{}", record.snapshot.report.overall.headline);
//! ```

pub mod error;
pub mod service;

pub use error::BaziError;
pub use service::FortuneService;

// Re-export the types callers need so `use bazi_rs::*` suffices.
pub use bazi_base::{
    BalanceCategory, BalanceThresholds, Branch, ChartOptions, ChartProfile, Element,
    InteractionCategory, Pillar, PillarChart, PillarPosition, Pillars, SolarTerm, Stem,
    TargetYear, TenGod,
};
pub use bazi_config::AnalysisConfig;
pub use bazi_report::{
    ALL_AVOIDANCES, ALL_ENERGY_LEVELS, ALL_FOCUS_AREAS, ALL_STRATEGIES, Avoidance, Energy,
    FocusArea, MonthTag, Report, Strategy, Trend, UserContext,
};
pub use bazi_store::{
    JsonFileRepository, MemoryRepository, ResultRepository, Snapshot, StoredRecord,
};
pub use bazi_time::{BirthInput, REFERENCE_TIMEZONE};
