//! Fortune report generation on top of a chart profile.
//!
//! This crate provides:
//! - [`UserContext`] validation (focus area, situation, strategy,
//!   avoidances, energy)
//! - The [`Report`] structure (overall, five domains, twelve months, basis)
//! - A deterministic generator whose phrasing choices go through an
//!   injected [`Variation`] source

pub mod context;
pub mod error;
pub mod generator;
pub mod text;
pub mod types;
pub mod variation;

pub use context::{
    ALL_AVOIDANCES, ALL_ENERGY_LEVELS, ALL_FOCUS_AREAS, ALL_STRATEGIES, Avoidance, Energy,
    FocusArea, MAX_AVOIDANCES, Strategy, UserContext,
};
pub use error::ContextError;
pub use generator::{generate_report, month_tag, overall_score};
pub use types::{Basis, DomainReport, MonthReport, MonthTag, Overall, Report, Trend};
pub use variation::{FirstChoice, SeededVariation, Variation, input_seed};
