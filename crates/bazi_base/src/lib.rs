//! Four-pillar chart derivation built on normalized birth times.
//!
//! This crate provides:
//! - Stem, branch, hidden-stem and solar-term tables
//! - The pillar calculator (year, month, day, hour)
//! - Element aggregation and balance classification
//! - Ten-god ranking against the day master
//! - Favorable/unfavorable element resolution
//! - Target-year interaction scoring
//!
//! Everything here is pure and deterministic: no I/O, no clocks, no
//! randomness.

pub mod balance;
pub mod branch;
pub mod calculator;
pub mod chart;
pub mod distribution;
pub mod element;
pub mod error;
pub mod favorability;
pub mod pillar;
pub mod solar_term;
pub mod stem;
pub mod target_year;
pub mod ten_god;

pub use balance::{
    ALL_BALANCE_CATEGORIES, BalanceCategory, BalanceThresholds, DistributionStats,
    classify_balance, classify_balance_with, distribution_stats,
};
pub use branch::{ALL_BRANCHES, Branch, HiddenRank, HiddenStem};
pub use calculator::{
    PillarChart, compute_pillars, day_pillar, hour_branch, hour_pillar, month_pillar, year_pillar,
};
pub use chart::{ChartOptions, ChartProfile, build_chart_profile, profile_from_pillars};
pub use distribution::{ElementMap, element_distribution};
pub use element::{ALL_ELEMENTS, Element, PhaseRelation, Polarity, phase_relation};
pub use error::ChartError;
pub use favorability::{Favorability, resolve_favorability};
pub use pillar::{Pillar, PillarPosition, Pillars};
pub use solar_term::{ALL_SOLAR_TERMS, SolarMonthInfo, SolarTerm, solar_month_of};
pub use stem::{ALL_STEMS, Stem};
pub use target_year::{
    ALL_INTERACTION_CATEGORIES, ALL_YEAR_RELATIONS, DEFAULT_TARGET_YEAR, InteractionCategory,
    TargetYear, TargetYearInteraction, YearRelation, interaction_category,
    score_target_year_interaction,
};
pub use ten_god::{ALL_TEN_GODS, RelationWeight, TenGod, rank_relations, ten_god};
