//! Chart composition: the full derivation pipeline in one call.

use bazi_time::BirthInput;
use serde::{Deserialize, Serialize};

use crate::balance::{BalanceCategory, BalanceThresholds, classify_balance_with};
use crate::branch::Branch;
use crate::calculator::{PillarChart, compute_pillars};
use crate::distribution::{ElementMap, element_distribution};
use crate::element::Element;
use crate::error::ChartError;
use crate::favorability::resolve_favorability;
use crate::pillar::Pillars;
use crate::stem::Stem;
use crate::target_year::{TargetYear, TargetYearInteraction, score_target_year_interaction};
use crate::ten_god::{RelationWeight, rank_relations};

/// Tunables for [`build_chart_profile`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ChartOptions {
    pub target_year: TargetYear,
    pub thresholds: BalanceThresholds,
}

impl ChartOptions {
    pub fn for_year(year: i32) -> Self {
        Self {
            target_year: TargetYear::new(year),
            ..Self::default()
        }
    }
}

/// Every derived fact about a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartProfile {
    pub pillars: Pillars,
    /// The day master.
    pub day_stem: Stem,
    pub element_distribution: ElementMap,
    pub balance: BalanceCategory,
    /// At most three, heaviest first.
    pub top_relations: Vec<RelationWeight>,
    pub favorable: Vec<Element>,
    pub unfavorable: Vec<Element>,
    pub target_year_interaction: TargetYearInteraction,
}

impl ChartProfile {
    pub const fn day_element(&self) -> Element {
        self.day_stem.element()
    }

    pub const fn day_branch(&self) -> Branch {
        self.pillars.day.branch
    }

    pub const fn hour_known(&self) -> bool {
        self.pillars.hour.is_some()
    }
}

/// Derive a profile from already computed pillars.
pub fn profile_from_pillars(
    chart: &PillarChart,
    options: &ChartOptions,
) -> Result<ChartProfile, ChartError> {
    options.thresholds.validate()?;

    let pillars = chart.pillars;
    let day_stem = chart.day_stem;
    let day_element = day_stem.element();

    let element_distribution = element_distribution(&pillars);
    let balance = classify_balance_with(&element_distribution, &options.thresholds);
    let top_relations = rank_relations(&pillars, day_stem);
    let fav = resolve_favorability(day_element, balance);
    let target_year_interaction = score_target_year_interaction(
        day_element,
        &element_distribution,
        balance,
        &options.target_year,
    );

    Ok(ChartProfile {
        pillars,
        day_stem,
        element_distribution,
        balance,
        top_relations,
        favorable: fav.favorable,
        unfavorable: fav.unfavorable,
        target_year_interaction,
    })
}

/// Compute pillars and derive the full profile.
pub fn build_chart_profile(
    birth: &BirthInput,
    options: &ChartOptions,
) -> Result<ChartProfile, ChartError> {
    let chart = compute_pillars(birth)?;
    profile_from_pillars(&chart, options)
}
