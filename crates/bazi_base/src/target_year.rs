//! Target-year interaction: how the year's element meets the day master.
//!
//! A fixed decision table maps (relation, balance) to a category; the
//! strength starts from the category's base and shifts by how heavily the
//! chart already carries the target element.

use serde::{Deserialize, Serialize};

use crate::balance::BalanceCategory;
use crate::calculator::year_pillar;
use crate::distribution::ElementMap;
use crate::element::{Element, PhaseRelation, phase_relation};
use crate::pillar::Pillar;

/// Default target year (Bing-Wu).
pub const DEFAULT_TARGET_YEAR: i32 = 2026;

/// Strength bounds.
pub const MIN_STRENGTH: u8 = 30;
pub const MAX_STRENGTH: u8 = 95;

/// The year being forecast and its pillar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetYear {
    pub year: i32,
    pub pillar: Pillar,
}

impl TargetYear {
    pub const fn new(year: i32) -> Self {
        Self {
            year,
            pillar: year_pillar(year),
        }
    }

    /// Element of the year's stem.
    pub const fn element(&self) -> Element {
        self.pillar.stem.element()
    }
}

impl Default for TargetYear {
    fn default() -> Self {
        Self::new(DEFAULT_TARGET_YEAR)
    }
}

/// Relation of the target year's element to the day master's element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum YearRelation {
    Same,
    TargetGeneratesDay,
    DayGeneratesTarget,
    TargetControlsDay,
    DayControlsTarget,
}

/// All 5 relations in decision-table row order.
pub const ALL_YEAR_RELATIONS: [YearRelation; 5] = [
    YearRelation::Same,
    YearRelation::TargetGeneratesDay,
    YearRelation::DayGeneratesTarget,
    YearRelation::TargetControlsDay,
    YearRelation::DayControlsTarget,
];

impl YearRelation {
    /// Relation seen from the day master's side.
    pub const fn between(day: Element, target: Element) -> Self {
        match phase_relation(day, target) {
            PhaseRelation::Same => Self::Same,
            PhaseRelation::GeneratedBy => Self::TargetGeneratesDay,
            PhaseRelation::Generates => Self::DayGeneratesTarget,
            PhaseRelation::ControlledBy => Self::TargetControlsDay,
            PhaseRelation::Controls => Self::DayControlsTarget,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Same => "Same",
            Self::TargetGeneratesDay => "TargetGeneratesDay",
            Self::DayGeneratesTarget => "DayGeneratesTarget",
            Self::TargetControlsDay => "TargetControlsDay",
            Self::DayControlsTarget => "DayControlsTarget",
        }
    }
}

/// Qualitative outcome of the target year for the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InteractionCategory {
    StrongBoost,
    Boost,
    Opportunity,
    Drain,
    Challenge,
    Pressure,
}

pub const ALL_INTERACTION_CATEGORIES: [InteractionCategory; 6] = [
    InteractionCategory::StrongBoost,
    InteractionCategory::Boost,
    InteractionCategory::Opportunity,
    InteractionCategory::Drain,
    InteractionCategory::Challenge,
    InteractionCategory::Pressure,
];

impl InteractionCategory {
    pub const fn name(self) -> &'static str {
        match self {
            Self::StrongBoost => "Strong Boost",
            Self::Boost => "Boost",
            Self::Opportunity => "Opportunity",
            Self::Drain => "Drain",
            Self::Challenge => "Challenge",
            Self::Pressure => "Pressure",
        }
    }

    /// Strength before the weight shift.
    pub const fn base_strength(self) -> i32 {
        match self {
            Self::StrongBoost => 85,
            Self::Boost => 75,
            Self::Opportunity => 70,
            Self::Drain => 55,
            Self::Challenge => 50,
            Self::Pressure => 45,
        }
    }

    /// StrongBoost, Boost and Opportunity are supportive; the rest adverse.
    pub const fn is_supportive(self) -> bool {
        matches!(self, Self::StrongBoost | Self::Boost | Self::Opportunity)
    }
}

impl std::fmt::Display for InteractionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Decision table: relation x balance.
pub const fn interaction_category(
    relation: YearRelation,
    balance: BalanceCategory,
) -> InteractionCategory {
    use BalanceCategory as B;
    use InteractionCategory as C;
    use YearRelation as R;
    match (relation, balance) {
        (R::Same, B::CriticallyDeficient | B::Diminished) => C::StrongBoost,
        (R::Same, B::Balanced | B::Elevated) => C::Boost,
        (R::Same, B::CriticallyExcessive) => C::Opportunity,

        (R::TargetGeneratesDay, B::CriticallyDeficient | B::Diminished) => C::StrongBoost,
        (R::TargetGeneratesDay, B::Balanced) => C::Boost,
        (R::TargetGeneratesDay, B::Elevated | B::CriticallyExcessive) => C::Opportunity,

        (R::DayGeneratesTarget, B::CriticallyDeficient) => C::Challenge,
        (R::DayGeneratesTarget, B::Diminished | B::Balanced) => C::Drain,
        (R::DayGeneratesTarget, B::Elevated | B::CriticallyExcessive) => C::Opportunity,

        (R::TargetControlsDay, B::CriticallyDeficient) => C::Challenge,
        (R::TargetControlsDay, B::Diminished | B::Balanced) => C::Pressure,
        (R::TargetControlsDay, B::Elevated | B::CriticallyExcessive) => C::Opportunity,

        (R::DayControlsTarget, B::CriticallyDeficient | B::Diminished) => C::Challenge,
        (R::DayControlsTarget, _) => C::Opportunity,
    }
}

/// Shift from the ratio of the target element's weight to the average.
pub fn strength_shift(ratio: f64) -> i32 {
    if ratio >= 1.5 {
        10
    } else if ratio > 1.0 {
        5
    } else if ratio == 1.0 {
        0
    } else if ratio > 0.5 {
        -5
    } else {
        -10
    }
}

/// Result of scoring the target year against a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetYearInteraction {
    pub target_year: i32,
    pub target_element: Element,
    pub relation: YearRelation,
    pub category: InteractionCategory,
    /// In `[MIN_STRENGTH, MAX_STRENGTH]`.
    pub strength: u8,
}

/// Score the interaction between the chart and the target year.
///
/// A chart with zero total weight is treated as carrying the target element
/// at exactly the average.
pub fn score_target_year_interaction(
    day_element: Element,
    distribution: &ElementMap,
    balance: BalanceCategory,
    target: &TargetYear,
) -> TargetYearInteraction {
    let target_element = target.element();
    let relation = YearRelation::between(day_element, target_element);
    let category = interaction_category(relation, balance);

    let avg = distribution.mean();
    let ratio = if avg > 0.0 {
        distribution.get(target_element) / avg
    } else {
        1.0
    };
    let shift = strength_shift(ratio);
    let raw = if category.is_supportive() {
        category.base_strength() + shift
    } else {
        category.base_strength() - shift
    };
    let strength = raw.clamp(i32::from(MIN_STRENGTH), i32::from(MAX_STRENGTH)) as u8;

    TargetYearInteraction {
        target_year: target.year,
        target_element,
        relation,
        category,
        strength,
    }
}
