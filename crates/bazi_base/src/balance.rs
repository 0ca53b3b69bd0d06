//! Balance classifier: element distribution to a five-step severity scale.
//!
//! Every measure used here is a ratio of weights, so the category is
//! invariant under uniform scaling of the distribution.
//!
//! - `cv = stdDev / avg` gates near-uniform charts to Balanced.
//! - `max / avg` detects concentration (Elevated, CriticallyExcessive).
//! - `lean = (avg / min) / (max / avg)` detects a starved element without
//!   being inflated by a dominant one.

use serde::{Deserialize, Serialize};

use crate::distribution::ElementMap;
use crate::error::ChartError;

/// Ordered severity scale, deficient to excessive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BalanceCategory {
    CriticallyDeficient,
    Diminished,
    Balanced,
    Elevated,
    CriticallyExcessive,
}

/// All 5 categories in ascending order.
pub const ALL_BALANCE_CATEGORIES: [BalanceCategory; 5] = [
    BalanceCategory::CriticallyDeficient,
    BalanceCategory::Diminished,
    BalanceCategory::Balanced,
    BalanceCategory::Elevated,
    BalanceCategory::CriticallyExcessive,
];

impl BalanceCategory {
    pub const fn name(self) -> &'static str {
        match self {
            Self::CriticallyDeficient => "Critically Deficient",
            Self::Diminished => "Diminished",
            Self::Balanced => "Balanced",
            Self::Elevated => "Elevated",
            Self::CriticallyExcessive => "Critically Excessive",
        }
    }

    /// 0-based position on the scale.
    pub const fn index(self) -> u8 {
        match self {
            Self::CriticallyDeficient => 0,
            Self::Diminished => 1,
            Self::Balanced => 2,
            Self::Elevated => 3,
            Self::CriticallyExcessive => 4,
        }
    }

    pub const fn is_excess(self) -> bool {
        matches!(self, Self::Elevated | Self::CriticallyExcessive)
    }

    pub const fn is_deficit(self) -> bool {
        matches!(self, Self::CriticallyDeficient | Self::Diminished)
    }
}

impl std::fmt::Display for BalanceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Tunable cut-offs for [`classify_balance_with`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BalanceThresholds {
    /// `max / avg` at or above which the chart is Elevated.
    pub elevated_ratio: f64,
    /// `max / avg` at or above which the chart is CriticallyExcessive.
    pub excessive_ratio: f64,
    /// `lean` at or above which the chart is Diminished.
    pub diminished_lean: f64,
    /// `lean` at or above which the chart is CriticallyDeficient.
    pub deficient_lean: f64,
    /// Coefficient of variation below which the chart is Balanced outright.
    pub dispersion_floor: f64,
}

impl Default for BalanceThresholds {
    fn default() -> Self {
        Self {
            elevated_ratio: 1.5,
            excessive_ratio: 2.0,
            diminished_lean: 1.3,
            deficient_lean: 2.0,
            dispersion_floor: 0.12,
        }
    }
}

/// Upper bound on `elevated_ratio`. Beyond it the dominant element alone
/// exceeds half the total and raising it could increase `lean`.
pub const MAX_ELEVATED_RATIO: f64 = 2.5;

/// Smallest coefficient of variation a distribution can have while its
/// `lean` reaches `lean_threshold`.
pub fn min_dispersion_for_lean(lean_threshold: f64) -> f64 {
    let a = (5.0 + (25.0 - 16.0 / lean_threshold).sqrt()) / 8.0;
    2.0 * (a - 1.0)
}

impl BalanceThresholds {
    /// Check the ordering constraints that keep the classifier monotone.
    pub fn validate(&self) -> Result<(), ChartError> {
        let all = [
            self.elevated_ratio,
            self.excessive_ratio,
            self.diminished_lean,
            self.deficient_lean,
            self.dispersion_floor,
        ];
        if all.iter().any(|v| !v.is_finite()) {
            return Err(ChartError::InvalidThresholds("thresholds must be finite"));
        }
        if self.elevated_ratio <= 1.0 {
            return Err(ChartError::InvalidThresholds("elevated_ratio must exceed 1"));
        }
        if self.excessive_ratio < self.elevated_ratio {
            return Err(ChartError::InvalidThresholds(
                "excessive_ratio must not be below elevated_ratio",
            ));
        }
        if self.elevated_ratio > MAX_ELEVATED_RATIO {
            return Err(ChartError::InvalidThresholds("elevated_ratio must not exceed 2.5"));
        }
        if self.diminished_lean <= 1.0 {
            return Err(ChartError::InvalidThresholds("diminished_lean must exceed 1"));
        }
        if self.deficient_lean < self.diminished_lean {
            return Err(ChartError::InvalidThresholds(
                "deficient_lean must not be below diminished_lean",
            ));
        }
        if self.dispersion_floor < 0.0 {
            return Err(ChartError::InvalidThresholds("dispersion_floor must be non-negative"));
        }
        if self.dispersion_floor > (self.elevated_ratio - 1.0) / 2.0 {
            return Err(ChartError::InvalidThresholds(
                "dispersion_floor would mask elevated charts",
            ));
        }
        if self.dispersion_floor > min_dispersion_for_lean(self.diminished_lean) {
            return Err(ChartError::InvalidThresholds(
                "dispersion_floor would mask diminished charts",
            ));
        }
        Ok(())
    }
}

/// Summary statistics of a distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistributionStats {
    pub mean: f64,
    pub max: f64,
    pub min: f64,
    /// Population standard deviation.
    pub std_dev: f64,
    /// `std_dev / mean`.
    pub cv: f64,
    /// `max / mean`.
    pub max_ratio: f64,
    /// `mean² / (max · min)`; infinite when some element is zero.
    pub lean: f64,
}

/// Compute [`DistributionStats`]. Returns `None` when the total weight is
/// not positive.
pub fn distribution_stats(map: &ElementMap) -> Option<DistributionStats> {
    let w = map.to_array();
    let mean = map.mean();
    if mean <= 0.0 || !mean.is_finite() {
        return None;
    }
    let max = w.iter().copied().fold(f64::MIN, f64::max);
    let min = w.iter().copied().fold(f64::MAX, f64::min);
    let var = w.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / 5.0;
    let std_dev = var.sqrt();
    let lean = if min <= 0.0 {
        f64::INFINITY
    } else {
        (mean * mean) / (max * min)
    };
    Some(DistributionStats {
        mean,
        max,
        min,
        std_dev,
        cv: std_dev / mean,
        max_ratio: max / mean,
        lean,
    })
}

/// Relative slack on threshold comparisons, so a ratio sitting exactly on a
/// threshold classifies the same at any scale.
const RATIO_TOLERANCE: f64 = 1e-9;

fn at_least(value: f64, threshold: f64) -> bool {
    value >= threshold - RATIO_TOLERANCE * threshold.abs()
}

/// Classify with the default thresholds.
pub fn classify_balance(map: &ElementMap) -> BalanceCategory {
    classify_balance_with(map, &BalanceThresholds::default())
}

/// Classify with explicit thresholds. Zero total weight is Balanced.
pub fn classify_balance_with(map: &ElementMap, t: &BalanceThresholds) -> BalanceCategory {
    let Some(s) = distribution_stats(map) else {
        return BalanceCategory::Balanced;
    };
    if !at_least(s.cv, t.dispersion_floor) {
        return BalanceCategory::Balanced;
    }
    if at_least(s.max_ratio, t.excessive_ratio) {
        BalanceCategory::CriticallyExcessive
    } else if at_least(s.max_ratio, t.elevated_ratio) {
        BalanceCategory::Elevated
    } else if at_least(s.lean, t.deficient_lean) {
        BalanceCategory::CriticallyDeficient
    } else if at_least(s.lean, t.diminished_lean) {
        BalanceCategory::Diminished
    } else {
        BalanceCategory::Balanced
    }
}
