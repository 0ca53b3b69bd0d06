//! Report structure.

use bazi_base::{Pillar, SolarTerm};
use serde::{Deserialize, Serialize};

use crate::context::FocusArea;

/// Score bounds shared by the overall and domain sections.
pub const MIN_SCORE: u8 = 40;
pub const MAX_SCORE: u8 = 95;

/// Complete report for one chart and context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub overall: Overall,
    /// One entry per [`FocusArea`], in report order.
    pub domains: Vec<DomainReport>,
    /// Solar months 1..=12 of the target year.
    pub months: Vec<MonthReport>,
    pub basis: Basis,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Overall {
    pub score: u8,
    pub headline: String,
    pub keywords: Vec<String>,
    pub advice: String,
}

/// Direction of a domain over the year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Trend {
    Rising,
    Steady,
    Volatile,
    Strained,
}

impl Trend {
    /// 80+ Rising, 70+ Steady, 60+ Volatile, otherwise Strained.
    pub const fn from_score(score: u8) -> Self {
        match score {
            80.. => Self::Rising,
            70..=79 => Self::Steady,
            60..=69 => Self::Volatile,
            _ => Self::Strained,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Rising => "Rising",
            Self::Steady => "Steady",
            Self::Volatile => "Volatile",
            Self::Strained => "Strained",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainReport {
    pub domain: FocusArea,
    pub score: u8,
    pub trend: Trend,
    pub bright_spot: String,
    pub pitfall: String,
    pub actions: Vec<String>,
    pub basis: String,
}

/// Character of a month for this chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MonthTag {
    Auspicious,
    Steady,
    Cautious,
    Opportunity,
    Challenge,
    Turning,
}

pub const ALL_MONTH_TAGS: [MonthTag; 6] = [
    MonthTag::Auspicious,
    MonthTag::Steady,
    MonthTag::Cautious,
    MonthTag::Opportunity,
    MonthTag::Challenge,
    MonthTag::Turning,
];

impl MonthTag {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Auspicious => "Auspicious",
            Self::Steady => "Steady",
            Self::Cautious => "Cautious",
            Self::Opportunity => "Opportunity",
            Self::Challenge => "Challenge",
            Self::Turning => "Turning",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthReport {
    /// Solar month index (Lichun = 1).
    pub month: u8,
    pub solar_term: SolarTerm,
    pub pillar: Pillar,
    pub tag: MonthTag,
    pub theme: String,
    pub reminders: Vec<String>,
    pub good_for: String,
    pub method: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Basis {
    pub theory: String,
    pub rules: String,
    pub disclaimer: String,
}
