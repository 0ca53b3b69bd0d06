//! User context: the choices that steer report emphasis.
//!
//! A [`UserContext`] is validated once at construction (and on
//! deserialization) and immutable afterwards.

use serde::{Deserialize, Serialize};

use crate::error::ContextError;

/// Life area the user is asking about. Also names the five report domains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FocusArea {
    Career,
    Wealth,
    Romance,
    Health,
    Social,
}

/// All 5 areas in report order.
pub const ALL_FOCUS_AREAS: [FocusArea; 5] = [
    FocusArea::Career,
    FocusArea::Wealth,
    FocusArea::Romance,
    FocusArea::Health,
    FocusArea::Social,
];

impl FocusArea {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Career => "Career",
            Self::Wealth => "Wealth",
            Self::Romance => "Romance",
            Self::Health => "Health",
            Self::Social => "Social",
        }
    }

    /// Suggested situation descriptors. Free text is accepted as well.
    pub const fn suggested_situations(self) -> &'static [&'static str] {
        match self {
            Self::Career => &[
                "Seeking a promotion",
                "Considering a job change",
                "Starting a business",
                "Stable but stagnant",
            ],
            Self::Wealth => &[
                "Building savings",
                "Paying down debt",
                "Looking for new income",
                "Weighing an investment",
            ],
            Self::Romance => &[
                "Single and looking",
                "In a steady relationship",
                "Planning to marry",
                "Recovering from a breakup",
            ],
            Self::Health => &[
                "Generally well",
                "Recovering from illness",
                "Running on low energy",
                "Building better habits",
            ],
            Self::Social => &[
                "Growing my network",
                "Repairing a relationship",
                "Handling friction at work",
                "Feeling isolated",
            ],
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        ALL_FOCUS_AREAS
            .into_iter()
            .find(|f| f.name().eq_ignore_ascii_case(s.trim()))
    }
}

/// How the user intends to play the year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    HoldSteady,
    Advance,
    DefendThenAdvance,
    AdvanceThenDefend,
}

pub const ALL_STRATEGIES: [Strategy; 4] = [
    Strategy::HoldSteady,
    Strategy::Advance,
    Strategy::DefendThenAdvance,
    Strategy::AdvanceThenDefend,
];

impl Strategy {
    pub const fn name(self) -> &'static str {
        match self {
            Self::HoldSteady => "HoldSteady",
            Self::Advance => "Advance",
            Self::DefendThenAdvance => "DefendThenAdvance",
            Self::AdvanceThenDefend => "AdvanceThenDefend",
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        let key = s.trim().replace(['-', '_', ' '], "");
        ALL_STRATEGIES
            .into_iter()
            .find(|v| v.name().eq_ignore_ascii_case(&key))
    }
}

/// Things the user wants to steer clear of this year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Avoidance {
    ImpulsiveSpending,
    RiskyInvestment,
    Overwork,
    Conflict,
    LateNights,
    Gossip,
    HastyCommitment,
    Procrastination,
}

pub const ALL_AVOIDANCES: [Avoidance; 8] = [
    Avoidance::ImpulsiveSpending,
    Avoidance::RiskyInvestment,
    Avoidance::Overwork,
    Avoidance::Conflict,
    Avoidance::LateNights,
    Avoidance::Gossip,
    Avoidance::HastyCommitment,
    Avoidance::Procrastination,
];

/// Upper bound on selected avoidances.
pub const MAX_AVOIDANCES: usize = 3;

impl Avoidance {
    pub const fn name(self) -> &'static str {
        match self {
            Self::ImpulsiveSpending => "ImpulsiveSpending",
            Self::RiskyInvestment => "RiskyInvestment",
            Self::Overwork => "Overwork",
            Self::Conflict => "Conflict",
            Self::LateNights => "LateNights",
            Self::Gossip => "Gossip",
            Self::HastyCommitment => "HastyCommitment",
            Self::Procrastination => "Procrastination",
        }
    }

    /// Monthly reminder line for this avoidance.
    pub const fn reminder(self) -> &'static str {
        match self {
            Self::ImpulsiveSpending => "Sleep on any purchase you did not plan",
            Self::RiskyInvestment => "Keep speculative positions small",
            Self::Overwork => "Protect at least one full rest day",
            Self::Conflict => "Let heated exchanges cool before replying",
            Self::LateNights => "Keep a fixed bedtime",
            Self::Gossip => "Keep confidences and skip idle talk",
            Self::HastyCommitment => "Read every agreement twice before signing",
            Self::Procrastination => "Start the hardest task first",
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        let key = s.trim().replace(['-', '_', ' '], "");
        ALL_AVOIDANCES
            .into_iter()
            .find(|v| v.name().eq_ignore_ascii_case(&key))
    }
}

/// Energy and time the user can spend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Energy {
    Ample,
    Steady,
    Stretched,
    Depleted,
}

pub const ALL_ENERGY_LEVELS: [Energy; 4] = [
    Energy::Ample,
    Energy::Steady,
    Energy::Stretched,
    Energy::Depleted,
];

impl Energy {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ample => "Ample",
            Self::Steady => "Steady",
            Self::Stretched => "Stretched",
            Self::Depleted => "Depleted",
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        ALL_ENERGY_LEVELS
            .into_iter()
            .find(|v| v.name().eq_ignore_ascii_case(s.trim()))
    }
}

/// Validated user choices.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "UserContextFields")]
pub struct UserContext {
    focus: FocusArea,
    situation: String,
    strategy: Strategy,
    avoidances: Vec<Avoidance>,
    energy: Energy,
}

/// Unvalidated mirror of [`UserContext`] used for deserialization.
#[derive(Deserialize)]
struct UserContextFields {
    focus: FocusArea,
    situation: String,
    strategy: Strategy,
    avoidances: Vec<Avoidance>,
    energy: Energy,
}

impl TryFrom<UserContextFields> for UserContext {
    type Error = ContextError;

    fn try_from(f: UserContextFields) -> Result<Self, Self::Error> {
        Self::new(f.focus, f.situation, f.strategy, f.avoidances, f.energy)
    }
}

impl UserContext {
    /// Validate and build a context.
    ///
    /// The situation is trimmed and must be non-empty; 1 to 3 distinct
    /// avoidances are required.
    pub fn new(
        focus: FocusArea,
        situation: impl Into<String>,
        strategy: Strategy,
        avoidances: Vec<Avoidance>,
        energy: Energy,
    ) -> Result<Self, ContextError> {
        let situation = situation.into().trim().to_string();
        if situation.is_empty() {
            return Err(ContextError::EmptySituation);
        }
        if avoidances.is_empty() || avoidances.len() > MAX_AVOIDANCES {
            return Err(ContextError::AvoidanceCount(avoidances.len()));
        }
        for (i, a) in avoidances.iter().enumerate() {
            if avoidances[..i].contains(a) {
                return Err(ContextError::DuplicateAvoidance(*a));
            }
        }
        Ok(Self {
            focus,
            situation,
            strategy,
            avoidances,
            energy,
        })
    }

    pub fn focus(&self) -> FocusArea {
        self.focus
    }

    pub fn situation(&self) -> &str {
        &self.situation
    }

    /// True when the situation is one of the focus area's suggestions.
    pub fn situation_is_suggested(&self) -> bool {
        self.focus.suggested_situations().contains(&self.situation.as_str())
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn avoidances(&self) -> &[Avoidance] {
        &self.avoidances
    }

    pub fn energy(&self) -> Energy {
        self.energy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(situation: &str, avoidances: Vec<Avoidance>) -> Result<UserContext, ContextError> {
        UserContext::new(
            FocusArea::Career,
            situation,
            Strategy::Advance,
            avoidances,
            Energy::Steady,
        )
    }

    #[test]
    fn valid_context() {
        let c = ctx("  Seeking a promotion ", vec![Avoidance::Conflict]).unwrap();
        assert_eq!(c.situation(), "Seeking a promotion");
        assert!(c.situation_is_suggested());
        assert_eq!(c.avoidances(), &[Avoidance::Conflict]);
    }

    #[test]
    fn free_text_situation_accepted() {
        let c = ctx("Moving abroad for work", vec![Avoidance::Overwork]).unwrap();
        assert!(!c.situation_is_suggested());
    }

    #[test]
    fn empty_situation_rejected() {
        assert_eq!(
            ctx("   ", vec![Avoidance::Conflict]),
            Err(ContextError::EmptySituation)
        );
    }

    #[test]
    fn avoidance_count_bounds() {
        assert_eq!(ctx("x", vec![]), Err(ContextError::AvoidanceCount(0)));
        let four = vec![
            Avoidance::Conflict,
            Avoidance::Gossip,
            Avoidance::Overwork,
            Avoidance::LateNights,
        ];
        assert_eq!(ctx("x", four), Err(ContextError::AvoidanceCount(4)));
        let three = vec![Avoidance::Conflict, Avoidance::Gossip, Avoidance::Overwork];
        assert!(ctx("x", three).is_ok());
    }

    #[test]
    fn duplicate_avoidance_rejected() {
        assert_eq!(
            ctx("x", vec![Avoidance::Gossip, Avoidance::Gossip]),
            Err(ContextError::DuplicateAvoidance(Avoidance::Gossip))
        );
    }

    #[test]
    fn every_focus_has_suggestions() {
        for f in ALL_FOCUS_AREAS {
            assert!(!f.suggested_situations().is_empty());
        }
    }

    #[test]
    fn names_parse_back() {
        for f in ALL_FOCUS_AREAS {
            assert_eq!(FocusArea::from_name(f.name()), Some(f));
        }
        for s in ALL_STRATEGIES {
            assert_eq!(Strategy::from_name(s.name()), Some(s));
        }
        for a in ALL_AVOIDANCES {
            assert_eq!(Avoidance::from_name(a.name()), Some(a));
        }
        for e in ALL_ENERGY_LEVELS {
            assert_eq!(Energy::from_name(e.name()), Some(e));
        }
        assert_eq!(Strategy::from_name("hold-steady"), Some(Strategy::HoldSteady));
        assert_eq!(Avoidance::from_name("late_nights"), Some(Avoidance::LateNights));
        assert_eq!(FocusArea::from_name("wealth"), Some(FocusArea::Wealth));
        assert_eq!(Energy::from_name("tired"), None);
    }
}
