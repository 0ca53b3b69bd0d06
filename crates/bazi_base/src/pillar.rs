//! Pillars (stem + branch pairs) and the four-pillar set.

use serde::{Deserialize, Serialize};

use crate::branch::Branch;
use crate::stem::Stem;

/// One stem/branch pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pillar {
    pub stem: Stem,
    pub branch: Branch,
}

impl Pillar {
    pub const fn new(stem: Stem, branch: Branch) -> Self {
        Self { stem, branch }
    }

    /// Pillar at a position of the 60-term cycle (0 = Jia-Zi).
    pub const fn from_cycle(n: i64) -> Self {
        Self {
            stem: Stem::from_cycle(n),
            branch: Branch::from_cycle(n),
        }
    }

    /// 0-based position in the 60-term cycle (Jia-Zi=0 .. Gui-Hai=59).
    ///
    /// Returns `None` for parity-mismatched pairs, which never occur in the
    /// cycle (e.g. Jia-Chou).
    pub const fn cycle_index(self) -> Option<u8> {
        let s = self.stem.index();
        let b = self.branch.index();
        if s % 2 != b % 2 {
            return None;
        }
        // Solve n ≡ s (mod 10), n ≡ b (mod 12) for n in 0..60.
        let n = (6 * s as u16 + 55 * b as u16) % 60;
        Some(n as u8)
    }

    /// Chinese characters, e.g. "庚午".
    pub fn hanzi(self) -> String {
        format!("{}{}", self.stem.hanzi(), self.branch.hanzi())
    }
}

impl std::fmt::Display for Pillar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.stem.name(), self.branch.name())
    }
}

/// Which of the four pillars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PillarPosition {
    Year,
    Month,
    Day,
    Hour,
}

impl PillarPosition {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Year => "Year",
            Self::Month => "Month",
            Self::Day => "Day",
            Self::Hour => "Hour",
        }
    }
}

/// The four pillars of a chart. The hour pillar is absent when the birth
/// time is unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pillars {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Option<Pillar>,
}

impl Pillars {
    /// Present pillars in year, month, day, hour order.
    pub fn iter(&self) -> impl Iterator<Item = (PillarPosition, Pillar)> + '_ {
        [
            Some((PillarPosition::Year, self.year)),
            Some((PillarPosition::Month, self.month)),
            Some((PillarPosition::Day, self.day)),
            self.hour.map(|p| (PillarPosition::Hour, p)),
        ]
        .into_iter()
        .flatten()
    }

    /// The day master.
    pub const fn day_stem(&self) -> Stem {
        self.day.stem
    }

    pub const fn has_hour(&self) -> bool {
        self.hour.is_some()
    }
}
