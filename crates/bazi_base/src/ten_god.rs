//! Ten gods (shi shen): relational categories of a stem to the day master.
//!
//! The category follows from the five-phase relation of the day master's
//! element to the other stem's element, split by whether the two stems
//! share polarity.

use serde::{Deserialize, Serialize};

use crate::branch::HiddenRank;
use crate::element::{PhaseRelation, phase_relation};
use crate::pillar::Pillars;
use crate::stem::Stem;

/// The ten relational categories in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TenGod {
    /// Companion: same element, same polarity.
    BiJian,
    /// Rob wealth: same element, opposite polarity.
    JieCai,
    /// Eating god: day master generates it, same polarity.
    ShiShen,
    /// Hurting officer: day master generates it, opposite polarity.
    ShangGuan,
    /// Direct wealth: day master controls it, opposite polarity.
    ZhengCai,
    /// Indirect wealth: day master controls it, same polarity.
    PianCai,
    /// Direct officer: controls the day master, opposite polarity.
    ZhengGuan,
    /// Seven killings: controls the day master, same polarity.
    QiSha,
    /// Direct resource: generates the day master, opposite polarity.
    ZhengYin,
    /// Indirect resource: generates the day master, same polarity.
    PianYin,
}

/// All 10 categories in canonical order.
pub const ALL_TEN_GODS: [TenGod; 10] = [
    TenGod::BiJian,
    TenGod::JieCai,
    TenGod::ShiShen,
    TenGod::ShangGuan,
    TenGod::ZhengCai,
    TenGod::PianCai,
    TenGod::ZhengGuan,
    TenGod::QiSha,
    TenGod::ZhengYin,
    TenGod::PianYin,
];

impl TenGod {
    /// Pinyin name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::BiJian => "BiJian",
            Self::JieCai => "JieCai",
            Self::ShiShen => "ShiShen",
            Self::ShangGuan => "ShangGuan",
            Self::ZhengCai => "ZhengCai",
            Self::PianCai => "PianCai",
            Self::ZhengGuan => "ZhengGuan",
            Self::QiSha => "QiSha",
            Self::ZhengYin => "ZhengYin",
            Self::PianYin => "PianYin",
        }
    }

    pub const fn hanzi(self) -> &'static str {
        match self {
            Self::BiJian => "比肩",
            Self::JieCai => "劫财",
            Self::ShiShen => "食神",
            Self::ShangGuan => "伤官",
            Self::ZhengCai => "正财",
            Self::PianCai => "偏财",
            Self::ZhengGuan => "正官",
            Self::QiSha => "七杀",
            Self::ZhengYin => "正印",
            Self::PianYin => "偏印",
        }
    }

    /// English gloss.
    pub const fn english(self) -> &'static str {
        match self {
            Self::BiJian => "Companion",
            Self::JieCai => "Rob Wealth",
            Self::ShiShen => "Eating God",
            Self::ShangGuan => "Hurting Officer",
            Self::ZhengCai => "Direct Wealth",
            Self::PianCai => "Indirect Wealth",
            Self::ZhengGuan => "Direct Officer",
            Self::QiSha => "Seven Killings",
            Self::ZhengYin => "Direct Resource",
            Self::PianYin => "Indirect Resource",
        }
    }

    /// 0-based canonical index.
    pub const fn index(self) -> u8 {
        match self {
            Self::BiJian => 0,
            Self::JieCai => 1,
            Self::ShiShen => 2,
            Self::ShangGuan => 3,
            Self::ZhengCai => 4,
            Self::PianCai => 5,
            Self::ZhengGuan => 6,
            Self::QiSha => 7,
            Self::ZhengYin => 8,
            Self::PianYin => 9,
        }
    }
}

impl std::fmt::Display for TenGod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Ten-god category of `other` relative to the day master `day`.
pub const fn ten_god(day: Stem, other: Stem) -> TenGod {
    let same_polarity = day.index() % 2 == other.index() % 2;
    match (phase_relation(day.element(), other.element()), same_polarity) {
        (PhaseRelation::Same, true) => TenGod::BiJian,
        (PhaseRelation::Same, false) => TenGod::JieCai,
        (PhaseRelation::Generates, true) => TenGod::ShiShen,
        (PhaseRelation::Generates, false) => TenGod::ShangGuan,
        (PhaseRelation::Controls, true) => TenGod::PianCai,
        (PhaseRelation::Controls, false) => TenGod::ZhengCai,
        (PhaseRelation::ControlledBy, true) => TenGod::QiSha,
        (PhaseRelation::ControlledBy, false) => TenGod::ZhengGuan,
        (PhaseRelation::GeneratedBy, true) => TenGod::PianYin,
        (PhaseRelation::GeneratedBy, false) => TenGod::ZhengYin,
    }
}

/// Pillar-stem weight (3.0) in tenths.
pub const STEM_RELATION_TENTHS: u32 = 30;

/// Hidden-stem weight in tenths (1.2 / 0.6 / 0.3).
pub const fn hidden_relation_tenths(rank: HiddenRank) -> u32 {
    match rank {
        HiddenRank::Primary => 12,
        HiddenRank::Secondary => 6,
        HiddenRank::Residual => 3,
    }
}

/// Maximum number of categories returned by [`rank_relations`].
pub const TOP_RELATIONS: usize = 3;

/// A ten-god category with its accumulated weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RelationWeight {
    pub god: TenGod,
    pub weight: f64,
}

/// Accumulated weight of every category, in tenths, indexed canonically.
pub fn relation_tenths(pillars: &Pillars, day: Stem) -> [u32; 10] {
    let mut tenths = [0u32; 10];
    for (_, pillar) in pillars.iter() {
        tenths[ten_god(day, pillar.stem).index() as usize] += STEM_RELATION_TENTHS;
        for hidden in pillar.branch.hidden_stems() {
            tenths[ten_god(day, hidden.stem).index() as usize] += hidden_relation_tenths(hidden.rank);
        }
    }
    tenths
}

/// Top three non-zero categories, heaviest first, ties in canonical order.
///
/// The day pillar's own stem always counts as BiJian with weight 3.
pub fn rank_relations(pillars: &Pillars, day: Stem) -> Vec<RelationWeight> {
    let tenths = relation_tenths(pillars, day);
    let mut ranked: Vec<(TenGod, u32)> = ALL_TEN_GODS
        .iter()
        .map(|&g| (g, tenths[g.index() as usize]))
        .filter(|&(_, t)| t > 0)
        .collect();
    // Stable sort keeps canonical order among equal weights.
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
        .into_iter()
        .take(TOP_RELATIONS)
        .map(|(god, t)| RelationWeight {
            god,
            weight: f64::from(t) / 10.0,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branch::Branch;
    use crate::pillar::Pillar;
    use crate::stem::ALL_STEMS;

    #[test]
    fn self_is_companion() {
        for s in ALL_STEMS {
            assert_eq!(ten_god(s, s), TenGod::BiJian);
        }
    }

    #[test]
    fn bing_day_master_table() {
        let day = Stem::Bing;
        assert_eq!(ten_god(day, Stem::Ding), TenGod::JieCai);
        assert_eq!(ten_god(day, Stem::Wu), TenGod::ShiShen);
        assert_eq!(ten_god(day, Stem::Ji), TenGod::ShangGuan);
        assert_eq!(ten_god(day, Stem::Geng), TenGod::PianCai);
        assert_eq!(ten_god(day, Stem::Xin), TenGod::ZhengCai);
        assert_eq!(ten_god(day, Stem::Ren), TenGod::QiSha);
        assert_eq!(ten_god(day, Stem::Gui), TenGod::ZhengGuan);
        assert_eq!(ten_god(day, Stem::Jia), TenGod::PianYin);
        assert_eq!(ten_god(day, Stem::Yi), TenGod::ZhengYin);
    }

    #[test]
    fn each_day_master_sees_all_ten() {
        for day in ALL_STEMS {
            let mut gods: Vec<TenGod> = ALL_STEMS.iter().map(|&o| ten_god(day, o)).collect();
            gods.sort();
            assert_eq!(gods, ALL_TEN_GODS.to_vec());
        }
    }

    fn reference_pillars() -> Pillars {
        Pillars {
            year: Pillar::new(Stem::Geng, Branch::Wu),
            month: Pillar::new(Stem::Ding, Branch::Chou),
            day: Pillar::new(Stem::Bing, Branch::Yin),
            hour: Some(Pillar::new(Stem::Jia, Branch::Wu)),
        }
    }

    #[test]
    fn reference_ranking() {
        let r = rank_relations(&reference_pillars(), Stem::Bing);
        assert_eq!(
            r,
            vec![
                RelationWeight {
                    god: TenGod::JieCai,
                    weight: 5.4
                },
                RelationWeight {
                    god: TenGod::PianYin,
                    weight: 4.2
                },
                RelationWeight {
                    god: TenGod::BiJian,
                    weight: 3.6
                },
            ]
        );
    }

    #[test]
    fn ties_follow_canonical_order() {
        // Jia-Zi / Yi-Mao / Wu-Chen / Bing-Chen: BiJian and ZhengGuan tie at 5.4.
        let pillars = Pillars {
            year: Pillar::new(Stem::Jia, Branch::Zi),
            month: Pillar::new(Stem::Yi, Branch::Mao),
            day: Pillar::new(Stem::Wu, Branch::Chen),
            hour: Some(Pillar::new(Stem::Bing, Branch::Chen)),
        };
        let r = rank_relations(&pillars, Stem::Wu);
        let gods: Vec<_> = r.iter().map(|w| (w.god, w.weight)).collect();
        assert_eq!(
            gods,
            vec![
                (TenGod::BiJian, 5.4),
                (TenGod::ZhengGuan, 5.4),
                (TenGod::QiSha, 3.0)
            ]
        );
    }

    #[test]
    fn zero_categories_never_listed() {
        // Three pillars of pure Water around a Ren day master.
        let p = Pillar::new(Stem::Ren, Branch::Zi);
        let pillars = Pillars {
            year: p,
            month: p,
            day: p,
            hour: None,
        };
        let r = rank_relations(&pillars, Stem::Ren);
        assert_eq!(r.len(), 2);
        assert_eq!(r[0].god, TenGod::BiJian);
        assert_eq!(r[1].god, TenGod::JieCai);
        assert!(r.iter().all(|w| w.weight > 0.0));
    }

    #[test]
    fn day_stem_contributes_companion() {
        let tenths = relation_tenths(&reference_pillars(), Stem::Bing);
        assert!(tenths[TenGod::BiJian.index() as usize] >= STEM_RELATION_TENTHS);
    }
}
