//! Earthly branches (di zhi) and their hidden stems (cang gan).
//!
//! Each branch carries a primary element and 1-3 hidden stems ranked
//! primary (ben qi), secondary (zhong qi) and residual (yu qi).

use serde::{Deserialize, Serialize};

use crate::element::{Element, Polarity};
use crate::stem::Stem;

/// The 12 earthly branches starting from Zi.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Branch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All 12 branches in order (index 0 = Zi).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Zi,
    Branch::Chou,
    Branch::Yin,
    Branch::Mao,
    Branch::Chen,
    Branch::Si,
    Branch::Wu,
    Branch::Wei,
    Branch::Shen,
    Branch::You,
    Branch::Xu,
    Branch::Hai,
];

/// Influence rank of a hidden stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HiddenRank {
    Primary,
    Secondary,
    Residual,
}

impl HiddenRank {
    /// Rank for a position in a branch's hidden-stem list.
    pub const fn from_position(pos: usize) -> Self {
        match pos {
            0 => Self::Primary,
            1 => Self::Secondary,
            _ => Self::Residual,
        }
    }
}

/// A hidden stem with its rank inside a branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HiddenStem {
    pub stem: Stem,
    pub rank: HiddenRank,
}

const fn hs(stem: Stem, pos: usize) -> HiddenStem {
    HiddenStem {
        stem,
        rank: HiddenRank::from_position(pos),
    }
}

const ZI_HIDDEN: [HiddenStem; 1] = [hs(Stem::Gui, 0)];
const CHOU_HIDDEN: [HiddenStem; 3] = [hs(Stem::Ji, 0), hs(Stem::Gui, 1), hs(Stem::Xin, 2)];
const YIN_HIDDEN: [HiddenStem; 3] = [hs(Stem::Jia, 0), hs(Stem::Bing, 1), hs(Stem::Wu, 2)];
const MAO_HIDDEN: [HiddenStem; 1] = [hs(Stem::Yi, 0)];
const CHEN_HIDDEN: [HiddenStem; 3] = [hs(Stem::Wu, 0), hs(Stem::Yi, 1), hs(Stem::Gui, 2)];
const SI_HIDDEN: [HiddenStem; 3] = [hs(Stem::Bing, 0), hs(Stem::Wu, 1), hs(Stem::Geng, 2)];
const WU_HIDDEN: [HiddenStem; 2] = [hs(Stem::Ding, 0), hs(Stem::Ji, 1)];
const WEI_HIDDEN: [HiddenStem; 3] = [hs(Stem::Ji, 0), hs(Stem::Ding, 1), hs(Stem::Yi, 2)];
const SHEN_HIDDEN: [HiddenStem; 3] = [hs(Stem::Geng, 0), hs(Stem::Ren, 1), hs(Stem::Wu, 2)];
const YOU_HIDDEN: [HiddenStem; 1] = [hs(Stem::Xin, 0)];
const XU_HIDDEN: [HiddenStem; 3] = [hs(Stem::Wu, 0), hs(Stem::Xin, 1), hs(Stem::Ding, 2)];
const HAI_HIDDEN: [HiddenStem; 2] = [hs(Stem::Ren, 0), hs(Stem::Jia, 1)];

impl Branch {
    /// Pinyin name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Zi => "Zi",
            Self::Chou => "Chou",
            Self::Yin => "Yin",
            Self::Mao => "Mao",
            Self::Chen => "Chen",
            Self::Si => "Si",
            Self::Wu => "Wu",
            Self::Wei => "Wei",
            Self::Shen => "Shen",
            Self::You => "You",
            Self::Xu => "Xu",
            Self::Hai => "Hai",
        }
    }

    /// Chinese character.
    pub const fn hanzi(self) -> &'static str {
        match self {
            Self::Zi => "子",
            Self::Chou => "丑",
            Self::Yin => "寅",
            Self::Mao => "卯",
            Self::Chen => "辰",
            Self::Si => "巳",
            Self::Wu => "午",
            Self::Wei => "未",
            Self::Shen => "申",
            Self::You => "酉",
            Self::Xu => "戌",
            Self::Hai => "亥",
        }
    }

    /// 0-based index (Zi=0 .. Hai=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Zi => 0,
            Self::Chou => 1,
            Self::Yin => 2,
            Self::Mao => 3,
            Self::Chen => 4,
            Self::Si => 5,
            Self::Wu => 6,
            Self::Wei => 7,
            Self::Shen => 8,
            Self::You => 9,
            Self::Xu => 10,
            Self::Hai => 11,
        }
    }

    /// Branch at a cycle position, wrapping with Euclidean modulo.
    pub const fn from_cycle(i: i64) -> Self {
        ALL_BRANCHES[i.rem_euclid(12) as usize]
    }

    /// Primary element of the branch.
    pub const fn element(self) -> Element {
        match self {
            Self::Yin | Self::Mao => Element::Wood,
            Self::Si | Self::Wu => Element::Fire,
            Self::Chou | Self::Chen | Self::Wei | Self::Xu => Element::Earth,
            Self::Shen | Self::You => Element::Metal,
            Self::Zi | Self::Hai => Element::Water,
        }
    }

    pub const fn polarity(self) -> Polarity {
        Polarity::from_parity(self.index())
    }

    /// Hidden stems, primary first.
    pub const fn hidden_stems(self) -> &'static [HiddenStem] {
        match self {
            Self::Zi => &ZI_HIDDEN,
            Self::Chou => &CHOU_HIDDEN,
            Self::Yin => &YIN_HIDDEN,
            Self::Mao => &MAO_HIDDEN,
            Self::Chen => &CHEN_HIDDEN,
            Self::Si => &SI_HIDDEN,
            Self::Wu => &WU_HIDDEN,
            Self::Wei => &WEI_HIDDEN,
            Self::Shen => &SHEN_HIDDEN,
            Self::You => &YOU_HIDDEN,
            Self::Xu => &XU_HIDDEN,
            Self::Hai => &HAI_HIDDEN,
        }
    }

    /// The branch six positions away (liu chong clash partner).
    pub const fn clash_partner(self) -> Self {
        Self::from_cycle(self.index() as i64 + 6)
    }
}

impl std::fmt::Display for Branch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, b) in ALL_BRANCHES.iter().enumerate() {
            assert_eq!(b.index() as usize, i);
        }
    }

    #[test]
    fn hidden_stem_counts() {
        for b in ALL_BRANCHES {
            let n = b.hidden_stems().len();
            assert!((1..=3).contains(&n), "{b} has {n} hidden stems");
        }
        assert_eq!(Branch::Zi.hidden_stems().len(), 1);
        assert_eq!(Branch::Wu.hidden_stems().len(), 2);
        assert_eq!(Branch::Chou.hidden_stems().len(), 3);
    }

    #[test]
    fn ranks_follow_position() {
        for b in ALL_BRANCHES {
            for (pos, h) in b.hidden_stems().iter().enumerate() {
                assert_eq!(h.rank, HiddenRank::from_position(pos));
            }
        }
    }

    #[test]
    fn primary_hidden_stem_matches_element_for_pure_branches() {
        // Zi, Mao, You carry a single stem of their own element.
        for b in [Branch::Zi, Branch::Mao, Branch::You] {
            assert_eq!(b.hidden_stems()[0].stem.element(), b.element());
        }
    }

    #[test]
    fn chen_hidden_stems() {
        let stems: Vec<Stem> = Branch::Chen.hidden_stems().iter().map(|h| h.stem).collect();
        assert_eq!(stems, vec![Stem::Wu, Stem::Yi, Stem::Gui]);
    }

    #[test]
    fn clash_pairs() {
        assert_eq!(Branch::Zi.clash_partner(), Branch::Wu);
        assert_eq!(Branch::Hai.clash_partner(), Branch::Si);
        for b in ALL_BRANCHES {
            assert_eq!(b.clash_partner().clash_partner(), b);
        }
    }
}
