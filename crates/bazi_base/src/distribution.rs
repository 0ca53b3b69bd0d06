//! Element aggregator: weighted elemental contributions of a pillar set.
//!
//! Weights are accumulated in integer tenths so that equal totals compare
//! equal exactly; they are converted to `f64` only at the end.

use serde::{Deserialize, Serialize};

use crate::branch::HiddenRank;
use crate::element::{ALL_ELEMENTS, Element};
use crate::pillar::Pillars;

/// Stem contribution (2.0) in tenths.
pub const STEM_WEIGHT_TENTHS: u32 = 20;
/// Branch primary-element contribution (1.5) in tenths.
pub const BRANCH_WEIGHT_TENTHS: u32 = 15;

/// Hidden-stem contribution in tenths (0.8 / 0.4 / 0.2).
pub const fn hidden_weight_tenths(rank: HiddenRank) -> u32 {
    match rank {
        HiddenRank::Primary => 8,
        HiddenRank::Secondary => 4,
        HiddenRank::Residual => 2,
    }
}

/// One non-negative weight per element.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ElementMap {
    pub wood: f64,
    pub fire: f64,
    pub earth: f64,
    pub metal: f64,
    pub water: f64,
}

impl ElementMap {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0, 0.0);

    pub const fn new(wood: f64, fire: f64, earth: f64, metal: f64, water: f64) -> Self {
        Self {
            wood,
            fire,
            earth,
            metal,
            water,
        }
    }

    /// Build from weights in cycle order (Wood, Fire, Earth, Metal, Water).
    pub const fn from_array(w: [f64; 5]) -> Self {
        Self::new(w[0], w[1], w[2], w[3], w[4])
    }

    pub const fn to_array(&self) -> [f64; 5] {
        [self.wood, self.fire, self.earth, self.metal, self.water]
    }

    pub const fn get(&self, element: Element) -> f64 {
        match element {
            Element::Wood => self.wood,
            Element::Fire => self.fire,
            Element::Earth => self.earth,
            Element::Metal => self.metal,
            Element::Water => self.water,
        }
    }

    pub fn get_mut(&mut self, element: Element) -> &mut f64 {
        match element {
            Element::Wood => &mut self.wood,
            Element::Fire => &mut self.fire,
            Element::Earth => &mut self.earth,
            Element::Metal => &mut self.metal,
            Element::Water => &mut self.water,
        }
    }

    /// `(element, weight)` pairs in cycle order.
    pub fn iter(&self) -> impl Iterator<Item = (Element, f64)> + '_ {
        ALL_ELEMENTS.iter().map(move |&e| (e, self.get(e)))
    }

    pub fn total(&self) -> f64 {
        self.to_array().iter().sum()
    }

    pub fn mean(&self) -> f64 {
        self.total() / 5.0
    }

    /// Element with the largest weight; ties resolve to the earlier element
    /// in cycle order.
    pub fn dominant(&self) -> Element {
        let mut best = (Element::Wood, self.wood);
        for (e, w) in self.iter().skip(1) {
            if w > best.1 {
                best = (e, w);
            }
        }
        best.0
    }

    /// Every weight multiplied by `k`.
    pub fn scaled(&self, k: f64) -> Self {
        let a = self.to_array();
        Self::from_array(a.map(|w| w * k))
    }
}

/// Sum elemental weights over every present pillar.
///
/// Stems add 2.0 to their element, branches 1.5 to their primary element,
/// and each hidden stem 0.8 / 0.4 / 0.2 by rank.
pub fn element_distribution(pillars: &Pillars) -> ElementMap {
    let mut tenths = [0u32; 5];
    for (_, pillar) in pillars.iter() {
        tenths[pillar.stem.element().index() as usize] += STEM_WEIGHT_TENTHS;
        tenths[pillar.branch.element().index() as usize] += BRANCH_WEIGHT_TENTHS;
        for hidden in pillar.branch.hidden_stems() {
            tenths[hidden.stem.element().index() as usize] += hidden_weight_tenths(hidden.rank);
        }
    }
    ElementMap::from_array(tenths.map(|t| f64::from(t) / 10.0))
}
