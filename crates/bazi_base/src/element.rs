//! Five elements (wu xing), polarity, and the generative/control cycles.
//!
//! Generative cycle: Wood → Fire → Earth → Metal → Water → Wood.
//! Control cycle (offset by two): Wood → Earth → Water → Fire → Metal → Wood.

use serde::{Deserialize, Serialize};

/// The five elements, in generative-cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All 5 elements in cycle order (index 0 = Wood).
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
];

impl Element {
    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "Wood",
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Metal => "Metal",
            Self::Water => "Water",
        }
    }

    /// Chinese character.
    pub const fn hanzi(self) -> &'static str {
        match self {
            Self::Wood => "木",
            Self::Fire => "火",
            Self::Earth => "土",
            Self::Metal => "金",
            Self::Water => "水",
        }
    }

    /// 0-based index in cycle order (Wood=0 .. Water=4).
    pub const fn index(self) -> u8 {
        match self {
            Self::Wood => 0,
            Self::Fire => 1,
            Self::Earth => 2,
            Self::Metal => 3,
            Self::Water => 4,
        }
    }

    /// Element at a cycle index, wrapping modulo 5.
    pub const fn from_index(i: u8) -> Self {
        ALL_ELEMENTS[(i % 5) as usize]
    }

    /// The element this one produces.
    pub const fn generates(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// The element that produces this one.
    pub const fn generated_by(self) -> Self {
        Self::from_index(self.index() + 4)
    }

    /// The element this one suppresses.
    pub const fn controls(self) -> Self {
        Self::from_index(self.index() + 2)
    }

    /// The element that suppresses this one.
    pub const fn controlled_by(self) -> Self {
        Self::from_index(self.index() + 3)
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Yang / yin polarity of a stem or branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Polarity {
    Yang,
    Yin,
}

impl Polarity {
    /// Even cycle positions are yang, odd are yin.
    pub const fn from_parity(index: u8) -> Self {
        if index % 2 == 0 { Self::Yang } else { Self::Yin }
    }
}

/// Five-phase relation of a subject element to another element.
///
/// Exactly one variant holds for any ordered pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhaseRelation {
    /// Both are the same element.
    Same,
    /// The subject produces the other.
    Generates,
    /// The other produces the subject.
    GeneratedBy,
    /// The subject suppresses the other.
    Controls,
    /// The other suppresses the subject.
    ControlledBy,
}

/// All 5 relations, in table order.
pub const ALL_PHASE_RELATIONS: [PhaseRelation; 5] = [
    PhaseRelation::Same,
    PhaseRelation::Generates,
    PhaseRelation::GeneratedBy,
    PhaseRelation::Controls,
    PhaseRelation::ControlledBy,
];

impl PhaseRelation {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Same => "Same",
            Self::Generates => "Generates",
            Self::GeneratedBy => "GeneratedBy",
            Self::Controls => "Controls",
            Self::ControlledBy => "ControlledBy",
        }
    }
}

/// Relation of `subject` to `other` on the five-phase cycles.
pub const fn phase_relation(subject: Element, other: Element) -> PhaseRelation {
    // Distance along the generative cycle: 0 same, 1 generates, 2 controls,
    // 3 controlled-by, 4 generated-by.
    let dist = (other.index() + 5 - subject.index()) % 5;
    match dist {
        0 => PhaseRelation::Same,
        1 => PhaseRelation::Generates,
        2 => PhaseRelation::Controls,
        3 => PhaseRelation::ControlledBy,
        _ => PhaseRelation::GeneratedBy,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generative_cycle() {
        assert_eq!(Element::Wood.generates(), Element::Fire);
        assert_eq!(Element::Fire.generates(), Element::Earth);
        assert_eq!(Element::Earth.generates(), Element::Metal);
        assert_eq!(Element::Metal.generates(), Element::Water);
        assert_eq!(Element::Water.generates(), Element::Wood);
    }

    #[test]
    fn control_cycle() {
        assert_eq!(Element::Wood.controls(), Element::Earth);
        assert_eq!(Element::Fire.controls(), Element::Metal);
        assert_eq!(Element::Earth.controls(), Element::Water);
        assert_eq!(Element::Metal.controls(), Element::Wood);
        assert_eq!(Element::Water.controls(), Element::Fire);
    }

    #[test]
    fn inverses() {
        for e in ALL_ELEMENTS {
            assert_eq!(e.generates().generated_by(), e);
            assert_eq!(e.controls().controlled_by(), e);
        }
    }

    #[test]
    fn relation_matches_cycle_functions() {
        for e in ALL_ELEMENTS {
            assert_eq!(phase_relation(e, e), PhaseRelation::Same);
            assert_eq!(phase_relation(e, e.generates()), PhaseRelation::Generates);
            assert_eq!(phase_relation(e, e.generated_by()), PhaseRelation::GeneratedBy);
            assert_eq!(phase_relation(e, e.controls()), PhaseRelation::Controls);
            assert_eq!(phase_relation(e, e.controlled_by()), PhaseRelation::ControlledBy);
        }
    }

    #[test]
    fn exactly_one_relation_per_pair() {
        for a in ALL_ELEMENTS {
            let mut seen = Vec::new();
            for b in ALL_ELEMENTS {
                let r = phase_relation(a, b);
                assert!(!seen.contains(&r), "{a} has duplicate relation {r:?}");
                seen.push(r);
            }
            assert_eq!(seen.len(), 5);
        }
    }

    #[test]
    fn polarity_parity() {
        assert_eq!(Polarity::from_parity(0), Polarity::Yang);
        assert_eq!(Polarity::from_parity(7), Polarity::Yin);
    }
}
