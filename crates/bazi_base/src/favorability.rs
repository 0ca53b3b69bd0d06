//! Favorable and unfavorable elements for a day master.
//!
//! An excessive chart is helped by elements that drain or restrain the day
//! master; a deficient chart by elements that feed or reinforce it.

use serde::{Deserialize, Serialize};

use crate::balance::BalanceCategory;
use crate::element::Element;

/// Helpful and harmful elements, deduplicated, in rule order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorability {
    pub favorable: Vec<Element>,
    pub unfavorable: Vec<Element>,
}

impl Favorability {
    pub fn is_favorable(&self, element: Element) -> bool {
        self.favorable.contains(&element)
    }

    pub fn is_unfavorable(&self, element: Element) -> bool {
        self.unfavorable.contains(&element)
    }
}

fn dedup(elements: &[Element]) -> Vec<Element> {
    let mut out = Vec::with_capacity(elements.len());
    for &e in elements {
        if !out.contains(&e) {
            out.push(e);
        }
    }
    out
}

/// Resolve favorability from the day master's element and the balance.
///
/// Balanced charts list no unfavorable element.
pub fn resolve_favorability(day_element: Element, balance: BalanceCategory) -> Favorability {
    let x = day_element;
    let (favorable, unfavorable) = match balance {
        BalanceCategory::Elevated | BalanceCategory::CriticallyExcessive => (
            vec![x.controlled_by(), x.generates(), x.controls()],
            vec![x],
        ),
        BalanceCategory::Diminished | BalanceCategory::CriticallyDeficient => (
            vec![x.generated_by(), x],
            vec![x.controls(), x.generates(), x.controlled_by()],
        ),
        BalanceCategory::Balanced => (vec![x, x.generated_by()], Vec::new()),
    };
    Favorability {
        favorable: dedup(&favorable),
        unfavorable: dedup(&unfavorable),
    }
}
