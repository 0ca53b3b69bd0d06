//! English phrase tables for report sections.

use bazi_base::{Element, InteractionCategory};

use crate::context::FocusArea;
use crate::types::MonthTag;

pub const fn headlines(category: InteractionCategory) -> [&'static str; 3] {
    match category {
        InteractionCategory::StrongBoost => [
            "The year's current runs your way",
            "Timing and momentum line up",
            "A tailwind year to build on",
        ],
        InteractionCategory::Boost => [
            "Support arrives when you reach for it",
            "A year that rewards showing up",
            "Steady backing for your plans",
        ],
        InteractionCategory::Opportunity => [
            "Openings appear for those who watch",
            "Turn surplus into results",
            "The door is ajar; step through carefully",
        ],
        InteractionCategory::Drain => [
            "Effort out, reward later",
            "Spend energy where it compounds",
            "A sowing year more than a harvest",
        ],
        InteractionCategory::Challenge => [
            "Tested, and stronger for it",
            "Heat that tempers rather than burns",
            "Hold your center while things shift",
        ],
        InteractionCategory::Pressure => [
            "Pressure worth converting into drive",
            "Bend without breaking",
            "Outside demands sharpen your focus",
        ],
    }
}

pub const fn advice(category: InteractionCategory) -> &'static str {
    match category {
        InteractionCategory::StrongBoost => {
            "Move early and visibly while conditions favor you, but keep promises modest."
        }
        InteractionCategory::Boost => {
            "Use the support on offer to finish what you start; avoid spreading too thin."
        }
        InteractionCategory::Opportunity => {
            "Read the situation, commit to the best opening, and advance in measured steps."
        }
        InteractionCategory::Drain => {
            "Budget your energy, channel it into craft and expression, and schedule recovery."
        }
        InteractionCategory::Challenge => {
            "Do not fight the current head on; reinforce your base and wait for a clear opening."
        }
        InteractionCategory::Pressure => {
            "Yield where it costs little, borrow strength from allies, and look for the gap."
        }
    }
}

/// Extra keyword for adverse categories.
pub const fn adverse_keyword(category: InteractionCategory) -> Option<&'static str> {
    match category {
        InteractionCategory::Drain => Some("Pace yourself"),
        InteractionCategory::Challenge => Some("Stay grounded"),
        InteractionCategory::Pressure => Some("Soft over hard"),
        _ => None,
    }
}

/// Themes of a year ruled by the given element.
pub const fn year_themes(element: Element) -> [&'static str; 3] {
    match element {
        Element::Wood => ["Growth", "Planning", "New ventures"],
        Element::Fire => ["Visibility", "Expression", "Momentum"],
        Element::Earth => ["Consolidation", "Trust", "Foundations"],
        Element::Metal => ["Discipline", "Decisions", "Refinement"],
        Element::Water => ["Learning", "Adaptability", "Networks"],
    }
}

pub struct DomainText {
    pub bright_spot: &'static str,
    pub pitfall: &'static str,
    pub actions: [&'static str; 3],
    pub basis: &'static str,
}

pub const fn domain_text(domain: FocusArea) -> DomainText {
    match domain {
        FocusArea::Career => DomainText {
            bright_spot: "Room to show initiative and creative range",
            pitfall: "Impatience with slower colleagues",
            actions: [
                "Deepen one core professional skill",
                "Volunteer for work that puts you in view",
                "Invest in relationships across teams",
            ],
            basis: "The year's element meets the day master in the officer and output stars",
        },
        FocusArea::Wealth => DomainText {
            bright_spot: "Regular income holds; side income has openings",
            pitfall: "Impulse purchases and speculative bets",
            actions: [
                "Automate savings before spending",
                "Test one new income channel",
                "Review fixed costs each quarter",
            ],
            basis: "Wealth follows the element the day master controls",
        },
        FocusArea::Romance => DomainText {
            bright_spot: "Feelings are easier to express",
            pitfall: "Mood swings spilling into arguments",
            actions: [
                "Say the appreciative thing out loud",
                "Pause before reacting in disagreements",
                "Plan unhurried time together",
            ],
            basis: "Warmth in the chart eases emotional expression",
        },
        FocusArea::Health => DomainText {
            bright_spot: "Plenty of drive when rested",
            pitfall: "Overheating, poor sleep, and strain on the heart",
            actions: [
                "Keep a regular sleep window",
                "Move daily at moderate intensity",
                "Eat light and drink enough water",
            ],
            basis: "Health tracks how evenly the five elements are spread",
        },
        FocusArea::Social => DomainText {
            bright_spot: "An active circle and new introductions",
            pitfall: "Sharp words that land harder than meant",
            actions: [
                "Say yes to a few new gatherings",
                "Choose gentler phrasing in tense moments",
                "Check in with the people who matter most",
            ],
            basis: "Companion stars in the chart shape how you connect",
        },
    }
}

pub const fn month_themes(tag: MonthTag) -> [&'static str; 3] {
    match tag {
        MonthTag::Auspicious => ["Things fall into place", "Smooth going", "Good news travels"],
        MonthTag::Steady => ["Steady as she goes", "Keep the routine", "Maintain the course"],
        MonthTag::Cautious => ["Tread carefully", "Keep a low profile", "Avoid rash moves"],
        MonthTag::Opportunity => ["Seize the opening", "Make the first move", "Stretch your reach"],
        MonthTag::Challenge => ["Meet it head on", "Turn risk into footing", "Use leverage, not force"],
        MonthTag::Turning => ["Read the shift", "Stay flexible", "Redraw the plan"],
    }
}

pub const fn month_method(tag: MonthTag, month: u8) -> &'static str {
    match tag {
        MonthTag::Auspicious | MonthTag::Opportunity => "Act first and press the advantage",
        MonthTag::Cautious | MonthTag::Challenge => "Hold position and conserve resources",
        MonthTag::Turning => "Review plans before committing",
        MonthTag::Steady => {
            if month % 3 == 0 {
                "Favor stillness over motion"
            } else {
                "Take measured initiative"
            }
        }
    }
}

pub const GENERAL_REMINDERS: [&str; 6] = [
    "Mind what you say and how",
    "Act decisively when timing is right",
    "Stay calm and decide on facts",
    "Ask for outside opinions",
    "Look after your body",
    "Tend your key relationships",
];

pub const GOOD_FOR: [&str; 8] = [
    "Study and training",
    "Business negotiations",
    "Social gatherings",
    "Signing agreements",
    "Proposals and commitments",
    "Financial planning",
    "Health checkups",
    "Moving house",
];

pub const BASIS_THEORY: &str = "This reading follows the classical four pillars method. The year, month, \
day and hour of birth each form a pillar of one heavenly stem and one earthly branch. The day stem (day \
master) stands for the person; the five elements (wood, fire, earth, metal, water) and their generating \
and controlling cycles describe balance; the ten gods describe how every other stem relates to the day \
master; and the target year's pillar is weighed against the chart.";

pub const BASIS_RULES: &str = "Year pillar: fixed sixty-year cycle offset, no spring-festival boundary. \
Month pillar: a date inside one of the twelve month-opening solar-term windows takes that term's \
ordinal, any other date keeps its civil month number. Day pillar: sixty-day cycle \
counted from 1900-01-01 (Jia-Xu). Hour pillar: twelve two-hour windows, Zi starting at 23:00. Birth times \
are converted to UTC+08:00 first. Elements are weighted 2.0 per stem, 1.5 per branch and 0.8/0.4/0.2 per \
hidden stem.";

pub const BASIS_DISCLAIMER: &str = "For reflection and entertainment only. Nothing here is financial, \
medical or legal advice. Solar-term boundaries are approximate and charts born within a day of a term \
may differ from an ephemeris-based reading.";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::ALL_FOCUS_AREAS;
    use crate::types::ALL_MONTH_TAGS;
    use bazi_base::ALL_INTERACTION_CATEGORIES;

    #[test]
    fn tables_are_populated() {
        for c in ALL_INTERACTION_CATEGORIES {
            assert!(headlines(c).iter().all(|h| !h.is_empty()));
            assert!(!advice(c).is_empty());
            assert_eq!(adverse_keyword(c).is_some(), !c.is_supportive());
        }
        for d in ALL_FOCUS_AREAS {
            assert!(domain_text(d).actions.iter().all(|a| !a.is_empty()));
        }
        for t in ALL_MONTH_TAGS {
            assert!(month_themes(t).iter().all(|s| !s.is_empty()));
        }
    }
}
