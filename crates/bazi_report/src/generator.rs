//! Report generation from a chart profile and user context.
//!
//! Scores and tags follow fixed rules over the profile; only phrasing and
//! the domain score jitter go through the [`Variation`] source.

use bazi_base::{
    ALL_SOLAR_TERMS, BalanceCategory, ChartProfile, InteractionCategory, Pillar, month_pillar,
    year_pillar,
};

use crate::context::{ALL_FOCUS_AREAS, Energy, FocusArea, Strategy, UserContext};
use crate::text;
use crate::types::{
    Basis, DomainReport, MAX_SCORE, MIN_SCORE, MonthReport, MonthTag, Overall, Report, Trend,
};
use crate::variation::{Variation, choose};

const OVERALL_BASE: i32 = 70;
const DOMAIN_BASE: i32 = 65;
/// Domain jitter is drawn from `0..DOMAIN_SPREAD`.
const DOMAIN_SPREAD: u32 = 20;

fn clamp_score(raw: i32) -> u8 {
    raw.clamp(i32::from(MIN_SCORE), i32::from(MAX_SCORE)) as u8
}

/// Build the full report.
pub fn generate_report(
    profile: &ChartProfile,
    context: &UserContext,
    variation: &mut impl Variation,
) -> Report {
    Report {
        overall: overall(profile, context, variation),
        domains: domains(profile, context, variation),
        months: months(profile, context, variation),
        basis: basis(),
    }
}

// ---------------------------------------------------------------------------
// Overall
// ---------------------------------------------------------------------------

pub const fn category_adjustment(category: InteractionCategory) -> i32 {
    match category {
        InteractionCategory::StrongBoost => 18,
        InteractionCategory::Boost => 15,
        InteractionCategory::Opportunity => 10,
        InteractionCategory::Drain => -5,
        InteractionCategory::Challenge => -8,
        InteractionCategory::Pressure => -10,
    }
}

pub const fn strategy_bonus(strategy: Strategy, balance: BalanceCategory) -> i32 {
    match strategy {
        Strategy::HoldSteady if balance.is_deficit() => 5,
        Strategy::Advance if balance.is_excess() => 5,
        Strategy::DefendThenAdvance => 3,
        Strategy::AdvanceThenDefend => 2,
        _ => 0,
    }
}

/// Overall score before phrasing.
pub fn overall_score(profile: &ChartProfile, context: &UserContext) -> u8 {
    let category = profile.target_year_interaction.category;
    clamp_score(
        OVERALL_BASE
            + category_adjustment(category)
            + strategy_bonus(context.strategy(), profile.balance),
    )
}

fn overall(profile: &ChartProfile, context: &UserContext, v: &mut impl Variation) -> Overall {
    let interaction = profile.target_year_interaction;
    let category = interaction.category;

    let mut keywords: Vec<String> = text::year_themes(interaction.target_element)
        .iter()
        .map(|s| s.to_string())
        .collect();
    if let Some(extra) = text::adverse_keyword(category) {
        keywords.push(extra.to_string());
    }

    Overall {
        score: overall_score(profile, context),
        headline: choose(v, &text::headlines(category)).to_string(),
        keywords,
        advice: text::advice(category).to_string(),
    }
}

// ---------------------------------------------------------------------------
// Domains
// ---------------------------------------------------------------------------

/// Rule-based domain adjustment, excluding the jitter.
pub fn domain_adjustment(domain: FocusArea, profile: &ChartProfile, context: &UserContext) -> i32 {
    let category = profile.target_year_interaction.category;
    let mut adj = 0;
    if domain == context.focus() {
        adj += 10;
    }
    if matches!(domain, FocusArea::Career | FocusArea::Social) {
        adj += match category {
            InteractionCategory::StrongBoost | InteractionCategory::Boost => 8,
            InteractionCategory::Opportunity => 5,
            _ => 0,
        };
    }
    if domain == FocusArea::Health {
        if category == InteractionCategory::Drain {
            adj -= 8;
        }
        if context.energy() == Energy::Depleted {
            adj -= 5;
        }
    }
    adj
}

fn domains(profile: &ChartProfile, context: &UserContext, v: &mut impl Variation) -> Vec<DomainReport> {
    let target = profile.target_year_interaction.target_element;
    ALL_FOCUS_AREAS
        .iter()
        .map(|&domain| {
            let jitter = v.offset(DOMAIN_SPREAD) as i32;
            let score = clamp_score(DOMAIN_BASE + jitter + domain_adjustment(domain, profile, context));
            let t = text::domain_text(domain);
            DomainReport {
                domain,
                score,
                trend: Trend::from_score(score),
                bright_spot: t.bright_spot.to_string(),
                pitfall: t.pitfall.to_string(),
                actions: t.actions.iter().map(|s| s.to_string()).collect(),
                basis: format!("{} ({} year).", t.basis, target.name()),
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Months
// ---------------------------------------------------------------------------

/// Tag a month pillar against the chart.
///
/// A branch clashing with the day branch marks a turning month; otherwise
/// the stem and branch elements are checked against the favorable and
/// unfavorable lists.
pub fn month_tag(profile: &ChartProfile, pillar: Pillar) -> MonthTag {
    if pillar.branch == profile.day_branch().clash_partner() {
        return MonthTag::Turning;
    }
    let stem_el = pillar.stem.element();
    let branch_el = pillar.branch.element();
    let good = |e| profile.favorable.contains(&e);
    let bad = |e| profile.unfavorable.contains(&e);
    match (good(stem_el), good(branch_el), bad(stem_el), bad(branch_el)) {
        (true, true, _, _) => MonthTag::Auspicious,
        (true, false, _, _) => MonthTag::Opportunity,
        (false, _, true, true) => MonthTag::Cautious,
        (false, _, true, false) => MonthTag::Challenge,
        _ => MonthTag::Steady,
    }
}

fn months(profile: &ChartProfile, context: &UserContext, v: &mut impl Variation) -> Vec<MonthReport> {
    let year_stem = year_pillar(profile.target_year_interaction.target_year).stem;
    ALL_SOLAR_TERMS
        .iter()
        .map(|&term| {
            let month = term.solar_month();
            let pillar = month_pillar(year_stem, month);
            let tag = month_tag(profile, pillar);

            let mut reminders = vec![choose(v, &text::GENERAL_REMINDERS).to_string()];
            reminders.extend(context.avoidances().iter().map(|a| a.reminder().to_string()));

            MonthReport {
                month,
                solar_term: term,
                pillar,
                tag,
                theme: choose(v, &text::month_themes(tag)).to_string(),
                reminders,
                good_for: choose(v, &text::GOOD_FOR).to_string(),
                method: text::month_method(tag, month).to_string(),
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Basis
// ---------------------------------------------------------------------------

fn basis() -> Basis {
    Basis {
        theory: text::BASIS_THEORY.to_string(),
        rules: text::BASIS_RULES.to_string(),
        disclaimer: text::BASIS_DISCLAIMER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use bazi_base::{ChartOptions, build_chart_profile};
    use bazi_time::{BirthInput, REFERENCE_TIMEZONE};

    use super::*;
    use crate::context::Avoidance;
    use crate::variation::FirstChoice;

    fn reference_profile() -> ChartProfile {
        let birth = BirthInput::new(1990, 1, 1, 12, 0, REFERENCE_TIMEZONE);
        build_chart_profile(&birth, &ChartOptions::default()).unwrap()
    }

    fn context(focus: FocusArea, strategy: Strategy, energy: Energy) -> UserContext {
        UserContext::new(
            focus,
            "Seeking a promotion",
            strategy,
            vec![Avoidance::Conflict, Avoidance::LateNights],
            energy,
        )
        .unwrap()
    }

    #[test]
    fn adjustments_table() {
        assert_eq!(category_adjustment(InteractionCategory::StrongBoost), 18);
        assert_eq!(category_adjustment(InteractionCategory::Pressure), -10);
        assert_eq!(strategy_bonus(Strategy::Advance, BalanceCategory::Elevated), 5);
        assert_eq!(strategy_bonus(Strategy::Advance, BalanceCategory::Diminished), 0);
        assert_eq!(strategy_bonus(Strategy::HoldSteady, BalanceCategory::Diminished), 5);
        assert_eq!(strategy_bonus(Strategy::HoldSteady, BalanceCategory::Balanced), 0);
        assert_eq!(strategy_bonus(Strategy::DefendThenAdvance, BalanceCategory::Balanced), 3);
        assert_eq!(strategy_bonus(Strategy::AdvanceThenDefend, BalanceCategory::Balanced), 2);
    }

    #[test]
    fn reference_overall_score() {
        // Opportunity (+10) with Advance on an excessive chart (+5).
        let p = reference_profile();
        let c = context(FocusArea::Career, Strategy::Advance, Energy::Steady);
        assert_eq!(overall_score(&p, &c), 85);
    }

    #[test]
    fn focus_domain_gets_bonus() {
        let p = reference_profile();
        let c = context(FocusArea::Wealth, Strategy::Advance, Energy::Steady);
        assert_eq!(domain_adjustment(FocusArea::Wealth, &p, &c), 10);
        assert_eq!(domain_adjustment(FocusArea::Romance, &p, &c), 0);
    }

    #[test]
    fn depleted_energy_hits_health() {
        let p = reference_profile();
        let c = context(FocusArea::Career, Strategy::Advance, Energy::Depleted);
        assert_eq!(domain_adjustment(FocusArea::Health, &p, &c), -5);
    }

    #[test]
    fn first_choice_domain_scores() {
        let p = reference_profile();
        let c = context(FocusArea::Career, Strategy::Advance, Energy::Steady);
        let r = generate_report(&p, &c, &mut FirstChoice);
        let scores: Vec<u8> = r.domains.iter().map(|d| d.score).collect();
        // Career and Social pick up the Opportunity bonus.
        assert_eq!(scores, vec![80, 65, 65, 65, 70]);
        assert_eq!(r.domains[0].trend, Trend::Rising);
        assert_eq!(r.domains[1].trend, Trend::Volatile);
        assert_eq!(r.domains[4].trend, Trend::Steady);
    }

    #[test]
    fn months_follow_target_year() {
        let p = reference_profile();
        let c = context(FocusArea::Career, Strategy::Advance, Energy::Steady);
        let r = generate_report(&p, &c, &mut FirstChoice);
        assert_eq!(r.months.len(), 12);
        // 2026 is a Bing year: the Lichun month is Ji-Mao.
        assert_eq!(r.months[0].month, 1);
        assert_eq!(r.months[0].pillar.to_string(), "Ji-Mao");
        for m in &r.months {
            assert_eq!(m.reminders.len(), 1 + c.avoidances().len());
        }
    }

    #[test]
    fn clash_with_day_branch_is_turning() {
        // Day branch Yin clashes with Shen, the branch of solar month 6.
        let p = reference_profile();
        let c = context(FocusArea::Career, Strategy::Advance, Energy::Steady);
        let r = generate_report(&p, &c, &mut FirstChoice);
        let shen = r.months.iter().find(|m| m.pillar.branch == bazi_base::Branch::Shen).unwrap();
        assert_eq!(shen.month, 6);
        assert_eq!(shen.tag, MonthTag::Turning);
    }

    #[test]
    fn overall_keywords_follow_category() {
        let mut p = reference_profile();
        let c = context(FocusArea::Career, Strategy::Advance, Energy::Steady);
        let r = generate_report(&p, &c, &mut FirstChoice);
        assert_eq!(r.overall.keywords, ["Visibility", "Expression", "Momentum"]);
        assert_eq!(r.overall.headline, "Openings appear for those who watch");

        p.target_year_interaction.category = InteractionCategory::Challenge;
        let r = generate_report(&p, &c, &mut FirstChoice);
        assert_eq!(r.overall.keywords, ["Visibility", "Expression", "Momentum", "Stay grounded"]);
        assert_eq!(r.overall.headline, "Tested, and stronger for it");
    }
}
