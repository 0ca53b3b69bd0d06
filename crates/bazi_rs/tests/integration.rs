//! End-to-end submissions through the facade.

use std::path::PathBuf;

use bazi_rs::*;

fn temp_store() -> PathBuf {
    std::env::temp_dir().join(format!("bazi_service_{}.json", uuid::Uuid::new_v4()))
}

fn file_service(path: &PathBuf) -> FortuneService<JsonFileRepository> {
    let config = AnalysisConfig {
        store_path: path.clone(),
        ..AnalysisConfig::default()
    };
    FortuneService::with_file_store(config)
}

fn context(focus: FocusArea) -> UserContext {
    UserContext::new(
        focus,
        "Looking for a steadier year",
        Strategy::HoldSteady,
        vec![Avoidance::LateNights, Avoidance::RiskyInvestment],
        Energy::Depleted,
    )
    .unwrap()
}

#[test]
fn reference_chart_through_facade() {
    let service = FortuneService::in_memory(AnalysisConfig::default());
    let birth = BirthInput::new(1990, 1, 1, 12, 0, REFERENCE_TIMEZONE);
    let p = service.chart(&birth).unwrap();
    let names: Vec<String> = p.pillars.iter().map(|(_, pl)| pl.to_string()).collect();
    assert_eq!(names, ["Geng-Wu", "Ding-Mao", "Bing-Yin", "Jia-Wu"]);
    assert_eq!(p.day_stem, Stem::Bing);
    assert_eq!(service.target_year().year, 2026);
}

#[test]
fn submission_persists_across_service_instances() {
    let path = temp_store();
    let birth = BirthInput::new(1988, 8, 20, 6, 15, "Europe/London");
    let record = file_service(&path).submit(&birth, context(FocusArea::Health)).unwrap();

    let reopened = file_service(&path);
    let latest = reopened.latest().unwrap().unwrap();
    assert_eq!(latest, record);
    // The stored report is exactly what regeneration yields.
    let regenerated = reopened.report(&latest.snapshot.chart_profile, &latest.snapshot.user_context);
    assert_eq!(regenerated, latest.snapshot.report);

    file_service(&path).clear().unwrap();
    assert!(reopened.latest().unwrap().is_none());
}

#[test]
fn resubmission_replaces_result() {
    let mut service = FortuneService::in_memory(AnalysisConfig::default());
    let a = service
        .submit(&BirthInput::new(1975, 3, 3, 3, 3, REFERENCE_TIMEZONE), context(FocusArea::Wealth))
        .unwrap();
    let b = service
        .submit(&BirthInput::date_only(1995, 11, 11, REFERENCE_TIMEZONE), context(FocusArea::Social))
        .unwrap();
    assert_ne!(a.token, b.token);
    let latest = service.latest().unwrap().unwrap();
    assert_eq!(latest.token, b.token);
    assert!(!latest.snapshot.chart_profile.hour_known());
}

#[test]
fn early_birth_is_rejected_without_storing() {
    let mut service = FortuneService::in_memory(AnalysisConfig::default());
    let err = service
        .submit(&BirthInput::new(1850, 5, 5, 5, 5, REFERENCE_TIMEZONE), context(FocusArea::Career))
        .unwrap_err();
    assert!(matches!(err, BaziError::BirthYearTooEarly { year: 1850, min: 1900 }));
    assert!(service.latest().unwrap().is_none());
}

#[test]
fn configured_target_year_changes_interaction() {
    let config = AnalysisConfig::from_toml_str("target_year = 2027").unwrap();
    let service = FortuneService::in_memory(config);
    let p = service
        .chart(&BirthInput::new(1990, 1, 1, 12, 0, REFERENCE_TIMEZONE))
        .unwrap();
    // 2027 is a Ding year: Fire again.
    assert_eq!(p.target_year_interaction.target_year, 2027);
    assert_eq!(p.target_year_interaction.target_element, Element::Fire);
}

#[test]
fn record_serializes_with_expected_shape() {
    let mut service = FortuneService::in_memory(AnalysisConfig::default());
    let record = service
        .submit(&BirthInput::new(2000, 1, 1, 0, 30, REFERENCE_TIMEZONE), context(FocusArea::Romance))
        .unwrap();
    let value = serde_json::to_value(&record).unwrap();
    assert_eq!(value["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(value["snapshot"]["user_context"]["focus"], "Romance");
    assert_eq!(value["snapshot"]["report"]["months"].as_array().unwrap().len(), 12);
}
