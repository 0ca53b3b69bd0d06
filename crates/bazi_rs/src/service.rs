//! Submission pipeline: birth data and context in, sealed record out.

use bazi_base::{ChartProfile, PillarChart, TargetYear, compute_pillars, profile_from_pillars};
use bazi_config::AnalysisConfig;
use bazi_report::{Report, SeededVariation, UserContext, generate_report};
use bazi_store::{
    JsonFileRepository, MemoryRepository, ResultRepository, Snapshot, StoredRecord,
};
use bazi_time::BirthInput;
use chrono::{Datelike, Utc};

use crate::error::BaziError;

/// Chart, report and storage behind one handle.
#[derive(Debug, Clone)]
pub struct FortuneService<R: ResultRepository> {
    config: AnalysisConfig,
    repo: R,
}

impl FortuneService<JsonFileRepository> {
    /// Service storing results at `config.store_path`.
    pub fn with_file_store(config: AnalysisConfig) -> Self {
        let repo = JsonFileRepository::new(config.store_path.clone());
        Self::new(config, repo)
    }
}

impl FortuneService<MemoryRepository> {
    /// Service keeping results in memory only.
    pub fn in_memory(config: AnalysisConfig) -> Self {
        Self::new(config, MemoryRepository::new())
    }
}

impl<R: ResultRepository> FortuneService<R> {
    pub fn new(config: AnalysisConfig, repo: R) -> Self {
        Self { config, repo }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// The configured forecast year.
    pub fn target_year(&self) -> TargetYear {
        TargetYear::new(self.config.target_year)
    }

    /// Reject birth years outside `[min_birth_year, current_year]`.
    pub fn check_birth_year(&self, birth: &BirthInput) -> Result<(), BaziError> {
        self.check_birth_year_against(birth, Utc::now().year())
    }

    fn check_birth_year_against(&self, birth: &BirthInput, current: i32) -> Result<(), BaziError> {
        let min = self.config.min_birth_year;
        if birth.year < min {
            return Err(BaziError::BirthYearTooEarly { year: birth.year, min });
        }
        if birth.year > current {
            return Err(BaziError::BirthYearInFuture { year: birth.year, current });
        }
        Ok(())
    }

    /// Compute pillars, warning on timezone fallback and term boundaries.
    pub fn pillars(&self, birth: &BirthInput) -> Result<PillarChart, BaziError> {
        birth.validate()?;
        let chart = compute_pillars(birth)?;
        if let Some(fallback) = &chart.timezone_fallback {
            tracing::warn!("{fallback}; using the reference offset instead");
        }
        if chart.solar_month.near_boundary {
            tracing::warn!(
                "Birth date falls within the {} window; the month pillar may differ from an ephemeris reading",
                chart.solar_month.term.english()
            );
        }
        Ok(chart)
    }

    /// Full chart profile for a birth.
    pub fn chart(&self, birth: &BirthInput) -> Result<ChartProfile, BaziError> {
        let chart = self.pillars(birth)?;
        let profile = profile_from_pillars(&chart, &self.config.chart_options())?;
        tracing::debug!(
            "Derived chart: day master {}, balance {}, {} in {}",
            profile.day_stem.name(),
            profile.balance.name(),
            profile.target_year_interaction.category.name(),
            profile.target_year_interaction.target_year
        );
        Ok(profile)
    }

    /// Report seeded from the profile and context.
    pub fn report(&self, profile: &ChartProfile, context: &UserContext) -> Report {
        generate_report(
            profile,
            context,
            &mut SeededVariation::for_inputs(profile, context),
        )
    }

    /// Validate, compute, report, seal and save. Replaces any earlier result.
    pub fn submit(
        &mut self,
        birth: &BirthInput,
        context: UserContext,
    ) -> Result<StoredRecord, BaziError> {
        self.check_birth_year(birth)?;
        let chart_profile = self.chart(birth)?;
        let report = self.report(&chart_profile, &context);
        let record = StoredRecord::seal(Snapshot {
            chart_profile,
            user_context: context,
            report,
        })?;
        self.repo.save(&record)?;
        tracing::info!("Stored result {}", record.token);
        Ok(record)
    }

    /// The most recently submitted result, if any.
    pub fn latest(&self) -> Result<Option<StoredRecord>, BaziError> {
        Ok(self.repo.load()?)
    }

    /// Forget the stored result.
    pub fn clear(&mut self) -> Result<(), BaziError> {
        self.repo.clear()?;
        tracing::info!("Cleared stored result");
        Ok(())
    }
}
