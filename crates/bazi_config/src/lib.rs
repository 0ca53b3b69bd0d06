//! Configuration for chart analysis and result storage.
//!
//! Every field has a default, so an empty file (or no file at all) yields
//! a working configuration:
//!
//! ```toml
//! target_year = 2026
//! min_birth_year = 1900
//! store_path = "bazi_latest.json"
//!
//! [thresholds]
//! elevated_ratio = 1.5
//! excessive_ratio = 2.0
//! diminished_lean = 1.3
//! deficient_lean = 2.0
//! dispersion_floor = 0.12
//! ```

pub mod error;

use std::fs;
use std::path::{Path, PathBuf};

use bazi_base::calculator::CYCLE_EPOCH_YEAR;
use bazi_base::{BalanceThresholds, ChartOptions, DEFAULT_TARGET_YEAR, TargetYear};
use serde::{Deserialize, Serialize};

pub use error::ConfigError;

/// Earliest birth year accepted by default.
pub const DEFAULT_MIN_BIRTH_YEAR: i32 = 1900;

/// Default location of the persisted result.
pub const DEFAULT_STORE_PATH: &str = "bazi_latest.json";

/// Analysis and storage settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Year the report forecasts.
    pub target_year: i32,
    /// Births before this year are rejected.
    pub min_birth_year: i32,
    pub thresholds: BalanceThresholds,
    /// JSON file holding the most recent result.
    pub store_path: PathBuf,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            target_year: DEFAULT_TARGET_YEAR,
            min_birth_year: DEFAULT_MIN_BIRTH_YEAR,
            thresholds: BalanceThresholds::default(),
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
        }
    }
}

impl AnalysisConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Load `path` if given, otherwise the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    /// Check ranges and threshold ordering.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_birth_year < CYCLE_EPOCH_YEAR {
            return Err(ConfigError::Invalid(format!(
                "min_birth_year must be at least {CYCLE_EPOCH_YEAR}, got {}",
                self.min_birth_year
            )));
        }
        if self.target_year < self.min_birth_year {
            return Err(ConfigError::Invalid(format!(
                "target_year {} precedes min_birth_year {}",
                self.target_year, self.min_birth_year
            )));
        }
        if self.store_path.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("store_path must not be empty".into()));
        }
        self.thresholds
            .validate()
            .map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    /// Chart options derived from this configuration.
    pub fn chart_options(&self) -> ChartOptions {
        ChartOptions {
            target_year: TargetYear::new(self.target_year),
            thresholds: self.thresholds,
        }
    }
}
