pub mod ambiguity_config;
pub mod defaults;
pub mod observability_config;
pub mod orchestrator_config;
pub mod scoring_config;
pub mod threshold_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use ambiguity_config::AmbiguityConfig;
pub use observability_config::ObservabilityConfig;
pub use orchestrator_config::OrchestratorConfig;
pub use scoring_config::ScoringWeights;
pub use threshold_config::ThresholdConfig;

use crate::errors::ConfigError;

/// Top-level configuration aggregating all subsystem configs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeoComplyConfig {
    pub thresholds: ThresholdConfig,
    pub scoring: ScoringWeights,
    pub ambiguity: AmbiguityConfig,
    pub orchestrator: OrchestratorConfig,
    pub observability: ObservabilityConfig,
}

impl GeoComplyConfig {
    /// Load configuration from a TOML string and validate it.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file and validate it.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_thresholds(&self.thresholds)?;

        let weights = [
            ("scoring.primary", self.scoring.primary),
            ("scoring.secondary", self.scoring.secondary),
            ("scoring.entity_quality", self.scoring.entity_quality),
            ("scoring.cross_validation", self.scoring.cross_validation),
            ("scoring.diversity_step", self.scoring.diversity_step),
            ("scoring.diversity_cap", self.scoring.diversity_cap),
        ];
        for (field, value) in weights {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: "must be a non-negative number".to_string(),
                });
            }
        }

        if !(0.0..=1.0).contains(&self.ambiguity.penalty_cap) {
            return Err(ConfigError::ValidationFailed {
                field: "ambiguity.penalty_cap".to_string(),
                message: "must be between 0.0 and 1.0".to_string(),
            });
        }
        if !(0.0..=1.0).contains(&self.orchestrator.clear_cut_threshold) {
            return Err(ConfigError::ValidationFailed {
                field: "orchestrator.clear_cut_threshold".to_string(),
                message: "must be between 0.0 and 1.0".to_string(),
            });
        }
        Ok(())
    }
}

/// Every threshold must lie in [0, 1], each category may appear once, and
/// the default category must have an entry.
pub fn validate_thresholds(thresholds: &ThresholdConfig) -> Result<(), ConfigError> {
    let mut seen = std::collections::BTreeSet::new();
    for entry in &thresholds.categories {
        let value = entry.confidence_threshold;
        if !(0.0..=1.0).contains(&value) {
            return Err(ConfigError::ValidationFailed {
                field: format!("thresholds.{}", entry.category),
                message: format!("threshold {value} must be between 0.0 and 1.0"),
            });
        }
        if !seen.insert(entry.category) {
            return Err(ConfigError::ValidationFailed {
                field: format!("thresholds.{}", entry.category),
                message: "category listed more than once".to_string(),
            });
        }
    }
    if thresholds.get(thresholds.default_category).is_none() {
        return Err(ConfigError::ValidationFailed {
            field: "thresholds.default_category".to_string(),
            message: format!("{} has no threshold entry", thresholds.default_category),
        });
    }
    Ok(())
}
