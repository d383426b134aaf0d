use serde::{Deserialize, Serialize};

use super::defaults;

/// Weights of the confidence fusion formula.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    pub primary: f64,
    pub secondary: f64,
    pub entity_quality: f64,
    pub cross_validation: f64,
    /// Bonus per entity type present.
    pub diversity_step: f64,
    pub diversity_cap: f64,
    /// Entity quality below this adds an ambiguous-entities note.
    pub entity_quality_warn: f64,
    /// Cross-validation below this adds a regulatory-conflict note.
    pub cross_validation_warn: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            primary: defaults::DEFAULT_PRIMARY_WEIGHT,
            secondary: defaults::DEFAULT_SECONDARY_WEIGHT,
            entity_quality: defaults::DEFAULT_ENTITY_WEIGHT,
            cross_validation: defaults::DEFAULT_CROSS_VALIDATION_WEIGHT,
            diversity_step: defaults::DEFAULT_DIVERSITY_STEP,
            diversity_cap: defaults::DEFAULT_DIVERSITY_CAP,
            entity_quality_warn: defaults::DEFAULT_ENTITY_QUALITY_WARN,
            cross_validation_warn: defaults::DEFAULT_CROSS_VALIDATION_WARN,
        }
    }
}
