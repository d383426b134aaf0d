use serde::{Deserialize, Serialize};

use super::ConfidenceLevel;

/// Which entity types were present in the input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiversityFlags {
    pub has_locations: bool,
    pub has_ages: bool,
    pub has_terminology: bool,
}

impl DiversityFlags {
    pub fn count(&self) -> usize {
        [self.has_locations, self.has_ages, self.has_terminology]
            .into_iter()
            .filter(|f| *f)
            .count()
    }
}

/// Every intermediate term of the fusion formula, kept for audit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoringFactors {
    pub base_weighted: f64,
    pub primary_component: f64,
    pub secondary_component: f64,
    pub entity_adjustment: f64,
    pub cross_validation_adjustment: f64,
    pub diversity_bonus: f64,
}

/// Fused confidence and how it was reached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceBreakdown {
    pub primary: f64,
    pub secondary: f64,
    pub entity_quality: f64,
    pub cross_validation: f64,
    pub factors: ScoringFactors,
    pub penalty_applied: f64,
    pub final_confidence: f64,
    pub level: ConfidenceLevel,
    pub recommendations: Vec<String>,
}
