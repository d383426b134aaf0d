use geocomply_core::constants::{LOW_CONFIDENCE_CEILING, MEDIUM_CONFIDENCE_CEILING};
use geocomply_core::models::{ConfidenceBreakdown, ConfidenceLevel, ScoringFactors};
use serde::{Deserialize, Serialize};

use crate::rubric;

/// Rubric boundaries as published alongside every metrics snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RubricThresholds {
    pub low_upper: f64,
    pub medium_lower: f64,
    pub medium_upper: f64,
    pub high_lower: f64,
}

impl Default for RubricThresholds {
    fn default() -> Self {
        Self {
            low_upper: LOW_CONFIDENCE_CEILING,
            medium_lower: 0.31,
            medium_upper: MEDIUM_CONFIDENCE_CEILING,
            high_lower: 0.71,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComponentScores {
    pub primary: f64,
    pub secondary: f64,
    pub entity_quality: f64,
    pub cross_validation: f64,
}

/// Serializable monitoring snapshot of one breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceMetrics {
    pub confidence_score: f64,
    pub confidence_level: ConfidenceLevel,
    pub description: String,
    pub component_scores: ComponentScores,
    pub scoring_factors: ScoringFactors,
    pub penalty_applied: f64,
    pub recommendations: Vec<String>,
    pub rubric_thresholds: RubricThresholds,
}

impl ConfidenceMetrics {
    pub fn from_breakdown(breakdown: &ConfidenceBreakdown) -> Self {
        Self {
            confidence_score: breakdown.final_confidence,
            confidence_level: breakdown.level,
            description: rubric::description(breakdown.final_confidence),
            component_scores: ComponentScores {
                primary: breakdown.primary,
                secondary: breakdown.secondary,
                entity_quality: breakdown.entity_quality,
                cross_validation: breakdown.cross_validation,
            },
            scoring_factors: breakdown.factors,
            penalty_applied: breakdown.penalty_applied,
            recommendations: breakdown.recommendations.clone(),
            rubric_thresholds: RubricThresholds::default(),
        }
    }
}
