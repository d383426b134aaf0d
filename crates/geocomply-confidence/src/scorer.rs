//! ConfidenceScorer: weighted fusion and penalty application.

use geocomply_core::config::{AmbiguityConfig, ScoringWeights};
use geocomply_core::constants::DEFAULT_ALIGNMENT_THRESHOLD;
use geocomply_core::models::{
    Confidence, ConfidenceBreakdown, ConfidenceLevel, DiversityFlags, ScoringFactors,
};
use geocomply_core::GeoComplyConfig;
use tracing::debug;

use crate::alignment::{self, AlignmentCheck};
use crate::metrics::ConfidenceMetrics;
use crate::rubric::{self, RiskFlags};

/// Stateless fusion scorer. All operations are total and deterministic.
#[derive(Debug, Clone)]
pub struct ConfidenceScorer {
    weights: ScoringWeights,
    caution_note_penalty: f64,
    escalation_note_penalty: f64,
}

impl Default for ConfidenceScorer {
    fn default() -> Self {
        Self::new(ScoringWeights::default(), &AmbiguityConfig::default())
    }
}

impl ConfidenceScorer {
    pub fn new(weights: ScoringWeights, ambiguity: &AmbiguityConfig) -> Self {
        Self {
            weights,
            caution_note_penalty: ambiguity.caution_note_penalty,
            escalation_note_penalty: ambiguity.elevated_penalty,
        }
    }

    pub fn from_config(config: &GeoComplyConfig) -> Self {
        Self::new(config.scoring, &config.ambiguity)
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn classify_level(&self, confidence: f64) -> ConfidenceLevel {
        ConfidenceLevel::from_score(confidence)
    }

    /// Human-readable rubric line for `confidence`.
    pub fn describe(&self, confidence: f64) -> String {
        rubric::description(confidence)
    }

    /// Fuse the four signals into one confidence.
    ///
    /// Inputs are clamped to [0, 1] first; NaN counts as 0.
    pub fn weighted_confidence(
        &self,
        primary: f64,
        secondary: f64,
        entity_quality: f64,
        cross_validation: f64,
        diversity: DiversityFlags,
    ) -> ConfidenceBreakdown {
        let w = &self.weights;
        let primary = Confidence::new(primary).value();
        let secondary = Confidence::new(secondary).value();
        let entity_quality = Confidence::new(entity_quality).value();
        let cross_validation = Confidence::new(cross_validation).value();

        let primary_component = primary * w.primary;
        let secondary_component = secondary * w.secondary;
        let base_weighted = primary_component + secondary_component;
        let entity_adjustment = (entity_quality - 0.5) * w.entity_quality;
        let cross_validation_adjustment = (cross_validation - 0.5) * w.cross_validation;
        let diversity_bonus = (diversity.count() as f64 * w.diversity_step).min(w.diversity_cap);

        let final_confidence = Confidence::new(
            base_weighted + entity_adjustment + cross_validation_adjustment + diversity_bonus,
        )
        .value();
        let level = ConfidenceLevel::from_score(final_confidence);

        let recommendations = rubric::recommendations(
            level,
            RiskFlags {
                ambiguous_entities: entity_quality < w.entity_quality_warn,
                regulatory_conflict: cross_validation < w.cross_validation_warn,
                location_uncertainty: !diversity.has_locations,
            },
        );

        debug!(
            primary,
            secondary,
            entity_quality,
            cross_validation,
            final_confidence,
            level = %level,
            "confidence fused"
        );

        ConfidenceBreakdown {
            primary,
            secondary,
            entity_quality,
            cross_validation,
            factors: ScoringFactors {
                base_weighted,
                primary_component,
                secondary_component,
                entity_adjustment,
                cross_validation_adjustment,
                diversity_bonus,
            },
            penalty_applied: 0.0,
            final_confidence,
            level,
            recommendations,
        }
    }

    /// Subtract an ambiguity penalty from `breakdown`, floored at 0.
    ///
    /// Negative penalties count as 0. Penalties above the caution and
    /// escalation marks prepend the matching notes.
    pub fn apply_ambiguity_penalty(
        &self,
        mut breakdown: ConfidenceBreakdown,
        penalty: f64,
    ) -> ConfidenceBreakdown {
        let penalty = if penalty.is_finite() { penalty.max(0.0) } else { 0.0 };
        breakdown.final_confidence = (breakdown.final_confidence - penalty).max(0.0);
        breakdown.penalty_applied += penalty;
        breakdown.level = ConfidenceLevel::from_score(breakdown.final_confidence);

        let mut notes = Vec::new();
        if penalty > self.caution_note_penalty {
            notes.push(format!(
                "Ambiguity penalty of {penalty:.2} applied - treat classification with caution"
            ));
        }
        if penalty > self.escalation_note_penalty {
            notes.push("Significant ambiguity detected - escalate for review".to_string());
        }
        if !notes.is_empty() {
            notes.append(&mut breakdown.recommendations);
            breakdown.recommendations = notes;
        }
        breakdown
    }

    pub fn validate_alignment(&self, primary: f64, secondary: f64) -> AlignmentCheck {
        alignment::validate_alignment(primary, secondary, DEFAULT_ALIGNMENT_THRESHOLD)
    }

    pub fn validate_alignment_with(
        &self,
        primary: f64,
        secondary: f64,
        threshold: f64,
    ) -> AlignmentCheck {
        alignment::validate_alignment(primary, secondary, threshold)
    }

    /// Concrete suggestions for the weakest factors of `breakdown`.
    pub fn suggest_improvements(&self, breakdown: &ConfidenceBreakdown) -> Vec<String> {
        let f = &breakdown.factors;
        let mut suggestions = Vec::new();
        if f.primary_component < 0.5 {
            suggestions.push(
                "Improve oracle prompting or provide more regulatory context".to_string(),
            );
        }
        if f.secondary_component < 0.2 {
            suggestions.push("Enhance extraction patterns and glossary coverage".to_string());
        }
        if f.entity_adjustment < 0.0 {
            suggestions
                .push("Improve entity extraction quality through glossary updates".to_string());
        }
        if f.cross_validation_adjustment < 0.0 {
            suggestions.push("Review cross-validation logic and alignment criteria".to_string());
        }
        if f.diversity_bonus == 0.0 {
            suggestions
                .push("Extract more diverse entity types for better signal coverage".to_string());
        }
        suggestions
    }

    pub fn export_metrics(&self, breakdown: &ConfidenceBreakdown) -> ConfidenceMetrics {
        ConfidenceMetrics::from_breakdown(breakdown)
    }
}
