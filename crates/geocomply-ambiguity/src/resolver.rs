//! Folding assessments into one penalty and recommended action.

use geocomply_core::models::{
    AmbiguityAssessment, DisambiguationResult, RecommendedAction, ResolutionStrategy,
    ResolvedEntity,
};
use tracing::debug;

use crate::assessor::AmbiguityAssessor;

impl AmbiguityAssessor {
    /// Combine `assessments` into a single [`DisambiguationResult`].
    ///
    /// The penalty is the sum of impacts capped at `penalty_cap`. Review is
    /// needed if any assessment asks for it or the penalty exceeds
    /// `review_penalty`.
    pub fn resolve_ambiguities(
        &self,
        assessments: &[AmbiguityAssessment],
        use_defaults: bool,
    ) -> DisambiguationResult {
        if assessments.is_empty() {
            return DisambiguationResult::no_ambiguity();
        }

        let penalty = self.capped_penalty(assessments);
        let human_review_needed = assessments.iter().any(|a| a.requires_human_review);

        let recommended_action = if penalty > self.config.review_penalty || human_review_needed {
            RecommendedAction::HumanReview
        } else if penalty > self.config.elevated_penalty {
            RecommendedAction::ElevatedThreshold
        } else {
            RecommendedAction::ProceedWithCaution
        };

        let mut context_used: Vec<String> = Vec::new();
        for clue in assessments.iter().flat_map(|a| &a.context_clues) {
            if !context_used.contains(clue) {
                context_used.push(clue.clone());
            }
        }

        let resolved_entities = assessments
            .iter()
            .filter_map(|a| self.resolve_one(a, use_defaults))
            .collect();

        debug!(
            penalty,
            action = recommended_action.as_str(),
            human_review_needed,
            "ambiguities resolved"
        );

        DisambiguationResult {
            overall_confidence_penalty: penalty,
            recommended_action,
            human_review_needed,
            context_used,
            resolved_entities,
        }
    }

    /// Sum of impacts, capped.
    pub fn capped_penalty(&self, assessments: &[AmbiguityAssessment]) -> f64 {
        let total: f64 = assessments.iter().map(|a| a.confidence_impact.max(0.0)).sum();
        total.min(self.config.penalty_cap)
    }

    fn resolve_one(&self, assessment: &AmbiguityAssessment, use_defaults: bool) -> Option<ResolvedEntity> {
        if use_defaults {
            if let Some(default) = self.weights.default_resolution(&assessment.entity_text) {
                return Some(ResolvedEntity {
                    original: assessment.entity_text.clone(),
                    resolved: default.resolved.clone(),
                    method: "default_resolution".to_string(),
                });
            }
        }
        match assessment.suggested_resolution {
            ResolutionStrategy::AssignUnknown => Some(ResolvedEntity {
                original: assessment.entity_text.clone(),
                resolved: format!("Unknown_{}", assessment.kind),
                method: ResolutionStrategy::AssignUnknown.as_str().to_string(),
            }),
            ResolutionStrategy::FlagHumanReview
            | ResolutionStrategy::InferFromContext
            | ResolutionStrategy::RequestClarification
            | ResolutionStrategy::ApplyDefaultRules => None,
        }
    }
}
