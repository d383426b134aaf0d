use geocomply_ambiguity::{AmbiguityAssessor, AmbiguityContext};
use geocomply_core::models::{
    AmbiguityAssessment, AmbiguityKind, RecommendedAction, ResolutionStrategy, ReviewPriority,
};
use proptest::prelude::*;

fn assessment(impact: f64, review: bool) -> AmbiguityAssessment {
    AmbiguityAssessment {
        kind: AmbiguityKind::VagueLocation,
        confidence_impact: impact,
        entity_text: "somewhere".to_string(),
        context_clues: Vec::new(),
        suggested_resolution: ResolutionStrategy::InferFromContext,
        alternative_interpretations: Vec::new(),
        requires_human_review: review,
        priority: ReviewPriority::Low,
    }
}

proptest! {
    #[test]
    fn penalty_is_sum_capped_at_half(
        items in prop::collection::vec((0.0f64..=0.5, any::<bool>()), 0..12)
    ) {
        let assessments: Vec<_> = items.iter().map(|&(i, r)| assessment(i, r)).collect();
        let result = AmbiguityAssessor::default().resolve_ambiguities(&assessments, true);

        let sum: f64 = items.iter().map(|(i, _)| i).sum();
        prop_assert!((result.overall_confidence_penalty - sum.min(0.5)).abs() < 1e-9);
        prop_assert!(result.overall_confidence_penalty <= 0.5);
        prop_assert_eq!(result.human_review_needed, items.iter().any(|(_, r)| *r));
        if result.human_review_needed {
            prop_assert_eq!(result.recommended_action, RecommendedAction::HumanReview);
        }
    }

    #[test]
    fn assessment_never_panics_and_impacts_stay_bounded(text in ".{0,80}") {
        let assessor = AmbiguityAssessor::default();
        let out = assessor.assess_ambiguity(&[], &text, &AmbiguityContext::default());
        prop_assert!(out.len() <= 2);
        for a in &out {
            prop_assert!((0.0..=0.5).contains(&a.confidence_impact));
        }
    }
}
