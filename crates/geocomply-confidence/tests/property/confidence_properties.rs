use geocomply_confidence::ConfidenceScorer;
use geocomply_core::models::{ConfidenceLevel, DiversityFlags};
use proptest::prelude::*;

fn flags() -> impl Strategy<Value = DiversityFlags> {
    (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(l, a, t)| DiversityFlags {
        has_locations: l,
        has_ages: a,
        has_terminology: t,
    })
}

proptest! {
    #[test]
    fn fused_confidence_stays_in_unit_range(
        primary in any::<f64>(),
        secondary in any::<f64>(),
        entity in any::<f64>(),
        cross in any::<f64>(),
        diversity in flags(),
    ) {
        let b = ConfidenceScorer::default().weighted_confidence(primary, secondary, entity, cross, diversity);
        prop_assert!((0.0..=1.0).contains(&b.final_confidence));
        prop_assert_eq!(b.level, ConfidenceLevel::from_score(b.final_confidence));
    }

    #[test]
    fn penalty_subtracts_and_floors_at_zero(
        primary in 0.0f64..=1.0,
        secondary in 0.0f64..=1.0,
        penalty in 0.0f64..=1.0,
        diversity in flags(),
    ) {
        let scorer = ConfidenceScorer::default();
        let b = scorer.weighted_confidence(primary, secondary, 0.5, 0.5, diversity);
        let expected = (b.final_confidence - penalty).max(0.0);
        let p = scorer.apply_ambiguity_penalty(b, penalty);
        prop_assert!((p.final_confidence - expected).abs() < 1e-12);
        prop_assert_eq!(p.level, ConfidenceLevel::from_score(p.final_confidence));
    }

    #[test]
    fn alignment_is_symmetric(a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
        let scorer = ConfidenceScorer::default();
        let ab = scorer.validate_alignment(a, b);
        let ba = scorer.validate_alignment(b, a);
        prop_assert_eq!(ab.alignment_score, ba.alignment_score);
        prop_assert_eq!(ab.aligned, ba.aligned);
    }
}
