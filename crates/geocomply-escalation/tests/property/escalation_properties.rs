use std::collections::BTreeSet;

use geocomply_core::models::{ClassificationFlag, ComplianceCategory, OracleAssessment};
use geocomply_escalation::DecisionEngine;
use proptest::prelude::*;

fn category() -> impl Strategy<Value = ComplianceCategory> {
    prop::sample::select(ComplianceCategory::ALL.to_vec())
}

proptest! {
    #[test]
    fn adding_a_category_never_loosens_the_threshold(
        base in prop::collection::btree_set(category(), 1..4),
        extra in category(),
    ) {
        let engine = DecisionEngine::default();
        let before = engine.applicable_threshold(&base);
        let mut grown: BTreeSet<_> = base.clone();
        grown.insert(extra);
        let after = engine.applicable_threshold(&grown);
        prop_assert!(after.threshold >= before.threshold);
        if after.threshold == before.threshold {
            prop_assert!(after.category <= before.category);
        }
    }

    #[test]
    fn deterministic_rule_always_auto_ok(confidence in any::<f64>(), text in ".{0,60}") {
        let engine = DecisionEngine::default();
        let oracle = OracleAssessment::new(ClassificationFlag::NoGeoLogic, confidence);
        let d = engine.make_decision(&text, &oracle, &[], true);
        prop_assert!(!d.review_required);
        prop_assert_eq!(d.final_flag, ClassificationFlag::NeedsGeoLogic);
        prop_assert_eq!(d.confidence, 0.95);
    }

    #[test]
    fn review_iff_below_threshold(confidence in 0.0f64..=1.0, text in "[a-z ]{0,40}") {
        let engine = DecisionEngine::default();
        let oracle = OracleAssessment::new(ClassificationFlag::NeedsGeoLogic, confidence);
        let d = engine.make_decision(&text, &oracle, &[], false);
        prop_assert_eq!(d.review_required, confidence < d.threshold_applied);
        prop_assert_eq!(d.review_required, d.final_flag == ClassificationFlag::Ambiguous);
    }
}
