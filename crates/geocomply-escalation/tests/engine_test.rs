use std::collections::BTreeSet;

use geocomply_core::config::ThresholdConfig;
use geocomply_core::models::{
    CategoryThreshold, ClassificationFlag, ComplianceCategory, EscalationAction, EscalationRule,
    OracleAssessment, Regulation, ReviewPriority,
};
use geocomply_escalation::{CategoryDetector, DecisionEngine, ThresholdRegistry};

use ComplianceCategory::*;

fn oracle(flag: ClassificationFlag, confidence: f64) -> OracleAssessment {
    OracleAssessment::new(flag, confidence)
}

fn set(items: &[ComplianceCategory]) -> BTreeSet<ComplianceCategory> {
    items.iter().copied().collect()
}

#[test]
fn detects_rule_tag_categories() {
    let detector = CategoryDetector::default();
    let o = oracle(ClassificationFlag::Ambiguous, 0.5);
    let tags = |t: &[&str]| t.iter().map(|s| s.to_string()).collect::<Vec<_>>();

    assert_eq!(
        detector.detect_categories("x", &o, &tags(&["child_protection"])),
        set(&[SafetyHealthProtection])
    );
    assert_eq!(
        detector.detect_categories("x", &o, &tags(&["data_residency"])),
        set(&[LegalCompliance])
    );
    assert_eq!(
        detector.detect_categories("x", &o, &tags(&["tax_shop", "unknown_rule"])),
        set(&[LegalCompliance])
    );
}

#[test]
fn legal_terms_are_word_bounded_and_case_insensitive() {
    let detector = CategoryDetector::default();
    let o = oracle(ClassificationFlag::Ambiguous, 0.5);
    assert!(detector
        .detect_categories("Comply with coppa for kids", &o, &[])
        .contains(&LegalCompliance));
    // "dsa" inside another word is not the Digital Services Act
    assert!(detector.detect_categories("Fix dsabled flag", &o, &[]).is_empty());
}

#[test]
fn legal_terms_in_oracle_output_count() {
    let detector = CategoryDetector::default();
    let mut o = oracle(ClassificationFlag::NeedsGeoLogic, 0.8);
    o.suggested_jurisdictions = vec!["California (CCPA)".to_string()];
    assert_eq!(
        detector.detect_categories("New profile page", &o, &[]),
        set(&[LegalCompliance])
    );

    let mut o = oracle(ClassificationFlag::NeedsGeoLogic, 0.8);
    o.applicable_regulations = vec![Regulation {
        name: "HIPAA".to_string(),
        ..Default::default()
    }];
    assert!(detector
        .detect_categories("New profile page", &o, &[])
        .contains(&LegalCompliance));
}

#[test]
fn business_and_internal_keywords() {
    let detector = CategoryDetector::default();
    let o = oracle(ClassificationFlag::Ambiguous, 0.5);
    assert_eq!(
        detector.detect_categories("Run experiments on cache performance", &o, &[]),
        set(&[BusinessAnalytics, InternalFeatures])
    );
    assert!(detector
        .detect_categories("International expansion", &o, &[])
        .is_empty());
}

#[test]
fn strictest_threshold_wins() {
    let engine = DecisionEngine::default();
    let applied = engine.applicable_threshold(&set(&[BusinessAnalytics, LegalCompliance, InternalFeatures]));
    assert_eq!(applied.category, LegalCompliance);
    assert_eq!(applied.threshold, 0.90);
    assert_eq!(applied.escalation_rule, EscalationRule::HumanReview);
    assert!(!applied.configuration_gap);
}

#[test]
fn empty_detection_uses_default_category() {
    let engine = DecisionEngine::default();
    let applied = engine.applicable_threshold(&BTreeSet::new());
    assert_eq!(applied.category, BusinessAnalytics);
    assert_eq!(applied.threshold, 0.70);
    assert!(applied.configuration_gap);
}

#[test]
fn ties_break_on_category_name() {
    let mut config = ThresholdConfig::default();
    for entry in &mut config.categories {
        if entry.category == SafetyHealthProtection {
            entry.confidence_threshold = 0.90;
        }
    }
    let engine = DecisionEngine::from_config(&config).unwrap();
    let applied = engine.applicable_threshold(&set(&[SafetyHealthProtection, LegalCompliance]));
    assert_eq!(applied.category, LegalCompliance);
}

#[test]
fn categories_missing_from_table_are_skipped() {
    let config = ThresholdConfig {
        default_category: BusinessAnalytics,
        categories: vec![CategoryThreshold {
            category: BusinessAnalytics,
            confidence_threshold: 0.75,
            escalation_rule: EscalationRule::AutoOk,
            description: String::new(),
        }],
    };
    let engine = DecisionEngine::from_config(&config).unwrap();
    let applied = engine.applicable_threshold(&set(&[LegalCompliance]));
    assert_eq!(applied.category, BusinessAnalytics);
    assert_eq!(applied.threshold, 0.75);
    assert!(applied.configuration_gap);
}

#[test]
fn meeting_threshold_keeps_oracle_flag() {
    let engine = DecisionEngine::default();
    let d = engine.make_decision(
        "Comply with GDPR consent rules",
        &oracle(ClassificationFlag::NeedsGeoLogic, 0.93),
        &[],
        false,
    );
    assert_eq!(d.final_flag, ClassificationFlag::NeedsGeoLogic);
    assert!(!d.review_required);
    assert!(d.threshold_violations.is_empty());
    assert_eq!(d.review_priority, ReviewPriority::High);
}

#[test]
fn missing_oracle_confidence_defaults_to_point_six() {
    let engine = DecisionEngine::default();
    let mut o = oracle(ClassificationFlag::NoGeoLogic, 0.0);
    o.confidence = None;
    let d = engine.make_decision("Improve cache warmup", &o, &[], false);
    assert_eq!(d.confidence, 0.6);
    assert_eq!(d.applied_category, InternalFeatures);
    assert!(!d.review_required);
    assert_eq!(d.escalation_rule, EscalationRule::Ignore);
    assert_eq!(d.review_priority, ReviewPriority::Low);
}

#[test]
fn deterministic_rule_ignores_oracle_confidence() {
    let engine = DecisionEngine::default();
    for confidence in [0.0, 0.3, 0.99] {
        let d = engine.make_decision(
            "Anything at all",
            &oracle(ClassificationFlag::NoGeoLogic, confidence),
            &["child_protection".to_string()],
            true,
        );
        assert_eq!(d.final_flag, ClassificationFlag::NeedsGeoLogic);
        assert_eq!(d.confidence, 0.95);
        assert_eq!(d.escalation_rule, EscalationRule::AutoOk);
        assert!(!d.review_required);
        assert!(d.deterministic_override);
        assert!(d.reasoning.contains("child_protection"));
    }
}

#[test]
fn caller_supplied_confidence_overrides_oracle() {
    let engine = DecisionEngine::default();
    let o = oracle(ClassificationFlag::NoGeoLogic, 0.95);
    let d = engine.decide_with_confidence("A/B test the banner", &o, &[], false, 0.65);
    assert_eq!(d.confidence, 0.65);
    assert_eq!(d.final_flag, ClassificationFlag::Ambiguous);
    assert!(d.review_required);
    assert_eq!(d.threshold_violations.len(), 1);
    assert!(d.escalation_reason.contains("below threshold 0.70"));
}

#[test]
fn evaluate_threshold_actions() {
    let engine = DecisionEngine::default();

    let pass = engine.evaluate_threshold(LegalCompliance, 0.95);
    assert!(pass.meets_threshold);
    assert_eq!(pass.action, EscalationAction::AutoApprove);
    assert_eq!(pass.priority, ReviewPriority::High);

    let fail = engine.evaluate_threshold(SafetyHealthProtection, 0.80);
    assert!(!fail.meets_threshold);
    assert_eq!(fail.action, EscalationAction::HumanReview);
    assert_eq!(fail.threshold, 0.85);

    let ignored = engine.evaluate_threshold(InternalFeatures, 0.5);
    assert_eq!(ignored.action, EscalationAction::Ignore);
    assert!(ignored.reasoning.contains("below threshold"));

    let business = engine.evaluate_threshold(BusinessAnalytics, 0.69);
    assert_eq!(business.action, EscalationAction::HumanReview);
}

#[test]
fn summary_lists_strictest_first() {
    let summary = DecisionEngine::default().threshold_summary();
    let order: Vec<_> = summary.entries.iter().map(|e| e.category).collect();
    assert_eq!(
        order,
        vec![LegalCompliance, SafetyHealthProtection, BusinessAnalytics, InternalFeatures]
    );
    assert_eq!(summary.default_category, BusinessAnalytics);
    assert_eq!(summary.get(InternalFeatures).map(|e| e.threshold), Some(0.60));
}

#[test]
fn reload_swaps_table_and_rejects_invalid() {
    let engine = DecisionEngine::default();
    let before = engine.snapshot();

    let mut config = ThresholdConfig::default();
    config.categories[2].confidence_threshold = 0.5;
    engine.update_thresholds(&config).unwrap();
    assert_eq!(engine.applicable_threshold(&set(&[BusinessAnalytics])).threshold, 0.5);
    // snapshots taken earlier keep their view
    assert_eq!(before.get(BusinessAnalytics).map(|t| t.confidence_threshold), Some(0.70));

    let mut bad = ThresholdConfig::default();
    bad.categories[0].confidence_threshold = 1.2;
    assert!(engine.update_thresholds(&bad).is_err());
    assert_eq!(engine.applicable_threshold(&set(&[BusinessAnalytics])).threshold, 0.5);
}

#[test]
fn decide_with_table_ignores_later_reloads() {
    let engine = DecisionEngine::default();
    let held = engine.snapshot();

    let mut config = ThresholdConfig::default();
    config.categories[3].confidence_threshold = 0.99;
    engine.update_thresholds(&config).unwrap();

    let o = oracle(ClassificationFlag::NoGeoLogic, 0.8);
    let d = engine.decide_with_table(&held, "Refactor the cache layer", &o, &[], false, 0.8);
    assert_eq!(d.applied_category, InternalFeatures);
    assert_eq!(d.threshold_applied, 0.60);
    assert!(!d.review_required);

    let fresh = engine.decide_with_confidence("Refactor the cache layer", &o, &[], false, 0.8);
    assert_eq!(fresh.threshold_applied, 0.99);
    assert!(fresh.review_required);
}

#[test]
fn registry_rejects_missing_default() {
    let config = ThresholdConfig {
        default_category: InternalFeatures,
        categories: Vec::new(),
    };
    let err = ThresholdRegistry::from_config(&config).unwrap_err();
    assert!(err.to_string().contains("thresholds.default_category"));
}
