use geocomply_core::config::*;
use geocomply_core::models::{ComplianceCategory, EscalationRule};

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = GeoComplyConfig::from_toml("").unwrap();

    // Threshold defaults
    assert_eq!(
        config.thresholds.default_category,
        ComplianceCategory::BusinessAnalytics
    );
    let legal = config.thresholds.get(ComplianceCategory::LegalCompliance).unwrap();
    assert_eq!(legal.confidence_threshold, 0.90);
    assert_eq!(legal.escalation_rule, EscalationRule::HumanReview);
    let internal = config.thresholds.get(ComplianceCategory::InternalFeatures).unwrap();
    assert_eq!(internal.confidence_threshold, 0.60);
    assert_eq!(internal.escalation_rule, EscalationRule::Ignore);

    // Scoring defaults
    assert_eq!(config.scoring.primary, 0.7);
    assert_eq!(config.scoring.secondary, 0.3);
    assert_eq!(config.scoring.entity_quality, 0.2);
    assert_eq!(config.scoring.cross_validation, 0.15);
    assert_eq!(config.scoring.diversity_cap, 0.10);

    // Ambiguity defaults
    assert_eq!(config.ambiguity.penalty_cap, 0.5);
    assert!(config.ambiguity.use_default_resolutions);

    // Orchestrator defaults
    assert_eq!(config.orchestrator.oracle_timeout_ms, 30_000);
    assert_eq!(config.orchestrator.clear_cut_threshold, 0.95);

    // Observability defaults
    assert_eq!(config.observability.log_level, "info");
    assert!(!config.observability.json_logs);
}

#[test]
fn partial_toml_overrides_only_named_fields() {
    let config = GeoComplyConfig::from_toml(
        r#"
        [scoring]
        primary = 0.6
        secondary = 0.4

        [orchestrator]
        oracle_timeout_ms = 250
        "#,
    )
    .unwrap();

    assert_eq!(config.scoring.primary, 0.6);
    assert_eq!(config.scoring.secondary, 0.4);
    assert_eq!(config.scoring.entity_quality, 0.2);
    assert_eq!(config.orchestrator.oracle_timeout_ms, 250);
    assert_eq!(config.orchestrator.context_timeout_ms, 5_000);
}

#[test]
fn threshold_table_can_be_replaced_from_toml() {
    let config = GeoComplyConfig::from_toml(
        r#"
        [thresholds]
        default_category = "internal_features"

        [[thresholds.categories]]
        category = "internal_features"
        confidence_threshold = 0.5
        escalation_rule = "ignore"

        [[thresholds.categories]]
        category = "legal_compliance"
        confidence_threshold = 0.95
        escalation_rule = "human_review"
        "#,
    )
    .unwrap();

    assert_eq!(config.thresholds.categories.len(), 2);
    assert_eq!(
        config
            .thresholds
            .get(ComplianceCategory::LegalCompliance)
            .unwrap()
            .confidence_threshold,
        0.95
    );
    assert!(config.thresholds.get(ComplianceCategory::BusinessAnalytics).is_none());
}

#[test]
fn out_of_range_threshold_is_rejected() {
    let err = GeoComplyConfig::from_toml(
        r#"
        [[thresholds.categories]]
        category = "business_analytics"
        confidence_threshold = 1.2
        escalation_rule = "auto_ok"
        "#,
    )
    .unwrap_err();
    assert!(err.to_string().contains("business_analytics"));
}

#[test]
fn missing_default_category_is_rejected() {
    let err = GeoComplyConfig::from_toml(
        r#"
        [[thresholds.categories]]
        category = "legal_compliance"
        confidence_threshold = 0.9
        escalation_rule = "human_review"
        "#,
    )
    .unwrap_err();
    assert!(err.to_string().contains("default_category"));
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let err = GeoComplyConfig::from_toml("[scoring\nprimary = ").unwrap_err();
    assert!(matches!(err, geocomply_core::errors::ConfigError::ParseError { .. }));
}

#[test]
fn negative_weight_is_rejected() {
    let err = GeoComplyConfig::from_toml("[scoring]\nsecondary = -0.1\n").unwrap_err();
    assert!(err.to_string().contains("scoring.secondary"));
}
