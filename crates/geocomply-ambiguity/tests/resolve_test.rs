use geocomply_ambiguity::{AmbiguityAssessor, AmbiguityContext, AmbiguityStatus};
use geocomply_core::models::{
    AmbiguityAssessment, AmbiguityKind, EntityMatch, EntityType, ExtractionSource,
    RecommendedAction, ResolutionStrategy, ReviewPriority, Span,
};

fn assessment(kind: AmbiguityKind, text: &str, impact: f64, review: bool) -> AmbiguityAssessment {
    AmbiguityAssessment {
        kind,
        confidence_impact: impact,
        entity_text: text.to_string(),
        context_clues: vec![format!("clue:{text}")],
        suggested_resolution: ResolutionStrategy::InferFromContext,
        alternative_interpretations: Vec::new(),
        requires_human_review: review,
        priority: if review { ReviewPriority::Medium } else { ReviewPriority::Low },
    }
}

#[test]
fn empty_input_is_no_ambiguity() {
    let result = AmbiguityAssessor::default().resolve_ambiguities(&[], true);
    assert_eq!(result.recommended_action, RecommendedAction::NoAmbiguity);
    assert_eq!(result.overall_confidence_penalty, 0.0);
    assert!(!result.human_review_needed);
}

/// Impacts summing to 0.35 with a review flag escalate to human review.
#[test]
fn scenario_e_escalates_to_human_review() {
    let assessments = [
        assessment(AmbiguityKind::VagueLocation, "domestic", 0.20, false),
        assessment(AmbiguityKind::VagueAge, "teen", 0.15, true),
    ];
    let result = AmbiguityAssessor::default().resolve_ambiguities(&assessments, true);
    assert!((result.overall_confidence_penalty - 0.35).abs() < 1e-9);
    assert_eq!(result.recommended_action, RecommendedAction::HumanReview);
    assert!(result.human_review_needed);
}

#[test]
fn penalty_is_capped() {
    let assessments = [
        assessment(AmbiguityKind::VagueLocation, "northern hemisphere", 0.40, false),
        assessment(AmbiguityKind::VagueAge, "users", 0.40, false),
    ];
    let result = AmbiguityAssessor::default().resolve_ambiguities(&assessments, false);
    assert_eq!(result.overall_confidence_penalty, 0.5);
    assert_eq!(result.recommended_action, RecommendedAction::HumanReview);
    assert!(!result.human_review_needed);
}

#[test]
fn action_thresholds() {
    let assessor = AmbiguityAssessor::default();

    let elevated = assessor.resolve_ambiguities(
        &[assessment(AmbiguityKind::VagueLocation, "x", 0.25, false)],
        false,
    );
    assert_eq!(elevated.recommended_action, RecommendedAction::ElevatedThreshold);

    let caution = assessor.resolve_ambiguities(
        &[assessment(AmbiguityKind::VagueLocation, "x", 0.20, false)],
        false,
    );
    assert_eq!(caution.recommended_action, RecommendedAction::ProceedWithCaution);

    let flagged = assessor.resolve_ambiguities(
        &[assessment(AmbiguityKind::VagueLocation, "x", 0.05, true)],
        false,
    );
    assert_eq!(flagged.recommended_action, RecommendedAction::HumanReview);
}

#[test]
fn default_resolutions_and_unknown_assignment() {
    let assessor = AmbiguityAssessor::default();
    let mut unknown = assessment(AmbiguityKind::MissingLocation, "<missing>", 0.25, true);
    unknown.suggested_resolution = ResolutionStrategy::AssignUnknown;
    let assessments = [
        assessment(AmbiguityKind::VagueAge, "teen", 0.20, false),
        assessment(AmbiguityKind::VagueLocation, "Western Europe", 0.15, false),
        unknown,
        assessment(AmbiguityKind::VagueAge, "seniors", 0.20, false),
    ];

    let result = assessor.resolve_ambiguities(&assessments, true);
    let resolved: Vec<(&str, &str)> = result
        .resolved_entities
        .iter()
        .map(|r| (r.original.as_str(), r.resolved.as_str()))
        .collect();
    assert_eq!(
        resolved,
        vec![
            ("teen", "age_range:13-17"),
            ("Western Europe", "Western_Europe"),
            ("<missing>", "Unknown_missing_location"),
        ]
    );

    let without_defaults = assessor.resolve_ambiguities(&assessments, false);
    assert_eq!(without_defaults.resolved_entities.len(), 1);
    assert_eq!(without_defaults.resolved_entities[0].resolved, "Unknown_missing_location");
}

#[test]
fn context_clues_are_deduplicated_in_order() {
    let mut a = assessment(AmbiguityKind::VagueAge, "teen", 0.1, false);
    a.context_clues = vec!["rule_tag:x".into(), "minor_protection:guardian".into()];
    let mut b = assessment(AmbiguityKind::VagueLocation, "domestic", 0.1, false);
    b.context_clues = vec!["rule_tag:x".into(), "business_signal:launch".into()];

    let result = AmbiguityAssessor::default().resolve_ambiguities(&[a, b], false);
    assert_eq!(
        result.context_used,
        vec!["rule_tag:x", "minor_protection:guardian", "business_signal:launch"]
    );
}

#[test]
fn report_summarises_assessments() {
    let assessor = AmbiguityAssessor::default();
    let entities = [EntityMatch::new(
        "overseas",
        EntityType::Location,
        Span::new(0, 8),
        0.8,
        ExtractionSource::Regex,
    )];
    let assessments = assessor.assess_ambiguity(
        &entities,
        "Overseas rollout for children",
        &AmbiguityContext::default(),
    );
    let report = assessor.ambiguity_report(&assessments);

    assert_eq!(report.status, AmbiguityStatus::AmbiguityDetected);
    assert_eq!(report.total_assessments, 2);
    assert_eq!(
        report.kinds,
        vec![AmbiguityKind::MissingAge, AmbiguityKind::VagueLocation]
    );
    assert!(report.requires_human_review);
    assert_eq!(report.highest_priority, Some(ReviewPriority::High));
    assert_eq!(report.total_confidence_impact, 0.5);
    assert!(report.summary.contains("0.60"), "{}", report.summary);

    let empty = assessor.ambiguity_report(&[]);
    assert_eq!(empty.status, AmbiguityStatus::NoAmbiguity);
    assert_eq!(empty.highest_priority, None);
}

#[derive(serde::Deserialize)]
struct ScenarioInput {
    assessments: Vec<AmbiguityAssessment>,
    use_defaults: bool,
}

#[derive(serde::Deserialize)]
struct ScenarioExpected {
    overall_confidence_penalty: f64,
    recommended_action: RecommendedAction,
    human_review_needed: bool,
}

#[derive(serde::Deserialize)]
struct Scenario {
    input: ScenarioInput,
    expected: ScenarioExpected,
}

#[test]
fn golden_scenario_e() {
    let scenario: Scenario = test_fixtures::load_fixture("ambiguity/scenario_e_human_review.json");
    let result = AmbiguityAssessor::default()
        .resolve_ambiguities(&scenario.input.assessments, scenario.input.use_defaults);
    assert!(
        (result.overall_confidence_penalty - scenario.expected.overall_confidence_penalty).abs()
            < 1e-9
    );
    assert_eq!(result.recommended_action, scenario.expected.recommended_action);
    assert_eq!(result.human_review_needed, scenario.expected.human_review_needed);
}
