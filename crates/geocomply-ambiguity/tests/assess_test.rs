use geocomply_ambiguity::assessor::MISSING_ENTITY;
use geocomply_ambiguity::{AmbiguityAssessor, AmbiguityContext, AmbiguityWeights};
use geocomply_core::models::{
    AmbiguityKind, EntityMatch, EntityType, ExtractionSource, ResolutionStrategy, ReviewPriority,
    Span,
};

fn entity(text: &str, entity_type: EntityType, confidence: f64) -> EntityMatch {
    EntityMatch::new(text, entity_type, Span::new(0, text.len()), confidence, ExtractionSource::Regex)
}

#[test]
fn no_entities_and_no_triggers_means_no_ambiguity() {
    let assessor = AmbiguityAssessor::default();
    let out = assessor.assess_ambiguity(&[], "Improve cache hit ratio", &AmbiguityContext::default());
    assert!(out.is_empty());
}

#[test]
fn missing_location_requires_regulatory_keyword() {
    let assessor = AmbiguityAssessor::default();
    let out = assessor.assess_ambiguity(
        &[],
        "Data retention controls for GDPR compliance",
        &AmbiguityContext::default(),
    );
    assert_eq!(out.len(), 1);
    let a = &out[0];
    assert_eq!(a.kind, AmbiguityKind::MissingLocation);
    assert_eq!(a.confidence_impact, 0.25);
    assert_eq!(a.entity_text, MISSING_ENTITY);
    assert!(a.requires_human_review);
    assert_eq!(a.priority, ReviewPriority::Medium);
    assert_eq!(a.suggested_resolution, ResolutionStrategy::AssignUnknown);
    assert!(a.context_clues.contains(&"regulatory_signal:gdpr".to_string()));
    assert!(a.context_clues.contains(&"regulatory_signal:compliance".to_string()));
}

#[test]
fn missing_age_requires_minor_keyword() {
    let assessor = AmbiguityAssessor::default();
    let location = entity("Canada", EntityType::Location, 0.9);
    let out = assessor.assess_ambiguity(
        &[location],
        "Parental dashboard to protect children in Canada",
        &AmbiguityContext::default(),
    );
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].kind, AmbiguityKind::MissingAge);
    assert_eq!(out[0].confidence_impact, 0.30);
    assert_eq!(out[0].priority, ReviewPriority::High);
    assert_eq!(out[0].suggested_resolution, ResolutionStrategy::FlagHumanReview);
    assert!(out[0].context_clues.contains(&"minor_signal:child".to_string()));
}

#[test]
fn keywords_match_on_word_boundaries() {
    let assessor = AmbiguityAssessor::default();
    // "flaw" must not count as "law"
    let out = assessor.assess_ambiguity(&[], "Fix rendering flaw", &AmbiguityContext::default());
    assert!(out.is_empty());
}

#[test]
fn vague_location_categories() {
    let assessor = AmbiguityAssessor::default();
    let age = entity("13-17", EntityType::Age, 0.95);
    let cases = [
        ("overseas", 0.30, true, ReviewPriority::Medium, ResolutionStrategy::AssignUnknown),
        ("international markets", 0.30, true, ReviewPriority::Medium, ResolutionStrategy::AssignUnknown),
        ("domestic", 0.20, false, ReviewPriority::Low, ResolutionStrategy::InferFromContext),
        ("Western Europe", 0.15, false, ReviewPriority::Low, ResolutionStrategy::InferFromContext),
        ("Europe", 0.25, true, ReviewPriority::Medium, ResolutionStrategy::AssignUnknown),
        ("northern hemisphere", 0.40, true, ReviewPriority::Medium, ResolutionStrategy::AssignUnknown),
        ("EU", 0.10, false, ReviewPriority::Low, ResolutionStrategy::InferFromContext),
    ];
    for (text, impact, review, priority, strategy) in cases {
        let out = assessor.assess_ambiguity(
            &[entity(text, EntityType::Location, 0.9), age.clone()],
            &format!("Rollout in {text}"),
            &AmbiguityContext::default(),
        );
        assert_eq!(out.len(), 1, "{text}");
        let a = &out[0];
        assert_eq!(a.kind, AmbiguityKind::VagueLocation, "{text}");
        assert_eq!(a.confidence_impact, impact, "{text}");
        assert_eq!(a.requires_human_review, review, "{text}");
        assert_eq!(a.priority, priority, "{text}");
        assert_eq!(a.suggested_resolution, strategy, "{text}");
        assert_eq!(a.entity_text, text.to_lowercase());
    }
}

#[test]
fn specific_location_is_not_vague() {
    let assessor = AmbiguityAssessor::default();
    let out = assessor.assess_ambiguity(
        &[
            entity("France", EntityType::Location, 0.9),
            entity("18+", EntityType::Age, 0.95),
        ],
        "Launch in France for 18+",
        &AmbiguityContext::default(),
    );
    assert!(out.is_empty());
}

#[test]
fn vague_age_categories() {
    let assessor = AmbiguityAssessor::default();
    let location = entity("Canada", EntityType::Location, 0.9);
    let cases = [
        ("teens", 0.20, false, ReviewPriority::Medium),
        ("young adults", 0.25, false, ReviewPriority::Medium),
        ("adults", 0.30, true, ReviewPriority::Medium),
        ("older adults", 0.20, false, ReviewPriority::Medium),
        ("seniors", 0.20, false, ReviewPriority::Medium),
        ("kids", 0.35, true, ReviewPriority::High),
        ("users", 0.40, true, ReviewPriority::High),
    ];
    for (text, impact, review, priority) in cases {
        let out = assessor.assess_ambiguity(
            &[location.clone(), entity(text, EntityType::Age, 0.8)],
            &format!("Feed for {text} in Canada"),
            &AmbiguityContext::default(),
        );
        assert_eq!(out.len(), 1, "{text}");
        assert_eq!(out[0].kind, AmbiguityKind::VagueAge, "{text}");
        assert_eq!(out[0].confidence_impact, impact, "{text}");
        assert_eq!(out[0].requires_human_review, review, "{text}");
        assert_eq!(out[0].priority, priority, "{text}");
    }
}

#[test]
fn age_clues_and_rule_tags_are_collected() {
    let assessor = AmbiguityAssessor::default();
    let context = AmbiguityContext::with_rule_tags(["child_protection"]);
    let out = assessor.assess_ambiguity(
        &[
            entity("Utah", EntityType::Location, 0.9),
            entity("teen", EntityType::Age, 0.8),
        ],
        "Age verification with parental consent for teen accounts in Utah",
        &context,
    );
    assert_eq!(out.len(), 1);
    let clues = &out[0].context_clues;
    assert!(clues.contains(&"minor_protection:parental consent".to_string()));
    assert!(clues.contains(&"age_verification:age verification".to_string()));
    assert!(clues.contains(&"rule_tag:child_protection".to_string()));
}

#[test]
fn low_confidence_terminology_is_unclear() {
    let assessor = AmbiguityAssessor::default();
    let entities = [
        entity("Canada", EntityType::Location, 0.9),
        entity("18+", EntityType::Age, 0.9),
        entity("pf", EntityType::Terminology, 0.4),
        entity("geofencing", EntityType::Terminology, 0.9),
    ];
    let out = assessor.assess_ambiguity(&entities, "pf geofencing Canada 18+", &AmbiguityContext::default());
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].kind, AmbiguityKind::UnclearTerminology);
    assert_eq!(out[0].confidence_impact, 0.15);
    assert!(!out[0].requires_human_review);
    assert_eq!(out[0].priority, ReviewPriority::Low);
    assert_eq!(out[0].suggested_resolution, ResolutionStrategy::RequestClarification);
}

#[test]
fn custom_weight_table_changes_impacts() {
    let mut weights = AmbiguityWeights::default();
    weights.version = "2.0.0".to_string();
    weights.missing_location.impact = 0.05;
    weights.missing_location.requires_review = false;
    let assessor = AmbiguityAssessor::new(weights, Default::default());

    let out = assessor.assess_ambiguity(&[], "New regulation", &AmbiguityContext::default());
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].confidence_impact, 0.05);
    assert!(!out[0].requires_human_review);
    assert_eq!(assessor.weights().version, "2.0.0");
}

#[test]
fn weight_table_round_trips_through_toml() {
    let weights = AmbiguityWeights::default();
    let text = weights.to_toml().unwrap();
    let parsed = AmbiguityWeights::from_toml(&text).unwrap();
    assert_eq!(parsed, weights);
}

#[test]
fn weight_table_rejects_impact_above_cap() {
    let mut weights = AmbiguityWeights::default();
    weights.vague_age[0].impact = 0.75;
    let err = weights.validate().unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("vague_age.teen"), "{msg}");
}
