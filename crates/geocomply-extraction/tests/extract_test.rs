use std::sync::Arc;

use geocomply_core::models::{EntityType, FeedbackCorrection};
use geocomply_core::traits::IEntityExtractor;
use geocomply_extraction::PatternExtractor;
use geocomply_glossary::Glossary;

fn extractor() -> PatternExtractor {
    PatternExtractor::new(Arc::new(Glossary::default())).unwrap()
}

fn texts(result: &geocomply_core::models::ExtractionResult, t: EntityType) -> Vec<String> {
    result.of_type(t).map(|e| e.text.to_lowercase()).collect()
}

#[test]
fn age_gate_for_eu_minors_is_clear_cut() {
    let result = extractor()
        .extract(
            "Age verification for EU users under 16",
            "Comply with GDPR Article 8",
        )
        .unwrap();

    assert_eq!(texts(&result, EntityType::Location), vec!["eu"]);
    assert!(texts(&result, EntityType::Age).contains(&"under 16".to_string()));
    assert!(texts(&result, EntityType::Terminology).contains(&"gdpr".to_string()));

    let verdict = result.clear_cut.as_ref().unwrap();
    assert!(verdict.needs_geo_logic);
    assert_eq!(verdict.confidence, 0.95);
    assert_eq!(result.overall_confidence, 0.95);
}

#[test]
fn lowercase_us_is_not_a_location() {
    let result = extractor()
        .extract("Tell us what users think", "Survey widget for the help center")
        .unwrap();
    assert!(!result.has(EntityType::Location));
}

#[test]
fn uppercase_acronym_needs_context() {
    let result = extractor()
        .extract("Storefront for US shoppers", "Show prices to CA residents")
        .unwrap();
    let locations = texts(&result, EntityType::Location);
    assert!(locations.contains(&"us".to_string()));
    assert!(locations.contains(&"ca".to_string()));
}

#[test]
fn spans_point_into_cleaned_text() {
    let result = extractor()
        .extract("Parental tools in Germany", "Kids under 13 need a guardian")
        .unwrap();
    for e in &result.entities {
        assert_eq!(&result.cleaned_text[e.span.start..e.span.end], e.text);
    }
    assert!(result.has(EntityType::Location));
    assert!(texts(&result, EntityType::Age).contains(&"kids".to_string()));
}

#[test]
fn geofencing_is_clear_cut() {
    let result = extractor()
        .extract("Geofencing for the store locator", "")
        .unwrap();
    let verdict = result.clear_cut.unwrap();
    assert!(verdict.needs_geo_logic);
    assert_eq!(verdict.reason, "geographic restriction requested");
}

#[test]
fn jurisdiction_age_and_term_together() {
    let result = extractor()
        .extract("Minor accounts in Utah", "Must follow COPPA")
        .unwrap();
    let verdict = result.clear_cut.unwrap();
    assert!(verdict.needs_geo_logic);
    assert_eq!(verdict.confidence, 0.97);
}

#[test]
fn jurisdiction_and_term() {
    let result = extractor()
        .extract("Data localization in Germany", "Store profiles on local servers")
        .unwrap();
    let verdict = result.clear_cut.unwrap();
    assert!(verdict.needs_geo_logic);
    assert_eq!(verdict.confidence, 0.95);
}

#[test]
fn business_language_without_compliance() {
    let result = extractor()
        .extract("A/B test new banner colors", "Measure user engagement and conversion")
        .unwrap();
    let verdict = result.clear_cut.unwrap();
    assert!(!verdict.needs_geo_logic);
    assert_eq!(verdict.confidence, 0.90);
}

#[test]
fn nothing_found_is_low_confidence() {
    let result = extractor().extract("Refactor cache layer", "").unwrap();
    assert!(result.entities.is_empty());
    assert!(result.clear_cut.is_none());
    assert_eq!(result.overall_confidence, 0.3);
    assert_eq!(result.tokens, vec!["refactor", "cache", "layer"]);
}

#[test]
fn entities_sorted_by_confidence() {
    let result = extractor()
        .extract("Teen mode in Brazil", "Teenagers get a quieter feed")
        .unwrap();
    let confidences: Vec<f64> = result.entities.iter().map(|e| e.confidence).collect();
    let mut sorted = confidences.clone();
    sorted.sort_by(|a, b| b.total_cmp(a));
    assert_eq!(confidences, sorted);
}

#[test]
fn refresh_picks_up_feedback_aliases() {
    let glossary = Arc::new(Glossary::default());
    let extractor = PatternExtractor::new(Arc::clone(&glossary)).unwrap();
    let text = ("Store for Down Under shoppers", "");

    let before = extractor.extract(text.0, text.1).unwrap();
    assert!(!before.has(EntityType::Location));

    glossary
        .update_from_feedback(&FeedbackCorrection {
            entity_type: EntityType::Location,
            original_text: "Down Under".to_string(),
            correct_mapping: "Australia".to_string(),
            confidence: 1.0,
            source: "reviewer".to_string(),
        })
        .unwrap();
    extractor.refresh_patterns().unwrap();

    let after = extractor.extract(text.0, text.1).unwrap();
    assert_eq!(texts(&after, EntityType::Location), vec!["down under"]);
}
