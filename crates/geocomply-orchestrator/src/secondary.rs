//! Secondary validation: does the oracle's answer agree with what the
//! patterns and the glossary found in the text?

use std::sync::LazyLock;

use geocomply_core::models::{
    EntityType, ExtractionResult, OracleAssessment, SecondaryBreakdown, StandardizedEntity,
};
use geocomply_core::text::normalize;
use geocomply_glossary::{Glossary, TermCategory};
use regex::Regex;

const AGE_REGULATIONS: &[&str] = &[
    "coppa",
    "minor protection",
    "parental consent",
    "age verification",
];

/// Entity quality when nothing was standardized; contributes no adjustment.
const NEUTRAL_ENTITY_QUALITY: f64 = 0.5;

static COMPLIANCE_LANGUAGE: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)\b(?:comply|compliance)\s+with\b.*\b(?:law|regulation|act)s?\b",
        r"(?i)\b(?:geo\w*\s*restriction|geographic\w*\s+requirement|location\W*based\s+compliance)",
        r"(?i)\b(?:minor\s+protection|age\s+verification|parental\s+consent)\b.*\b(?:law|requirement)s?\b",
    ]
    .into_iter()
    .filter_map(|p| Regex::new(p).ok())
    .collect()
});

fn category_words(category: TermCategory) -> &'static str {
    match category {
        TermCategory::Privacy => "privacy",
        TermCategory::AgeVerification => "age verification",
        TermCategory::ContentModeration => "content moderation",
        TermCategory::ContentSafety => "content safety",
        TermCategory::SecurityCompliance => "security compliance",
        TermCategory::RegulatoryCompliance => "regulatory compliance",
    }
}

/// Score each cross-check. A component stays 0 when its entity type is
/// absent, so it drops out of [`SecondaryBreakdown::score`].
pub fn secondary_validation(
    glossary: &Glossary,
    extraction: &ExtractionResult,
    oracle: &OracleAssessment,
) -> SecondaryBreakdown {
    let mut breakdown = SecondaryBreakdown::default();

    let jurisdictions: Vec<String> = oracle
        .applicable_regulations
        .iter()
        .map(|r| r.jurisdiction.to_lowercase())
        .chain(oracle.suggested_jurisdictions.iter().map(|j| j.to_lowercase()))
        .filter(|j| !j.is_empty())
        .collect();

    let locations: Vec<_> = extraction
        .of_type(EntityType::Location)
        .filter_map(|e| glossary.standardize_location(&e.text).record)
        .collect();
    if extraction.has(EntityType::Location) {
        let overlap = locations.iter().any(|record| {
            std::iter::once(&record.colloquial_name)
                .chain(record.regions.iter())
                .map(|name| name.to_lowercase())
                .any(|name| jurisdictions.iter().any(|j| j.contains(&name)))
        });
        breakdown.location_validation = if overlap { 0.9 } else { 0.6 };
    }

    if extraction.has(EntityType::Age) {
        let age_focus = oracle
            .regulation_names()
            .map(str::to_lowercase)
            .any(|name| AGE_REGULATIONS.iter().any(|r| name.contains(r)));
        breakdown.age_validation = if age_focus { 0.9 } else { 0.5 };
    }

    if extraction.has(EntityType::Terminology) {
        let reasoning = normalize(&oracle.reasoning);
        let mentioned = extraction
            .of_type(EntityType::Terminology)
            .filter_map(|e| glossary.standardize_terminology(&e.text).record)
            .any(|record| reasoning.contains(category_words(record.category)));
        breakdown.terminology_validation = if mentioned { 0.9 } else { 0.6 };
    }

    let hits = COMPLIANCE_LANGUAGE
        .iter()
        .filter(|re| re.is_match(&extraction.cleaned_text))
        .count();
    breakdown.pattern_validation = (hits as f64 * 0.3).min(0.9);

    breakdown
}

/// Mean of the best standardization confidence per entity type present.
pub fn entity_quality(standardized: &[StandardizedEntity]) -> f64 {
    let best: Vec<f64> = EntityType::ALL
        .iter()
        .filter_map(|t| {
            standardized
                .iter()
                .filter(|s| s.entity_type == *t && s.canonical.is_some())
                .map(|s| s.confidence)
                .reduce(f64::max)
        })
        .collect();
    if best.is_empty() {
        return NEUTRAL_ENTITY_QUALITY;
    }
    best.iter().sum::<f64>() / best.len() as f64
}

#[cfg(test)]
mod tests {
    use geocomply_core::models::{
        ClassificationFlag, EntityMatch, ExtractionSource, MatchTier, Regulation, Span,
    };

    use super::*;

    fn extraction(text: &str, entities: &[(&str, EntityType)]) -> ExtractionResult {
        ExtractionResult {
            entities: entities
                .iter()
                .map(|(t, ty)| EntityMatch::new(*t, *ty, Span::new(0, t.len()), 1.0, ExtractionSource::Regex))
                .collect(),
            cleaned_text: text.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn no_entities_no_patterns_scores_zero() {
        let glossary = Glossary::default();
        let oracle = OracleAssessment::new(ClassificationFlag::NoGeoLogic, 0.8);
        let b = secondary_validation(&glossary, &extraction("Refactor cache", &[]), &oracle);
        assert_eq!(b, SecondaryBreakdown::default());
        assert_eq!(b.score(), 0.0);
    }

    #[test]
    fn jurisdiction_overlap_and_age_focus() {
        let glossary = Glossary::default();
        let mut oracle = OracleAssessment::new(ClassificationFlag::NeedsGeoLogic, 0.8);
        oracle.applicable_regulations = vec![Regulation {
            name: "COPPA".to_string(),
            jurisdiction: "European Union".to_string(),
            ..Default::default()
        }];
        let text = extraction(
            "Kids in California",
            &[("California", EntityType::Location), ("kid", EntityType::Age)],
        );
        let b = secondary_validation(&glossary, &text, &oracle);
        assert_eq!(b.location_validation, 0.6);
        assert_eq!(b.age_validation, 0.9);

        oracle.suggested_jurisdictions = vec!["United States".to_string()];
        let b = secondary_validation(&glossary, &text, &oracle);
        assert_eq!(b.location_validation, 0.9);
    }

    #[test]
    fn terminology_category_in_reasoning() {
        let glossary = Glossary::default();
        let mut oracle = OracleAssessment::new(ClassificationFlag::NeedsGeoLogic, 0.8);
        oracle.reasoning = "Touches EU privacy obligations".to_string();
        let b = secondary_validation(
            &glossary,
            &extraction("GDPR banner", &[("GDPR", EntityType::Terminology)]),
            &oracle,
        );
        assert_eq!(b.terminology_validation, 0.9);
    }

    #[test]
    fn compliance_language_patterns_add_up() {
        let glossary = Glossary::default();
        let oracle = OracleAssessment::new(ClassificationFlag::NeedsGeoLogic, 0.8);
        let b = secondary_validation(
            &glossary,
            &extraction(
                "Age verification requirement to comply with state law",
                &[],
            ),
            &oracle,
        );
        assert!((b.pattern_validation - 0.6).abs() < 1e-9);
    }

    #[test]
    fn entity_quality_averages_best_per_type() {
        let s = |t, c: f64| StandardizedEntity {
            original: String::new(),
            entity_type: t,
            canonical: Some("x".to_string()),
            confidence: c,
            tier: MatchTier::Exact,
        };
        assert_eq!(entity_quality(&[]), 0.5);
        let q = entity_quality(&[
            s(EntityType::Location, 0.8),
            s(EntityType::Location, 1.0),
            s(EntityType::Age, 0.6),
        ]);
        assert!((q - 0.8).abs() < 1e-9);
    }
}
