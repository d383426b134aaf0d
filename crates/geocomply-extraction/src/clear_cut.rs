//! Clear-cut detection: inputs whose answer is obvious from the text alone.

use std::sync::LazyLock;

use geocomply_core::constants::CLEAR_CUT_CONFIDENCE;
use geocomply_core::models::{ClearCutVerdict, EntityMatch, EntityType};
use geocomply_core::text::KeywordSet;

use crate::patterns::PatternSet;

/// Location, age and compliance term together.
pub const FULL_SIGNAL_CONFIDENCE: f64 = 0.97;
/// Business language with no compliance or age signal.
pub const BUSINESS_ONLY_CONFIDENCE: f64 = 0.90;

static BUSINESS_INDICATORS: LazyLock<KeywordSet> = LazyLock::new(|| {
    KeywordSet::prefixes([
        "market testing",
        "a/b test",
        "user engagement",
        "revenue",
        "conversion",
        "retention",
        "growth",
        "experiment",
        "pilot",
        "beta",
        "rollout",
        "launch",
    ])
});

/// Entity-level signals the verdict is derived from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EntitySignals {
    pub specific_location: bool,
    pub age_protection: bool,
    pub compliance_term: bool,
}

impl EntitySignals {
    pub fn from_entities(entities: &[EntityMatch]) -> Self {
        let mut signals = Self::default();
        for e in entities {
            match e.entity_type {
                EntityType::Location => signals.specific_location |= e.confidence >= 0.9,
                EntityType::Age => {
                    let text = e.text.to_lowercase();
                    signals.age_protection |=
                        e.confidence >= 0.8 && (text.contains("age") || text.contains("minor"));
                }
                EntityType::Terminology => signals.compliance_term |= e.confidence >= 0.9,
            }
        }
        signals
    }
}

pub fn detect_clear_cut(
    patterns: &PatternSet,
    text: &str,
    entities: &[EntityMatch],
) -> Option<ClearCutVerdict> {
    if let Some(p) = patterns.clear_cut.iter().find(|p| p.regex.is_match(text)) {
        return Some(verdict(true, CLEAR_CUT_CONFIDENCE, p.reason));
    }

    let signals = EntitySignals::from_entities(entities);
    if signals.specific_location && signals.age_protection && signals.compliance_term {
        return Some(verdict(
            true,
            FULL_SIGNAL_CONFIDENCE,
            "jurisdiction, age group and compliance term all present",
        ));
    }
    if signals.specific_location && signals.compliance_term {
        return Some(verdict(
            true,
            CLEAR_CUT_CONFIDENCE,
            "jurisdiction and compliance term present",
        ));
    }

    let business = BUSINESS_INDICATORS.is_match(text);
    if business && !signals.compliance_term && !signals.age_protection {
        return Some(verdict(
            false,
            BUSINESS_ONLY_CONFIDENCE,
            "business language without compliance signals",
        ));
    }
    None
}

fn verdict(needs_geo_logic: bool, confidence: f64, reason: &str) -> ClearCutVerdict {
    ClearCutVerdict {
        needs_geo_logic,
        confidence,
        reason: reason.to_string(),
    }
}
