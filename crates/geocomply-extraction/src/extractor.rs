//! PatternExtractor: glossary-backed regex extraction.

use std::sync::{Arc, PoisonError, RwLock};

use geocomply_core::errors::ExtractionError;
use geocomply_core::models::{
    ClearCutVerdict, EntityMatch, EntityType, ExtractionResult, ExtractionSource, Span,
};
use geocomply_core::traits::IEntityExtractor;
use geocomply_glossary::Glossary;
use regex::Regex;
use tracing::{debug, info};

use crate::cleaning::{clean_text, join_input, tokenize};
use crate::clear_cut::detect_clear_cut;
use crate::patterns::PatternSet;

/// Extraction confidence when nothing was found.
const NO_ENTITY_CONFIDENCE: f64 = 0.3;
/// Ceiling for the blended score of non-clear-cut inputs.
const BLENDED_CONFIDENCE_CAP: f64 = 0.95;

/// Extracts entities by matching glossary-derived patterns and keeping the
/// matches the glossary can standardize.
#[derive(Debug)]
pub struct PatternExtractor {
    glossary: Arc<Glossary>,
    patterns: RwLock<Arc<PatternSet>>,
}

impl PatternExtractor {
    pub fn new(glossary: Arc<Glossary>) -> Result<Self, ExtractionError> {
        let patterns = PatternSet::from_glossary(&glossary)?;
        Ok(Self {
            glossary,
            patterns: RwLock::new(Arc::new(patterns)),
        })
    }

    pub fn glossary(&self) -> &Arc<Glossary> {
        &self.glossary
    }

    /// Rebuild the patterns from the current glossary, picking up aliases
    /// added by feedback. In-flight extractions finish on the old set.
    pub fn refresh_patterns(&self) -> Result<(), ExtractionError> {
        let rebuilt = Arc::new(PatternSet::from_glossary(&self.glossary)?);
        *self.patterns.write().unwrap_or_else(PoisonError::into_inner) = rebuilt;
        info!(version = %self.glossary.current_version(), "extraction patterns refreshed");
        Ok(())
    }

    fn snapshot(&self) -> Arc<PatternSet> {
        Arc::clone(&self.patterns.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Run every pattern over `text` and keep standardizable matches.
    pub fn extract_entities(&self, text: &str) -> Vec<EntityMatch> {
        let patterns = self.snapshot();
        let mut found = Vec::new();
        for (entity_type, set) in [
            (EntityType::Location, &patterns.locations),
            (EntityType::Age, &patterns.ages),
            (EntityType::Terminology, &patterns.terminology),
        ] {
            for regex in set {
                self.collect(regex, entity_type, text, &mut found);
            }
        }
        deduplicate(found)
    }

    fn collect(
        &self,
        regex: &Regex,
        entity_type: EntityType,
        text: &str,
        out: &mut Vec<EntityMatch>,
    ) {
        for caps in regex.captures_iter(text) {
            let Some(m) = caps.get(1).or_else(|| caps.get(0)) else {
                continue;
            };
            if m.is_empty() {
                continue;
            }
            if let Some(confidence) = self.standardize(entity_type, m.as_str()) {
                out.push(EntityMatch::new(
                    m.as_str(),
                    entity_type,
                    Span::new(m.start(), m.end()),
                    confidence,
                    ExtractionSource::Regex,
                ));
            }
        }
    }

    /// Glossary confidence for a surface form, trying the singular of plural
    /// age words when the plural itself is unknown.
    fn standardize(&self, entity_type: EntityType, surface: &str) -> Option<f64> {
        let lookup = |s: &str| {
            let (matched, confidence) = match entity_type {
                EntityType::Location => {
                    let r = self.glossary.standardize_location(s);
                    (r.is_match(), r.confidence)
                }
                EntityType::Age => {
                    let r = self.glossary.standardize_age(s);
                    (r.is_match(), r.confidence)
                }
                EntityType::Terminology => {
                    let r = self.glossary.standardize_terminology(s);
                    (r.is_match(), r.confidence)
                }
            };
            matched.then_some(confidence)
        };
        lookup(surface).or_else(|| {
            if entity_type != EntityType::Age {
                return None;
            }
            singular(surface).and_then(|s| lookup(&s))
        })
    }
}

fn singular(word: &str) -> Option<String> {
    let lowered = word.to_lowercase();
    if lowered == "children" {
        return Some("child".to_string());
    }
    lowered
        .strip_suffix("es")
        .filter(|stem| stem.ends_with(['s', 'x', 'z', 'h']))
        .or_else(|| lowered.strip_suffix('s'))
        .map(String::from)
}

/// Drop same-type matches overlapping by more than half of the shorter span,
/// keeping the more confident one, then order by confidence.
fn deduplicate(entities: Vec<EntityMatch>) -> Vec<EntityMatch> {
    let mut kept: Vec<EntityMatch> = Vec::with_capacity(entities.len());
    for entity in entities {
        let clash = kept.iter().position(|existing| {
            let shorter = existing.span.len().min(entity.span.len());
            existing.entity_type == entity.entity_type
                && shorter > 0
                && existing.span.overlap(&entity.span) * 2 > shorter
        });
        match clash {
            Some(idx) if entity.confidence > kept[idx].confidence => kept[idx] = entity,
            Some(_) => {}
            None => kept.push(entity),
        }
    }
    kept.sort_by(|a, b| {
        b.confidence
            .total_cmp(&a.confidence)
            .then_with(|| a.span.start.cmp(&b.span.start))
    });
    kept
}

/// Blend of the best score per type, boosted when several types co-occur.
pub fn overall_confidence(entities: &[EntityMatch], clear_cut: Option<&ClearCutVerdict>) -> f64 {
    if let Some(verdict) = clear_cut {
        return verdict.confidence;
    }
    if entities.is_empty() {
        return NO_ENTITY_CONFIDENCE;
    }
    let best = |t: EntityType| {
        entities
            .iter()
            .filter(|e| e.entity_type == t)
            .map(|e| e.confidence)
            .fold(0.0_f64, f64::max)
    };
    let mut score = best(EntityType::Location) * 0.4
        + best(EntityType::Age) * 0.3
        + best(EntityType::Terminology) * 0.3;

    let types = EntityType::ALL
        .iter()
        .filter(|t| entities.iter().any(|e| e.entity_type == **t))
        .count();
    if types >= 2 {
        score *= 1.2;
    }
    if types >= 3 {
        score *= 1.1;
    }
    score.min(BLENDED_CONFIDENCE_CAP)
}

impl IEntityExtractor for PatternExtractor {
    fn extract(&self, title: &str, description: &str) -> Result<ExtractionResult, ExtractionError> {
        let cleaned_text = clean_text(&join_input(title, description));
        let tokens = tokenize(&cleaned_text);
        let entities = self.extract_entities(&cleaned_text);
        let clear_cut = detect_clear_cut(&self.snapshot(), &cleaned_text, &entities);
        let overall_confidence = overall_confidence(&entities, clear_cut.as_ref());

        debug!(
            entities = entities.len(),
            tokens = tokens.len(),
            clear_cut = clear_cut.as_ref().map(|v| v.needs_geo_logic),
            overall_confidence,
            "extraction complete"
        );
        Ok(ExtractionResult {
            entities,
            cleaned_text,
            tokens,
            overall_confidence,
            clear_cut,
        })
    }

    fn on_glossary_updated(&self) -> Result<(), ExtractionError> {
        self.refresh_patterns()
    }
}
