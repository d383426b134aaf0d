use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of entity pulled out of a feature description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityType {
    Location,
    Age,
    Terminology,
}

impl EntityType {
    pub const ALL: [EntityType; 3] = [Self::Location, Self::Age, Self::Terminology];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Location => "location",
            Self::Age => "age",
            Self::Terminology => "terminology",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which extractor produced an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionSource {
    Regex,
    Ner,
    Glossary,
    External,
}

/// Half-open byte range `[start, end)` in the cleaned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start: start.min(end),
            end: start.max(end),
        }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Number of positions shared with `other`.
    pub fn overlap(&self, other: &Span) -> usize {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        end.saturating_sub(start)
    }
}

/// A single extracted entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityMatch {
    pub text: String,
    pub entity_type: EntityType,
    pub span: Span,
    pub confidence: f64,
    pub source: ExtractionSource,
}

impl EntityMatch {
    pub fn new(
        text: impl Into<String>,
        entity_type: EntityType,
        span: Span,
        confidence: f64,
        source: ExtractionSource,
    ) -> Self {
        Self {
            text: text.into(),
            entity_type,
            span,
            confidence: super::Confidence::new(confidence).value(),
            source,
        }
    }
}

/// Verdict for inputs obvious enough to skip the oracle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClearCutVerdict {
    pub needs_geo_logic: bool,
    pub confidence: f64,
    pub reason: String,
}

/// Output of the extraction stage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub entities: Vec<EntityMatch>,
    pub cleaned_text: String,
    pub tokens: Vec<String>,
    pub overall_confidence: f64,
    pub clear_cut: Option<ClearCutVerdict>,
}

impl ExtractionResult {
    pub fn of_type(&self, entity_type: EntityType) -> impl Iterator<Item = &EntityMatch> {
        self.entities
            .iter()
            .filter(move |e| e.entity_type == entity_type)
    }

    pub fn has(&self, entity_type: EntityType) -> bool {
        self.of_type(entity_type).next().is_some()
    }
}

/// How a surface form was matched against the glossary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    Exact,
    Numeric,
    Normalized,
    TextInAlias,
    AliasInText,
    SynonymInText,
    NoMatch,
}

/// An extracted entity paired with its canonical form, if any.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardizedEntity {
    pub original: String,
    pub entity_type: EntityType,
    pub canonical: Option<String>,
    pub confidence: f64,
    pub tier: MatchTier,
}
