use serde::{Deserialize, Serialize};
use std::fmt;

use super::ReviewPriority;

/// Classes of ambiguity the assessor recognises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmbiguityKind {
    MissingLocation,
    MissingAge,
    VagueLocation,
    VagueAge,
    UnclearTerminology,
}

impl AmbiguityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MissingLocation => "missing_location",
            Self::MissingAge => "missing_age",
            Self::VagueLocation => "vague_location",
            Self::VagueAge => "vague_age",
            Self::UnclearTerminology => "unclear_terminology",
        }
    }
}

impl fmt::Display for AmbiguityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How an ambiguity is expected to be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionStrategy {
    AssignUnknown,
    FlagHumanReview,
    InferFromContext,
    RequestClarification,
    ApplyDefaultRules,
}

impl ResolutionStrategy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AssignUnknown => "assign_unknown",
            Self::FlagHumanReview => "flag_human_review",
            Self::InferFromContext => "infer_from_context",
            Self::RequestClarification => "request_clarification",
            Self::ApplyDefaultRules => "apply_default_rules",
        }
    }
}

/// One detected ambiguity and its cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmbiguityAssessment {
    pub kind: AmbiguityKind,
    /// Confidence reduction in [0, 0.5].
    pub confidence_impact: f64,
    pub entity_text: String,
    pub context_clues: Vec<String>,
    pub suggested_resolution: ResolutionStrategy,
    pub alternative_interpretations: Vec<String>,
    pub requires_human_review: bool,
    pub priority: ReviewPriority,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendedAction {
    NoAmbiguity,
    ProceedWithCaution,
    ElevatedThreshold,
    HumanReview,
}

impl RecommendedAction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NoAmbiguity => "no_ambiguity",
            Self::ProceedWithCaution => "proceed_with_caution",
            Self::ElevatedThreshold => "elevated_threshold",
            Self::HumanReview => "human_review",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedEntity {
    pub original: String,
    pub resolved: String,
    pub method: String,
}

/// Aggregate of all assessments for one request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisambiguationResult {
    /// Sum of impacts, capped at 0.5.
    pub overall_confidence_penalty: f64,
    pub recommended_action: RecommendedAction,
    pub human_review_needed: bool,
    pub context_used: Vec<String>,
    pub resolved_entities: Vec<ResolvedEntity>,
}

impl DisambiguationResult {
    pub fn no_ambiguity() -> Self {
        Self {
            overall_confidence_penalty: 0.0,
            recommended_action: RecommendedAction::NoAmbiguity,
            human_review_needed: false,
            context_used: Vec::new(),
            resolved_entities: Vec::new(),
        }
    }
}
