use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{
    ConfidenceBreakdown, DecisionResult, DisambiguationResult, OracleAssessment, ReviewPriority,
    RiskLevel, StandardizedEntity,
};

/// Which path through the pipeline produced the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassificationMethod {
    ClearCut,
    OraclePrimary,
    OracleSecondary,
    LowSignal,
    FailSafe,
}

/// Orchestrator states, recorded in visiting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStage {
    Start,
    Extract,
    CheckClearCut,
    ClearCutExit,
    FullAnalysis,
    Standardize,
    AssessAmbiguity,
    FuseConfidence,
    Escalate,
    FailSafe,
    Done,
}

/// Components of the secondary (pattern-based) validation score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SecondaryBreakdown {
    pub location_validation: f64,
    pub age_validation: f64,
    pub terminology_validation: f64,
    pub pattern_validation: f64,
}

impl SecondaryBreakdown {
    /// Mean of the non-zero components, 0 when none fired.
    pub fn score(&self) -> f64 {
        let fired: Vec<f64> = [
            self.location_validation,
            self.age_validation,
            self.terminology_validation,
            self.pattern_validation,
        ]
        .into_iter()
        .filter(|v| *v > 0.0)
        .collect();
        if fired.is_empty() {
            0.0
        } else {
            fired.iter().sum::<f64>() / fired.len() as f64
        }
    }
}

/// Auditable output of one classification request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub request_id: Uuid,
    pub input_hash: String,
    pub method: ClassificationMethod,
    pub stages: Vec<PipelineStage>,
    pub decision: DecisionResult,
    pub risk: RiskLevel,
    pub primary_confidence: f64,
    pub secondary_confidence: f64,
    pub secondary_breakdown: SecondaryBreakdown,
    pub confidence_breakdown: Option<ConfidenceBreakdown>,
    pub disambiguation: Option<DisambiguationResult>,
    pub standardized_entities: Vec<StandardizedEntity>,
    pub oracle: Option<OracleAssessment>,
    pub needs_human_review: bool,
    pub human_review_reason: String,
    pub review_priority: ReviewPriority,
    pub processed_at: DateTime<Utc>,
    pub processing_time_ms: u64,
}

/// Stable content hash of a request's input, hex-encoded.
pub fn input_hash(title: &str, description: &str) -> String {
    let mut hasher = blake3::Hasher::new();
    hasher.update(title.as_bytes());
    hasher.update(&[0]);
    hasher.update(description.as_bytes());
    hasher.finalize().to_hex().to_string()
}
