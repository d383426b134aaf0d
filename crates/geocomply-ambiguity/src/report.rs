use geocomply_core::models::{AmbiguityAssessment, AmbiguityKind, ResolutionStrategy, ReviewPriority};
use serde::{Deserialize, Serialize};

use crate::assessor::AmbiguityAssessor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmbiguityStatus {
    NoAmbiguity,
    AmbiguityDetected,
}

/// Human-facing summary of one request's assessments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmbiguityReport {
    pub status: AmbiguityStatus,
    pub total_assessments: usize,
    pub kinds: Vec<AmbiguityKind>,
    /// Capped at the configured penalty cap.
    pub total_confidence_impact: f64,
    pub highest_priority: Option<ReviewPriority>,
    pub requires_human_review: bool,
    pub summary: String,
    pub resolutions: Vec<ResolutionStrategy>,
}

impl AmbiguityAssessor {
    pub fn ambiguity_report(&self, assessments: &[AmbiguityAssessment]) -> AmbiguityReport {
        if assessments.is_empty() {
            return AmbiguityReport {
                status: AmbiguityStatus::NoAmbiguity,
                total_assessments: 0,
                kinds: Vec::new(),
                total_confidence_impact: 0.0,
                highest_priority: None,
                requires_human_review: false,
                summary: "No ambiguous entities detected".to_string(),
                resolutions: Vec::new(),
            };
        }

        let raw: f64 = assessments.iter().map(|a| a.confidence_impact).sum();
        AmbiguityReport {
            status: AmbiguityStatus::AmbiguityDetected,
            total_assessments: assessments.len(),
            kinds: assessments.iter().map(|a| a.kind).collect(),
            total_confidence_impact: self.capped_penalty(assessments),
            highest_priority: assessments.iter().map(|a| a.priority).max(),
            requires_human_review: assessments.iter().any(|a| a.requires_human_review),
            summary: format!(
                "Detected {} ambiguous entities with {raw:.2} confidence impact",
                assessments.len()
            ),
            resolutions: assessments.iter().map(|a| a.suggested_resolution).collect(),
        }
    }
}
