use serde::{Deserialize, Serialize};

use super::{ClassificationFlag, ComplianceCategory, EscalationRule, ReviewPriority};

/// Confidence floor and escalation rule for one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryThreshold {
    pub category: ComplianceCategory,
    pub confidence_threshold: f64,
    pub escalation_rule: EscalationRule,
    #[serde(default)]
    pub description: String,
}

/// Final escalation decision for one request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionResult {
    pub final_flag: ClassificationFlag,
    pub confidence: f64,
    pub categories_detected: Vec<ComplianceCategory>,
    pub applied_category: ComplianceCategory,
    pub threshold_applied: f64,
    pub threshold_violations: Vec<String>,
    pub escalation_rule: EscalationRule,
    pub review_required: bool,
    pub review_priority: ReviewPriority,
    pub reasoning: String,
    pub escalation_reason: String,
    pub deterministic_override: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EscalationAction {
    AutoApprove,
    HumanReview,
    Ignore,
}

/// Result of checking one confidence against one category's threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdEvaluation {
    pub category: ComplianceCategory,
    pub confidence: f64,
    pub threshold: f64,
    pub meets_threshold: bool,
    pub action: EscalationAction,
    pub priority: ReviewPriority,
    pub reasoning: String,
}
