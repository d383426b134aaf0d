//! Result assembly: request bookkeeping, forced-review results, and the
//! review merge between escalation and ambiguity.

use std::time::Instant;

use chrono::Utc;
use geocomply_core::config::defaults::DEFAULT_BUSINESS_THRESHOLD;
use geocomply_core::models::{
    input_hash, AmbiguityAssessment, ClassificationFlag, ClassificationMethod,
    ClassificationResult, ConfidenceBreakdown, DecisionResult, DisambiguationResult,
    DiversityFlags, EscalationRule, OracleAssessment, PipelineStage, RecommendedAction, ReviewPriority, RiskLevel,
    SecondaryBreakdown, StandardizedEntity,
};
use geocomply_escalation::ThresholdTable;
use uuid::Uuid;

/// Identity, timing and visited stages of one request.
#[derive(Debug)]
pub struct RequestTrace {
    request_id: Uuid,
    input_hash: String,
    started: Instant,
    stages: Vec<PipelineStage>,
}

impl RequestTrace {
    pub fn new(request_id: Uuid, title: &str, description: &str) -> Self {
        Self {
            request_id,
            input_hash: input_hash(title, description),
            started: Instant::now(),
            stages: vec![PipelineStage::Start],
        }
    }

    pub fn request_id(&self) -> Uuid {
        self.request_id
    }

    pub fn enter(&mut self, stage: PipelineStage) {
        self.stages.push(stage);
    }

    pub fn stages(&self) -> &[PipelineStage] {
        &self.stages
    }

    pub fn finish(mut self, outcome: Outcome) -> ClassificationResult {
        self.stages.push(PipelineStage::Done);
        let elapsed = self.started.elapsed().as_millis();
        ClassificationResult {
            request_id: self.request_id,
            input_hash: self.input_hash,
            method: outcome.method,
            stages: self.stages,
            decision: outcome.decision,
            risk: outcome.risk,
            primary_confidence: outcome.primary_confidence,
            secondary_confidence: outcome.secondary_breakdown.score(),
            secondary_breakdown: outcome.secondary_breakdown,
            confidence_breakdown: outcome.confidence_breakdown,
            disambiguation: outcome.disambiguation,
            standardized_entities: outcome.standardized_entities,
            oracle: outcome.oracle,
            needs_human_review: outcome.review.needed,
            human_review_reason: outcome.review.reason,
            review_priority: outcome.review.priority,
            processed_at: Utc::now(),
            processing_time_ms: u64::try_from(elapsed).unwrap_or(u64::MAX),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewVerdict {
    pub needed: bool,
    pub reason: String,
    pub priority: ReviewPriority,
}

/// Everything a pipeline path contributes to the final result.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub method: ClassificationMethod,
    pub decision: DecisionResult,
    pub risk: RiskLevel,
    pub primary_confidence: f64,
    pub secondary_breakdown: SecondaryBreakdown,
    pub confidence_breakdown: Option<ConfidenceBreakdown>,
    pub disambiguation: Option<DisambiguationResult>,
    pub standardized_entities: Vec<StandardizedEntity>,
    pub oracle: Option<OracleAssessment>,
    pub review: ReviewVerdict,
}

impl Outcome {
    /// Collaborator failure: zero confidence, critical priority, human review.
    pub fn fail_safe(
        table: &ThresholdTable,
        cause: &str,
        standardized_entities: Vec<StandardizedEntity>,
    ) -> Self {
        let reason = format!("Fail-safe: {cause}");
        Self {
            method: ClassificationMethod::FailSafe,
            decision: forced_review(table, &reason, ReviewPriority::Critical),
            risk: RiskLevel::Critical,
            primary_confidence: 0.0,
            secondary_breakdown: SecondaryBreakdown::default(),
            confidence_breakdown: None,
            disambiguation: None,
            standardized_entities,
            oracle: None,
            review: ReviewVerdict {
                needed: true,
                reason,
                priority: ReviewPriority::Critical,
            },
        }
    }

    /// Nothing to classify: no oracle call, medium-priority review.
    pub fn low_signal(table: &ThresholdTable) -> Self {
        let reason = "Low signal: title and description are empty".to_string();
        Self {
            method: ClassificationMethod::LowSignal,
            decision: forced_review(table, &reason, ReviewPriority::Medium),
            risk: RiskLevel::Unknown,
            primary_confidence: 0.0,
            secondary_breakdown: SecondaryBreakdown::default(),
            confidence_breakdown: None,
            disambiguation: None,
            standardized_entities: Vec::new(),
            oracle: None,
            review: ReviewVerdict {
                needed: true,
                reason,
                priority: ReviewPriority::Medium,
            },
        }
    }
}

fn forced_review(table: &ThresholdTable, reason: &str, priority: ReviewPriority) -> DecisionResult {
    let threshold = table
        .default_entry()
        .map_or(DEFAULT_BUSINESS_THRESHOLD, |e| e.confidence_threshold);
    DecisionResult {
        final_flag: ClassificationFlag::Ambiguous,
        confidence: 0.0,
        categories_detected: Vec::new(),
        applied_category: table.default_category(),
        threshold_applied: threshold,
        threshold_violations: vec![format!("confidence 0.00 < {threshold:.2}")],
        escalation_rule: EscalationRule::HumanReview,
        review_required: true,
        review_priority: priority,
        reasoning: reason.to_string(),
        escalation_reason: reason.to_string(),
        deterministic_override: false,
    }
}

/// Full-analysis conditions that ask for review on their own, at medium
/// priority, whatever the confidence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReviewSignals {
    /// The oracle could not place the feature on the risk scale.
    pub risk_unknown: bool,
    /// A location was found but no age group or regulatory term.
    pub location_without_context: bool,
}

impl ReviewSignals {
    pub fn new(oracle: &OracleAssessment, entities: DiversityFlags) -> Self {
        Self {
            risk_unknown: oracle.risk_assessment == RiskLevel::Unknown,
            location_without_context: entities.has_locations
                && !entities.has_ages
                && !entities.has_terminology,
        }
    }
}

/// Review is needed if escalation, ambiguity or one of the [`ReviewSignals`]
/// asks for it. The priority is the highest of the triggered sources; the
/// reason lists each trigger.
pub fn merge_review(
    decision: &DecisionResult,
    disambiguation: Option<&DisambiguationResult>,
    assessments: &[AmbiguityAssessment],
    signals: ReviewSignals,
) -> ReviewVerdict {
    let mut reasons = Vec::new();
    let mut priority: Option<ReviewPriority> = None;

    if decision.review_required {
        reasons.push(decision.escalation_reason.clone());
        priority = Some(decision.review_priority);
    }

    if signals.location_without_context {
        reasons.push("Location detected without compliance context".to_string());
        priority = priority.max(Some(ReviewPriority::Medium));
    }
    if signals.risk_unknown {
        reasons.push("Oracle could not determine the risk level".to_string());
        priority = priority.max(Some(ReviewPriority::Medium));
    }

    if let Some(d) = disambiguation {
        if d.human_review_needed || d.recommended_action == RecommendedAction::HumanReview {
            let flagged: Vec<&str> = assessments
                .iter()
                .filter(|a| a.requires_human_review)
                .map(|a| a.kind.as_str())
                .collect();
            reasons.push(if flagged.is_empty() {
                format!(
                    "Ambiguity penalty {:.2} requires review",
                    d.overall_confidence_penalty
                )
            } else {
                format!(
                    "Ambiguity requires review ({}; penalty {:.2})",
                    flagged.join(", "),
                    d.overall_confidence_penalty
                )
            });
            let ambiguity_priority = assessments
                .iter()
                .map(|a| a.priority)
                .max()
                .unwrap_or(ReviewPriority::Medium);
            priority = priority.max(Some(ambiguity_priority));
        }
    }

    match priority {
        Some(priority) => ReviewVerdict {
            needed: true,
            reason: reasons.join("; "),
            priority,
        },
        None => ReviewVerdict {
            needed: false,
            reason: String::new(),
            priority: decision.review_priority,
        },
    }
}
