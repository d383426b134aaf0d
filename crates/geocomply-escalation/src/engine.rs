//! DecisionEngine: strictest-wins threshold escalation.

use std::collections::BTreeSet;
use std::sync::Arc;

use geocomply_core::config::defaults::DEFAULT_BUSINESS_THRESHOLD;
use geocomply_core::config::ThresholdConfig;
use geocomply_core::constants::DETERMINISTIC_RULE_CONFIDENCE;
use geocomply_core::errors::ConfigError;
use geocomply_core::models::{
    ClassificationFlag, ComplianceCategory, Confidence, DecisionResult, EscalationAction,
    EscalationRule, OracleAssessment, ReviewPriority, ThresholdEvaluation,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::detector::CategoryDetector;
use crate::registry::{ThresholdRegistry, ThresholdTable};
use crate::summary::ThresholdSummary;

/// The one `(threshold, rule)` pair that governs a request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AppliedThreshold {
    pub category: ComplianceCategory,
    pub threshold: f64,
    pub escalation_rule: EscalationRule,
    /// No detected category had an entry; the default was applied.
    pub configuration_gap: bool,
}

#[derive(Debug, Default)]
pub struct DecisionEngine {
    registry: ThresholdRegistry,
    detector: CategoryDetector,
}

impl DecisionEngine {
    pub fn new(registry: ThresholdRegistry, detector: CategoryDetector) -> Self {
        Self { registry, detector }
    }

    pub fn from_config(config: &ThresholdConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(
            ThresholdRegistry::from_config(config)?,
            CategoryDetector::default(),
        ))
    }

    pub fn registry(&self) -> &ThresholdRegistry {
        &self.registry
    }

    pub fn detector(&self) -> &CategoryDetector {
        &self.detector
    }

    pub fn update_thresholds(&self, config: &ThresholdConfig) -> Result<(), ConfigError> {
        self.registry.reload(config)
    }

    pub fn detect_categories(
        &self,
        text: &str,
        oracle: &OracleAssessment,
        rule_tags: &[String],
    ) -> BTreeSet<ComplianceCategory> {
        self.detector.detect_categories(text, oracle, rule_tags)
    }

    pub fn applicable_threshold(&self, categories: &BTreeSet<ComplianceCategory>) -> AppliedThreshold {
        resolve(&self.registry.snapshot(), categories)
    }

    /// Decide using the oracle's own confidence (0.6 when absent).
    pub fn make_decision(
        &self,
        text: &str,
        oracle: &OracleAssessment,
        rule_tags: &[String],
        deterministic_rule_fired: bool,
    ) -> DecisionResult {
        self.decide_with_confidence(
            text,
            oracle,
            rule_tags,
            deterministic_rule_fired,
            oracle.effective_confidence(),
        )
    }

    /// Same policy as [`make_decision`](Self::make_decision) against a
    /// caller-supplied confidence.
    pub fn decide_with_confidence(
        &self,
        text: &str,
        oracle: &OracleAssessment,
        rule_tags: &[String],
        deterministic_rule_fired: bool,
        confidence: f64,
    ) -> DecisionResult {
        self.decide_with_table(
            &self.registry.snapshot(),
            text,
            oracle,
            rule_tags,
            deterministic_rule_fired,
            confidence,
        )
    }

    /// Decide against `table` instead of the current snapshot. A caller
    /// that took a snapshot at the start of a request passes it here so a
    /// reload in the meantime does not change that request's threshold.
    pub fn decide_with_table(
        &self,
        table: &ThresholdTable,
        text: &str,
        oracle: &OracleAssessment,
        rule_tags: &[String],
        deterministic_rule_fired: bool,
        confidence: f64,
    ) -> DecisionResult {
        let categories = self.detector.detect_categories(text, oracle, rule_tags);
        let applied = resolve(table, &categories);
        let categories_detected: Vec<ComplianceCategory> = categories.into_iter().collect();

        if deterministic_rule_fired {
            info!(rules = ?rule_tags, "deterministic rule override");
            let rules = if rule_tags.is_empty() {
                "unnamed".to_string()
            } else {
                rule_tags.join(", ")
            };
            return DecisionResult {
                final_flag: ClassificationFlag::NeedsGeoLogic,
                confidence: DETERMINISTIC_RULE_CONFIDENCE,
                categories_detected,
                applied_category: applied.category,
                threshold_applied: applied.threshold,
                threshold_violations: Vec::new(),
                escalation_rule: EscalationRule::AutoOk,
                review_required: false,
                review_priority: ReviewPriority::Low,
                reasoning: format!("Deterministic rule(s) matched: {rules}"),
                escalation_reason: "Rules fired - automatic override".to_string(),
                deterministic_override: true,
            };
        }

        let confidence = Confidence::new(confidence).value();
        let names = if categories_detected.is_empty() {
            format!("{} (default)", applied.category)
        } else {
            categories_detected
                .iter()
                .map(|c| c.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        };

        let meets = confidence >= applied.threshold;
        let (final_flag, threshold_violations, escalation_reason) = if meets {
            (
                oracle.flag,
                Vec::new(),
                format!(
                    "Confidence {confidence:.2} meets threshold {:.2} for {names}",
                    applied.threshold
                ),
            )
        } else {
            (
                ClassificationFlag::Ambiguous,
                vec![format!(
                    "confidence {confidence:.2} < {:.2} for categories: {names}",
                    applied.threshold
                )],
                format!(
                    "Confidence {confidence:.2} below threshold {:.2} for {names}",
                    applied.threshold
                ),
            )
        };

        debug!(
            category = %applied.category,
            threshold = applied.threshold,
            confidence,
            review_required = !meets,
            "decision made"
        );

        DecisionResult {
            final_flag,
            confidence,
            categories_detected,
            applied_category: applied.category,
            threshold_applied: applied.threshold,
            threshold_violations,
            escalation_rule: applied.escalation_rule,
            review_required: !meets,
            review_priority: applied.escalation_rule.review_priority(),
            reasoning: oracle.reasoning.clone(),
            escalation_reason,
            deterministic_override: false,
        }
    }

    /// Check `confidence` against `category`'s threshold in isolation.
    ///
    /// A category without an entry is evaluated against the default one.
    pub fn evaluate_threshold(&self, category: ComplianceCategory, confidence: f64) -> ThresholdEvaluation {
        let table = self.registry.snapshot();
        let confidence = Confidence::new(confidence).value();
        let applied = resolve(&table, &BTreeSet::from([category]));
        let meets_threshold = confidence >= applied.threshold;

        let action = if meets_threshold {
            EscalationAction::AutoApprove
        } else {
            match applied.escalation_rule {
                EscalationRule::HumanReview | EscalationRule::AutoOk => EscalationAction::HumanReview,
                EscalationRule::Ignore => EscalationAction::Ignore,
            }
        };
        let reasoning = if meets_threshold {
            format!(
                "Confidence ({confidence:.3}) meets threshold ({:.3})",
                applied.threshold
            )
        } else {
            format!(
                "Confidence ({confidence:.3}) below threshold ({:.3}) - {}",
                applied.threshold, applied.escalation_rule
            )
        };

        ThresholdEvaluation {
            category: applied.category,
            confidence,
            threshold: applied.threshold,
            meets_threshold,
            action,
            priority: applied.escalation_rule.review_priority(),
            reasoning,
        }
    }

    pub fn threshold_summary(&self) -> ThresholdSummary {
        ThresholdSummary::from_table(&self.registry.snapshot())
    }

    pub fn snapshot(&self) -> Arc<ThresholdTable> {
        self.registry.snapshot()
    }
}

/// Strictest threshold among `categories`; the first category in lexical
/// order wins ties.
fn resolve(table: &ThresholdTable, categories: &BTreeSet<ComplianceCategory>) -> AppliedThreshold {
    let mut best: Option<AppliedThreshold> = None;
    for entry in categories.iter().filter_map(|c| table.get(*c)) {
        if best.map_or(true, |b| entry.confidence_threshold > b.threshold) {
            best = Some(AppliedThreshold {
                category: entry.category,
                threshold: entry.confidence_threshold,
                escalation_rule: entry.escalation_rule,
                configuration_gap: false,
            });
        }
    }
    if let Some(best) = best {
        return best;
    }

    warn!(
        detected = categories.len(),
        default = %table.default_category(),
        "no configured category matched, applying default threshold"
    );
    match table.default_entry() {
        Some(entry) => AppliedThreshold {
            category: entry.category,
            threshold: entry.confidence_threshold,
            escalation_rule: entry.escalation_rule,
            configuration_gap: true,
        },
        None => AppliedThreshold {
            category: ComplianceCategory::BusinessAnalytics,
            threshold: DEFAULT_BUSINESS_THRESHOLD,
            escalation_rule: EscalationRule::AutoOk,
            configuration_gap: true,
        },
    }
}
