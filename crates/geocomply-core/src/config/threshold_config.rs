use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::{CategoryThreshold, ComplianceCategory, EscalationRule};

/// Per-category confidence thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdConfig {
    /// Category applied when detection finds nothing.
    pub default_category: ComplianceCategory,
    pub categories: Vec<CategoryThreshold>,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            default_category: ComplianceCategory::BusinessAnalytics,
            categories: vec![
                CategoryThreshold {
                    category: ComplianceCategory::LegalCompliance,
                    confidence_threshold: defaults::DEFAULT_LEGAL_THRESHOLD,
                    escalation_rule: EscalationRule::HumanReview,
                    description: "Legal requirements with regulatory consequences".to_string(),
                },
                CategoryThreshold {
                    category: ComplianceCategory::SafetyHealthProtection,
                    confidence_threshold: defaults::DEFAULT_SAFETY_THRESHOLD,
                    escalation_rule: EscalationRule::HumanReview,
                    description: "Child safety, health, and user protection".to_string(),
                },
                CategoryThreshold {
                    category: ComplianceCategory::BusinessAnalytics,
                    confidence_threshold: defaults::DEFAULT_BUSINESS_THRESHOLD,
                    escalation_rule: EscalationRule::AutoOk,
                    description: "Experiments, analytics, and market testing".to_string(),
                },
                CategoryThreshold {
                    category: ComplianceCategory::InternalFeatures,
                    confidence_threshold: defaults::DEFAULT_INTERNAL_THRESHOLD,
                    escalation_rule: EscalationRule::Ignore,
                    description: "Internal tooling and performance work".to_string(),
                },
            ],
        }
    }
}

impl ThresholdConfig {
    pub fn get(&self, category: ComplianceCategory) -> Option<&CategoryThreshold> {
        self.categories.iter().find(|t| t.category == category)
    }
}
