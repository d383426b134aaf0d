use geocomply_core::models::{ComplianceCategory, EscalationRule, ReviewPriority};
use serde::{Deserialize, Serialize};

use crate::registry::ThresholdTable;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdSummaryEntry {
    pub category: ComplianceCategory,
    pub threshold: f64,
    pub escalation: EscalationRule,
    pub priority: ReviewPriority,
    pub description: String,
}

/// Read-only view of the threshold configuration in force.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdSummary {
    pub default_category: ComplianceCategory,
    /// Sorted by threshold, strictest first.
    pub entries: Vec<ThresholdSummaryEntry>,
}

impl ThresholdSummary {
    pub fn from_table(table: &ThresholdTable) -> Self {
        let mut entries: Vec<ThresholdSummaryEntry> = table
            .iter()
            .map(|t| ThresholdSummaryEntry {
                category: t.category,
                threshold: t.confidence_threshold,
                escalation: t.escalation_rule,
                priority: t.escalation_rule.review_priority(),
                description: t.description.clone(),
            })
            .collect();
        entries.sort_by(|a, b| {
            b.threshold
                .total_cmp(&a.threshold)
                .then(a.category.cmp(&b.category))
        });
        Self {
            default_category: table.default_category(),
            entries,
        }
    }

    pub fn get(&self, category: ComplianceCategory) -> Option<&ThresholdSummaryEntry> {
        self.entries.iter().find(|e| e.category == category)
    }
}
