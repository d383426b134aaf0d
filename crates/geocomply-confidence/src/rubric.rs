//! The three-level confidence rubric and its canned guidance.

use geocomply_core::models::ConfidenceLevel;

/// Contextual risk flags that add notes on top of the level's guidance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RiskFlags {
    pub ambiguous_entities: bool,
    pub regulatory_conflict: bool,
    pub location_uncertainty: bool,
}

pub fn description(confidence: f64) -> String {
    match ConfidenceLevel::from_score(confidence) {
        ConfidenceLevel::Low => {
            format!("Low confidence ({confidence:.3}) - oracle unsure, requires human review")
        }
        ConfidenceLevel::Medium => {
            format!("Medium confidence ({confidence:.3}) - possible match, requires cross-check")
        }
        ConfidenceLevel::High => {
            format!("High confidence ({confidence:.3}) - strong evidence, can proceed")
        }
    }
}

fn base_recommendations(level: ConfidenceLevel) -> &'static [&'static str] {
    match level {
        ConfidenceLevel::Low => &[
            "Flag for immediate human review",
            "Do not auto-approve any actions",
            "Collect additional context or clarification",
            "Consider manual classification override",
        ],
        ConfidenceLevel::Medium => &[
            "Perform additional cross-validation checks",
            "Review entity extraction quality",
            "Check for regulatory pattern matches",
            "Consider elevated review threshold",
        ],
        ConfidenceLevel::High => &[
            "Proceed with automated classification",
            "Log decision for audit trail",
            "Apply standard compliance rules",
            "Monitor for feedback patterns",
        ],
    }
}

pub fn recommendations(level: ConfidenceLevel, flags: RiskFlags) -> Vec<String> {
    let mut out: Vec<String> = base_recommendations(level)
        .iter()
        .map(|s| s.to_string())
        .collect();
    if flags.ambiguous_entities {
        out.push("Review ambiguous entity mappings".to_string());
    }
    if flags.regulatory_conflict {
        out.push("Resolve regulatory requirement conflicts".to_string());
    }
    if flags.location_uncertainty {
        out.push("Clarify geographic scope and jurisdiction".to_string());
    }
    out
}
