use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Compliance categories a feature can fall into.
///
/// Declared in lexical order of their names so the derived `Ord` doubles as
/// the tie-break order between equally strict categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceCategory {
    BusinessAnalytics,
    InternalFeatures,
    LegalCompliance,
    SafetyHealthProtection,
}

impl ComplianceCategory {
    pub const ALL: [ComplianceCategory; 4] = [
        Self::BusinessAnalytics,
        Self::InternalFeatures,
        Self::LegalCompliance,
        Self::SafetyHealthProtection,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::BusinessAnalytics => "business_analytics",
            Self::InternalFeatures => "internal_features",
            Self::LegalCompliance => "legal_compliance",
            Self::SafetyHealthProtection => "safety_health_protection",
        }
    }
}

impl fmt::Display for ComplianceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComplianceCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == normalized)
            .ok_or_else(|| format!("unknown compliance category: {s}"))
    }
}

/// What happens to a case that lands in a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EscalationRule {
    HumanReview,
    AutoOk,
    Ignore,
}

impl EscalationRule {
    pub fn review_priority(self) -> ReviewPriority {
        match self {
            Self::HumanReview => ReviewPriority::High,
            Self::AutoOk => ReviewPriority::Medium,
            Self::Ignore => ReviewPriority::Low,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::HumanReview => "human_review",
            Self::AutoOk => "auto_ok",
            Self::Ignore => "ignore",
        }
    }
}

impl fmt::Display for EscalationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Urgency of a human review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewPriority {
    #[default]
    Low,
    Medium,
    High,
    Critical,
}

impl ReviewPriority {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

impl fmt::Display for ReviewPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Risk as reported by the oracle, or forced by the fail-safe path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
    #[default]
    #[serde(other)]
    Unknown,
}
