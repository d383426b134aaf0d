use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use super::{EntityMatch, RiskLevel};
use crate::constants::DEFAULT_ORACLE_CONFIDENCE;

/// Final classification flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassificationFlag {
    #[serde(alias = "needs_geo_logic")]
    NeedsGeoLogic,
    #[serde(alias = "no_geo_logic")]
    NoGeoLogic,
    #[serde(alias = "ambiguous")]
    Ambiguous,
}

impl fmt::Display for ClassificationFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::NeedsGeoLogic => "NeedsGeoLogic",
            Self::NoGeoLogic => "NoGeoLogic",
            Self::Ambiguous => "Ambiguous",
        };
        f.write_str(s)
    }
}

/// A regulation cited by the oracle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Regulation {
    pub name: String,
    pub jurisdiction: String,
    pub relevance: String,
    pub legal_basis: String,
}

/// Structured output of the external reasoning oracle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OracleAssessment {
    pub flag: ClassificationFlag,
    /// Raw confidence as reported. Numeric strings are accepted; anything
    /// else deserializes to `None`.
    #[serde(default, deserialize_with = "lenient_confidence")]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub reasoning: String,
    #[serde(default)]
    pub applicable_regulations: Vec<Regulation>,
    #[serde(default)]
    pub risk_assessment: RiskLevel,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub evidence_sources: Vec<String>,
    #[serde(default)]
    pub recommended_actions: Vec<String>,
    #[serde(default)]
    pub suggested_jurisdictions: Vec<String>,
}

impl OracleAssessment {
    pub fn new(flag: ClassificationFlag, confidence: f64) -> Self {
        Self {
            flag,
            confidence: Some(confidence),
            reasoning: String::new(),
            applicable_regulations: Vec::new(),
            risk_assessment: RiskLevel::Unknown,
            requirements: Vec::new(),
            evidence_sources: Vec::new(),
            recommended_actions: Vec::new(),
            suggested_jurisdictions: Vec::new(),
        }
    }

    /// Confidence clamped to [0, 1], or the neutral default when absent or not finite.
    pub fn effective_confidence(&self) -> f64 {
        match self.confidence {
            Some(c) if c.is_finite() => c.clamp(0.0, 1.0),
            _ => DEFAULT_ORACLE_CONFIDENCE,
        }
    }

    pub fn regulation_names(&self) -> impl Iterator<Item = &str> {
        self.applicable_regulations.iter().map(|r| r.name.as_str())
    }
}

fn lenient_confidence<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => n.as_f64(),
        Some(serde_json::Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|c| c.is_finite()))
}

/// Everything the oracle is given for one request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OracleRequest {
    pub title: String,
    pub description: String,
    pub regulatory_context: String,
    pub entities: Vec<EntityMatch>,
}
