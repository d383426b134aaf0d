//! CategoryDetector: rule tags, legal terms, and keyword scans.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use geocomply_core::models::{ComplianceCategory, OracleAssessment};
use geocomply_core::text::KeywordSet;
use regex::Regex;

static LEGAL_TERMS: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:gdpr|coppa|dsa|ccpa|hipaa)\b").ok());

/// Maps a request's text, oracle output, and rule tags onto compliance categories.
#[derive(Debug, Clone)]
pub struct CategoryDetector {
    rule_tags: Vec<(String, ComplianceCategory)>,
    business_terms: KeywordSet,
    internal_terms: KeywordSet,
}

impl Default for CategoryDetector {
    fn default() -> Self {
        let tag = |t: &str, c| (t.to_string(), c);
        Self {
            rule_tags: vec![
                tag("child_protection", ComplianceCategory::SafetyHealthProtection),
                tag("data_residency", ComplianceCategory::LegalCompliance),
                tag("tax_shop", ComplianceCategory::LegalCompliance),
            ],
            business_terms: KeywordSet::prefixes([
                "a/b test",
                "experiment",
                "analytics",
                "segmentation",
                "pilot",
            ]),
            internal_terms: KeywordSet::prefixes(["performance", "cache", "optimization", "internal"]),
        }
    }
}

impl CategoryDetector {
    pub fn detect_categories(
        &self,
        text: &str,
        oracle: &OracleAssessment,
        rule_tags: &[String],
    ) -> BTreeSet<ComplianceCategory> {
        let mut found = BTreeSet::new();

        for tag in rule_tags {
            let tag = tag.trim().to_lowercase();
            found.extend(
                self.rule_tags
                    .iter()
                    .filter(|(t, _)| *t == tag)
                    .map(|(_, c)| *c),
            );
        }

        let oracle_mentions_law = oracle
            .suggested_jurisdictions
            .iter()
            .chain(oracle.applicable_regulations.iter().map(|r| &r.name))
            .any(|s| has_legal_term(s));
        if has_legal_term(text) || oracle_mentions_law {
            found.insert(ComplianceCategory::LegalCompliance);
        }

        if self.business_terms.is_match(text) {
            found.insert(ComplianceCategory::BusinessAnalytics);
        }
        if self.internal_terms.is_match(text) {
            found.insert(ComplianceCategory::InternalFeatures);
        }
        found
    }
}

fn has_legal_term(text: &str) -> bool {
    LEGAL_TERMS.as_ref().is_some_and(|re| re.is_match(text))
}
