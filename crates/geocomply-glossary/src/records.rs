use serde::{Deserialize, Serialize};

/// A canonical location: country, state, bloc or region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRecord {
    pub colloquial_name: String,
    pub full_name: String,
    /// ISO 3166-1 alpha-3, or a pseudo-code for regions.
    pub iso_code: String,
    pub ioc_code: String,
    #[serde(default)]
    pub regions: Vec<String>,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub abbreviations: Vec<String>,
}

impl LocationRecord {
    /// Names that identify this record on their own.
    pub fn primary_aliases(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.colloquial_name.as_str())
    }

    pub fn secondary_aliases(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.full_name.as_str())
            .chain(self.synonyms.iter().map(String::as_str))
            .chain(self.abbreviations.iter().map(String::as_str))
    }

    pub fn all_aliases(&self) -> impl Iterator<Item = &str> {
        self.primary_aliases().chain(self.secondary_aliases())
    }
}

/// A canonical age band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeRecord {
    pub term: String,
    pub min_age: u32,
    pub max_age: u32,
    #[serde(default)]
    pub synonyms: Vec<String>,
}

impl AgeRecord {
    pub fn primary_aliases(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.term.as_str())
    }

    pub fn secondary_aliases(&self) -> impl Iterator<Item = &str> {
        self.synonyms.iter().map(String::as_str)
    }

    pub fn all_aliases(&self) -> impl Iterator<Item = &str> {
        self.primary_aliases().chain(self.secondary_aliases())
    }

    /// Whether the band admits anyone under 18.
    pub fn covers_minors(&self) -> bool {
        self.min_age < 18
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TermCategory {
    Privacy,
    AgeVerification,
    ContentModeration,
    ContentSafety,
    SecurityCompliance,
    RegulatoryCompliance,
}

/// A canonical regulatory term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerminologyRecord {
    pub term: String,
    pub standardized_form: String,
    pub category: TermCategory,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub expanded_meanings: Vec<String>,
}

impl TerminologyRecord {
    pub fn primary_aliases(&self) -> impl Iterator<Item = &str> {
        [self.term.as_str(), self.standardized_form.as_str()].into_iter()
    }

    pub fn secondary_aliases(&self) -> impl Iterator<Item = &str> {
        self.synonyms.iter().map(String::as_str)
    }

    pub fn all_aliases(&self) -> impl Iterator<Item = &str> {
        self.primary_aliases().chain(self.secondary_aliases())
    }
}

/// The three record tables.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlossaryData {
    pub locations: Vec<LocationRecord>,
    pub age_terms: Vec<AgeRecord>,
    pub terminology: Vec<TerminologyRecord>,
}
