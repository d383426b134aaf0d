//! Regex patterns generated from the glossary's alias tables.
//!
//! Every entity pattern exposes the entity itself as capture group 1 when it
//! has surrounding context, otherwise the whole match is the entity.

use std::sync::LazyLock;

use geocomply_core::errors::ExtractionError;
use geocomply_glossary::matching::is_short_acronym;
use geocomply_glossary::Glossary;
use regex::Regex;
use tracing::debug;

/// Numeric age forms understood by the glossary's age parser.
const NUMERIC_AGE: &str = r"(?i)\b(?:under\s+\d{1,3}\b|over\s+\d{1,3}\b|\d{1,3}\s*(?:and|&)\s*(?:up|older|over)\b|\d{1,3}\s*years?\s*old\b|\d{1,3}\s*\+)";

/// Regulatory names worth trying even when the glossary lacks an alias for them.
const REGULATORY_NAMES: &str = r"(?i)\b(?:children'?s\s+online\s+privacy\s+protection\s+act|california\s+consumer\s+privacy\s+act|digital\s+services\s+act|general\s+data\s+protection\s+regulation|csam|age\s+appropriate\s+design\s+code|aadc|social\s+media\s+regulation\s+act)\b";

static GEOFENCING: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:geo-?(?:fence|fencing|block|blocking|restriction)s?|geographic\s+restrictions?|location-based\s+(?:restriction|blocking)s?)\b",
    )
    .ok()
});

const AGE_PROTECTION: &str =
    r"(?:age\s+(?:verification|gate|restriction)|parental\s+consent|minor\s+protection)";
const LEGAL_INSTRUMENT: &str = r"(?:laws?|regulations?|acts?|codes?)";
const POPULATION: &str =
    r"(?:users?|residents?|citizens?|laws?|regulations?|compliance|minors?|teens?|children|kids)";
const PREPOSITION: &str = r"(?:in|for|within|from|to|across)";

/// A compiled clear-cut pattern and the reason reported when it fires.
#[derive(Debug)]
pub struct ClearCutPattern {
    pub regex: Regex,
    pub reason: &'static str,
}

/// The full pattern set for one glossary state. Rebuilt after feedback adds
/// aliases; readers keep using the set they started with.
#[derive(Debug)]
pub struct PatternSet {
    pub locations: Vec<Regex>,
    pub ages: Vec<Regex>,
    pub terminology: Vec<Regex>,
    pub clear_cut: Vec<ClearCutPattern>,
}

impl PatternSet {
    pub fn from_glossary(glossary: &Glossary) -> Result<Self, ExtractionError> {
        let data = glossary.data();

        let mut long_locations = Vec::new();
        let mut short_locations = Vec::new();
        for alias in data.locations.iter().flat_map(|r| r.all_aliases()) {
            if is_short_acronym(alias) {
                short_locations.push(alias.to_string());
            } else {
                long_locations.push(alias.to_lowercase());
            }
        }
        let long = alternation(long_locations);
        let short = alternation(short_locations);
        let location = match (long.is_empty(), short.is_empty()) {
            (false, false) => format!("(?:(?i:{long})|{short})"),
            (false, true) => format!("(?i:{long})"),
            (true, false) => format!("(?:{short})"),
            (true, true) => String::new(),
        };

        let mut locations = Vec::new();
        if !long.is_empty() {
            locations.push(compile("location", &format!("((?i:{long}))"))?);
        }
        if !short.is_empty() {
            locations.push(compile(
                "location_context",
                &format!(r"(?i:\b{PREPOSITION}\s+)({short})"),
            )?);
            locations.push(compile(
                "location_population",
                &format!(r"({short})(?i:\s+{POPULATION}\b)"),
            )?);
        }

        let mut age_variants: Vec<String> = glossary.all_age_variants().into_iter().collect();
        age_variants.push("children".to_string());
        let mut ages = vec![compile("age_numeric", NUMERIC_AGE)?];
        let age_words = plural_alternation(age_variants);
        if !age_words.is_empty() {
            ages.push(compile("age_terms", &format!("(?i:{age_words})"))?);
        }

        let mut terminology = vec![compile("regulatory_names", REGULATORY_NAMES)?];
        let terms = alternation(glossary.all_terminology_variants());
        if !terms.is_empty() {
            terminology.push(compile("terminology", &format!("(?i:{terms})"))?);
        }

        let mut clear_cut = Vec::new();
        if let Some(geofencing) = GEOFENCING.as_ref() {
            clear_cut.push(ClearCutPattern {
                regex: geofencing.clone(),
                reason: "geographic restriction requested",
            });
        }
        if !location.is_empty() {
            let compliance = [
                format!(
                    r"(?i:\b(?:comply|complying|compliance)\s+with\s+(?:the\s+)?){location}(?i:\s+{LEGAL_INSTRUMENT}\b)"
                ),
                format!(
                    r"{location}(?i:\s+{LEGAL_INSTRUMENT}\s+(?:compliance|requirements?)\b)"
                ),
            ];
            for pattern in compliance {
                clear_cut.push(ClearCutPattern {
                    regex: compile("clear_cut_compliance", &pattern)?,
                    reason: "explicit compliance with a jurisdiction's law",
                });
            }
            let protection = [
                format!(r"(?i:\b{AGE_PROTECTION}\b[^.!?\n]*?){location}"),
                format!(r"{location}(?i:[^.!?\n]*?\b{AGE_PROTECTION}\b)"),
            ];
            for pattern in protection {
                clear_cut.push(ClearCutPattern {
                    regex: compile("clear_cut_age_protection", &pattern)?,
                    reason: "age protection tied to a jurisdiction",
                });
            }
        }

        debug!(
            locations = locations.len(),
            ages = ages.len(),
            terminology = terminology.len(),
            clear_cut = clear_cut.len(),
            "pattern set compiled"
        );
        Ok(Self {
            locations,
            ages,
            terminology,
            clear_cut,
        })
    }
}

fn compile(name: &str, pattern: &str) -> Result<Regex, ExtractionError> {
    Regex::new(pattern).map_err(|e| ExtractionError::InvalidPattern {
        pattern: name.to_string(),
        reason: e.to_string(),
    })
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Escape one alias, let its inner whitespace stretch, and bound it on the
/// sides that end in word characters.
fn bounded(alias: &str, suffix: &str) -> Option<String> {
    let words: Vec<String> = alias.split_whitespace().map(regex::escape).collect();
    if words.is_empty() {
        return None;
    }
    let lead = if alias.trim_start().starts_with(is_word_char) {
        r"\b"
    } else {
        ""
    };
    let trail = if alias.trim_end().ends_with(is_word_char) {
        r"\b"
    } else {
        ""
    };
    Some(format!("{lead}{}{suffix}{trail}", words.join(r"\s+")))
}

/// Longest aliases first so leftmost-first matching prefers them.
fn by_length_desc<I: IntoIterator<Item = String>>(aliases: I) -> Vec<String> {
    let mut aliases: Vec<String> = aliases.into_iter().collect();
    aliases.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    aliases.dedup();
    aliases
}

fn alternation<I: IntoIterator<Item = String>>(aliases: I) -> String {
    by_length_desc(aliases)
        .iter()
        .filter_map(|a| bounded(a, ""))
        .collect::<Vec<_>>()
        .join("|")
}

/// Like [`alternation`] but word-final aliases also accept a plural `s`/`es`.
fn plural_alternation<I: IntoIterator<Item = String>>(aliases: I) -> String {
    by_length_desc(aliases)
        .iter()
        .filter_map(|a| {
            let plural = a.ends_with(|c: char| c.is_alphabetic());
            bounded(a, if plural { "(?:e?s)?" } else { "" })
        })
        .collect::<Vec<_>>()
        .join("|")
}
