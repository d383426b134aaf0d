//! Text cleanup and tokenisation ahead of pattern matching.

use std::sync::LazyLock;

use regex::Regex;

static WHITESPACE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\s+").ok());
static WORD: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\w+").ok());

/// Shorthand rewritten before matching, applied in order.
static EXPANSIONS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"(?i)\bw/\s*", "with "),
        (r"\s&\s", " and "),
        (r"(?i)\bu\.s\.(?:a\.)?", "united states"),
        (r"(?i)\be\.u\.", "european union"),
        (r"(?i)\bu\.k\.", "united kingdom"),
    ]
    .into_iter()
    .filter_map(|(pattern, replacement)| Regex::new(pattern).ok().map(|re| (re, replacement)))
    .collect()
});

const STOP_WORDS: &[&str] = &[
    "the", "and", "but", "for", "with", "are", "was", "were", "been", "have", "has", "had",
    "does", "did", "will", "would", "could", "should",
];

/// Expand shorthand and collapse whitespace. Casing is preserved so
/// case-sensitive acronym patterns still see `US` and `EU`.
pub fn clean_text(text: &str) -> String {
    let mut cleaned = text.to_string();
    for (re, replacement) in EXPANSIONS.iter() {
        cleaned = re.replace_all(&cleaned, *replacement).into_owned();
    }
    let collapsed = match WHITESPACE.as_ref() {
        Some(re) => re.replace_all(&cleaned, " ").into_owned(),
        None => cleaned,
    };
    collapsed.trim().to_string()
}

/// Lowercased word tokens longer than two characters, stop words removed.
pub fn tokenize(text: &str) -> Vec<String> {
    let Some(re) = WORD.as_ref() else {
        return Vec::new();
    };
    let lowered = text.to_lowercase();
    re.find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|t| t.chars().count() > 2 && !STOP_WORDS.contains(t))
        .map(String::from)
        .collect()
}

/// `"Title. Description"`, skipping whichever half is blank.
pub(crate) fn join_input(title: &str, description: &str) -> String {
    [title.trim(), description.trim()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(". ")
}
