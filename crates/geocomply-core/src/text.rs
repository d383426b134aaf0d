//! Keyword and word-boundary helpers shared by the text-scanning stages.

use regex::RegexSet;

/// Lowercase, drop punctuation, and fold `_`, `-`, `/` and whitespace runs
/// into a single space. `"U.S."` becomes `"us"`, `"age_verification"`
/// becomes `"age verification"`. `+` is kept so `"18+"` survives.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;
    for ch in text.chars() {
        if ch.is_alphanumeric() || ch == '+' {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.extend(ch.to_lowercase());
        } else if ch.is_whitespace() || ch == '_' || ch == '-' || ch == '/' {
            pending_space = true;
        }
    }
    out
}

fn boundary_before(haystack: &str, start: usize) -> bool {
    haystack[..start]
        .chars()
        .next_back()
        .map_or(true, |c| !c.is_alphanumeric())
}

fn boundary_after(haystack: &str, end: usize) -> bool {
    haystack[end..]
        .chars()
        .next()
        .map_or(true, |c| !c.is_alphanumeric())
}

/// Whether `needle` occurs in `haystack` with no alphanumeric character
/// directly on either side. Case-sensitive; callers lowercase as needed.
///
/// For one-off needles such as glossary aliases. Fixed vocabularies go
/// through a [`KeywordSet`].
pub fn contains_word(haystack: &str, needle: &str) -> bool {
    !needle.is_empty()
        && haystack.match_indices(needle).any(|(start, _)| {
            boundary_before(haystack, start) && boundary_after(haystack, start + needle.len())
        })
}

/// Pattern for one keyword. `\b` is only meaningful next to a word
/// character, so an edge like the `+` of `"18+"` gets an explicit
/// non-alphanumeric guard instead.
fn keyword_pattern(keyword: &str, whole_word: bool) -> String {
    let lead = if keyword.starts_with(char::is_alphanumeric) {
        r"\b"
    } else {
        r"(?:^|[^\p{L}\p{N}])"
    };
    let trail = match (whole_word, keyword.ends_with(char::is_alphanumeric)) {
        (false, _) => "",
        (true, true) => r"\b",
        (true, false) => r"(?:[^\p{L}\p{N}]|$)",
    };
    format!("(?i){lead}{}{trail}", regex::escape(keyword))
}

/// A fixed keyword vocabulary compiled once into a [`RegexSet`].
///
/// Matching is case-insensitive and anchored on a word boundary at the
/// start of each keyword. [`KeywordSet::prefixes`] leaves the end open, so
/// `"child"` matches `"children"`; [`KeywordSet::words`] closes it.
#[derive(Debug, Clone, Default)]
pub struct KeywordSet {
    keywords: Vec<String>,
    set: Option<RegexSet>,
}

impl KeywordSet {
    pub fn prefixes<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::compile(keywords, false)
    }

    pub fn words<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::compile(keywords, true)
    }

    fn compile<I, S>(keywords: I, whole_word: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let keywords: Vec<String> = keywords
            .into_iter()
            .map(Into::into)
            .filter(|k: &String| !k.trim().is_empty())
            .collect();
        let set = RegexSet::new(keywords.iter().map(|k| keyword_pattern(k, whole_word))).ok();
        Self { keywords, set }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.set.as_ref().is_some_and(|set| set.is_match(text))
    }

    /// Keywords present in `text`, in vocabulary order.
    pub fn find(&self, text: &str) -> Vec<String> {
        let Some(set) = &self.set else {
            return Vec::new();
        };
        set.matches(text)
            .into_iter()
            .map(|i| self.keywords[i].clone())
            .collect()
    }
}
