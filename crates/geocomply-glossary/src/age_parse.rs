//! Numeric age expressions: `18+`, `under 13`, `over 21`, `13 and up`,
//! `16 and older`, `18 years old`.

use std::sync::LazyLock;

use geocomply_core::constants::MAX_AGE;
use regex::Regex;

macro_rules! age_regex {
    ($name:ident, $pattern:expr) => {
        static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($pattern).ok());
    };
}

age_regex!(UNDER, r"(?i)\bunder\s*(\d{1,3})\b");
age_regex!(AND_UP, r"(?i)\b(\d{1,3})\s*(?:and|&)\s*(?:up|older|over)\b");
age_regex!(PLUS, r"\b(\d{1,3})\s*\+");
age_regex!(OVER, r"(?i)\bover\s*(\d{1,3})\b");
age_regex!(YEARS_OLD, r"(?i)\b(\d{1,3})\s*years?\s*old\b");

fn capture_age(regex: &Option<Regex>, text: &str) -> Option<u32> {
    let regex = regex.as_ref()?;
    let caps = regex.captures(text)?;
    let age: u32 = caps.get(1)?.as_str().parse().ok()?;
    (age <= MAX_AGE).then_some(age)
}

/// Parse a numeric age expression into an inclusive `(min, max)` range.
pub fn parse_age_range(text: &str) -> Option<(u32, u32)> {
    if let Some(age) = capture_age(&UNDER, text) {
        return Some((0, age.saturating_sub(1)));
    }
    if let Some(age) = capture_age(&AND_UP, text) {
        return Some((age, MAX_AGE));
    }
    if let Some(age) = capture_age(&PLUS, text) {
        return Some((age, MAX_AGE));
    }
    if let Some(age) = capture_age(&OVER, text) {
        return Some((age, MAX_AGE));
    }
    if let Some(age) = capture_age(&YEARS_OLD, text) {
        return Some((age, age));
    }
    None
}
