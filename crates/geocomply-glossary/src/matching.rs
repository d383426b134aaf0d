//! String helpers shared by the lookups.

pub use geocomply_core::text::{contains_word, normalize};

/// Short all-caps codes such as `US`, `CA` or `U.K.`. These collide with
/// ordinary words when lowercased, so containment checks match them only in
/// their original casing.
pub fn is_short_acronym(alias: &str) -> bool {
    let letters: Vec<char> = alias.chars().filter(|c| *c != '.').collect();
    !letters.is_empty()
        && letters.len() <= 3
        && letters.iter().all(|c| c.is_ascii_uppercase())
}

/// Containment test for an alias within free text, honouring the acronym rule.
pub fn alias_in_text(original: &str, lowered: &str, alias: &str) -> bool {
    if is_short_acronym(alias) {
        contains_word(original, alias)
    } else {
        contains_word(lowered, &alias.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acronyms_match_case_sensitively() {
        assert!(is_short_acronym("US"));
        assert!(is_short_acronym("U.K."));
        assert!(!is_short_acronym("Canada"));
        assert!(alias_in_text("Launch in the US", "launch in the us", "US"));
        assert!(!alias_in_text("tell us more", "tell us more", "US"));
        assert!(alias_in_text("Launch in Canada", "launch in canada", "Canada"));
    }
}
