use geocomply_glossary::defaults::{default_age_terms, default_locations, default_terminology};
use geocomply_glossary::Glossary;
use proptest::prelude::*;

#[test]
fn every_colloquial_name_resolves_to_its_record() {
    let glossary = Glossary::default();
    for record in default_locations() {
        let result = glossary.standardize_location(&record.colloquial_name);
        assert_eq!(result.confidence, 1.0, "{}", record.colloquial_name);
        assert_eq!(result.record.as_ref(), Some(&record));
    }
    for record in default_age_terms() {
        let result = glossary.standardize_age(&record.term);
        assert_eq!(result.record.as_ref(), Some(&record));
        assert_eq!(result.confidence, 1.0);
    }
    for record in default_terminology() {
        let result = glossary.standardize_terminology(&record.term);
        assert_eq!(result.record.as_ref(), Some(&record));
        assert_eq!(result.confidence, 1.0);
    }
}

proptest! {
    #[test]
    fn lookups_never_panic_and_stay_in_range(text in ".{0,40}") {
        let glossary = Glossary::default();
        for confidence in [
            glossary.standardize_location(&text).confidence,
            glossary.standardize_age(&text).confidence,
            glossary.standardize_terminology(&text).confidence,
        ] {
            prop_assert!((0.0..=1.0).contains(&confidence));
        }
    }

    #[test]
    fn lookup_is_case_insensitive(idx in 0usize..34, upper in any::<bool>()) {
        let glossary = Glossary::default();
        let records = default_locations();
        let record = &records[idx % records.len()];
        let name = if upper {
            record.colloquial_name.to_uppercase()
        } else {
            record.colloquial_name.to_lowercase()
        };
        let result = glossary.standardize_location(&name);
        prop_assert_eq!(result.record.as_ref(), Some(record));
    }
}
