use std::sync::Arc;

use geocomply_core::traits::IEntityExtractor;
use geocomply_extraction::PatternExtractor;
use geocomply_glossary::Glossary;
use proptest::prelude::*;

proptest! {
    #[test]
    fn extraction_is_total_and_bounded(title in ".{0,60}", description in ".{0,120}") {
        let extractor = PatternExtractor::new(Arc::new(Glossary::default())).unwrap();
        let result = extractor.extract(&title, &description).unwrap();
        prop_assert!((0.0..=1.0).contains(&result.overall_confidence));
        for e in &result.entities {
            prop_assert!(e.span.end <= result.cleaned_text.len());
            prop_assert!((0.0..=1.0).contains(&e.confidence));
        }
    }
}
