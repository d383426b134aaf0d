use geocomply_core::models::{Confidence, ConfidenceLevel};
use proptest::prelude::*;

proptest! {
    #[test]
    fn confidence_always_in_unit_interval(v in proptest::num::f64::ANY) {
        let c = Confidence::new(v).value();
        prop_assert!((0.0..=1.0).contains(&c));
    }

    #[test]
    fn level_is_monotonic(a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(ConfidenceLevel::from_score(lo) <= ConfidenceLevel::from_score(hi));
    }
}
