//! Fusion + escalation hot path benchmarks
//!
//! Run with: cargo bench --package geocomply-escalation

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use geocomply_confidence::ConfidenceScorer;
use geocomply_core::models::{ClassificationFlag, DiversityFlags, OracleAssessment};
use geocomply_escalation::DecisionEngine;

const TEXTS: [&str; 3] = [
    "Age verification for EU users under 16 to comply with GDPR Article 8",
    "A/B test new UI design in Canada for user engagement",
    "Improve cache warmup for internal dashboards",
];

fn bench_decision(c: &mut Criterion) {
    let engine = DecisionEngine::default();
    let oracle = OracleAssessment::new(ClassificationFlag::NeedsGeoLogic, 0.82);

    c.bench_function("make_decision", |b| {
        b.iter(|| {
            for text in TEXTS {
                black_box(engine.make_decision(black_box(text), &oracle, &[], false));
            }
        })
    });
}

fn bench_fuse_and_escalate(c: &mut Criterion) {
    let engine = DecisionEngine::default();
    let scorer = ConfidenceScorer::default();
    let oracle = OracleAssessment::new(ClassificationFlag::NeedsGeoLogic, 0.82);
    let flags = DiversityFlags {
        has_locations: true,
        has_ages: true,
        has_terminology: false,
    };

    c.bench_function("fuse_penalize_escalate", |b| {
        b.iter(|| {
            let fused = scorer.weighted_confidence(0.82, 0.7, 0.9, 0.88, flags);
            let penalized = scorer.apply_ambiguity_penalty(fused, black_box(0.15));
            black_box(engine.decide_with_confidence(
                TEXTS[0],
                &oracle,
                &[],
                false,
                penalized.final_confidence,
            ))
        })
    });
}

criterion_group!(benches, bench_decision, bench_fuse_and_escalate);
criterion_main!(benches);
