//! Classification counters.
//!
//! [`DecisionMetrics`] is updated once per classification and once per oracle
//! call. Callers own it (the orchestrator keeps it behind a mutex) and read
//! it through [`DecisionMetrics::snapshot`].

use std::collections::BTreeMap;

use geocomply_core::models::{ClassificationMethod, ClassificationResult, ReviewPriority};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DecisionMetrics {
    pub total_requests: u64,
    pub oracle_calls: u64,
    pub oracle_failures: u64,
    pub clear_cut_hits: u64,
    pub low_signal: u64,
    pub fail_safes: u64,
    pub full_analyses: u64,
    pub reviews_by_priority: BTreeMap<ReviewPriority, u64>,
    total_latency_ms: u64,
    confidence_sum: f64,
}

/// Point-in-time copy of the counters plus derived rates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub total_requests: u64,
    pub oracle_calls: u64,
    pub oracle_failures: u64,
    pub clear_cut_hits: u64,
    pub low_signal: u64,
    pub fail_safes: u64,
    pub full_analyses: u64,
    pub reviews: u64,
    pub reviews_by_priority: BTreeMap<ReviewPriority, u64>,
    pub review_rate: f64,
    pub avg_latency_ms: f64,
    pub avg_confidence: f64,
}

impl DecisionMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one finished classification.
    pub fn record(&mut self, result: &ClassificationResult) {
        self.total_requests += 1;
        self.total_latency_ms = self.total_latency_ms.saturating_add(result.processing_time_ms);
        self.confidence_sum += result.decision.confidence;
        match result.method {
            ClassificationMethod::ClearCut => self.clear_cut_hits += 1,
            ClassificationMethod::LowSignal => self.low_signal += 1,
            ClassificationMethod::FailSafe => self.fail_safes += 1,
            ClassificationMethod::OraclePrimary | ClassificationMethod::OracleSecondary => {
                self.full_analyses += 1
            }
        }
        if result.needs_human_review {
            *self.reviews_by_priority.entry(result.review_priority).or_default() += 1;
        }
    }

    pub fn record_oracle_call(&mut self, succeeded: bool) {
        self.oracle_calls += 1;
        if !succeeded {
            self.oracle_failures += 1;
        }
    }

    pub fn reviews(&self) -> u64 {
        self.reviews_by_priority.values().sum()
    }

    pub fn avg_latency_ms(&self) -> f64 {
        Self::per_request(self.total_latency_ms as f64, self.total_requests)
    }

    pub fn avg_confidence(&self) -> f64 {
        Self::per_request(self.confidence_sum, self.total_requests)
    }

    pub fn review_rate(&self) -> f64 {
        Self::per_request(self.reviews() as f64, self.total_requests)
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            total_requests: self.total_requests,
            oracle_calls: self.oracle_calls,
            oracle_failures: self.oracle_failures,
            clear_cut_hits: self.clear_cut_hits,
            low_signal: self.low_signal,
            fail_safes: self.fail_safes,
            full_analyses: self.full_analyses,
            reviews: self.reviews(),
            reviews_by_priority: self.reviews_by_priority.clone(),
            review_rate: self.review_rate(),
            avg_latency_ms: self.avg_latency_ms(),
            avg_confidence: self.avg_confidence(),
        }
    }

    /// Reset all counters (useful for testing or periodic rotation).
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn per_request(total: f64, requests: u64) -> f64 {
        if requests == 0 {
            return 0.0;
        }
        total / requests as f64
    }
}
