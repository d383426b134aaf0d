// Single source of truth for all default values.

// --- Thresholds ---
pub const DEFAULT_LEGAL_THRESHOLD: f64 = 0.90;
pub const DEFAULT_SAFETY_THRESHOLD: f64 = 0.85;
pub const DEFAULT_BUSINESS_THRESHOLD: f64 = 0.70;
pub const DEFAULT_INTERNAL_THRESHOLD: f64 = 0.60;

// --- Scoring ---
pub const DEFAULT_PRIMARY_WEIGHT: f64 = 0.7;
pub const DEFAULT_SECONDARY_WEIGHT: f64 = 0.3;
pub const DEFAULT_ENTITY_WEIGHT: f64 = 0.2;
pub const DEFAULT_CROSS_VALIDATION_WEIGHT: f64 = 0.15;
pub const DEFAULT_DIVERSITY_STEP: f64 = 0.05;
pub const DEFAULT_DIVERSITY_CAP: f64 = 0.10;
pub const DEFAULT_ENTITY_QUALITY_WARN: f64 = 0.7;
pub const DEFAULT_CROSS_VALIDATION_WARN: f64 = 0.6;

// --- Ambiguity ---
pub const DEFAULT_PENALTY_CAP: f64 = 0.5;
pub const DEFAULT_REVIEW_PENALTY: f64 = 0.3;
pub const DEFAULT_ELEVATED_PENALTY: f64 = 0.2;
pub const DEFAULT_CAUTION_NOTE_PENALTY: f64 = 0.1;
pub const DEFAULT_USE_DEFAULT_RESOLUTIONS: bool = true;

// --- Orchestrator ---
pub const DEFAULT_ORACLE_TIMEOUT_MS: u64 = 30_000;
pub const DEFAULT_CONTEXT_TIMEOUT_MS: u64 = 5_000;
pub const DEFAULT_CLEAR_CUT_THRESHOLD: f64 = 0.95;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
pub const DEFAULT_TRACING_ENABLED: bool = true;
