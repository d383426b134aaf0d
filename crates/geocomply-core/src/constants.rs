/// Upper bound (inclusive) of the "low" confidence band.
pub const LOW_CONFIDENCE_CEILING: f64 = 0.30;

/// Upper bound (inclusive) of the "medium" confidence band.
pub const MEDIUM_CONFIDENCE_CEILING: f64 = 0.70;

/// Confidence assumed when the oracle omits or garbles its confidence value.
pub const DEFAULT_ORACLE_CONFIDENCE: f64 = 0.6;

/// Confidence attached to decisions forced by a deterministic rule.
pub const DETERMINISTIC_RULE_CONFIDENCE: f64 = 0.95;

/// Maximum combined ambiguity penalty.
pub const MAX_AMBIGUITY_PENALTY: f64 = 0.5;

/// Extraction confidence at or above which a clear-cut verdict skips the oracle.
pub const CLEAR_CUT_CONFIDENCE: f64 = 0.95;

/// Threshold used by `validate_alignment` when the caller does not supply one.
pub const DEFAULT_ALIGNMENT_THRESHOLD: f64 = 0.3;

/// Upper age bound used for open-ended age ranges such as "18+".
pub const MAX_AGE: u32 = 120;

/// Initial semantic version of the glossary.
pub const INITIAL_GLOSSARY_VERSION: &str = "1.0.0";

/// Environment variable consulted for the tracing filter.
pub const LOG_ENV_VAR: &str = "GEOCOMPLY_LOG";
