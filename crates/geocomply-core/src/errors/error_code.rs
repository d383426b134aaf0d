//! Stable, machine-readable error codes.

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const GLOSSARY_ERROR: &str = "GLOSSARY_ERROR";
pub const ORACLE_UNAVAILABLE: &str = "ORACLE_UNAVAILABLE";
pub const ORACLE_TIMEOUT: &str = "ORACLE_TIMEOUT";
pub const ORACLE_MALFORMED: &str = "ORACLE_MALFORMED";
pub const CANCELLED: &str = "CANCELLED";
pub const EXTRACTION_ERROR: &str = "EXTRACTION_ERROR";
pub const SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";

/// Maps an error to a stable code for audit records.
pub trait GeoComplyErrorCode {
    fn error_code(&self) -> &'static str;
}
