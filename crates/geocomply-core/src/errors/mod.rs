//! Error handling for GeoComply.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod extraction_error;
pub mod geocomply_error;
pub mod glossary_error;
pub mod oracle_error;

pub use config_error::ConfigError;
pub use error_code::GeoComplyErrorCode;
pub use extraction_error::ExtractionError;
pub use geocomply_error::{GeoComplyError, GeoComplyResult};
pub use glossary_error::GlossaryError;
pub use oracle_error::OracleError;
