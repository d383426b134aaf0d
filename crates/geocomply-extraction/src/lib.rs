//! # geocomply-extraction
//!
//! Default upstream collaborator for the classifier. Cleans the feature text,
//! pulls out location, age and regulatory-term mentions with regex patterns
//! generated from the glossary, and flags inputs that are obvious enough to
//! skip the oracle entirely.
//!
//! Any other [`IEntityExtractor`](geocomply_core::traits::IEntityExtractor)
//! implementation can replace it.

pub mod cleaning;
pub mod clear_cut;
pub mod extractor;
pub mod patterns;

pub use cleaning::{clean_text, tokenize};
pub use extractor::PatternExtractor;
pub use patterns::PatternSet;
