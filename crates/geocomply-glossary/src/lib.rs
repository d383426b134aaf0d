//! # geocomply-glossary
//!
//! Entity standardizer. Maps surface forms of locations, age expressions and
//! regulatory terms onto canonical records with a tiered match confidence.
//!
//! The glossary is append-only after load: feedback corrections add aliases
//! and bump the glossary's semantic version, nothing is ever removed.

pub mod age_parse;
pub mod defaults;
pub mod glossary;
pub mod matching;
pub mod records;
pub mod tiers;
pub mod versioning;

pub use glossary::{Glossary, Standardization};
pub use records::{AgeRecord, GlossaryData, LocationRecord, TermCategory, TerminologyRecord};
pub use tiers::{ConfidenceTiers, TierTable};
pub use versioning::{
    ChangeType, ChangelogEntry, ChangelogFilter, GlossaryVersion, SemVer, VersionBump,
    VersionReport,
};
