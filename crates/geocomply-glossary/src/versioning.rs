//! Semantic versioning and changelog for glossary content.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use geocomply_core::errors::GlossaryError;
use geocomply_core::models::EntityType;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SemVer {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VersionBump {
    Major,
    Minor,
    Patch,
}

impl SemVer {
    pub const INITIAL: SemVer = SemVer {
        major: 1,
        minor: 0,
        patch: 0,
    };

    pub fn bump(self, bump: VersionBump) -> Self {
        match bump {
            VersionBump::Major => Self {
                major: self.major + 1,
                minor: 0,
                patch: 0,
            },
            VersionBump::Minor => Self {
                minor: self.minor + 1,
                patch: 0,
                ..self
            },
            VersionBump::Patch => Self {
                patch: self.patch + 1,
                ..self
            },
        }
    }
}

impl Default for SemVer {
    fn default() -> Self {
        Self::INITIAL
    }
}

impl fmt::Display for SemVer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for SemVer {
    type Err = GlossaryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || GlossaryError::InvalidVersion {
            version: s.to_string(),
        };
        let mut parts = s.trim().split('.').map(|p| p.parse::<u32>());
        let version = match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(Ok(major)), Some(Ok(minor)), Some(Ok(patch)), None) => SemVer {
                major,
                minor,
                patch,
            },
            _ => return Err(invalid()),
        };
        Ok(version)
    }
}

impl TryFrom<String> for SemVer {
    type Error = GlossaryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SemVer> for String {
    fn from(value: SemVer) -> Self {
        value.to_string()
    }
}

/// One released glossary version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlossaryVersion {
    pub version: SemVer,
    pub timestamp: DateTime<Utc>,
    pub description: String,
    pub changes: Vec<String>,
    pub author: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeType {
    Addition,
    Modification,
    Deletion,
    Migration,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangelogEntry {
    /// Version the change was made against.
    pub version: SemVer,
    pub timestamp: DateTime<Utc>,
    pub change_type: ChangeType,
    pub entity_type: EntityType,
    pub entity_name: String,
    pub old_value: Option<String>,
    pub new_value: Option<String>,
    pub reason: String,
    pub author: String,
}

/// Selects changelog entries. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangelogFilter {
    pub since_version: Option<SemVer>,
    pub entity_type: Option<EntityType>,
    /// Keep only the most recent `limit` matches.
    pub limit: Option<usize>,
}

impl ChangelogFilter {
    pub fn matches(&self, entry: &ChangelogEntry) -> bool {
        self.since_version.map_or(true, |v| entry.version >= v)
            && self.entity_type.map_or(true, |t| entry.entity_type == t)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionReport {
    pub current_version: SemVer,
    pub total_versions: usize,
    pub total_changelog_entries: usize,
    pub location_records: usize,
    pub age_records: usize,
    pub terminology_records: usize,
    pub alias_count: usize,
    pub last_updated: Option<DateTime<Utc>>,
    pub recent_changes: Vec<ChangelogEntry>,
}
