//! The glossary service: alias indexes over the record tables, tiered
//! lookups, and feedback-driven growth.

use std::collections::{BTreeSet, HashMap};
use std::path::Path;
use std::sync::{PoisonError, RwLock};

use chrono::Utc;
use geocomply_core::errors::GlossaryError;
use geocomply_core::models::{
    EntityMatch, EntityType, FeedbackCorrection, FeedbackOutcome, MatchTier, StandardizedEntity,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::age_parse::parse_age_range;
use crate::defaults;
use crate::matching::{alias_in_text, contains_word, normalize};
use crate::records::{AgeRecord, GlossaryData, LocationRecord, TerminologyRecord};
use crate::tiers::ConfidenceTiers;
use crate::versioning::{
    ChangeType, ChangelogEntry, ChangelogFilter, GlossaryVersion, SemVer, VersionBump,
    VersionReport,
};

/// Outcome of one lookup. `record` is `None` exactly when `tier` is `NoMatch`.
#[derive(Debug, Clone, PartialEq)]
pub struct Standardization<T> {
    pub record: Option<T>,
    pub confidence: f64,
    pub tier: MatchTier,
}

impl<T> Standardization<T> {
    pub fn none() -> Self {
        Self {
            record: None,
            confidence: 0.0,
            tier: MatchTier::NoMatch,
        }
    }

    fn found(record: T, confidence: f64, tier: MatchTier) -> Self {
        Self {
            record: Some(record),
            confidence,
            tier,
        }
    }

    pub fn is_match(&self) -> bool {
        self.record.is_some()
    }
}

/// Lowercased and normalized alias keys for one table, first definition wins.
#[derive(Debug, Default)]
struct AliasIndex {
    exact: HashMap<String, usize>,
    normalized: HashMap<String, usize>,
}

impl AliasIndex {
    fn insert(&mut self, alias: &str, idx: usize) -> bool {
        let key = alias.trim().to_lowercase();
        if key.is_empty() {
            return false;
        }
        let fresh = !self.exact.contains_key(&key);
        self.exact.entry(key).or_insert(idx);
        let norm = normalize(alias);
        if !norm.is_empty() {
            self.normalized.entry(norm).or_insert(idx);
        }
        fresh
    }

    fn len(&self) -> usize {
        self.exact.len()
    }

    /// Primary aliases of every record are indexed before any secondary
    /// alias, so a record's own name always resolves to that record.
    fn build<'a, R: 'a, P, S>(records: &'a [R], primary: P, secondary: S) -> Self
    where
        P: Fn(&'a R) -> Vec<&'a str>,
        S: Fn(&'a R) -> Vec<&'a str>,
    {
        let mut index = Self::default();
        for (idx, record) in records.iter().enumerate() {
            for alias in primary(record) {
                index.insert(alias, idx);
            }
        }
        for (idx, record) in records.iter().enumerate() {
            for alias in secondary(record) {
                index.insert(alias, idx);
            }
        }
        index
    }
}

#[derive(Debug)]
struct GlossaryState {
    data: GlossaryData,
    locations: AliasIndex,
    ages: AliasIndex,
    terms: AliasIndex,
    version: SemVer,
    version_history: Vec<GlossaryVersion>,
    changelog: Vec<ChangelogEntry>,
}

impl GlossaryState {
    fn new(
        data: GlossaryData,
        version: SemVer,
        version_history: Vec<GlossaryVersion>,
        changelog: Vec<ChangelogEntry>,
    ) -> Self {
        let locations = AliasIndex::build(
            &data.locations,
            |r: &LocationRecord| r.primary_aliases().collect(),
            |r: &LocationRecord| r.secondary_aliases().collect(),
        );
        let ages = AliasIndex::build(
            &data.age_terms,
            |r: &AgeRecord| r.primary_aliases().collect(),
            |r: &AgeRecord| r.secondary_aliases().collect(),
        );
        let terms = AliasIndex::build(
            &data.terminology,
            |r: &TerminologyRecord| r.primary_aliases().collect(),
            |r: &TerminologyRecord| r.secondary_aliases().collect(),
        );
        Self {
            data,
            locations,
            ages,
            terms,
            version,
            version_history,
            changelog,
        }
    }

    fn bump(&mut self, bump: VersionBump, description: &str, changes: Vec<String>, author: &str) {
        self.version = self.version.bump(bump);
        self.version_history.push(GlossaryVersion {
            version: self.version,
            timestamp: Utc::now(),
            description: description.to_string(),
            changes,
            author: author.to_string(),
        });
    }
}

/// Serialized form of a glossary, including its history.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct GlossarySnapshot {
    version: SemVer,
    #[serde(flatten)]
    data: GlossaryData,
    #[serde(default)]
    version_history: Vec<GlossaryVersion>,
    #[serde(default)]
    changelog: Vec<ChangelogEntry>,
}

/// Canonical record store. Reads run concurrently; each feedback
/// correction holds the write lock for its whole read-modify-write.
#[derive(Debug)]
pub struct Glossary {
    state: RwLock<GlossaryState>,
    tiers: ConfidenceTiers,
}

impl Default for Glossary {
    fn default() -> Self {
        Self::new(defaults::default_data())
    }
}

impl Glossary {
    pub fn new(data: GlossaryData) -> Self {
        Self::with_tiers(data, ConfidenceTiers::default())
    }

    pub fn with_tiers(data: GlossaryData, tiers: ConfidenceTiers) -> Self {
        let state = GlossaryState::new(data, SemVer::INITIAL, Vec::new(), Vec::new());
        info!(
            locations = state.data.locations.len(),
            age_terms = state.data.age_terms.len(),
            terminology = state.data.terminology.len(),
            version = %state.version,
            "glossary initialized"
        );
        Self {
            state: RwLock::new(state),
            tiers,
        }
    }

    pub fn tiers(&self) -> &ConfidenceTiers {
        &self.tiers
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, GlossaryState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    // --- Lookups ---

    pub fn standardize_location(&self, text: &str) -> Standardization<LocationRecord> {
        let key = text.trim().to_lowercase();
        if key.is_empty() {
            return Standardization::none();
        }
        let state = self.read();
        let records = &state.data.locations;
        let tiers = &self.tiers.location;

        if let Some(&idx) = state.locations.exact.get(&key) {
            return Standardization::found(records[idx].clone(), tiers.exact, MatchTier::Exact);
        }
        if let Some(&idx) = state.locations.normalized.get(&normalize(text)) {
            return Standardization::found(
                records[idx].clone(),
                tiers.normalized,
                MatchTier::Normalized,
            );
        }

        let mut best: Option<(usize, MatchTier, usize)> = None;
        for (idx, record) in records.iter().enumerate() {
            for alias in record.all_aliases() {
                let alias_lower = alias.to_lowercase();
                let tier = if key.len() >= 3 && contains_word(&alias_lower, &key) {
                    MatchTier::TextInAlias
                } else if alias_in_text(text, &key, alias) {
                    MatchTier::AliasInText
                } else {
                    continue;
                };
                consider(&mut best, idx, tier, alias.len(), tiers);
            }
        }
        resolve(best, records, tiers)
    }

    pub fn standardize_age(&self, text: &str) -> Standardization<AgeRecord> {
        let key = text.trim().to_lowercase();
        if key.is_empty() {
            return Standardization::none();
        }
        let state = self.read();
        let records = &state.data.age_terms;
        let tiers = &self.tiers.age;

        if let Some(&idx) = state.ages.exact.get(&key) {
            return Standardization::found(records[idx].clone(), tiers.exact, MatchTier::Exact);
        }
        if let Some((min_age, max_age)) = parse_age_range(&key) {
            let record = AgeRecord {
                term: text.trim().to_string(),
                min_age,
                max_age,
                synonyms: Vec::new(),
            };
            return Standardization::found(record, tiers.numeric, MatchTier::Numeric);
        }
        if let Some(&idx) = state.ages.normalized.get(&normalize(text)) {
            return Standardization::found(
                records[idx].clone(),
                tiers.normalized,
                MatchTier::Normalized,
            );
        }

        let mut best: Option<(usize, MatchTier, usize)> = None;
        for (idx, record) in records.iter().enumerate() {
            for alias in record.primary_aliases() {
                if contains_word(&key, &alias.to_lowercase()) {
                    consider(&mut best, idx, MatchTier::AliasInText, alias.len(), tiers);
                }
            }
            for alias in record.secondary_aliases() {
                if contains_word(&key, &alias.to_lowercase()) {
                    consider(&mut best, idx, MatchTier::SynonymInText, alias.len(), tiers);
                }
            }
        }
        resolve(best, records, tiers)
    }

    pub fn standardize_terminology(&self, text: &str) -> Standardization<TerminologyRecord> {
        let key = text.trim().to_lowercase();
        if key.is_empty() {
            return Standardization::none();
        }
        let state = self.read();
        let records = &state.data.terminology;
        let tiers = &self.tiers.terminology;

        if let Some(&idx) = state.terms.exact.get(&key) {
            return Standardization::found(records[idx].clone(), tiers.exact, MatchTier::Exact);
        }
        let normalized = normalize(text);
        if let Some(&idx) = state.terms.normalized.get(&normalized) {
            return Standardization::found(
                records[idx].clone(),
                tiers.normalized,
                MatchTier::Normalized,
            );
        }

        let mut best: Option<(usize, MatchTier, usize)> = None;
        for (idx, record) in records.iter().enumerate() {
            for alias in record.primary_aliases() {
                if contains_word(&normalized, &normalize(alias)) {
                    consider(&mut best, idx, MatchTier::AliasInText, alias.len(), tiers);
                }
            }
            for alias in record.secondary_aliases() {
                if contains_word(&normalized, &normalize(alias)) {
                    consider(&mut best, idx, MatchTier::SynonymInText, alias.len(), tiers);
                }
            }
        }
        resolve(best, records, tiers)
    }

    /// Standardize an extracted entity according to its type.
    pub fn standardize_entity(&self, entity: &EntityMatch) -> StandardizedEntity {
        let (canonical, confidence, tier) = match entity.entity_type {
            EntityType::Location => {
                let s = self.standardize_location(&entity.text);
                (s.record.map(|r| r.colloquial_name), s.confidence, s.tier)
            }
            EntityType::Age => {
                let s = self.standardize_age(&entity.text);
                (
                    s.record.map(|r| format!("{} ({}-{})", r.term, r.min_age, r.max_age)),
                    s.confidence,
                    s.tier,
                )
            }
            EntityType::Terminology => {
                let s = self.standardize_terminology(&entity.text);
                (s.record.map(|r| r.standardized_form), s.confidence, s.tier)
            }
        };
        StandardizedEntity {
            original: entity.text.clone(),
            entity_type: entity.entity_type,
            canonical,
            confidence,
            tier,
        }
    }

    // --- Feedback ---

    /// Append `original_text` as an alias of the record named by
    /// `correct_mapping`. Existing aliases are never reassigned.
    pub fn update_from_feedback(
        &self,
        correction: &FeedbackCorrection,
    ) -> Result<FeedbackOutcome, GlossaryError> {
        let alias = correction.original_text.trim();
        let target = correction.correct_mapping.trim();
        if alias.is_empty() || target.is_empty() {
            return Err(GlossaryError::InvalidCorrection {
                reason: "original_text and correct_mapping must be non-empty".to_string(),
            });
        }

        let mut state = self.state.write().map_err(|_| GlossaryError::LockPoisoned)?;
        let state = &mut *state;
        let target_lower = target.to_lowercase();
        let alias_key = alias.to_lowercase();

        let (idx, canonical, existing) = match correction.entity_type {
            EntityType::Location => {
                let idx = state.data.locations.iter().position(|r| {
                    r.colloquial_name.to_lowercase() == target_lower
                        || r.full_name.to_lowercase() == target_lower
                });
                let idx = idx.ok_or_else(|| unknown(correction))?;
                let existing = state.locations.exact.get(&alias_key).copied();
                (idx, state.data.locations[idx].colloquial_name.clone(), existing)
            }
            EntityType::Age => {
                let idx = state
                    .data
                    .age_terms
                    .iter()
                    .position(|r| r.term.to_lowercase() == target_lower);
                let idx = idx.ok_or_else(|| unknown(correction))?;
                let existing = state.ages.exact.get(&alias_key).copied();
                (idx, state.data.age_terms[idx].term.clone(), existing)
            }
            EntityType::Terminology => {
                let idx = state.data.terminology.iter().position(|r| {
                    r.term.to_lowercase() == target_lower
                        || r.standardized_form.to_lowercase() == target_lower
                });
                let idx = idx.ok_or_else(|| unknown(correction))?;
                let existing = state.terms.exact.get(&alias_key).copied();
                (idx, state.data.terminology[idx].term.clone(), existing)
            }
        };

        if let Some(owner) = existing {
            let owner_name = match correction.entity_type {
                EntityType::Location => state.data.locations[owner].colloquial_name.clone(),
                EntityType::Age => state.data.age_terms[owner].term.clone(),
                EntityType::Terminology => state.data.terminology[owner].term.clone(),
            };
            if owner != idx {
                warn!(
                    alias = alias,
                    requested = %canonical,
                    owner = %owner_name,
                    "feedback alias already belongs to another record"
                );
            }
            debug!(alias = alias, canonical = %owner_name, "feedback alias already known");
            return Ok(FeedbackOutcome::AlreadyKnown {
                canonical: owner_name,
            });
        }

        let alias_owned = alias.to_string();
        let old_value = match correction.entity_type {
            EntityType::Location => {
                let record = &mut state.data.locations[idx];
                let old = record.synonyms.join(", ");
                record.synonyms.push(alias_owned.clone());
                state.locations.insert(alias, idx);
                old
            }
            EntityType::Age => {
                let record = &mut state.data.age_terms[idx];
                let old = record.synonyms.join(", ");
                record.synonyms.push(alias_owned.clone());
                state.ages.insert(alias, idx);
                old
            }
            EntityType::Terminology => {
                let record = &mut state.data.terminology[idx];
                let old = record.synonyms.join(", ");
                record.synonyms.push(alias_owned.clone());
                state.terms.insert(alias, idx);
                old
            }
        };

        state.changelog.push(ChangelogEntry {
            version: state.version,
            timestamp: Utc::now(),
            change_type: ChangeType::Modification,
            entity_type: correction.entity_type,
            entity_name: canonical.clone(),
            old_value: Some(old_value),
            new_value: Some(alias_owned.clone()),
            reason: format!("Added synonym from feedback: {alias_owned}"),
            author: correction.source.clone(),
        });
        state.bump(
            VersionBump::Patch,
            &format!("Feedback integration: {}", correction.entity_type),
            vec![format!("Added synonym '{alias_owned}' to {canonical}")],
            &correction.source,
        );

        info!(
            entity_type = %correction.entity_type,
            alias = %alias_owned,
            canonical = %canonical,
            version = %state.version,
            "glossary updated from feedback"
        );
        Ok(FeedbackOutcome::AliasAdded {
            canonical,
            version: state.version.to_string(),
        })
    }

    // --- Versioning ---

    pub fn current_version(&self) -> SemVer {
        self.read().version
    }

    pub fn increment_version(
        &self,
        bump: VersionBump,
        description: &str,
        changes: Vec<String>,
    ) -> Result<SemVer, GlossaryError> {
        let mut state = self.state.write().map_err(|_| GlossaryError::LockPoisoned)?;
        state.bump(bump, description, changes, "system");
        info!(version = %state.version, "glossary version updated");
        Ok(state.version)
    }

    pub fn version_history(&self) -> Vec<GlossaryVersion> {
        self.read().version_history.clone()
    }

    pub fn changelog(&self, filter: &ChangelogFilter) -> Vec<ChangelogEntry> {
        let state = self.read();
        let matching: Vec<ChangelogEntry> = state
            .changelog
            .iter()
            .filter(|e| filter.matches(e))
            .cloned()
            .collect();
        match filter.limit {
            Some(limit) if matching.len() > limit => matching[matching.len() - limit..].to_vec(),
            _ => matching,
        }
    }

    pub fn export_version_report(&self) -> VersionReport {
        let state = self.read();
        let recent_start = state.changelog.len().saturating_sub(10);
        VersionReport {
            current_version: state.version,
            total_versions: state.version_history.len(),
            total_changelog_entries: state.changelog.len(),
            location_records: state.data.locations.len(),
            age_records: state.data.age_terms.len(),
            terminology_records: state.data.terminology.len(),
            alias_count: state.locations.len() + state.ages.len() + state.terms.len(),
            last_updated: state.version_history.last().map(|v| v.timestamp),
            recent_changes: state.changelog[recent_start..].to_vec(),
        }
    }

    // --- Variants ---

    pub fn all_location_variants(&self) -> BTreeSet<String> {
        let state = self.read();
        state
            .data
            .locations
            .iter()
            .flat_map(|r| r.all_aliases())
            .map(str::to_lowercase)
            .collect()
    }

    pub fn all_age_variants(&self) -> BTreeSet<String> {
        let state = self.read();
        state
            .data
            .age_terms
            .iter()
            .flat_map(|r| r.all_aliases())
            .map(str::to_lowercase)
            .collect()
    }

    pub fn all_terminology_variants(&self) -> BTreeSet<String> {
        let state = self.read();
        state
            .data
            .terminology
            .iter()
            .flat_map(|r| r.all_aliases())
            .map(str::to_lowercase)
            .collect()
    }

    pub fn data(&self) -> GlossaryData {
        self.read().data.clone()
    }

    // --- Persistence ---

    pub fn from_json(json: &str) -> Result<Self, GlossaryError> {
        let snapshot: GlossarySnapshot =
            serde_json::from_str(json).map_err(|e| GlossaryError::Malformed {
                reason: e.to_string(),
            })?;
        let state = GlossaryState::new(
            snapshot.data,
            snapshot.version,
            snapshot.version_history,
            snapshot.changelog,
        );
        info!(version = %state.version, "glossary loaded");
        Ok(Self {
            state: RwLock::new(state),
            tiers: ConfidenceTiers::default(),
        })
    }

    pub fn to_json(&self) -> Result<String, GlossaryError> {
        let state = self.read();
        let snapshot = GlossarySnapshot {
            version: state.version,
            data: state.data.clone(),
            version_history: state.version_history.clone(),
            changelog: state.changelog.clone(),
        };
        serde_json::to_string_pretty(&snapshot).map_err(|e| GlossaryError::Malformed {
            reason: e.to_string(),
        })
    }

    pub fn load(path: &Path) -> Result<Self, GlossaryError> {
        let content = std::fs::read_to_string(path).map_err(|e| GlossaryError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_json(&content)
    }

    pub fn save(&self, path: &Path) -> Result<(), GlossaryError> {
        let json = self.to_json()?;
        std::fs::write(path, json).map_err(|e| GlossaryError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }
}

fn unknown(correction: &FeedbackCorrection) -> GlossaryError {
    GlossaryError::UnknownCanonical {
        entity_type: correction.entity_type.to_string(),
        name: correction.correct_mapping.clone(),
    }
}

/// Keep the better of two candidates: higher tier score, then longer alias,
/// then the record defined first.
fn consider(
    best: &mut Option<(usize, MatchTier, usize)>,
    idx: usize,
    tier: MatchTier,
    alias_len: usize,
    tiers: &crate::tiers::TierTable,
) {
    let better = match *best {
        None => true,
        Some((best_idx, best_tier, best_len)) => {
            let (score, best_score) = (tiers.score(tier), tiers.score(best_tier));
            score > best_score
                || (score == best_score && alias_len > best_len)
                || (score == best_score && alias_len == best_len && idx < best_idx)
        }
    };
    if better {
        *best = Some((idx, tier, alias_len));
    }
}

fn resolve<T: Clone>(
    best: Option<(usize, MatchTier, usize)>,
    records: &[T],
    tiers: &crate::tiers::TierTable,
) -> Standardization<T> {
    match best {
        Some((idx, tier, _)) => Standardization::found(records[idx].clone(), tiers.score(tier), tier),
        None => Standardization::none(),
    }
}
