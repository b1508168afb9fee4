//! Core [`RuleStore`]: filesystem-backed rule loading with atomic snapshot swap.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use tracing::info;

use crate::schema::{ConflictRule, RuleSet, SubsidyRule};

use super::error::Result;

/// File name of the subsidy rule list inside the config directory.
pub const SUBSIDY_RULES_FILE: &str = "subsidy_rules.json";
/// File name of the conflict rule list inside the config directory.
pub const CONFLICT_RULES_FILE: &str = "conflict_rules.json";

/// Holds the currently active [`RuleSet`] and reloads it from disk.
///
/// The store owns the only mutable reference to the rule set. Readers
/// take an `Arc` snapshot via [`snapshot`](RuleStore::snapshot); a
/// reload validates the new set fully before swapping the `Arc`, so an
/// evaluation in flight keeps seeing a consistent set and a failed
/// reload leaves the previous set installed.
#[derive(Debug)]
pub struct RuleStore {
    /// Directory containing the rule JSON files.
    config_dir: PathBuf,
    /// Active snapshot; swapped wholesale, never mutated in place.
    current: RwLock<Arc<RuleSet>>,
}

impl RuleStore {
    /// Create a store with an empty rule set, performing no I/O.
    ///
    /// Use [`reload`](RuleStore::reload) (or the watcher) to populate it.
    pub fn new(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
            current: RwLock::new(Arc::new(RuleSet::empty())),
        }
    }

    /// Create a store and perform the initial load.
    ///
    /// Unlike later reloads there is no previous snapshot to fall back
    /// to, so a load failure here propagates to the caller.
    pub fn open(config_dir: impl Into<PathBuf>) -> Result<Self> {
        let store = Self::new(config_dir);
        store.reload()?;
        Ok(store)
    }

    /// Parse and validate the two rule files in `dir` into a fresh set.
    ///
    /// Performs no swap; errors here never disturb an installed set.
    pub fn load_dir(dir: &Path) -> Result<RuleSet> {
        let subsidy: Vec<SubsidyRule> =
            serde_json::from_str(&fs::read_to_string(dir.join(SUBSIDY_RULES_FILE))?)?;
        let conflict: Vec<ConflictRule> =
            serde_json::from_str(&fs::read_to_string(dir.join(CONFLICT_RULES_FILE))?)?;
        RuleSet::new(subsidy, conflict)
    }

    /// Reload from the config directory, swapping the snapshot on success.
    ///
    /// On failure the previously installed snapshot is retained
    /// untouched and the error is returned; the store is never left
    /// empty or partially updated.
    pub fn reload(&self) -> Result<()> {
        let fresh = Self::load_dir(&self.config_dir)?;
        info!(
            path = %self.config_dir.display(),
            subsidy_rules = fresh.subsidy_rules().len(),
            conflict_rules = fresh.conflict_rules().len(),
            "installed rule set"
        );
        self.install(fresh);
        Ok(())
    }

    /// Swap in a fully validated set.
    pub(crate) fn install(&self, set: RuleSet) {
        *self.current.write().expect("rule set lock poisoned") = Arc::new(set);
    }

    /// The active rule set snapshot.
    ///
    /// The returned `Arc` stays valid across reloads; callers that
    /// want fresh rules take a new snapshot per evaluation.
    pub fn snapshot(&self) -> Arc<RuleSet> {
        Arc::clone(&self.current.read().expect("rule set lock poisoned"))
    }

    /// Subsidy rules of the active snapshot, in load order.
    pub fn subsidy_rules(&self) -> Vec<SubsidyRule> {
        self.snapshot().subsidy_rules().to_vec()
    }

    /// Conflict rules of the active snapshot, in load order.
    pub fn conflict_rules(&self) -> Vec<ConflictRule> {
        self.snapshot().conflict_rules().to_vec()
    }

    /// The configuration directory this store loads from.
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }
}
