//! Conflict detection for subsidy grant combinations.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::schema::{ConflictRule, PersonAttributes};
use crate::store::RuleStore;

/// Detects conflicting subsidy combinations against the active rule set.
pub struct ConflictChecker {
    store: Arc<RuleStore>,
}

impl ConflictChecker {
    pub fn new(store: Arc<RuleStore>) -> Self {
        Self { store }
    }

    /// First conflict rule whose two sides are both in `candidates`.
    ///
    /// Membership is checked per side, so the stored orientation of
    /// the pair does not matter. Fewer than two candidates can never
    /// conflict.
    pub fn first_conflict(&self, candidates: &BTreeSet<String>) -> Option<ConflictRule> {
        if candidates.len() < 2 {
            return None;
        }
        let rules = self.store.snapshot();
        rules
            .conflict_rules()
            .iter()
            .find(|c| {
                candidates.contains(&c.subsidy_id)
                    && candidates.contains(&c.conflicting_subsidy_id)
            })
            .cloned()
    }

    /// Check a proposed grant against the person's existing grants.
    ///
    /// Used before committing a new grant record: the candidate id is
    /// combined with everything already granted for the period.
    pub fn conflict_with_granted(
        &self,
        candidate: &str,
        person: &PersonAttributes,
    ) -> Option<ConflictRule> {
        let mut ids = person.granted.clone();
        ids.insert(candidate.to_string());
        self.first_conflict(&ids)
    }
}

// ── Tests ───────────────────────────────────────────────────────────
