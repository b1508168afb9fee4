//! Eligibility evaluation and conflict checking over the active rule set.
//!
//! Both components are pure readers: they take a snapshot from the
//! [`RuleStore`] per call and never fail on data-shape grounds. An
//! empty store simply yields no eligibilities and no conflicts.

mod conflicts;

use std::sync::Arc;

use crate::schema::{LandContext, PersonAttributes, SubsidyRule};
use crate::store::RuleStore;

pub use conflicts::ConflictChecker;

/// Computes which subsidy rules a person currently satisfies.
pub struct EligibilityEvaluator {
    store: Arc<RuleStore>,
}

impl EligibilityEvaluator {
    pub fn new(store: Arc<RuleStore>) -> Self {
        Self { store }
    }

    /// All rules the person satisfies for the given land, in load order.
    ///
    /// A rule matches iff its `age_min` is unset or met by
    /// `person.age`, and its `land_require` is unset or equal to
    /// `land.land_type`.
    pub fn eligible(&self, person: &PersonAttributes, land: &LandContext) -> Vec<SubsidyRule> {
        let rules = self.store.snapshot();
        rules
            .subsidy_rules()
            .iter()
            .filter(|r| r.age_min.map_or(true, |min| person.age >= min))
            .filter(|r| {
                r.land_require
                    .as_deref()
                    .map_or(true, |req| land.land_type == req)
            })
            .cloned()
            .collect()
    }
}

// ── Tests ───────────────────────────────────────────────────────────
