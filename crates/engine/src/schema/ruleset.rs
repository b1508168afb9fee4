//! Validated rule set aggregate.

use std::collections::HashSet;

use super::{ConflictRule, SubsidyRule};
use crate::store::{ConfigError, Result};

/// The complete rule set active at a point in time.
///
/// Constructed only through [`RuleSet::new`], which validates the
/// loaded records. The store replaces the whole set on reload, so a
/// `RuleSet` never changes after construction; readers hold it behind
/// an `Arc` snapshot.
#[derive(Debug, Default, PartialEq)]
pub struct RuleSet {
    subsidy: Vec<SubsidyRule>,
    conflict: Vec<ConflictRule>,
}

impl RuleSet {
    /// Validate and assemble a rule set.
    ///
    /// Rejects empty or duplicate subsidy ids, conflict rules that
    /// reference an undefined subsidy id, and conflict rules pairing
    /// an id with itself.
    pub fn new(subsidy: Vec<SubsidyRule>, conflict: Vec<ConflictRule>) -> Result<Self> {
        let mut ids = HashSet::new();
        for rule in &subsidy {
            if rule.id.is_empty() {
                return Err(ConfigError::Validation(
                    "subsidy rule id must not be empty".to_string(),
                ));
            }
            if !ids.insert(rule.id.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate subsidy rule id '{}'",
                    rule.id
                )));
            }
        }
        for rule in &conflict {
            if rule.subsidy_id == rule.conflicting_subsidy_id {
                return Err(ConfigError::Validation(format!(
                    "conflict rule pairs '{}' with itself",
                    rule.subsidy_id
                )));
            }
            for side in [&rule.subsidy_id, &rule.conflicting_subsidy_id] {
                if !ids.contains(side.as_str()) {
                    return Err(ConfigError::Validation(format!(
                        "conflict rule references undefined subsidy id '{}'",
                        side
                    )));
                }
            }
        }
        Ok(Self { subsidy, conflict })
    }

    /// Rule set with no rules; everything evaluates to "no match".
    pub fn empty() -> Self {
        Self::default()
    }

    /// Subsidy rules in load order.
    pub fn subsidy_rules(&self) -> &[SubsidyRule] {
        &self.subsidy
    }

    /// Conflict rules in load order.
    pub fn conflict_rules(&self) -> &[ConflictRule] {
        &self.conflict
    }

    pub fn is_empty(&self) -> bool {
        self.subsidy.is_empty() && self.conflict.is_empty()
    }
}
