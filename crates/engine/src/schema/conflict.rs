//! Conflict rule record.

use serde::{Deserialize, Serialize};

/// A declared incompatibility between two subsidy types.
///
/// The pair is unordered: a conflict between A and B holds no matter
/// which side the config file put first, so [`ConflictRule::involves`]
/// tests both orientations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConflictRule {
    pub subsidy_id: String,
    pub conflicting_subsidy_id: String,
    #[serde(default)]
    pub description: String,
}

impl ConflictRule {
    /// Whether this rule declares a conflict between `a` and `b`, in
    /// either orientation.
    pub fn involves(&self, a: &str, b: &str) -> bool {
        (self.subsidy_id == a && self.conflicting_subsidy_id == b)
            || (self.subsidy_id == b && self.conflicting_subsidy_id == a)
    }
}
