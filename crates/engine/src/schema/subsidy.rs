//! Subsidy eligibility rule record.

use serde::{Deserialize, Serialize};

/// One subsidy type with its eligibility criteria and unit amount.
///
/// Deserialized from an entry of `subsidy_rules.json`. Records are
/// immutable once loaded; a reload replaces the whole rule set rather
/// than mutating entries in place.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubsidyRule {
    pub id: String,
    pub name: String,
    /// Minimum qualifying age; `None` means no age requirement.
    #[serde(default)]
    pub age_min: Option<u32>,
    /// Required land type; `None` means any land qualifies.
    #[serde(default)]
    pub land_require: Option<String>,
    pub amount_per_unit: f64,
    /// Cannot be combined with any other exclusive subsidy.
    #[serde(default)]
    pub is_mutual_exclusive: bool,
    /// May be granted more than once within the same period.
    #[serde(default = "default_true")]
    pub allow_multiple: bool,
}

pub(crate) fn default_true() -> bool {
    true
}
