//! Evaluator input types.
//!
//! These are inputs only; the surrounding application owns their
//! persistence.

use std::collections::BTreeSet;

/// Static attributes of the person being evaluated.
#[derive(Debug, Clone, Default)]
pub struct PersonAttributes {
    pub age: u32,
    /// Land type recorded on the person's household; callers use it to
    /// build the [`LandContext`] when no specific parcel is selected.
    pub land_type: String,
    /// Subsidy ids already granted for the evaluation period.
    pub granted: BTreeSet<String>,
}

/// The land parcel a grant is being evaluated against.
#[derive(Debug, Clone, Default)]
pub struct LandContext {
    pub land_type: String,
}
