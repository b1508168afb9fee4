//! JSON rule schema types with serde deserialization.
//!
//! Defines the records loaded from the configuration directory:
//! - `SubsidyRule`: one subsidy type with its eligibility criteria
//! - `ConflictRule`: a declared incompatibility between two subsidy types
//! - `RuleSet`: the validated aggregate the store installs as a snapshot
//!
//! plus the evaluator input types (`PersonAttributes`, `LandContext`).

mod conflict;
mod person;
mod ruleset;
mod subsidy;

pub use conflict::*;
pub use person::*;
pub use ruleset::*;
pub use subsidy::*;

#[cfg(test)]
mod tests;
