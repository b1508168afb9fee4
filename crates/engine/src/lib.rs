//! Subsidy eligibility and conflict rule engine.
//!
//! This crate provides:
//! - JSON rule definitions with serde deserialization
//! - A validating rule store with atomic swap-on-reload semantics
//! - Hot-reload from the config directory via `notify` watcher
//! - Eligibility evaluation over person and land attributes
//! - Conflict detection for subsidy grant combinations

pub mod evaluator;
pub mod schema;
pub mod store;

pub use evaluator::{ConflictChecker, EligibilityEvaluator};
pub use schema::{ConflictRule, LandContext, PersonAttributes, RuleSet, SubsidyRule};
pub use store::{ConfigError, Result, RuleStore, RuleWatcher};
