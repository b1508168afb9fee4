//! Rule store with atomic swap-on-reload and filesystem hot-reload.
//!
//! [`RuleStore`] loads `subsidy_rules.json` and `conflict_rules.json`
//! from a config directory, validates them fully, and installs the
//! result as an immutable snapshot. [`RuleWatcher`] observes the
//! directory and triggers a debounced reload per settled change.

mod core;
mod error;
mod watcher;


pub use self::core::{RuleStore, CONFLICT_RULES_FILE, SUBSIDY_RULES_FILE};
pub use self::error::{ConfigError, Result};
pub use self::watcher::RuleWatcher;
