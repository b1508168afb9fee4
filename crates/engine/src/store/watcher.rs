//! Filesystem watcher driving hot-reload of the rule store.

use std::path::Path;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use notify::{RecommendedWatcher, RecursiveMode, Watcher};
use tracing::{info, warn};

use super::core::{RuleStore, CONFLICT_RULES_FILE, SUBSIDY_RULES_FILE};
use super::error::Result;

/// Default debounce: filesystem events this close together coalesce
/// into a single reload.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Watches the store's config directory and reloads on settled changes.
///
/// Holds the `notify` watcher to keep it alive; dropping the
/// `RuleWatcher` stops the watcher, which closes the event channel and
/// lets the debounce thread drain out.
pub struct RuleWatcher {
    _watcher: RecommendedWatcher,
}

impl RuleWatcher {
    /// Start watching with the default debounce interval.
    pub fn spawn(store: Arc<RuleStore>) -> Result<Self> {
        Self::spawn_with_debounce(store, DEFAULT_DEBOUNCE)
    }

    /// Start watching the store's config directory.
    ///
    /// Rapid successive events (editors typically write a file in
    /// several syscalls) are coalesced: the debounce thread waits until
    /// `debounce` elapses with no further event before calling
    /// [`RuleStore::reload`] once. A failed reload is logged and the
    /// previous snapshot stays active; the watcher keeps observing.
    pub fn spawn_with_debounce(store: Arc<RuleStore>, debounce: Duration) -> Result<Self> {
        let (tx, rx) = mpsc::channel::<()>();

        let mut watcher = notify::recommended_watcher(
            move |res: std::result::Result<notify::Event, notify::Error>| match res {
                Ok(event) => {
                    if event.paths.iter().any(|p| is_rule_file(p)) {
                        let _ = tx.send(());
                    }
                }
                Err(e) => warn!(error = %e, "filesystem watcher error"),
            },
        )?;
        watcher.watch(store.config_dir(), RecursiveMode::NonRecursive)?;

        info!(path = %store.config_dir().display(), "watching config directory for rule changes");

        thread::spawn(move || debounce_loop(&store, &rx, debounce));

        Ok(Self { _watcher: watcher })
    }
}

/// Coalesce change signals and reload once per settled burst.
///
/// Exits when the channel disconnects (watcher dropped).
pub(super) fn debounce_loop(store: &RuleStore, rx: &mpsc::Receiver<()>, debounce: Duration) {
    while rx.recv().is_ok() {
        // Drain the burst until the directory goes quiet.
        while rx.recv_timeout(debounce).is_ok() {}

        match store.reload() {
            Ok(()) => info!("rules hot-reloaded"),
            Err(e) => {
                warn!(error = %e, "reload after file change failed, keeping previous rule set");
            }
        }
    }
}

/// Whether a changed path is one of the recognized rule files.
///
/// Dotfiles (editor temp files) and unrelated names are ignored.
pub(super) fn is_rule_file(path: &Path) -> bool {
    match path.file_name().and_then(|n| n.to_str()) {
        Some(name) if name.starts_with('.') => false,
        Some(name) => name == SUBSIDY_RULES_FILE || name == CONFLICT_RULES_FILE,
        None => false,
    }
}
