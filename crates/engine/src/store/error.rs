//! Error types for configuration loading.

/// Errors that can occur while loading or reloading the rule configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Filesystem I/O error (missing or unreadable config file).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parse/deserialization error.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Rule validation error (duplicate ids, undefined references).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Filesystem watcher error.
    #[error("Notify watcher error: {0}")]
    Notify(#[from] notify::Error),
}

/// Result alias for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
