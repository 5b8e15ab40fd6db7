//! Error types for table loading, configuration, and resolution

use std::path::PathBuf;

use includeme_core::Mode;
use thiserror::Error;

/// A single table could not be used. Never fatal on its own: the registry
/// skips the table and carries on with the rest of the mode's tables.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("failed to load table {id}: {source}")]
    LoadFailed {
        id: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed table {id}: {reason}")]
    Malformed { id: String, reason: String },
    #[error("unknown table format for {id} (expected .json, .yaml, .yml or .toml)")]
    UnknownFormat { id: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("mode not supported: {0}")]
    ModeUnsupported(Mode),
    #[error("no definitions found for mode {0}")]
    EmptyIndex(Mode),
    #[error("symbol not found: {token}")]
    NotFound { token: String, mode: Mode },
    #[error("invalid token: {0:?}")]
    InvalidToken(String),
}

impl ResolveError {
    /// `NotFound` is an ordinary outcome rather than a failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ResolveError::NotFound { .. })
    }
}
