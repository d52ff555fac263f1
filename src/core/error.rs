//! Error types and error handling for recall.
//!
//! This module defines the error types used throughout the
//! application. Presentation concerns (exit codes, colored error
//! lines) are handled by the CLI adapter.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for recall operations
pub type Result<T> = std::result::Result<T, RecallError>;

/// Main error type for recall
#[derive(Error, Debug)]
pub enum RecallError {
    #[error("recall project not found (run `recall init` first)")]
    NotInitialized,

    #[error("recall project already initialized at {0}")]
    AlreadyInitialized(PathBuf),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Note export failed: {0}")]
    ExportFailed(String),

    #[error("Snapshot not found: {0}")]
    SnapshotMissing(PathBuf),

    #[error("Snapshot corrupted: {0}")]
    SnapshotCorrupt(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Unsupported note source: {0}")]
    UnsupportedSource(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerError(#[from] toml::ser::Error),

    #[error("Notes database error: {0}")]
    SqliteError(#[from] rusqlite::Error),

    #[error("Snapshot encoding error: {0}")]
    EncodingError(#[from] bincode::Error),
}

impl RecallError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this error means no project is set up
    pub fn is_not_initialized(&self) -> bool {
        matches!(self, RecallError::NotInitialized)
    }

    /// Check if this error is fixed by rebuilding the index
    ///
    /// Missing and corrupt snapshots both fall in this class: the
    /// project exists but its derived artifacts cannot be trusted.
    pub fn needs_rebuild(&self) -> bool {
        matches!(
            self,
            RecallError::SnapshotMissing(_) | RecallError::SnapshotCorrupt(_)
        )
    }

    /// Check if this is a bad request error (invalid input)
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            RecallError::ConfigError(_) | RecallError::UnsupportedSource(_)
        )
    }
}
