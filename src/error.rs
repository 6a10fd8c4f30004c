//! Error types shared across the crate.

use std::path::PathBuf;
use thiserror::Error;

/// Failures touching the preference document on disk.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to write preference document {}: {source}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize records: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Failed to export records: {0}")]
    Export(String),
}

/// A preference document exists but could not be parsed.
///
/// Recoverable: the store starts empty and leaves the file alone until the
/// next successful write replaces it.
#[derive(Debug, Error)]
#[error("Malformed preference document {}: {source}", path.display())]
pub struct LoadError {
    pub path: PathBuf,
    #[source]
    pub source: serde_json::Error,
}

/// Top-level error returned by generation, sessions and the CLI.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Failed to load configuration: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error(transparent)]
    LoadError(#[from] LoadError),

    #[error("Prompt error: {0}")]
    PromptError(String),
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        ApiError::StorageError(StorageError::IoError(err))
    }
}
