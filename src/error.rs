//! Unified error types for entrynav
//!
//! Library code returns [`Result`]; the binary and event loop wrap these in
//! `anyhow` at the edges.

use std::path::PathBuf;

/// Unified error type for entrynav operations
#[derive(Debug, thiserror::Error)]
pub enum EntrynavError {
    /// I/O errors (listing, deleting, reading metadata)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Path validation errors (escaping the library root, etc.)
    #[error("Path error: {path} - {reason}")]
    Path { path: PathBuf, reason: String },

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),

    /// Generic internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Convenience Result type using EntrynavError
pub type Result<T> = std::result::Result<T, EntrynavError>;

impl EntrynavError {
    /// Create a Path error
    pub fn path(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Path {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a Config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an Internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

impl From<toml::de::Error> for EntrynavError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}
