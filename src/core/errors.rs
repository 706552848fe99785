//! Shared error types for the application

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for wlexpand operations
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid configuration, rejected before any work dispatches
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed clause in a filter rule string
    #[error("Invalid filter clause '{clause}': {message}")]
    FilterParse { clause: String, message: String },

    /// Embedding vector file could not be loaded
    #[error("Embedding store error in {}: {message}", path.display())]
    Embedding { path: PathBuf, message: String },

    /// Per-seed service failure, contained at the seed boundary
    #[error("Lookup failed for '{word}': {message}")]
    Service { word: String, message: String },

    /// Violated internal invariant; indicates a bug, not bad input
    #[error("Internal invariant violated: {0}")]
    Invariant(String),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a filter parse error for a specific clause
    pub fn filter_parse(clause: impl Into<String>, message: impl Into<String>) -> Self {
        Self::FilterParse {
            clause: clause.into(),
            message: message.into(),
        }
    }

    /// Create an embedding store error with path context
    pub fn embedding(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Embedding {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a per-seed service error
    pub fn service(word: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Service {
            word: word.into(),
            message: message.into(),
        }
    }

    /// Create an internal invariant error
    pub fn invariant(message: impl Into<String>) -> Self {
        Self::Invariant(message.into())
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
