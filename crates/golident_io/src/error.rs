//! Error types for golident_io crate.
//!
//! Covers file access, JSON handling, and document verification.

use golident_core::IdenticonError;
use thiserror::Error;

/// Main error type for golident_io operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// File system errors
    #[error("File system error: {0}")]
    FileSystem(#[from] std::io::Error),

    /// JSON parsing errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Regenerating an identicon failed
    #[error("Identicon error: {0}")]
    Identicon(#[from] IdenticonError),

    /// Structurally invalid document
    #[error("Validation error: {0}")]
    Validation(String),

    /// Document does not match a fresh regeneration
    #[error("Mismatch: {0}")]
    Mismatch(String),

    /// Generic error with context
    #[error("{context}: {source}")]
    Context {
        context: String,
        source: Box<IoError>,
    },
}

/// Result type alias for golident_io operations.
pub type Result<T> = std::result::Result<T, IoError>;

impl IoError {
    #[must_use]
    pub fn serialization<S: Into<String>>(msg: S) -> Self {
        Self::Serialization(msg.into())
    }

    #[must_use]
    pub fn validation<S: Into<String>>(msg: S) -> Self {
        Self::Validation(msg.into())
    }

    #[must_use]
    pub fn mismatch<S: Into<String>>(msg: S) -> Self {
        Self::Mismatch(msg.into())
    }

    /// Wraps an error with additional context.
    #[must_use]
    pub fn with_context<S: Into<String>>(self, context: S) -> Self {
        Self::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// True for a mismatch, including one wrapped in context.
    pub fn is_mismatch(&self) -> bool {
        match self {
            Self::Mismatch(_) => true,
            Self::Context { source, .. } => source.is_mismatch(),
            _ => false,
        }
    }
}
