// src/error.rs

//! Error types shared by the recipe model, store, and interaction layers

use thiserror::Error;

/// Errors produced by recipebox library operations
#[derive(Debug, Error)]
pub enum Error {
    /// A user-supplied field was malformed (empty name, bad quantity, ...)
    #[error("Invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    /// A referenced recipe does not exist
    #[error("Recipe {0} not found")]
    NotFound(i64),

    /// A step number (counted from 1) was outside the recipe's step list
    #[error("Step {number} is out of range (recipe has {len} step(s))")]
    Index { number: usize, len: usize },

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The data reset procedure failed
    #[error("Reset failed: {0}")]
    Reset(String),
}

impl Error {
    pub(crate) fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Error::Validation {
            field,
            reason: reason.into(),
        }
    }

    /// Whether this error should be surfaced as a warning rather than a failure
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }
}

/// Result type for recipebox operations
pub type Result<T> = std::result::Result<T, Error>;
