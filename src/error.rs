//! Error types for the newsvec library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! crate-wide [`NewsvecError`] enum. Two variants, [`NewsvecError::Validation`]
//! and [`NewsvecError::MissingField`], are recoverable: the article factory
//! reacts to them by skipping the offending corpus record and advancing.
//! Everything else is fatal for the current pass.
//!
//! End of corpus is deliberately not an error. The factory signals it with
//! `Ok(None)` instead.
//!
//! # Examples
//!
//! ```
//! use newsvec::error::{NewsvecError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(NewsvecError::validation("text must not be empty"))
//! }
//!
//! match example_operation() {
//!     Err(e) if e.is_recoverable() => { /* skip the record */ }
//!     Err(e) => eprintln!("fatal: {e}"),
//!     Ok(_) => {}
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for newsvec operations.
#[derive(Error, Debug)]
pub enum NewsvecError {
    /// I/O errors while opening or reading corpus files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Malformed corpus layout (bad root directory, unreadable entry).
    #[error("Corpus error: {0}")]
    Corpus(String),

    /// A provider could not locate an expected structural tag in the
    /// current record. Recoverable: the factory skips the record.
    #[error("Missing field: {0}")]
    MissingField(String),

    /// An article candidate failed validation (empty text or category,
    /// or a category outside the allow-list). Recoverable.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Analysis-related errors (tokenization, filtering, stemming).
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// JSON serialization/deserialization errors for the cache artifact.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error.
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with [`NewsvecError`].
pub type Result<T> = std::result::Result<T, NewsvecError>;

impl NewsvecError {
    /// Create a new corpus error.
    pub fn corpus<S: Into<String>>(msg: S) -> Self {
        NewsvecError::Corpus(msg.into())
    }

    /// Create a new missing-field error.
    pub fn missing_field<S: Into<String>>(msg: S) -> Self {
        NewsvecError::MissingField(msg.into())
    }

    /// Create a new validation error.
    pub fn validation<S: Into<String>>(msg: S) -> Self {
        NewsvecError::Validation(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        NewsvecError::Analysis(msg.into())
    }

    /// Whether the article factory may recover from this error by skipping
    /// the current corpus record and advancing to the next one.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            NewsvecError::Validation(_) | NewsvecError::MissingField(_)
        )
    }
}
