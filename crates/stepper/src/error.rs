//! Shared error types for the stepper crate.

use thiserror::Error;

/// Errors emitted while fetching a category's questions.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SourceError {
    #[error("category not found")]
    CategoryNotFound,
    #[error("question request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("malformed question payload: {0}")]
    Malformed(String),
}
