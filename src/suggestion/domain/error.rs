//! Error types for suggestion requests.

use thiserror::Error;

/// Errors raised before a suggestion is requested.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SuggestionDomainError {
    /// The task title is blank.
    #[error("Please enter a task title first.")]
    MissingTitle,

    /// The prompt template failed to render.
    #[error("failed to render suggestion prompt: {0}")]
    Template(String),
}
