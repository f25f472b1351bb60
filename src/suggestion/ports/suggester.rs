//! Suggester port and its error type.

use crate::suggestion::domain::{PrioritySuggestion, SuggestionDomainError, SuggestionRequest};
use async_trait::async_trait;
use thiserror::Error;

/// Result type for suggester operations.
pub type SuggestionResult<T> = Result<T, SuggestionError>;

/// Backend able to propose a task priority.
#[async_trait]
pub trait PrioritySuggester: Send + Sync {
    /// Requests a suggestion for `request`.
    ///
    /// # Errors
    ///
    /// Returns [`SuggestionError`] when the backend cannot be reached,
    /// rejects the request, or answers with something unparseable.
    async fn suggest(&self, request: &SuggestionRequest) -> SuggestionResult<PrioritySuggestion>;
}

/// Errors returned by suggester implementations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SuggestionError {
    /// The prompt could not be built.
    #[error(transparent)]
    Domain(#[from] SuggestionDomainError),

    /// The request did not complete.
    #[error("suggestion request failed: {0}")]
    Network(String),

    /// The request exceeded the configured timeout.
    #[error("suggestion request timed out")]
    Timeout,

    /// The backend answered with a non-success status.
    #[error("suggestion backend returned HTTP {status}: {body}")]
    Http {
        /// Response status code.
        status: u16,
        /// Response body, for diagnostics.
        body: String,
    },

    /// The backend's answer was not a valid suggestion.
    #[error("invalid suggestion response: {0}")]
    InvalidResponse(String),
}
