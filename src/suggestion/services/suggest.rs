//! Service layer for requesting and applying priority suggestions.

use crate::suggestion::{
    domain::{PrioritySuggestion, SuggestionDomainError, SuggestionRequest},
    ports::{PrioritySuggester, SuggestionError},
};
use crate::task::{domain::TaskPriority, services::CreateTaskRequest};
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for priority suggestions.
#[derive(Debug, Error)]
pub enum PrioritySuggestionError {
    /// The request was rejected before calling the backend.
    #[error(transparent)]
    Domain(#[from] SuggestionDomainError),
    /// The backend call failed.
    #[error(transparent)]
    Suggester(#[from] SuggestionError),
}

/// Priority suggestion orchestration service.
#[derive(Clone)]
pub struct PrioritySuggestionService<S>
where
    S: PrioritySuggester,
{
    suggester: Arc<S>,
}

impl<S> PrioritySuggestionService<S>
where
    S: PrioritySuggester,
{
    /// Creates a new suggestion service.
    #[must_use]
    pub const fn new(suggester: Arc<S>) -> Self {
        Self { suggester }
    }

    /// Suggests a priority for a task with the given title and description.
    ///
    /// # Errors
    ///
    /// Returns [`PrioritySuggestionError::Domain`] for a blank title, without
    /// calling the backend, and [`PrioritySuggestionError::Suggester`] when
    /// the backend call fails.
    pub async fn suggest(
        &self,
        title: &str,
        description: &str,
    ) -> Result<PrioritySuggestion, PrioritySuggestionError> {
        let request = SuggestionRequest::new(title, description)?;
        let suggestion = self
            .suggester
            .suggest(&request)
            .await
            .inspect_err(|err| tracing::warn!(error = %err, "priority suggestion failed"))?;
        tracing::info!(priority = %suggestion.priority, "priority suggested");
        Ok(suggestion)
    }

    /// Suggests a priority for `draft` and writes it into the draft.
    ///
    /// The draft is left unchanged when the suggestion fails.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`suggest`](Self::suggest).
    pub async fn apply_to(
        &self,
        draft: &mut CreateTaskRequest,
    ) -> Result<PrioritySuggestion, PrioritySuggestionError> {
        let suggestion = self
            .suggest(draft.title(), draft.description().unwrap_or_default())
            .await?;
        draft.set_priority(&TaskPriority::from(suggestion.priority));
        Ok(suggestion)
    }
}
