//! Priority suggestions from a language model.
//!
//! Given a task title and description, a [`ports::PrioritySuggester`]
//! proposes `low`, `medium`, or `high` together with a short reason. The
//! shipped adapter talks to any OpenAI-compatible chat-completions endpoint.
//! A suggestion is advisory: [`services::PrioritySuggestionService::apply_to`]
//! only touches a task draft when the call succeeds.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
