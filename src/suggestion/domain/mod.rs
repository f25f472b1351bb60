//! Domain types for priority suggestions.

mod error;
mod prompt;
mod request;

pub use error::SuggestionDomainError;
pub use prompt::{PROMPT_TEMPLATE, SYSTEM_PROMPT, render_prompt};
pub use request::{PriorityLevel, PrioritySuggestion, SuggestionRequest};
