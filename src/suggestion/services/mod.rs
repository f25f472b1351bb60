//! Application services for priority suggestions.

mod suggest;

pub use suggest::{PrioritySuggestionError, PrioritySuggestionService};
