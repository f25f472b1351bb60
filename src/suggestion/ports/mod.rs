//! Port contracts for priority suggestion backends.

pub mod suggester;

pub use suggester::{PrioritySuggester, SuggestionError, SuggestionResult};
