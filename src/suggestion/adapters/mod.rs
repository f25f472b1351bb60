//! Adapter implementations for priority suggestion backends.

pub mod http;

pub use http::{HttpPrioritySuggester, SuggestionSettings};
