//! In-memory project persistence.

mod project;

pub use project::InMemoryProjectRepository;
