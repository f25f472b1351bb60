//! Feeds over the task and project repositories.

mod project;
mod task;

pub use project::ProjectFeed;
pub use task::TaskFeed;
