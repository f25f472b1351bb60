//! Application services for task boards.

mod board;
mod requests;

pub use board::{DropNotice, DropOutcome, TaskBoardError, TaskBoardResult, TaskBoardService};
pub use requests::{CreateTaskRequest, DropRequest, UpdateTaskRequest};
