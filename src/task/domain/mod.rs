//! Domain model for tasks, their ordering, and board columns.
//!
//! All types here are free of I/O; the ordering engine in [`ordering`] is
//! pure arithmetic over already-validated values.

mod board;
mod error;
mod ids;
pub mod ordering;
mod status;
mod task;

pub use board::{BoardColumn, BoardColumns, sort_partition};
pub use error::TaskDomainError;
pub use ids::{Revision, TaskId};
pub use ordering::{
    DragPayload, DropDecision, DropTarget, IgnoredDrop, OrderingPolicy, TaskOrder, TaskPlacement,
};
pub use status::{DEFAULT_STATUSES, TaskPriority, TaskStatus};
pub use task::{PersistedTaskData, Task, TaskDescription, TaskDraft, TaskPatch, TaskTitle};
