//! Ordering engine for task placement within status columns.
//!
//! Tasks sharing a project and status form a partition whose on-screen
//! sequence is the ascending [`TaskOrder`] of its members. Placement uses
//! fractional values so a reorder rewrites only the dragged task:
//!
//! - dropping onto a task in the same column places the dragged task just
//!   before it (`target - 0.5`, or the midpoint with the target's
//!   predecessor when that predecessor sits closer than half a step);
//! - dropping onto the empty area of a column appends to its end
//!   (`max + 1`, or `0` for an empty column), changing status when the
//!   column differs from the task's current one;
//! - creating a task appends to the end of its initial status partition.
//!
//! Repeated insertions at the same point halve the gap each time, so
//! [`needs_renumbering`] and [`renumber`] restore even spacing once the
//! smallest gap falls below [`OrderingPolicy::renumber_epsilon`].
//!
//! # Examples
//!
//!     use taskzen::task::domain::ordering::{append_order, order_before};
//!     use taskzen::task::domain::TaskOrder;
//!
//!     assert_eq!(append_order([]), TaskOrder::ZERO);
//!     let last = append_order([TaskOrder::ZERO, TaskOrder::from_index(1)]);
//!     assert_eq!(last, TaskOrder::from_index(2));
//!     let before = order_before(TaskOrder::from_index(1), None);
//!     assert_eq!(before.value(), 0.5);

use super::{Task, TaskDomainError, TaskId, TaskStatus};
use crate::project::domain::ProjectId;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

const INSERT_OFFSET: f64 = 0.5;
const APPEND_STEP: f64 = 1.0;

/// Default gap below which a partition is renumbered.
pub const DEFAULT_RENUMBER_EPSILON: f64 = 1e-6;

/// Default spacing between orders after renumbering.
pub const DEFAULT_RENUMBER_SPACING: f64 = 1.0;

/// Finite sort key of a task within its status partition.
///
/// Negative values are valid. `-0.0` is normalised to `0.0` so equality
/// and ordering agree.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct TaskOrder(f64);

impl TaskOrder {
    /// Order of the first task appended to an empty partition.
    pub const ZERO: Self = Self(0.0);

    /// Creates a validated order value.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::NonFiniteOrder`] for NaN or infinities.
    pub fn new(value: f64) -> Result<Self, TaskDomainError> {
        if !value.is_finite() {
            return Err(TaskDomainError::NonFiniteOrder(value));
        }
        Ok(Self::normalized(value))
    }

    /// Returns the order of the `index`-th task in an evenly spaced
    /// partition.
    #[must_use]
    pub fn from_index(index: u32) -> Self {
        Self(f64::from(index))
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "adding positive zero folds negative zero into positive zero"
    )]
    fn normalized(value: f64) -> Self {
        Self(value + 0.0)
    }

    /// Wraps the result of engine arithmetic, saturating overflow so the
    /// engine itself never fails.
    fn saturating(value: f64) -> Self {
        if value.is_nan() {
            return Self::ZERO;
        }
        Self::normalized(value.clamp(f64::MIN, f64::MAX))
    }
}

impl PartialEq for TaskOrder {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for TaskOrder {}

impl PartialOrd for TaskOrder {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TaskOrder {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl TryFrom<f64> for TaskOrder {
    type Error = TaskDomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TaskOrder> for f64 {
    fn from(value: TaskOrder) -> Self {
        value.0
    }
}

impl fmt::Display for TaskOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Tuning for partition renumbering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderingPolicy {
    /// Smallest tolerated gap between adjacent orders.
    pub renumber_epsilon: f64,
    /// Gap between adjacent orders after renumbering.
    pub renumber_spacing: f64,
}

impl Default for OrderingPolicy {
    fn default() -> Self {
        Self {
            renumber_epsilon: DEFAULT_RENUMBER_EPSILON,
            renumber_spacing: DEFAULT_RENUMBER_SPACING,
        }
    }
}

/// Position of one task as seen by the ordering engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskPlacement {
    /// Task identifier.
    pub task_id: TaskId,
    /// Column the task is in.
    pub status: TaskStatus,
    /// Current sort key.
    pub order: TaskOrder,
}

impl From<&Task> for TaskPlacement {
    fn from(task: &Task) -> Self {
        Self {
            task_id: task.id(),
            status: task.status().clone(),
            order: task.order(),
        }
    }
}

/// Data carried from drag start to drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragPayload {
    /// Dragged task, absent when the transfer payload lost it.
    pub task_id: Option<TaskId>,
    /// Project the drag started in.
    pub source_project: ProjectId,
    /// Status of the dragged task when the drag started.
    pub current_status: TaskStatus,
}

impl DragPayload {
    /// Builds the payload recorded when dragging `task`.
    #[must_use]
    pub fn for_task(task: &Task) -> Self {
        Self {
            task_id: Some(task.id()),
            source_project: task.project_id(),
            current_status: task.status().clone(),
        }
    }
}

/// What the dragged task was dropped onto.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropTarget {
    /// Another task card.
    Task(TaskPlacement),
    /// The empty area of a status column.
    Column(TaskStatus),
}

impl DropTarget {
    /// Returns the status of the column receiving the drop.
    #[must_use]
    pub const fn status(&self) -> &TaskStatus {
        match self {
            Self::Task(placement) => &placement.status,
            Self::Column(status) => status,
        }
    }
}

/// Reason a drop produced no write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoredDrop {
    /// The transfer payload carried no task identifier.
    MissingTaskId,
    /// The drag started in a different project.
    ForeignProject,
    /// The task was dropped onto itself.
    DroppedOnSelf,
    /// The target card belongs to a different column.
    CrossColumnTask,
    /// The dragged task is not listed in its own column.
    NotInColumn,
    /// The computed placement equals the current one.
    Unchanged,
}

impl fmt::Display for IgnoredDrop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Self::MissingTaskId => "drag payload has no task id",
            Self::ForeignProject => "task belongs to another project",
            Self::DroppedOnSelf => "task dropped onto itself",
            Self::CrossColumnTask => "target task is in another column",
            Self::NotInColumn => "task not found in its column",
            Self::Unchanged => "placement unchanged",
        };
        f.write_str(reason)
    }
}

/// Mutation decided for a single drop gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropDecision {
    /// No write is issued.
    Ignore(IgnoredDrop),
    /// Change the order within the current column.
    Reorder {
        /// Dragged task.
        task_id: TaskId,
        /// New sort key.
        order: TaskOrder,
    },
    /// Move to another column, appending at its end.
    Move {
        /// Dragged task.
        task_id: TaskId,
        /// Destination column.
        status: TaskStatus,
        /// New sort key.
        order: TaskOrder,
    },
}

/// Returns the order that appends after every given order, or
/// [`TaskOrder::ZERO`] when there are none.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "fractional ordering is defined over the reals"
)]
pub fn append_order(orders: impl IntoIterator<Item = TaskOrder>) -> TaskOrder {
    orders
        .into_iter()
        .max()
        .map_or(TaskOrder::ZERO, |max| {
            TaskOrder::saturating(max.value() + APPEND_STEP)
        })
}

/// Returns the order placing a task immediately before `target`.
///
/// `predecessor` is the largest order below `target` among the other tasks
/// of the partition. When it lies within half a step of `target` the
/// midpoint is used so the new order stays strictly between the two.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "fractional ordering is defined over the reals"
)]
pub fn order_before(target: TaskOrder, predecessor: Option<TaskOrder>) -> TaskOrder {
    let offset = target.value() - INSERT_OFFSET;
    match predecessor {
        Some(previous) if previous.value() >= offset => {
            TaskOrder::saturating(previous.value() + (target.value() - previous.value()) / 2.0)
        }
        _ => TaskOrder::saturating(offset),
    }
}

/// Decides the effect of dropping the dragged task.
///
/// `column` lists the tasks currently rendered in the column receiving the
/// drop (the target task's column, or the target column itself). A reorder
/// requires the dragged task to be listed there; a move to another column
/// does not.
#[must_use]
pub fn plan_drop(
    payload: &DragPayload,
    destination_project: ProjectId,
    target: &DropTarget,
    column: &[TaskPlacement],
) -> DropDecision {
    let Some(task_id) = payload.task_id else {
        return DropDecision::Ignore(IgnoredDrop::MissingTaskId);
    };
    if payload.source_project != destination_project {
        return DropDecision::Ignore(IgnoredDrop::ForeignProject);
    }

    match target {
        DropTarget::Task(placement) => plan_drop_on_task(task_id, payload, placement, column),
        DropTarget::Column(status) => plan_drop_on_column(task_id, payload, status, column),
    }
}

fn plan_drop_on_task(
    task_id: TaskId,
    payload: &DragPayload,
    target: &TaskPlacement,
    column: &[TaskPlacement],
) -> DropDecision {
    if task_id == target.task_id {
        return DropDecision::Ignore(IgnoredDrop::DroppedOnSelf);
    }
    if payload.current_status != target.status {
        return DropDecision::Ignore(IgnoredDrop::CrossColumnTask);
    }

    let predecessor = column
        .iter()
        .filter(|placement| placement.task_id != task_id && placement.task_id != target.task_id)
        .map(|placement| placement.order)
        .filter(|order| *order < target.order)
        .max();
    let order = order_before(target.order, predecessor);

    let Some(current) = column
        .iter()
        .find(|placement| placement.task_id == task_id)
    else {
        return DropDecision::Ignore(IgnoredDrop::NotInColumn);
    };
    if current.order == order {
        return DropDecision::Ignore(IgnoredDrop::Unchanged);
    }
    DropDecision::Reorder { task_id, order }
}

fn plan_drop_on_column(
    task_id: TaskId,
    payload: &DragPayload,
    status: &TaskStatus,
    column: &[TaskPlacement],
) -> DropDecision {
    let order = append_order(
        column
            .iter()
            .filter(|placement| placement.task_id != task_id)
            .map(|placement| placement.order),
    );

    if payload.current_status != *status {
        return DropDecision::Move {
            task_id,
            status: status.clone(),
            order,
        };
    }

    let Some(current) = column
        .iter()
        .find(|placement| placement.task_id == task_id && placement.status == *status)
    else {
        return DropDecision::Ignore(IgnoredDrop::NotInColumn);
    };
    if current.order == order {
        return DropDecision::Ignore(IgnoredDrop::Unchanged);
    }
    DropDecision::Reorder { task_id, order }
}

/// Returns `true` when two adjacent orders are closer than `epsilon`.
///
/// The input need not be sorted.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "gap measurement between fractional orders"
)]
pub fn needs_renumbering(orders: &[TaskOrder], epsilon: f64) -> bool {
    let mut sorted = orders.to_vec();
    sorted.sort_unstable();
    sorted
        .windows(2)
        .filter_map(|pair| match pair {
            [lower, upper] => Some(upper.value() - lower.value()),
            _ => None,
        })
        .any(|gap| gap < epsilon)
}

/// Computes evenly spaced orders `0, s, 2s, ...` for a partition already
/// sorted in display order.
///
/// Only tasks whose order actually changes are returned.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "evenly spaced orders are multiples of the spacing"
)]
pub fn renumber(partition: &[TaskPlacement], spacing: f64) -> Vec<(TaskId, TaskOrder)> {
    let step = if spacing.is_finite() && spacing > 0.0 {
        spacing
    } else {
        DEFAULT_RENUMBER_SPACING
    };
    (0_u32..)
        .zip(partition)
        .filter_map(|(index, placement)| {
            let order = TaskOrder::saturating(f64::from(index) * step);
            (order != placement.order).then_some((placement.task_id, order))
        })
        .collect()
}
