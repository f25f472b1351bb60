//! Grouping of a project's tasks into board columns.

use super::{DEFAULT_STATUSES, Task, TaskStatus};

/// Sorts tasks into display order: ascending order, then creation time, then
/// identifier.
pub fn sort_partition(tasks: &mut [Task]) {
    tasks.sort_by(|left, right| {
        left.order()
            .cmp(&right.order())
            .then_with(|| left.created_at().cmp(&right.created_at()))
            .then_with(|| left.id().cmp(&right.id()))
    });
}

/// One status column of the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardColumn {
    status: TaskStatus,
    tasks: Vec<Task>,
}

impl BoardColumn {
    /// Returns the column's status.
    #[must_use]
    pub const fn status(&self) -> &TaskStatus {
        &self.status
    }

    /// Returns the heading shown above the column.
    #[must_use]
    pub fn title(&self) -> String {
        self.status.title()
    }

    /// Returns the tasks in display order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns `true` when the column holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// All columns of a project board.
///
/// The default columns come first and are always present; custom statuses
/// follow in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardColumns {
    columns: Vec<BoardColumn>,
}

impl BoardColumns {
    /// Groups tasks into columns, each sorted in display order.
    #[must_use]
    pub fn from_tasks(tasks: impl IntoIterator<Item = Task>) -> Self {
        let mut columns: Vec<BoardColumn> = DEFAULT_STATUSES
            .into_iter()
            .map(|status| BoardColumn {
                status,
                tasks: Vec::new(),
            })
            .collect();

        for task in tasks {
            if let Some(column) = columns
                .iter_mut()
                .find(|column| column.status == *task.status())
            {
                column.tasks.push(task);
            } else {
                columns.push(BoardColumn {
                    status: task.status().clone(),
                    tasks: vec![task],
                });
            }
        }

        for column in &mut columns {
            sort_partition(&mut column.tasks);
        }
        Self { columns }
    }

    /// Returns the columns in display order.
    #[must_use]
    pub fn columns(&self) -> &[BoardColumn] {
        &self.columns
    }

    /// Returns the column for `status`, if the board shows one.
    #[must_use]
    pub fn column(&self, status: &TaskStatus) -> Option<&BoardColumn> {
        self.columns.iter().find(|column| column.status == *status)
    }

    /// Returns the number of tasks across all columns.
    #[must_use]
    pub fn task_count(&self) -> usize {
        self.columns.iter().map(|column| column.tasks.len()).sum()
    }
}
