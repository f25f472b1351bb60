//! End-to-end board flows over the in-memory adapters.

use rstest::rstest;
use taskzen::{
    project::domain::ProjectId,
    task::{
        domain::{DragPayload, DropTarget, IgnoredDrop, TaskPlacement, TaskStatus},
        ports::TaskRepositoryError,
        services::{
            CreateTaskRequest, DropNotice, DropOutcome, DropRequest, TaskBoardError,
            UpdateTaskRequest,
        },
    },
};

use super::helpers::{Workspace, titles, workspace};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn member_builds_and_rearranges_a_board(workspace: Workspace) {
    let (user, project) = workspace
        .signed_in_with_project("ada@example.com", "Launch")
        .await
        .expect("set-up should succeed");
    let listed = workspace
        .projects
        .list_projects(user.id())
        .await
        .expect("list should succeed");
    assert_eq!(listed, vec![project.clone()]);

    let tasks = workspace
        .seed_tasks(&project, &["Write brief", "Draft copy", "Book venue"])
        .await
        .expect("seeding should succeed");
    let [brief, copy, venue] = tasks.as_slice() else {
        panic!("expected three seeded tasks");
    };

    let reorder = workspace
        .board
        .apply_drop(DropRequest::new(
            project.id(),
            DragPayload::for_task(venue),
            DropTarget::Task(TaskPlacement::from(brief)),
        ))
        .await
        .expect("reorder should succeed");
    assert!(matches!(
        reorder,
        DropOutcome::Applied {
            notice: DropNotice::Reordered,
            ..
        }
    ));

    let moved = workspace
        .board
        .apply_drop(DropRequest::new(
            project.id(),
            DragPayload::for_task(copy),
            DropTarget::Column(TaskStatus::Done),
        ))
        .await
        .expect("move should succeed");
    let DropOutcome::Applied { task, notice } = moved else {
        panic!("expected the move to apply");
    };
    assert_eq!(task.status(), &TaskStatus::Done);
    assert_eq!(notice.to_string(), "Task moved to \"Done\".");

    let board = workspace
        .board
        .board(project.id())
        .await
        .expect("board should load");
    let todo = board.column(&TaskStatus::Todo).expect("todo column");
    let done = board.column(&TaskStatus::Done).expect("done column");
    assert_eq!(titles(todo.tasks()), vec!["Book venue", "Write brief"]);
    assert_eq!(titles(done.tasks()), vec!["Draft copy"]);
    assert_eq!(board.task_count(), 3);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn drop_from_another_project_changes_nothing(workspace: Workspace) {
    let (_, project) = workspace
        .signed_in_with_project("grace@example.com", "Compiler")
        .await
        .expect("set-up should succeed");
    let tasks = workspace
        .seed_tasks(&project, &["Parse input"])
        .await
        .expect("seeding should succeed");
    let task = tasks.first().expect("one task");
    let before = workspace
        .board
        .list_tasks(project.id())
        .await
        .expect("list should succeed");

    let outcome = workspace
        .board
        .apply_drop(DropRequest::new(
            ProjectId::new(),
            DragPayload::for_task(task),
            DropTarget::Column(TaskStatus::Done),
        ))
        .await
        .expect("drop should be handled");

    assert_eq!(outcome, DropOutcome::Ignored(IgnoredDrop::ForeignProject));
    let after = workspace
        .board
        .list_tasks(project.id())
        .await
        .expect("list should succeed");
    assert_eq!(before, after);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn status_edit_appends_to_destination_column(workspace: Workspace) {
    let (_, project) = workspace
        .signed_in_with_project("linus@example.com", "Kernel")
        .await
        .expect("set-up should succeed");
    workspace
        .board
        .create_task(
            project.id(),
            CreateTaskRequest::new("Review patch").with_status("in-progress"),
        )
        .await
        .expect("create should succeed");
    let tasks = workspace
        .seed_tasks(&project, &["Merge window"])
        .await
        .expect("seeding should succeed");
    let task = tasks.first().expect("one task");

    let updated = workspace
        .board
        .update_task(
            project.id(),
            UpdateTaskRequest::new(task.id()).with_status("in-progress"),
        )
        .await
        .expect("update should succeed");

    let board = workspace
        .board
        .board(project.id())
        .await
        .expect("board should load");
    let column = board
        .column(&TaskStatus::InProgress)
        .expect("in-progress column");
    assert_eq!(titles(column.tasks()), vec!["Review patch", "Merge window"]);
    assert!(updated.revision() > task.revision());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn stale_edit_is_rejected_after_concurrent_change(workspace: Workspace) {
    let (_, project) = workspace
        .signed_in_with_project("barbara@example.com", "Liskov")
        .await
        .expect("set-up should succeed");
    let tasks = workspace
        .seed_tasks(&project, &["Substitute types"])
        .await
        .expect("seeding should succeed");
    let task = tasks.first().expect("one task");

    workspace
        .board
        .update_task(
            project.id(),
            UpdateTaskRequest::new(task.id()).with_priority("high"),
        )
        .await
        .expect("first edit should succeed");
    let stale = workspace
        .board
        .update_task(
            project.id(),
            UpdateTaskRequest::new(task.id())
                .with_title("Substitute subtypes")
                .expecting(task.revision()),
        )
        .await;

    assert!(matches!(
        stale,
        Err(TaskBoardError::Repository(
            TaskRepositoryError::RevisionConflict { .. }
        ))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleting_a_task_keeps_sibling_orders(workspace: Workspace) {
    let (_, project) = workspace
        .signed_in_with_project("edsger@example.com", "Structured")
        .await
        .expect("set-up should succeed");
    let tasks = workspace
        .seed_tasks(&project, &["First", "Second", "Third"])
        .await
        .expect("seeding should succeed");
    let [first, second, third] = tasks.as_slice() else {
        panic!("expected three seeded tasks");
    };

    workspace
        .board
        .delete_task(project.id(), second.id())
        .await
        .expect("delete should succeed");

    let remaining = workspace
        .board
        .list_tasks(project.id())
        .await
        .expect("list should succeed");
    let orders: Vec<_> = remaining.iter().map(|task| task.order()).collect();
    assert_eq!(orders, vec![first.order(), third.order()]);
}
