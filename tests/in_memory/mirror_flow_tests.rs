//! Live board snapshots following service writes.

use std::sync::Arc;
use std::time::Duration;

use rstest::rstest;
use taskzen::{
    mirror::{Mirror, MirrorSettings, MirrorSlot, feeds::TaskFeed},
    project::services::CreateProjectRequest,
    task::{
        adapters::memory::InMemoryTaskRepository,
        domain::{DragPayload, DropTarget, Task, TaskStatus},
        services::{CreateTaskRequest, DropRequest},
    },
};
use tokio::time::timeout;

use super::helpers::{Workspace, titles, workspace};

const WAIT: Duration = Duration::from_secs(5);

fn mirror() -> Mirror {
    Mirror::new(MirrorSettings { debounce_ms: 0 })
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn board_snapshot_tracks_drops(workspace: Workspace) {
    let (_, project) = workspace
        .signed_in_with_project("ada@example.com", "Engine")
        .await
        .expect("set-up should succeed");
    let tasks = workspace
        .seed_tasks(&project, &["Mill", "Store"])
        .await
        .expect("seeding should succeed");
    let store = tasks.get(1).expect("second task");
    let mut subscription = mirror().watch(TaskFeed::new(
        Arc::clone(&workspace.task_repository),
        project.id(),
    ));
    timeout(WAIT, subscription.wait_for(|snapshot| snapshot.items().len() == 2))
        .await
        .expect("initial load in time")
        .expect("producer running");

    workspace
        .board
        .apply_drop(DropRequest::new(
            project.id(),
            DragPayload::for_task(store),
            DropTarget::Column(TaskStatus::InProgress),
        ))
        .await
        .expect("drop should succeed");

    let snapshot = timeout(
        WAIT,
        subscription.wait_for(|snapshot| {
            snapshot
                .items()
                .iter()
                .any(|task| task.status() == &TaskStatus::InProgress)
        }),
    )
    .await
    .expect("update in time")
    .expect("producer running");
    let in_progress: Vec<Task> = snapshot
        .items()
        .iter()
        .filter(|task| task.status() == &TaskStatus::InProgress)
        .cloned()
        .collect();
    assert_eq!(titles(&in_progress), vec!["Store"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn switching_projects_retargets_the_slot(workspace: Workspace) {
    let (user, first) = workspace
        .signed_in_with_project("grace@example.com", "Cobol")
        .await
        .expect("set-up should succeed");
    let second = workspace
        .projects
        .create_project(CreateProjectRequest::new("Mark I"), user.id())
        .await
        .expect("second project");
    workspace
        .seed_tasks(&first, &["Compile ledger"])
        .await
        .expect("seeding should succeed");
    let mut slot = MirrorSlot::new(mirror());
    assert!(slot.snapshot().is_live());
    assert!(slot.snapshot().items().is_empty());

    slot.retarget(Some(TaskFeed::new(
        Arc::clone(&workspace.task_repository),
        first.id(),
    )));
    let subscription = slot.subscription_mut().expect("watching first project");
    timeout(WAIT, subscription.wait_for(|snapshot| snapshot.items().len() == 1))
        .await
        .expect("first project in time")
        .expect("producer running");

    slot.retarget(Some(TaskFeed::new(
        Arc::clone(&workspace.task_repository),
        second.id(),
    )));
    workspace
        .board
        .create_task(second.id(), CreateTaskRequest::new("Find the moth"))
        .await
        .expect("create should succeed");
    let subscription = slot.subscription_mut().expect("watching second project");
    let snapshot = timeout(
        WAIT,
        subscription.wait_for(|snapshot| snapshot.is_live() && snapshot.items().len() == 1),
    )
    .await
    .expect("second project in time")
    .expect("producer running");
    assert_eq!(titles(snapshot.items()), vec!["Find the moth"]);

    slot.retarget(None::<TaskFeed<InMemoryTaskRepository>>);
    assert!(!slot.is_watching());
}
