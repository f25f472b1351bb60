//! Given steps for drag-and-drop BDD scenarios.

use super::world::{DragAndDropWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskzen::{project::domain::ProjectId, task::services::CreateTaskRequest};

#[given("a board project")]
fn board_project(world: &mut DragAndDropWorld) {
    world.project_id = Some(ProjectId::new());
}

#[given(r#"a task "{title}" in "{status}""#)]
fn task_in_status(
    world: &mut DragAndDropWorld,
    title: String,
    status: String,
) -> Result<(), eyre::Report> {
    let project_id = world.project()?;
    run_async(
        world
            .board
            .create_task(project_id, CreateTaskRequest::new(title).with_status(status)),
    )
    .wrap_err("create task for drag-and-drop scenario")?;
    Ok(())
}
