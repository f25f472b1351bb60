//! When steps for drag-and-drop BDD scenarios.

use super::world::{DragAndDropWorld, run_async};
use rstest_bdd_macros::when;
use taskzen::{
    project::domain::ProjectId,
    task::{
        domain::{DragPayload, DropTarget, TaskPlacement, TaskStatus},
        services::DropRequest,
    },
};

fn drop_onto(
    world: &mut DragAndDropWorld,
    destination: ProjectId,
    payload: DragPayload,
    target: DropTarget,
) {
    let result = run_async(
        world
            .board
            .apply_drop(DropRequest::new(destination, payload, target)),
    );
    world.last_drop = Some(result);
}

#[when(r#""{dragged}" is dropped onto task "{target}""#)]
fn dropped_onto_task(
    world: &mut DragAndDropWorld,
    dragged: String,
    target: String,
) -> Result<(), eyre::Report> {
    let project_id = world.project()?;
    let payload = DragPayload::for_task(&world.task_titled(&dragged)?);
    let target_task = world.task_titled(&target)?;
    drop_onto(
        world,
        project_id,
        payload,
        DropTarget::Task(TaskPlacement::from(&target_task)),
    );
    Ok(())
}

#[when(r#""{dragged}" is dropped onto the "{status}" column"#)]
fn dropped_onto_column(
    world: &mut DragAndDropWorld,
    dragged: String,
    status: String,
) -> Result<(), eyre::Report> {
    let project_id = world.project()?;
    let payload = DragPayload::for_task(&world.task_titled(&dragged)?);
    let column_status = TaskStatus::parse(&status).map_err(|err| eyre::eyre!("{err}"))?;
    drop_onto(world, project_id, payload, DropTarget::Column(column_status));
    Ok(())
}

#[when(r#""{dragged}" is dropped onto the "{status}" column of another project"#)]
fn dropped_from_another_project(
    world: &mut DragAndDropWorld,
    dragged: String,
    status: String,
) -> Result<(), eyre::Report> {
    let payload = DragPayload::for_task(&world.task_titled(&dragged)?);
    let column_status = TaskStatus::parse(&status).map_err(|err| eyre::eyre!("{err}"))?;
    drop_onto(world, ProjectId::new(), payload, DropTarget::Column(column_status));
    Ok(())
}
