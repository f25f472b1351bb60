//! Then steps for drag-and-drop BDD scenarios.

use super::world::{DragAndDropWorld, run_async};
use rstest_bdd_macros::then;
use taskzen::task::{
    domain::TaskStatus,
    services::{DropNotice, DropOutcome},
};

fn applied_notice(world: &DragAndDropWorld) -> Result<&DropNotice, eyre::Report> {
    match world.last_drop.as_ref() {
        Some(Ok(DropOutcome::Applied { notice, .. })) => Ok(notice),
        other => Err(eyre::eyre!("expected an applied drop, got {other:?}")),
    }
}

#[then(r#"the "{status}" column reads "{titles}""#)]
fn column_reads(
    world: &DragAndDropWorld,
    status: String,
    titles: String,
) -> Result<(), eyre::Report> {
    let project_id = world.project()?;
    let column_status = TaskStatus::parse(&status).map_err(|err| eyre::eyre!("{err}"))?;
    let board = run_async(world.board.board(project_id))?;
    let actual: Vec<&str> = board
        .column(&column_status)
        .map(|column| {
            column
                .tasks()
                .iter()
                .map(|task| task.title().as_str())
                .collect()
        })
        .unwrap_or_default();
    let expected: Vec<&str> = titles.split(", ").collect();

    eyre::ensure!(
        actual == expected,
        "expected {status} column {expected:?}, found {actual:?}"
    );
    Ok(())
}

#[then(r#"the drop reports "{message}""#)]
fn drop_reports(world: &DragAndDropWorld, message: String) -> Result<(), eyre::Report> {
    let notice = applied_notice(world)?;
    eyre::ensure!(
        notice.to_string() == message,
        "expected notice {message:?}, found {notice}"
    );
    Ok(())
}

#[then(r#"the drop reports a move to "{column}""#)]
fn drop_reports_move(world: &DragAndDropWorld, column: String) -> Result<(), eyre::Report> {
    let notice = applied_notice(world)?;
    eyre::ensure!(
        *notice == DropNotice::MovedToColumn { column },
        "expected a move notice, found {notice:?}"
    );
    Ok(())
}

#[then(r#"the drop reports a move to the end of "{column}""#)]
fn drop_reports_move_to_end(world: &DragAndDropWorld, column: String) -> Result<(), eyre::Report> {
    let notice = applied_notice(world)?;
    eyre::ensure!(
        *notice == DropNotice::MovedToEnd { column },
        "expected a move-to-end notice, found {notice:?}"
    );
    Ok(())
}

#[then("the drop is ignored")]
fn drop_is_ignored(world: &DragAndDropWorld) -> Result<(), eyre::Report> {
    match world.last_drop.as_ref() {
        Some(Ok(DropOutcome::Ignored(_))) => Ok(()),
        other => Err(eyre::eyre!("expected an ignored drop, got {other:?}")),
    }
}
