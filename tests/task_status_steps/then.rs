//! Then steps for task status BDD scenarios.

use super::world::{TaskStatusWorld, run_async};
use eyre::WrapErr;
use leadbook::activity::{
    domain::{ActivityContent, ActivityDomainError},
    services::ActivityLogError,
};
use rstest_bdd_macros::then;

#[then(r#"the task status is "{status}""#)]
fn task_status_is(world: &TaskStatusWorld, status: String) -> Result<(), eyre::Report> {
    let board = world
        .board
        .as_ref()
        .ok_or_else(|| eyre::eyre!("task board was not read"))?;
    let entry = board
        .first()
        .ok_or_else(|| eyre::eyre!("task board is empty"))?;

    if entry.status.as_str() != status {
        return Err(eyre::eyre!(
            "expected status {status}, found {}",
            entry.status.as_str()
        ));
    }
    Ok(())
}

#[then("the task board is empty")]
fn task_board_is_empty(world: &TaskStatusWorld) -> Result<(), eyre::Report> {
    let board = world
        .board
        .as_ref()
        .ok_or_else(|| eyre::eyre!("task board was not read"))?;
    if !board.is_empty() {
        return Err(eyre::eyre!("expected empty board, found {} tasks", board.len()));
    }
    Ok(())
}

#[then(r#"the activity history shows "{text}""#)]
fn activity_history_shows(world: &TaskStatusWorld, text: String) -> Result<(), eyre::Report> {
    let lead_id = world.lead()?.id();
    let history = run_async(world.crm.log.activity_history(lead_id))
        .wrap_err("read activity history")?;
    let expected = ActivityContent::note(text);

    if !history.iter().any(|activity| activity.content() == &expected) {
        return Err(eyre::eyre!("history does not contain {expected:?}"));
    }
    Ok(())
}

#[then("the task is rejected for a missing due time")]
fn task_rejected_for_missing_due(world: &TaskStatusWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_append
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing append result"))?;

    if !matches!(
        result,
        Err(ActivityLogError::Domain(ActivityDomainError::MissingTaskDue))
    ) {
        return Err(eyre::eyre!("expected MissingTaskDue error, got {result:?}"));
    }
    Ok(())
}
