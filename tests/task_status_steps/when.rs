//! When steps for task status BDD scenarios.

use super::world::{TaskStatusWorld, run_async};
use crate::test_helpers::sales_agent;
use chrono::Duration;
use eyre::WrapErr;
use leadbook::activity::{domain::ActivityKind, services::AppendActivityRequest};
use rstest_bdd_macros::when;
use serde_json::json;

#[when("the clock moves forward {hours:i64} hours")]
fn clock_moves_forward(world: &mut TaskStatusWorld, hours: i64) {
    world.crm.clock.advance(Duration::hours(hours));
}

#[when("the task board is read")]
fn task_board_is_read(world: &mut TaskStatusWorld) -> Result<(), eyre::Report> {
    let lead_id = world.lead()?.id();
    let board = run_async(world.crm.log.task_board(lead_id, false))
        .wrap_err("read task board")?;
    world.board = Some(board);
    Ok(())
}

#[when("the task is marked done")]
fn task_is_marked_done(world: &mut TaskStatusWorld) -> Result<(), eyre::Report> {
    let task_id = world.task()?.id();
    let done = run_async(world.crm.log.complete_task(&sales_agent(), task_id))
        .wrap_err("complete task")?;
    world.task = Some(done);
    Ok(())
}

#[when("a task without a due time is logged")]
fn task_without_due_time(world: &mut TaskStatusWorld) -> Result<(), eyre::Report> {
    let lead_id = world.lead()?.id();
    let result = run_async(world.crm.log.append(
        &sales_agent(),
        AppendActivityRequest::from_payload(
            lead_id,
            ActivityKind::Task,
            json!({ "note": "call back" }),
        ),
    ));
    world.last_append = Some(result);
    Ok(())
}
