//! Given steps for task status BDD scenarios.

use super::world::{TaskStatusWorld, run_async};
use crate::test_helpers::sales_agent;
use chrono::Duration;
use eyre::WrapErr;
use leadbook::{
    activity::{domain::ActivityContent, services::AppendActivityRequest},
    lead::domain::LeadInput,
};
use mockable::Clock;
use rstest_bdd_macros::given;

#[given("a lead with no activity")]
fn lead_with_no_activity(world: &mut TaskStatusWorld) -> Result<(), eyre::Report> {
    let lead = run_async(world.crm.records.create(
        &sales_agent(),
        LeadInput::new("Meera", "Nair", "9000000010", "India", "Kerala", "Thrissur"),
    ))
    .wrap_err("create lead for task status scenario")?;
    world.lead = Some(lead);
    Ok(())
}

#[given(r#"a lead with a task "{note}" due {hours:i64} hours from now"#)]
fn lead_with_task(
    world: &mut TaskStatusWorld,
    note: String,
    hours: i64,
) -> Result<(), eyre::Report> {
    lead_with_no_activity(world)?;
    let lead_id = world.lead()?.id();
    let when = world.crm.clock.utc() + Duration::hours(hours);
    let task = run_async(world.crm.log.append(
        &sales_agent(),
        AppendActivityRequest::new(lead_id, ActivityContent::task(when, note)),
    ))
    .wrap_err("log task for task status scenario")?;
    world.task = Some(task);
    Ok(())
}
