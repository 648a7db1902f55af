//! Given steps for task board BDD scenarios.

use super::world::{TaskBoardWorld, run_async};
use chrono::TimeDelta;
use eyre::WrapErr;
use mockable::Clock;
use rstest_bdd_macros::given;
use taskboard::task::services::{CreateTaskRequest, UpdateTaskRequest};

#[given("an empty task board")]
fn empty_task_board(world: &TaskBoardWorld) -> Result<(), eyre::Report> {
    let stats = run_async(world.stats.stats()).wrap_err("read statistics of a fresh board")?;
    eyre::ensure!(stats.total_tasks == 0, "expected an empty board");
    Ok(())
}

#[given(r#"a task "{title}" with status "{status}""#)]
fn task_with_status(
    world: &mut TaskBoardWorld,
    title: String,
    status: String,
) -> Result<(), eyre::Report> {
    let created = run_async(world.tasks.create(CreateTaskRequest::new(title, status)))
        .wrap_err("create task in scenario setup")?;
    world.last_task = Some(created);
    Ok(())
}

#[given("the task is due in {days:u32} days")]
fn task_is_due_in(world: &mut TaskBoardWorld, days: u32) -> Result<(), eyre::Report> {
    let id = world.current_task()?.id();
    let due = world.clock.utc() + TimeDelta::days(i64::from(days));
    let updated = run_async(
        world
            .tasks
            .update(UpdateTaskRequest::new(id).with_due_date(due)),
    )
    .wrap_err("set due date in scenario setup")?;
    world.last_task = Some(updated);
    Ok(())
}

#[given("{days:u32} days pass")]
fn days_pass(world: &TaskBoardWorld, days: u32) {
    world.clock.advance(TimeDelta::days(i64::from(days)));
}
