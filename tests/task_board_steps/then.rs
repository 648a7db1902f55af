//! Then steps for task board BDD scenarios.

use std::str::FromStr;

use super::world::TaskBoardWorld;
use mockable::Clock;
use rstest_bdd_macros::then;
use rust_decimal::Decimal;
use taskboard::task::{
    domain::TaskDomainError,
    services::TaskLifecycleError,
};

#[then(r#"the task priority is "{level}""#)]
fn task_priority_is(world: &TaskBoardWorld, level: String) -> Result<(), eyre::Report> {
    let actual = world.current_task()?.priority_level_at(world.clock.utc());
    eyre::ensure!(
        actual.as_str() == level,
        "expected priority {level}, found {actual}"
    );
    Ok(())
}

#[then("the task is flagged overdue")]
fn task_is_overdue(world: &TaskBoardWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(
        world.current_task()?.is_overdue_at(world.clock.utc()),
        "expected the task to be overdue"
    );
    Ok(())
}

#[then("the task is not flagged overdue")]
fn task_is_not_overdue(world: &TaskBoardWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(
        !world.current_task()?.is_overdue_at(world.clock.utc()),
        "expected the task not to be overdue"
    );
    Ok(())
}

#[then("the board counts {total:u64} tasks with {completed:u64} completed")]
fn board_counts(world: &TaskBoardWorld, total: u64, completed: u64) -> Result<(), eyre::Report> {
    let stats = world
        .last_stats
        .ok_or_else(|| eyre::eyre!("missing statistics in scenario world"))?;
    eyre::ensure!(stats.total_tasks == total, "total was {}", stats.total_tasks);
    eyre::ensure!(
        stats.completed_tasks == completed,
        "completed was {}",
        stats.completed_tasks
    );
    eyre::ensure!(
        stats.pending_tasks == total.saturating_sub(completed),
        "pending was {}",
        stats.pending_tasks
    );
    Ok(())
}

#[then(r#"the completion percentage is "{percentage}""#)]
fn completion_percentage_is(world: &TaskBoardWorld, percentage: String) -> Result<(), eyre::Report> {
    let expected = Decimal::from_str(&percentage)?;
    let stats = world
        .last_stats
        .ok_or_else(|| eyre::eyre!("missing statistics in scenario world"))?;
    eyre::ensure!(
        stats.completion_percentage == expected,
        "expected {expected}%, found {}%",
        stats.completion_percentage
    );
    Ok(())
}

#[then("the operation fails with not found")]
fn operation_fails_with_not_found(world: &TaskBoardWorld) -> Result<(), eyre::Report> {
    let failure = world
        .last_failure
        .as_ref()
        .ok_or_else(|| eyre::eyre!("expected a failure, none recorded"))?;
    eyre::ensure!(failure.is_not_found(), "expected NotFound, got {failure:?}");
    Ok(())
}

#[then("the creation fails with a past due date error")]
fn creation_fails_with_past_due_date(world: &TaskBoardWorld) -> Result<(), eyre::Report> {
    let failure = world
        .last_failure
        .as_ref()
        .ok_or_else(|| eyre::eyre!("expected a failure, none recorded"))?;
    eyre::ensure!(
        matches!(
            failure,
            TaskLifecycleError::Domain(TaskDomainError::DueDateInPast { .. })
        ),
        "expected DueDateInPast, got {failure:?}"
    );
    eyre::ensure!(world.last_task.is_none(), "no task should have been created");
    Ok(())
}
