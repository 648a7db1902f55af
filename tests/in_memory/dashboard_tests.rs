//! Statistics and dashboard tests against the in-memory repository.

use super::helpers::{Board, board};
use chrono::TimeDelta;
use mockable::Clock;
use rstest::rstest;
use rust_decimal::Decimal;
use taskboard::task::{
    domain::TaskId,
    presentation::DashboardView,
    services::{CreateTaskRequest, DEFAULT_DASHBOARD_RECENT_TASKS},
};

async fn seed(board: &Board, count: usize) -> Result<Vec<TaskId>, eyre::Report> {
    let mut ids = Vec::with_capacity(count);
    for index in 0..count {
        let status = if index.is_multiple_of(2) {
            "pending"
        } else {
            "completed"
        };
        let task = board
            .tasks
            .create(CreateTaskRequest::new(format!("Task {index}"), status))
            .await?;
        ids.push(task.id());
        board.clock.advance(TimeDelta::seconds(1));
    }
    Ok(ids)
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn empty_board_has_zero_statistics(board: Board) -> Result<(), eyre::Report> {
    let stats = board.stats.stats().await?;

    assert_eq!(stats.total_tasks, 0);
    assert_eq!(stats.completed_tasks, 0);
    assert_eq!(stats.pending_tasks, 0);
    assert_eq!(stats.completion_percentage, Decimal::ZERO);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn one_of_three_completed_is_a_third(board: Board) -> Result<(), eyre::Report> {
    for (title, status) in [("A", "completed"), ("B", "pending"), ("C", "pending")] {
        board.tasks.create(CreateTaskRequest::new(title, status)).await?;
    }

    let stats = board.stats.stats().await?;

    assert_eq!(stats.total_tasks, 3);
    assert_eq!(stats.completion_percentage, Decimal::new(3333, 2));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn dashboard_lists_the_most_recent_tasks(board: Board) -> Result<(), eyre::Report> {
    let ids = seed(&board, 12).await?;

    let dashboard = board.stats.dashboard(DEFAULT_DASHBOARD_RECENT_TASKS).await?;

    let expected: Vec<TaskId> = ids.iter().rev().take(10).copied().collect();
    let listed: Vec<TaskId> = dashboard.recent_tasks.iter().map(|task| task.id()).collect();
    assert_eq!(listed, expected);
    assert_eq!(dashboard.stats.total_tasks, 12);
    assert_eq!(dashboard.stats.completed_tasks, 6);
    assert_eq!(dashboard.stats.completion_percentage, Decimal::new(50, 0));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn dashboard_view_serialises_for_rendering(board: Board) -> Result<(), eyre::Report> {
    seed(&board, 3).await?;
    let dashboard = board.stats.dashboard(2).await?;

    let payload = serde_json::to_value(DashboardView::render(&dashboard, board.clock.utc()))?;

    assert_eq!(payload["tasks"].as_array().map(Vec::len), Some(2));
    assert_eq!(payload["tasks"][0]["title"], "Task 2");
    assert_eq!(payload["stats"]["total_tasks"], 3);
    Ok(())
}
