//! Shared fixtures for in-memory integration tests.

use std::sync::Arc;

use crate::test_helpers::AdjustableClock;
use rstest::fixture;
use taskboard::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{NewTask, Task, TaskStatus, TaskTitle},
    services::{ActionLogger, TaskLifecycleService, TaskStatisticsService},
};

/// Lifecycle service type used by integration tests.
pub type TestLifecycle = TaskLifecycleService<InMemoryTaskRepository, AdjustableClock>;

/// Services sharing one repository and one clock.
pub struct Board {
    /// Shared repository.
    pub repository: Arc<InMemoryTaskRepository>,
    /// Shared clock.
    pub clock: Arc<AdjustableClock>,
    /// Lifecycle service.
    pub tasks: TestLifecycle,
    /// Statistics service.
    pub stats: TaskStatisticsService<InMemoryTaskRepository>,
}

/// Provides an empty board at the reference instant.
#[fixture]
pub fn board() -> Board {
    let repository = Arc::new(InMemoryTaskRepository::new());
    let clock = Arc::new(AdjustableClock::reference());
    let logger = ActionLogger::new(true);
    Board {
        tasks: TaskLifecycleService::new(Arc::clone(&repository), Arc::clone(&clock), logger),
        stats: TaskStatisticsService::new(Arc::clone(&repository), logger),
        repository,
        clock,
    }
}

/// Provides a fresh in-memory repository.
#[fixture]
pub fn repo() -> InMemoryTaskRepository {
    InMemoryTaskRepository::new()
}

/// Builds a task created at the clock's current instant.
///
/// # Errors
///
/// Returns an error when `title` is not a valid task title.
pub fn task_titled(
    title: &str,
    status: TaskStatus,
    clock: &AdjustableClock,
) -> Result<Task, eyre::Report> {
    let fields = NewTask {
        title: TaskTitle::new(title)?,
        description: None,
        status,
        due_date: None,
    };
    Ok(Task::new(fields, clock))
}
