//! Shared world state for task board BDD scenarios.

use std::sync::Arc;

use crate::test_helpers::AdjustableClock;
use rstest::fixture;
use taskboard::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{Task, TaskStatistics},
    services::{ActionLogger, TaskLifecycleError, TaskLifecycleService, TaskStatisticsService},
};

/// Lifecycle service type used by the BDD world.
pub type TestTaskService = TaskLifecycleService<InMemoryTaskRepository, AdjustableClock>;

/// Scenario world for task board behaviour tests.
pub struct TaskBoardWorld {
    pub clock: Arc<AdjustableClock>,
    pub tasks: TestTaskService,
    pub stats: TaskStatisticsService<InMemoryTaskRepository>,
    pub last_task: Option<Task>,
    pub last_failure: Option<TaskLifecycleError>,
    pub last_stats: Option<TaskStatistics>,
}

impl TaskBoardWorld {
    /// Creates a world backed by an empty repository at the reference instant.
    #[must_use]
    pub fn new() -> Self {
        let repository = Arc::new(InMemoryTaskRepository::new());
        let clock = Arc::new(AdjustableClock::reference());
        let logger = ActionLogger::default();

        Self {
            tasks: TaskLifecycleService::new(Arc::clone(&repository), Arc::clone(&clock), logger),
            stats: TaskStatisticsService::new(repository, logger),
            clock,
            last_task: None,
            last_failure: None,
            last_stats: None,
        }
    }

    /// Returns the task most recently created or modified by a step.
    ///
    /// # Errors
    ///
    /// Returns an error when no step has produced a task yet.
    pub fn current_task(&self) -> Result<&Task, eyre::Report> {
        self.last_task
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing task in scenario world"))
    }
}

impl Default for TaskBoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskBoardWorld {
    TaskBoardWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
