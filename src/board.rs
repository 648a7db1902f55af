//! Service wiring driven by [`AppConfig`].
//!
//! A [`TaskBoard`] bundles the lifecycle and statistics services over one
//! repository and clock, with logging and the dashboard size taken from the
//! configuration.

use crate::config::{AppConfig, ConfigError};
use crate::task::{
    adapters::{memory::InMemoryTaskRepository, postgres::PostgresTaskRepository},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
    services::{TaskDashboard, TaskLifecycleService, TaskStatisticsService},
};
use mockable::{Clock, DefaultClock};
use std::sync::Arc;
use thiserror::Error;

/// Errors raised while assembling a board.
#[derive(Debug, Error)]
pub enum BoardError {
    /// Configuration is incomplete.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The repository could not be opened.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Task services sharing one repository, clock and configuration.
pub struct TaskBoard<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    tasks: TaskLifecycleService<R, C>,
    stats: TaskStatisticsService<R>,
    dashboard_limit: usize,
}

/// Board backed by `PostgreSQL` and the system clock.
pub type PostgresTaskBoard = TaskBoard<PostgresTaskRepository, DefaultClock>;

/// Board backed by process memory and the system clock.
pub type InMemoryTaskBoard = TaskBoard<InMemoryTaskRepository, DefaultClock>;

impl<R, C> TaskBoard<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Builds both services over `repository` and `clock`.
    #[must_use]
    pub fn new(repository: Arc<R>, clock: Arc<C>, config: &AppConfig) -> Self {
        let logger = config.action_logger();
        Self {
            tasks: TaskLifecycleService::new(Arc::clone(&repository), clock, logger),
            stats: TaskStatisticsService::new(repository, logger),
            dashboard_limit: config.dashboard_recent_limit,
        }
    }

    /// Task lifecycle operations.
    #[must_use]
    pub const fn tasks(&self) -> &TaskLifecycleService<R, C> {
        &self.tasks
    }

    /// Statistics operations.
    #[must_use]
    pub const fn stats(&self) -> &TaskStatisticsService<R> {
        &self.stats
    }

    /// Number of recent tasks shown on the dashboard.
    #[must_use]
    pub const fn dashboard_limit(&self) -> usize {
        self.dashboard_limit
    }

    /// Loads the dashboard with the configured number of recent tasks.
    ///
    /// # Errors
    ///
    /// Returns the repository error when listing or counting fails.
    pub async fn dashboard(&self) -> TaskRepositoryResult<TaskDashboard> {
        self.stats.dashboard(self.dashboard_limit).await
    }
}

impl InMemoryTaskBoard {
    /// Builds a board over an empty in-memory repository.
    #[must_use]
    pub fn in_memory(config: &AppConfig) -> Self {
        Self::new(
            Arc::new(InMemoryTaskRepository::new()),
            Arc::new(DefaultClock),
            config,
        )
    }
}

impl PostgresTaskBoard {
    /// Connects to the database named by `DATABASE_URL`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Config`] when no database URL is configured, or
    /// [`BoardError::Repository`] when the connection pool cannot be built.
    pub fn connect(config: &AppConfig) -> Result<Self, BoardError> {
        let repository = PostgresTaskRepository::connect(config.require_database_url()?)?;
        Ok(Self::new(
            Arc::new(repository),
            Arc::new(DefaultClock),
            config,
        ))
    }
}
