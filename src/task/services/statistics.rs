//! Dashboard statistics service.

use super::ActionLogger;
use crate::task::{
    domain::{Task, TaskFilter, TaskStatistics},
    ports::{TaskRepository, TaskRepositoryResult},
};
use std::sync::Arc;

/// Number of recent tasks shown on the dashboard by default.
pub const DEFAULT_DASHBOARD_RECENT_TASKS: usize = 10;

/// Recent tasks and statistics making up the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDashboard {
    /// Most recently created tasks, newest first.
    pub recent_tasks: Vec<Task>,
    /// Statistics over the whole collection.
    pub stats: TaskStatistics,
}

/// Computes statistics over the stored task collection.
///
/// Every call recomputes from the repository.
#[derive(Clone)]
pub struct TaskStatisticsService<R>
where
    R: TaskRepository,
{
    repository: Arc<R>,
    logger: ActionLogger,
}

impl<R> TaskStatisticsService<R>
where
    R: TaskRepository,
{
    /// Creates a new statistics service.
    #[must_use]
    pub const fn new(repository: Arc<R>, logger: ActionLogger) -> Self {
        Self { repository, logger }
    }

    /// Counts completed and pending tasks in one repository read and derives
    /// the total and the completion percentage.
    ///
    /// # Errors
    ///
    /// Returns the repository error when counting fails.
    pub async fn stats(&self) -> TaskRepositoryResult<TaskStatistics> {
        self.logger.run("get_task_stats", self.count_all()).await
    }

    /// Returns the `recent` newest tasks together with the statistics.
    ///
    /// # Errors
    ///
    /// Returns the repository error when listing or counting fails.
    pub async fn dashboard(&self, recent: usize) -> TaskRepositoryResult<TaskDashboard> {
        self.logger
            .run("load_dashboard", self.load_dashboard(recent))
            .await
    }

    async fn count_all(&self) -> TaskRepositoryResult<TaskStatistics> {
        self.repository.count_by_status().await
    }

    async fn load_dashboard(&self, recent: usize) -> TaskRepositoryResult<TaskDashboard> {
        let mut recent_tasks = self.repository.list(TaskFilter::All).await?;
        recent_tasks.truncate(recent);
        let stats = self.count_all().await?;
        Ok(TaskDashboard {
            recent_tasks,
            stats,
        })
    }
}
