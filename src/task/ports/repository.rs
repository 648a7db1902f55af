//! Repository port for task persistence, lookup and counting.

use crate::task::domain::{Task, TaskFilter, TaskId, TaskStatistics};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when the task ID already
    /// exists.
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Persists every field of an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist.
    async fn update(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Permanently removes a task.
    ///
    /// Returns `false` when no task with the identifier existed.
    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<bool>;

    /// Counts tasks passing the filter.
    async fn count(&self, filter: TaskFilter) -> TaskRepositoryResult<u64>;

    /// Counts completed and pending tasks from a single consistent read.
    ///
    /// The returned total is always the sum of the two status counts.
    async fn count_by_status(&self) -> TaskRepositoryResult<TaskStatistics>;

    /// Returns tasks passing the filter, newest first by creation time.
    async fn list(&self, filter: TaskFilter) -> TaskRepositoryResult<Vec<Task>>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
