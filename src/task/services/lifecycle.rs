//! Service layer for task creation, modification and retrieval.

use super::{ActionLogger, CreateTaskRequest, UpdateTaskRequest};
use crate::task::{
    domain::{
        FieldUpdate, NewTask, ParseTaskStatusError, Task, TaskChanges, TaskDescription,
        TaskDomainError, TaskFilter, TaskId, TaskStatus, TaskTitle,
    },
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// The supplied status is not a known task status.
    #[error(transparent)]
    InvalidStatus(#[from] ParseTaskStatusError),
    /// The target task does not exist.
    #[error("task not found: {0}")]
    NotFound(TaskId),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

impl TaskLifecycleError {
    /// Returns `true` when the error reports a missing task, whether detected
    /// by the service or by the repository.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::NotFound(_) | Self::Repository(TaskRepositoryError::NotFound(_))
        )
    }
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
#[derive(Clone)]
pub struct TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    logger: ActionLogger,
}

impl<R, C> TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>, logger: ActionLogger) -> Self {
        Self {
            repository,
            clock,
            logger,
        }
    }

    /// Creates and stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Domain`] or
    /// [`TaskLifecycleError::InvalidStatus`] when input validation fails, or
    /// [`TaskLifecycleError::Repository`] when the repository rejects
    /// persistence.
    pub async fn create(&self, request: CreateTaskRequest) -> TaskLifecycleResult<Task> {
        self.logger
            .run("create_task", self.store_new(request))
            .await
    }

    /// Applies a partial update to an existing task and returns the stored
    /// result.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the task does not exist,
    /// a validation error for malformed fields, or
    /// [`TaskLifecycleError::Repository`] when persistence fails.
    pub async fn update(&self, request: UpdateTaskRequest) -> TaskLifecycleResult<Task> {
        self.logger
            .run("update_task", self.apply_update(request))
            .await
    }

    /// Permanently deletes a task.
    ///
    /// Returns the repository's report of whether a row was removed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the task does not exist
    /// or [`TaskLifecycleError::Repository`] when persistence fails.
    pub async fn delete(&self, id: TaskId) -> TaskLifecycleResult<bool> {
        self.logger.run("delete_task", self.remove(id)).await
    }

    /// Retrieves a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the task does not exist
    /// or [`TaskLifecycleError::Repository`] when lookup fails.
    pub async fn find(&self, id: TaskId) -> TaskLifecycleResult<Task> {
        self.logger.run("find_task", self.load(id)).await
    }

    /// Lists tasks passing the filter, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when lookup fails.
    pub async fn list(&self, filter: TaskFilter) -> TaskLifecycleResult<Vec<Task>> {
        self.logger
            .run("list_tasks", self.list_matching(filter, |_| true))
            .await
    }

    /// Marks a task completed, persisting only when the status changes.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the task does not exist
    /// or [`TaskLifecycleError::Repository`] when persistence fails.
    pub async fn mark_completed(&self, id: TaskId) -> TaskLifecycleResult<Task> {
        self.logger
            .run("mark_task_completed", self.transition(id, TaskStatus::Completed))
            .await
    }

    /// Marks a task pending, persisting only when the status changes.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the task does not exist
    /// or [`TaskLifecycleError::Repository`] when persistence fails.
    pub async fn mark_pending(&self, id: TaskId) -> TaskLifecycleResult<Task> {
        self.logger
            .run("mark_task_pending", self.transition(id, TaskStatus::Pending))
            .await
    }

    /// Lists pending tasks whose due date has passed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when lookup fails.
    pub async fn overdue(&self) -> TaskLifecycleResult<Vec<Task>> {
        let now = self.clock.utc();
        self.logger
            .run(
                "list_overdue_tasks",
                self.list_matching(TaskFilter::Pending, |task| task.is_overdue_at(now)),
            )
            .await
    }

    /// Lists tasks due on the current UTC calendar day.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when lookup fails.
    pub async fn due_today(&self) -> TaskLifecycleResult<Vec<Task>> {
        let today = self.clock.utc().date_naive();
        self.logger
            .run(
                "list_tasks_due_today",
                self.list_matching(TaskFilter::All, |task| task.is_due_on(today)),
            )
            .await
    }

    /// Lists tasks due between now and `days` days from now.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when lookup fails.
    pub async fn due_within(&self, days: u32) -> TaskLifecycleResult<Vec<Task>> {
        let now = self.clock.utc();
        self.logger
            .run(
                "list_tasks_due_within",
                self.list_matching(TaskFilter::All, |task| task.is_due_within(now, days)),
            )
            .await
    }

    async fn store_new(&self, request: CreateTaskRequest) -> TaskLifecycleResult<Task> {
        let fields = self.validate_new_task(request)?;
        let task = Task::new(fields, &*self.clock);
        self.repository.store(&task).await?;
        Ok(task)
    }

    async fn apply_update(&self, request: UpdateTaskRequest) -> TaskLifecycleResult<Task> {
        let id = request.id();
        let changes = validate_changes(request)?;
        let mut task = self.load(id).await?;
        task.apply(changes, &*self.clock);
        self.repository.update(&task).await?;
        self.load(id).await
    }

    async fn remove(&self, id: TaskId) -> TaskLifecycleResult<bool> {
        if self.repository.find_by_id(id).await?.is_none() {
            return Err(TaskLifecycleError::NotFound(id));
        }
        Ok(self.repository.delete(id).await?)
    }

    async fn list_matching(
        &self,
        filter: TaskFilter,
        predicate: impl Fn(&Task) -> bool,
    ) -> TaskLifecycleResult<Vec<Task>> {
        let tasks = self.repository.list(filter).await?;
        Ok(tasks.into_iter().filter(|task| predicate(task)).collect())
    }

    async fn load(&self, id: TaskId) -> TaskLifecycleResult<Task> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(TaskLifecycleError::NotFound(id))
    }

    async fn transition(&self, id: TaskId, target: TaskStatus) -> TaskLifecycleResult<Task> {
        let mut task = self.load(id).await?;
        let changed = match target {
            TaskStatus::Completed => task.mark_completed(&*self.clock),
            TaskStatus::Pending => task.mark_pending(&*self.clock),
        };
        if changed {
            self.repository.update(&task).await?;
        }
        Ok(task)
    }

    fn validate_new_task(&self, request: CreateTaskRequest) -> TaskLifecycleResult<NewTask> {
        let CreateTaskRequest {
            title,
            status,
            description,
            due_date,
        } = request;

        let today = self.clock.utc().date_naive();
        if let Some(due) = due_date {
            let due_day = due.date_naive();
            if due_day < today {
                return Err(TaskDomainError::DueDateInPast { due: due_day, today }.into());
            }
        }

        Ok(NewTask {
            title: TaskTitle::new(title)?,
            description: description
                .map(TaskDescription::new)
                .transpose()?
                .flatten(),
            status: TaskStatus::try_from(status.as_str())?,
            due_date,
        })
    }
}

fn validate_changes(request: UpdateTaskRequest) -> TaskLifecycleResult<TaskChanges> {
    let UpdateTaskRequest {
        id: _,
        title,
        status,
        description,
        due_date,
    } = request;

    let description_update = match description {
        FieldUpdate::Keep => FieldUpdate::Keep,
        FieldUpdate::Clear => FieldUpdate::Clear,
        FieldUpdate::Set(text) => {
            TaskDescription::new(text)?.map_or(FieldUpdate::Clear, FieldUpdate::Set)
        }
    };

    Ok(TaskChanges {
        title: title.map(TaskTitle::new).transpose()?,
        description: description_update,
        status: status
            .as_deref()
            .map(TaskStatus::try_from)
            .transpose()?,
        due_date,
    })
}
