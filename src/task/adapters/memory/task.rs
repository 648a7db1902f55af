//! In-memory repository for task storage.

use async_trait::async_trait;
use std::cmp::Reverse;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::task::{
    domain::{Task, TaskFilter, TaskId, TaskStatistics},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: HashMap<TaskId, StoredTask>,
    next_sequence: u64,
}

/// Stored task plus its insertion order, used to break creation-time ties.
#[derive(Debug, Clone)]
struct StoredTask {
    sequence: u64,
    task: Task,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error<T>(err: &PoisonError<T>) -> TaskRepositoryError {
    TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| lock_error(&err))?;
        if state.tasks.contains_key(&task.id()) {
            return Err(TaskRepositoryError::DuplicateTask(task.id()));
        }

        let sequence = state.next_sequence;
        state.next_sequence = sequence.saturating_add(1);
        state.tasks.insert(
            task.id(),
            StoredTask {
                sequence,
                task: task.clone(),
            },
        );
        Ok(())
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| lock_error(&err))?;
        let stored = state
            .tasks
            .get_mut(&task.id())
            .ok_or(TaskRepositoryError::NotFound(task.id()))?;
        stored.task = task.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.state.read().map_err(|err| lock_error(&err))?;
        Ok(state.tasks.get(&id).map(|stored| stored.task.clone()))
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<bool> {
        let mut state = self.state.write().map_err(|err| lock_error(&err))?;
        Ok(state.tasks.remove(&id).is_some())
    }

    async fn count(&self, filter: TaskFilter) -> TaskRepositoryResult<u64> {
        let state = self.state.read().map_err(|err| lock_error(&err))?;
        let matching = state
            .tasks
            .values()
            .filter(|stored| filter.matches(stored.task.status()))
            .count();
        u64::try_from(matching).map_err(TaskRepositoryError::persistence)
    }

    async fn count_by_status(&self) -> TaskRepositoryResult<TaskStatistics> {
        let state = self.state.read().map_err(|err| lock_error(&err))?;
        let (completed, pending): (Vec<&StoredTask>, Vec<&StoredTask>) = state
            .tasks
            .values()
            .partition(|stored| stored.task.is_completed());
        let completed_tasks =
            u64::try_from(completed.len()).map_err(TaskRepositoryError::persistence)?;
        let pending_tasks = u64::try_from(pending.len()).map_err(TaskRepositoryError::persistence)?;
        Ok(TaskStatistics::from_counts(
            completed_tasks.saturating_add(pending_tasks),
            completed_tasks,
            pending_tasks,
        ))
    }

    async fn list(&self, filter: TaskFilter) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(|err| lock_error(&err))?;
        let mut matching: Vec<&StoredTask> = state
            .tasks
            .values()
            .filter(|stored| filter.matches(stored.task.status()))
            .collect();
        matching.sort_by_key(|stored| Reverse((stored.task.created_at(), stored.sequence)));
        Ok(matching
            .into_iter()
            .map(|stored| stored.task.clone())
            .collect())
    }
}
