//! `PostgreSQL` repository implementation for task storage.

use super::{
    models::{NewTaskRow, TaskChangesetRow, TaskRow},
    schema::tasks,
};
use crate::task::{
    domain::{
        PersistedTaskData, Task, TaskDescription, TaskFilter, TaskId, TaskStatistics, TaskStatus,
        TaskTitle,
    },
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by task adapters.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: TaskPgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }

    /// Builds a connection pool for the given database URL and wraps it in a
    /// repository.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the pool cannot be
    /// built.
    pub fn connect(database_url: &str) -> TaskRepositoryResult<Self> {
        let manager = ConnectionManager::<PgConnection>::new(database_url);
        let pool = Pool::builder()
            .build(manager)
            .map_err(TaskRepositoryError::persistence)?;
        Ok(Self::new(pool))
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let new_row = to_new_row(task);

        self.run_blocking(move |connection| {
            diesel::insert_into(tasks::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        TaskRepositoryError::DuplicateTask(task_id)
                    }
                    _ => TaskRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let changeset = to_changeset(task);

        self.run_blocking(move |connection| {
            let affected = diesel::update(tasks::table.filter(tasks::id.eq(task_id.into_inner())))
                .set(&changeset)
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            if affected == 0 {
                return Err(TaskRepositoryError::NotFound(task_id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .filter(tasks::id.eq(id.into_inner()))
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<bool> {
        self.run_blocking(move |connection| {
            let affected = diesel::delete(tasks::table.filter(tasks::id.eq(id.into_inner())))
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            Ok(affected > 0)
        })
        .await
    }

    async fn count(&self, filter: TaskFilter) -> TaskRepositoryResult<u64> {
        self.run_blocking(move |connection| {
            let count = match filter.status() {
                Some(status) => tasks::table
                    .filter(tasks::status.eq(status.as_str()))
                    .count()
                    .get_result::<i64>(connection),
                None => tasks::table.count().get_result::<i64>(connection),
            }
            .map_err(TaskRepositoryError::persistence)?;
            u64::try_from(count).map_err(TaskRepositoryError::persistence)
        })
        .await
    }

    async fn count_by_status(&self) -> TaskRepositoryResult<TaskStatistics> {
        self.run_blocking(|connection| {
            let groups = tasks::table
                .group_by(tasks::status)
                .select((tasks::status, diesel::dsl::count_star()))
                .load::<(String, i64)>(connection)
                .map_err(TaskRepositoryError::persistence)?;

            let mut completed_tasks = 0_u64;
            let mut pending_tasks = 0_u64;
            for (persisted_status, rows) in groups {
                let tally = u64::try_from(rows).map_err(TaskRepositoryError::persistence)?;
                match TaskStatus::try_from(persisted_status.as_str())
                    .map_err(TaskRepositoryError::persistence)?
                {
                    TaskStatus::Completed => completed_tasks = tally,
                    TaskStatus::Pending => pending_tasks = tally,
                }
            }
            Ok(TaskStatistics::from_counts(
                completed_tasks.saturating_add(pending_tasks),
                completed_tasks,
                pending_tasks,
            ))
        })
        .await
    }

    async fn list(&self, filter: TaskFilter) -> TaskRepositoryResult<Vec<Task>> {
        self.run_blocking(move |connection| {
            let rows = match filter.status() {
                Some(status) => tasks::table
                    .filter(tasks::status.eq(status.as_str()))
                    .order((tasks::created_at.desc(), tasks::id.desc()))
                    .select(TaskRow::as_select())
                    .load::<TaskRow>(connection),
                None => tasks::table
                    .order((tasks::created_at.desc(), tasks::id.desc()))
                    .select(TaskRow::as_select())
                    .load::<TaskRow>(connection),
            }
            .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }
}

fn to_new_row(task: &Task) -> NewTaskRow {
    NewTaskRow {
        id: task.id().into_inner(),
        title: task.title().as_str().to_owned(),
        description: task.description().map(|text| text.as_str().to_owned()),
        status: task.status().as_str().to_owned(),
        due_date: task.due_date(),
        created_at: task.created_at(),
        updated_at: task.updated_at(),
    }
}

fn to_changeset(task: &Task) -> TaskChangesetRow {
    TaskChangesetRow {
        title: task.title().as_str().to_owned(),
        description: task.description().map(|text| text.as_str().to_owned()),
        status: task.status().as_str().to_owned(),
        due_date: task.due_date(),
        updated_at: task.updated_at(),
    }
}

fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let TaskRow {
        id,
        title: persisted_title,
        description: persisted_description,
        status: persisted_status,
        due_date,
        created_at,
        updated_at,
    } = row;

    let title = TaskTitle::new(persisted_title).map_err(TaskRepositoryError::persistence)?;
    let description = persisted_description
        .map(TaskDescription::new)
        .transpose()
        .map_err(TaskRepositoryError::persistence)?
        .flatten();
    let status =
        TaskStatus::try_from(persisted_status.as_str()).map_err(TaskRepositoryError::persistence)?;

    Ok(Task::from_persisted(PersistedTaskData {
        id: TaskId::from_uuid(id),
        title,
        description,
        status,
        due_date,
        created_at,
        updated_at,
    }))
}
