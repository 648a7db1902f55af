//! Serialisable views of tasks and the dashboard.
//!
//! Views flatten a [`Task`] and its derived fields at a given instant into
//! the shape consumed by the page renderer. Timestamps use ISO-8601 in UTC
//! with microsecond precision, e.g. `2024-12-25T10:30:00.000000Z`.

use crate::task::{
    domain::{PriorityLevel, Task, TaskId, TaskStatistics, TaskStatus},
    services::TaskDashboard,
};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

/// Formats an instant as an ISO-8601 UTC string.
#[must_use]
pub fn iso8601(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Flattened task with derived fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskView {
    /// Task identifier.
    pub id: TaskId,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: Option<String>,
    /// Stored status.
    pub status: TaskStatus,
    /// Human-readable status.
    pub status_text: &'static str,
    /// Due instant in ISO-8601.
    pub due_date: Option<String>,
    /// Short display form of the due date.
    pub formatted_due_date: Option<String>,
    /// Whether the task is completed.
    pub is_completed: bool,
    /// Whether the task is overdue.
    pub is_overdue: bool,
    /// Whole days until the due date.
    pub days_until_due: Option<i64>,
    /// Urgency bucket.
    pub priority_level: PriorityLevel,
    /// Creation timestamp in ISO-8601.
    pub created_at: String,
    /// Last update timestamp in ISO-8601.
    pub updated_at: String,
}

impl TaskView {
    /// Renders a task as seen at `now`.
    #[must_use]
    pub fn render(task: &Task, now: DateTime<Utc>) -> Self {
        let insights = task.insights_at(now);
        Self {
            id: task.id(),
            title: task.title().as_str().to_owned(),
            description: task.description().map(|text| text.as_str().to_owned()),
            status: task.status(),
            status_text: insights.status_text,
            due_date: task.due_date().map(iso8601),
            formatted_due_date: insights.formatted_due_date,
            is_completed: insights.is_completed,
            is_overdue: insights.is_overdue,
            days_until_due: insights.days_until_due,
            priority_level: insights.priority_level,
            created_at: iso8601(task.created_at()),
            updated_at: iso8601(task.updated_at()),
        }
    }

    /// Renders every task as seen at `now`, keeping order.
    #[must_use]
    pub fn render_all(tasks: &[Task], now: DateTime<Utc>) -> Vec<Self> {
        tasks.iter().map(|task| Self::render(task, now)).collect()
    }
}

/// Dashboard page payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardView {
    /// Recent tasks, newest first.
    pub tasks: Vec<TaskView>,
    /// Collection statistics.
    pub stats: TaskStatistics,
}

impl DashboardView {
    /// Renders a dashboard as seen at `now`.
    #[must_use]
    pub fn render(dashboard: &TaskDashboard, now: DateTime<Utc>) -> Self {
        Self {
            tasks: TaskView::render_all(&dashboard.recent_tasks, now),
            stats: dashboard.stats,
        }
    }
}
