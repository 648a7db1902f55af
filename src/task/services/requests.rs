//! Request payloads accepted by the task lifecycle service.

use crate::task::domain::{FieldUpdate, TaskId};
use chrono::{DateTime, Utc};

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    pub(super) title: String,
    pub(super) status: String,
    pub(super) description: Option<String>,
    pub(super) due_date: Option<DateTime<Utc>>,
}

impl CreateTaskRequest {
    /// Creates a request with the required title and status.
    #[must_use]
    pub fn new(title: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            status: status.into(),
            description: None,
            due_date: None,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the task due date.
    #[must_use]
    pub fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }
}

/// Request payload for a partial task update.
///
/// Only fields set on the request are changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    pub(super) id: TaskId,
    pub(super) title: Option<String>,
    pub(super) status: Option<String>,
    pub(super) description: FieldUpdate<String>,
    pub(super) due_date: FieldUpdate<DateTime<Utc>>,
}

impl UpdateTaskRequest {
    /// Creates an update for the given task that changes nothing yet.
    #[must_use]
    pub fn new(id: TaskId) -> Self {
        Self {
            id,
            title: None,
            status: None,
            description: FieldUpdate::Keep,
            due_date: FieldUpdate::Keep,
        }
    }

    /// Returns the target task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Replaces the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replaces the status.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Replaces the description. An empty string clears it.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let text = description.into();
        self.description = if text.is_empty() {
            FieldUpdate::Clear
        } else {
            FieldUpdate::Set(text)
        };
        self
    }

    /// Clears the description.
    #[must_use]
    pub fn clear_description(mut self) -> Self {
        self.description = FieldUpdate::Clear;
        self
    }

    /// Replaces the due date.
    #[must_use]
    pub fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = FieldUpdate::Set(due_date);
        self
    }

    /// Clears the due date.
    #[must_use]
    pub fn clear_due_date(mut self) -> Self {
        self.due_date = FieldUpdate::Clear;
        self
    }
}
