//! Task status and list filter types.

use super::{ParseTaskFilterError, ParseTaskStatusError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Completion status of a task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Work on the task is outstanding.
    #[default]
    Pending,
    /// The task has been finished.
    Completed,
}

impl TaskStatus {
    /// Every status a task can hold, in declaration order.
    pub const ALL: [Self; 2] = [Self::Pending, Self::Completed];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
        }
    }

    /// Returns the human-readable label shown to users.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Completed => "Completed",
        }
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    /// Accepts only the exact storage representations.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "pending" => Ok(Self::Pending),
            "completed" => Ok(Self::Completed),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status filter applied when listing or counting tasks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskFilter {
    /// Every task regardless of status.
    #[default]
    All,
    /// Pending tasks only.
    Pending,
    /// Completed tasks only.
    Completed,
}

impl TaskFilter {
    /// Returns the status this filter restricts to, if any.
    #[must_use]
    pub const fn status(self) -> Option<TaskStatus> {
        match self {
            Self::All => None,
            Self::Pending => Some(TaskStatus::Pending),
            Self::Completed => Some(TaskStatus::Completed),
        }
    }

    /// Returns `true` when the given status passes the filter.
    #[must_use]
    pub fn matches(self, status: TaskStatus) -> bool {
        self.status().is_none_or(|wanted| wanted == status)
    }

    /// Returns the canonical query-string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Pending => "pending",
            Self::Completed => "completed",
        }
    }
}

impl From<TaskStatus> for TaskFilter {
    fn from(status: TaskStatus) -> Self {
        match status {
            TaskStatus::Pending => Self::Pending,
            TaskStatus::Completed => Self::Completed,
        }
    }
}

impl TryFrom<&str> for TaskFilter {
    type Error = ParseTaskFilterError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "" | "all" => Ok(Self::All),
            "pending" => Ok(Self::Pending),
            "completed" => Ok(Self::Completed),
            _ => Err(ParseTaskFilterError(value.to_owned())),
        }
    }
}
