//! Error types for task domain validation and parsing.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The title exceeds the maximum length.
    #[error("task title is {length} characters, the limit is {max}")]
    TitleTooLong {
        /// Observed length in characters.
        length: usize,
        /// Maximum permitted length.
        max: usize,
    },

    /// The description exceeds the maximum length.
    #[error("task description is {length} characters, the limit is {max}")]
    DescriptionTooLong {
        /// Observed length in characters.
        length: usize,
        /// Maximum permitted length.
        max: usize,
    },

    /// A new task was given a due date before the current day.
    #[error("due date {due} is before today ({today})")]
    DueDateInPast {
        /// Calendar date of the rejected due date.
        due: NaiveDate,
        /// Calendar date the request was evaluated on.
        today: NaiveDate,
    },
}

/// Error returned while parsing task statuses.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing task list filters.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task filter: {0}, expected all, pending or completed")]
pub struct ParseTaskFilterError(pub String);
