//! Validated text values carried by a task.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task title: non-empty after trimming and at most
/// [`TaskTitle::MAX_CHARS`] characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskTitle(String);

impl TaskTitle {
    /// Maximum title length in characters.
    pub const MAX_CHARS: usize = 255;

    /// Creates a validated title.
    ///
    /// Surrounding whitespace is removed before validation.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the trimmed value is empty
    /// or [`TaskDomainError::TitleTooLong`] when it exceeds
    /// [`TaskTitle::MAX_CHARS`] characters.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }
        let length = trimmed.chars().count();
        if length > Self::MAX_CHARS {
            return Err(TaskDomainError::TitleTooLong {
                length,
                max: Self::MAX_CHARS,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the title as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskTitle {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Free-form task description of at most [`TaskDescription::MAX_CHARS`]
/// characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskDescription(String);

impl TaskDescription {
    /// Maximum description length in characters.
    pub const MAX_CHARS: usize = 1000;

    /// Creates a validated description.
    ///
    /// Returns `Ok(None)` for an empty value: an empty description is stored
    /// as no description at all.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::DescriptionTooLong`] when the value exceeds
    /// [`TaskDescription::MAX_CHARS`] characters.
    pub fn new(value: impl Into<String>) -> Result<Option<Self>, TaskDomainError> {
        let raw = value.into();
        if raw.is_empty() {
            return Ok(None);
        }
        let length = raw.chars().count();
        if length > Self::MAX_CHARS {
            return Err(TaskDomainError::DescriptionTooLong {
                length,
                max: Self::MAX_CHARS,
            });
        }
        Ok(Some(Self(raw)))
    }

    /// Returns the description as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskDescription {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
