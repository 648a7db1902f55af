//! Task aggregate root and its derived, time-relative state.

use super::{PriorityLevel, TaskDescription, TaskId, TaskStatus, TaskTitle};
use chrono::{DateTime, NaiveDate, SubsecRound, TimeDelta, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Display format of [`Task::formatted_due_date`], e.g. `Dec 25, 2024`.
const DUE_DATE_DISPLAY_FORMAT: &str = "%b %-d, %Y";

/// Sub-second digits kept on every instant a task holds; matches the
/// microsecond resolution of `TIMESTAMPTZ` columns.
const STORED_SUBSEC_DIGITS: u16 = 6;

/// Truncates an instant to the precision tasks are persisted with.
fn stored_precision(instant: DateTime<Utc>) -> DateTime<Utc> {
    instant.trunc_subsecs(STORED_SUBSEC_DIGITS)
}

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    description: Option<TaskDescription>,
    status: TaskStatus,
    due_date: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Validated field values for a task that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    /// Task title.
    pub title: TaskTitle,
    /// Optional description.
    pub description: Option<TaskDescription>,
    /// Initial status.
    pub status: TaskStatus,
    /// Optional due instant.
    pub due_date: Option<DateTime<Utc>>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: TaskTitle,
    /// Persisted description, if any.
    pub description: Option<TaskDescription>,
    /// Persisted status.
    pub status: TaskStatus,
    /// Persisted due instant, if any.
    pub due_date: Option<DateTime<Utc>>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest modification timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Change to a nullable field in a partial update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldUpdate<T> {
    /// Leave the stored value untouched.
    #[default]
    Keep,
    /// Set the field to null.
    Clear,
    /// Replace the stored value.
    Set(T),
}

impl<T> FieldUpdate<T> {
    fn apply_to(self, field: &mut Option<T>) {
        match self {
            Self::Keep => {}
            Self::Clear => *field = None,
            Self::Set(value) => *field = Some(value),
        }
    }
}

/// Validated partial update of a task. Absent fields keep their value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskChanges {
    /// Replacement title.
    pub title: Option<TaskTitle>,
    /// Description change.
    pub description: FieldUpdate<TaskDescription>,
    /// Replacement status.
    pub status: Option<TaskStatus>,
    /// Due date change.
    pub due_date: FieldUpdate<DateTime<Utc>>,
}

/// Presentation-oriented fields derived from a task at a given instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskInsights {
    /// Human-readable status label.
    pub status_text: &'static str,
    /// Whether the task is completed.
    pub is_completed: bool,
    /// Whether the task is pending and past its due date.
    pub is_overdue: bool,
    /// Whole days until the due date, negative once passed.
    pub days_until_due: Option<i64>,
    /// Short display form of the due date.
    pub formatted_due_date: Option<String>,
    /// Urgency bucket.
    pub priority_level: PriorityLevel,
}

impl Task {
    /// Creates a new task stamped with the current clock time.
    ///
    /// Timestamps and the due date are truncated to microseconds, so the
    /// returned task equals what storage reads back.
    #[must_use]
    pub fn new(fields: NewTask, clock: &impl Clock) -> Self {
        let timestamp = stored_precision(clock.utc());
        Self {
            id: TaskId::new(),
            title: fields.title,
            description: fields.description,
            status: fields.status,
            due_date: fields.due_date.map(stored_precision),
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            status: data.status,
            due_date: data.due_date,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the task description, if any.
    #[must_use]
    pub const fn description(&self) -> Option<&TaskDescription> {
        self.description.as_ref()
    }

    /// Returns the task status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the due instant, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns `true` when the task is completed.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }

    /// Returns `true` when the task is pending.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.status == TaskStatus::Pending
    }

    /// Returns `true` when the task is pending and its due date lies before
    /// `now`. Completed tasks are never overdue.
    #[must_use]
    pub fn is_overdue_at(&self, now: DateTime<Utc>) -> bool {
        self.is_pending() && self.due_date.is_some_and(|due| due < now)
    }

    /// Whole days from `now` until the due date, truncated toward zero.
    ///
    /// Negative once the due date has passed; `None` without a due date.
    #[must_use]
    pub fn days_until_due_at(&self, now: DateTime<Utc>) -> Option<i64> {
        self.due_date.map(|due| (due - now).num_days())
    }

    /// Formats the due date for display, e.g. `Dec 25, 2024`.
    #[must_use]
    pub fn formatted_due_date(&self) -> Option<String> {
        self.due_date
            .map(|due| due.format(DUE_DATE_DISPLAY_FORMAT).to_string())
    }

    /// Classifies the task's urgency at `now`.
    #[must_use]
    pub fn priority_level_at(&self, now: DateTime<Utc>) -> PriorityLevel {
        if self.is_completed() {
            return PriorityLevel::Completed;
        }
        if self.is_overdue_at(now) {
            return PriorityLevel::Overdue;
        }
        self.days_until_due_at(now)
            .map_or(PriorityLevel::Normal, PriorityLevel::from_days_until_due)
    }

    /// Computes every derived field at `now`.
    #[must_use]
    pub fn insights_at(&self, now: DateTime<Utc>) -> TaskInsights {
        TaskInsights {
            status_text: self.status.label(),
            is_completed: self.is_completed(),
            is_overdue: self.is_overdue_at(now),
            days_until_due: self.days_until_due_at(now),
            formatted_due_date: self.formatted_due_date(),
            priority_level: self.priority_level_at(now),
        }
    }

    /// Computes every derived field at the clock's current time.
    #[must_use]
    pub fn insights(&self, clock: &impl Clock) -> TaskInsights {
        self.insights_at(clock.utc())
    }

    /// Returns `true` when the due date falls on the given UTC calendar day.
    #[must_use]
    pub fn is_due_on(&self, day: NaiveDate) -> bool {
        self.due_date.is_some_and(|due| due.date_naive() == day)
    }

    /// Returns `true` when the due date lies between `now` and `days` days
    /// later, both ends inclusive.
    #[must_use]
    pub fn is_due_within(&self, now: DateTime<Utc>, days: u32) -> bool {
        let Some(due) = self.due_date else {
            return false;
        };
        let horizon =
            TimeDelta::try_days(i64::from(days)).and_then(|span| now.checked_add_signed(span));
        due >= now && horizon.is_none_or(|limit| due <= limit)
    }

    /// Marks the task completed.
    ///
    /// Returns `false`, leaving the task untouched, when it was already
    /// completed.
    pub fn mark_completed(&mut self, clock: &impl Clock) -> bool {
        self.transition_to(TaskStatus::Completed, clock)
    }

    /// Marks the task pending again.
    ///
    /// Returns `false`, leaving the task untouched, when it was already
    /// pending.
    pub fn mark_pending(&mut self, clock: &impl Clock) -> bool {
        self.transition_to(TaskStatus::Pending, clock)
    }

    /// Applies a partial update and refreshes the modification timestamp.
    pub fn apply(&mut self, changes: TaskChanges, clock: &impl Clock) {
        let TaskChanges {
            title,
            description,
            status,
            due_date,
        } = changes;
        if let Some(new_title) = title {
            self.title = new_title;
        }
        description.apply_to(&mut self.description);
        if let Some(new_status) = status {
            self.status = new_status;
        }
        let due_update = match due_date {
            FieldUpdate::Set(due) => FieldUpdate::Set(stored_precision(due)),
            other => other,
        };
        due_update.apply_to(&mut self.due_date);
        self.touch(clock);
    }

    fn transition_to(&mut self, target: TaskStatus, clock: &impl Clock) -> bool {
        if self.status == target {
            return false;
        }
        self.status = target;
        self.touch(clock);
        true
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = stored_precision(clock.utc());
    }
}
