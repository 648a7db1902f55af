//! Urgency classification of tasks.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Urgency bucket derived from completion state and due-date proximity.
///
/// Variants are declared from least to most pressing so that the derived
/// ordering reads as urgency: `Completed < Normal < Medium < High < Urgent <
/// Overdue`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorityLevel {
    /// The task is done.
    Completed,
    /// No due date, or due more than a week out.
    Normal,
    /// Due within a week.
    Medium,
    /// Due within three days.
    High,
    /// Due within a day.
    Urgent,
    /// Pending and past its due date.
    Overdue,
}

impl PriorityLevel {
    /// Upper bound, in days, of the urgent bucket.
    pub const URGENT_WITHIN_DAYS: i64 = 1;
    /// Upper bound, in days, of the high bucket.
    pub const HIGH_WITHIN_DAYS: i64 = 3;
    /// Upper bound, in days, of the medium bucket.
    pub const MEDIUM_WITHIN_DAYS: i64 = 7;

    /// Buckets a pending, not overdue task by whole days until it is due.
    #[must_use]
    pub const fn from_days_until_due(days: i64) -> Self {
        if days <= Self::URGENT_WITHIN_DAYS {
            Self::Urgent
        } else if days <= Self::HIGH_WITHIN_DAYS {
            Self::High
        } else if days <= Self::MEDIUM_WITHIN_DAYS {
            Self::Medium
        } else {
            Self::Normal
        }
    }

    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Normal => "normal",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Urgent => "urgent",
            Self::Overdue => "overdue",
        }
    }
}

impl fmt::Display for PriorityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
