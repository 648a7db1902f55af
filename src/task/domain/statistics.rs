//! Aggregate statistics over the task collection.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Decimal places kept in [`TaskStatistics::completion_percentage`].
const PERCENTAGE_SCALE: u32 = 2;

/// Task counts and completion ratio for the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskStatistics {
    /// Number of tasks.
    pub total_tasks: u64,
    /// Number of completed tasks.
    pub completed_tasks: u64,
    /// Number of pending tasks.
    pub pending_tasks: u64,
    /// Completed share of all tasks in percent, rounded to two decimal
    /// places with midpoints rounded away from zero. Zero for an empty
    /// collection.
    #[serde(with = "rust_decimal::serde::float")]
    pub completion_percentage: Decimal,
}

impl TaskStatistics {
    /// Builds statistics from raw counts.
    #[must_use]
    pub fn from_counts(total_tasks: u64, completed_tasks: u64, pending_tasks: u64) -> Self {
        Self {
            total_tasks,
            completed_tasks,
            pending_tasks,
            completion_percentage: completion_percentage(completed_tasks, total_tasks),
        }
    }

    /// Statistics of an empty collection.
    #[must_use]
    pub fn empty() -> Self {
        Self::from_counts(0, 0, 0)
    }
}

/// `completed / total * 100` rounded to two places, or zero when `total` is
/// zero.
#[must_use]
pub fn completion_percentage(completed: u64, total: u64) -> Decimal {
    if total == 0 {
        return Decimal::ZERO;
    }
    Decimal::from(completed)
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|scaled| scaled.checked_div(Decimal::from(total)))
        .map_or(Decimal::ZERO, |ratio| {
            ratio.round_dp_with_strategy(PERCENTAGE_SCALE, RoundingStrategy::MidpointAwayFromZero)
        })
}
