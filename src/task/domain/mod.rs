//! Domain model for task management.
//!
//! The task domain covers the task aggregate, its status state machine, the
//! derived time-relative fields used for presentation, and the aggregate
//! statistics shown on the dashboard. Infrastructure concerns stay outside
//! this boundary.

mod error;
mod ids;
mod priority;
mod statistics;
mod status;
mod task;
mod text;

pub use error::{ParseTaskFilterError, ParseTaskStatusError, TaskDomainError};
pub use ids::TaskId;
pub use priority::PriorityLevel;
pub use statistics::{TaskStatistics, completion_percentage};
pub use status::{TaskFilter, TaskStatus};
pub use task::{FieldUpdate, NewTask, PersistedTaskData, Task, TaskChanges, TaskInsights};
pub use text::{TaskDescription, TaskTitle};
