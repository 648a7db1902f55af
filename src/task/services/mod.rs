//! Application services for task management.

mod action_log;
mod lifecycle;
mod requests;
mod statistics;

pub use action_log::ActionLogger;
pub use lifecycle::{TaskLifecycleError, TaskLifecycleResult, TaskLifecycleService};
pub use requests::{CreateTaskRequest, UpdateTaskRequest};
pub use statistics::{DEFAULT_DASHBOARD_RECENT_TASKS, TaskDashboard, TaskStatisticsService};
