//! TaskRouter resources and request parameters

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Dequeue ordering for a task queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TaskOrder {
    Fifo,
    Lifo,
}

impl TaskOrder {
    /// Wire representation.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fifo => "FIFO",
            Self::Lifo => "LIFO",
        }
    }
}

/// A routable unit of work.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Task SID (`WT` prefix).
    pub sid: String,
    pub account_sid: Option<String>,
    pub workspace_sid: Option<String>,
    /// JSON-encoded attribute blob matched by queue expressions.
    pub attributes: Option<String>,
    /// `pending`, `reserved`, `assigned`, `canceled`, `completed`, `wrapping`.
    pub assignment_status: Option<String>,
    pub task_queue_sid: Option<String>,
    pub priority: Option<i64>,
    pub age: Option<i64>,
    pub date_created: Option<DateTime<Utc>>,
    pub date_updated: Option<DateTime<Utc>>,
}

/// A queue routing tasks to eligible workers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskQueue {
    /// Task queue SID (`WQ` prefix).
    pub sid: String,
    pub account_sid: Option<String>,
    pub workspace_sid: Option<String>,
    pub friendly_name: Option<String>,
    /// Worker-eligibility expression.
    pub target_workers: Option<String>,
    pub max_reserved_workers: Option<u32>,
    pub task_order: Option<TaskOrder>,
    pub date_created: Option<DateTime<Utc>>,
    pub date_updated: Option<DateTime<Utc>>,
}

/// Parameters for creating a task queue.
#[derive(Debug, Clone)]
pub struct TaskQueueParams {
    /// Required display name.
    pub friendly_name: String,
    /// Worker-eligibility expression.
    pub target_workers: Option<String>,
    /// Simultaneous reservations per task, 1..=50.
    pub max_reserved_workers: Option<u32>,
    pub task_order: Option<TaskOrder>,
    /// Activity applied to a worker when reserved.
    pub reservation_activity_sid: Option<String>,
    /// Activity applied to a worker when assigned.
    pub assignment_activity_sid: Option<String>,
}

/// An agent that can be assigned tasks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Worker {
    /// Worker SID (`WK` prefix).
    pub sid: String,
    pub account_sid: Option<String>,
    pub workspace_sid: Option<String>,
    pub friendly_name: Option<String>,
    pub available: Option<bool>,
    /// Name of the worker's current activity.
    pub activity_name: Option<String>,
    /// JSON-encoded attribute blob matched by queue expressions.
    pub attributes: Option<String>,
    pub date_created: Option<DateTime<Utc>>,
}
