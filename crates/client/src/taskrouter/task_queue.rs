//! Task queues within a workspace

use tracing::info;

use relaykit_domain::validation::validate_task_queue_params;
use relaykit_domain::{Result, TaskQueue, TaskQueueParams};

use super::Workspace;

impl Workspace<'_> {
    /// Create a task queue.
    ///
    /// The reserved-worker limit is checked against its 1..=50 range
    /// before the request is issued.
    pub async fn create_task_queue(&self, params: &TaskQueueParams) -> Result<TaskQueue> {
        validate_task_queue_params("create_task_queue", params)?;

        let mut form: Vec<(&str, String)> =
            vec![("FriendlyName", params.friendly_name.clone())];
        if let Some(target) = &params.target_workers {
            form.push(("TargetWorkers", target.clone()));
        }
        if let Some(limit) = params.max_reserved_workers {
            form.push(("MaxReservedWorkers", limit.to_string()));
        }
        if let Some(order) = params.task_order {
            form.push(("TaskOrder", order.as_str().to_string()));
        }
        if let Some(sid) = &params.reservation_activity_sid {
            form.push(("ReservationActivitySid", sid.clone()));
        }
        if let Some(sid) = &params.assignment_activity_sid {
            form.push(("AssignmentActivitySid", sid.clone()));
        }

        let queue: TaskQueue =
            self.client.post_form("create_task_queue", self.url("/TaskQueues"), &form).await?;
        info!(sid = %queue.sid, "created task queue");
        Ok(queue)
    }
}
