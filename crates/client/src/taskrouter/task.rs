//! Tasks within a workspace

use relaykit_domain::validation::validate_non_empty;
use relaykit_domain::{validate_sid, Result, SidKind, Task};

use super::Workspace;

impl Workspace<'_> {
    /// Fetch a task by its SID.
    pub async fn fetch_task(&self, task_sid: &str) -> Result<Task> {
        validate_sid(SidKind::Task, task_sid, "fetch_task")?;
        self.client.get_json("fetch_task", self.url(&format!("/Tasks/{task_sid}")), &[]).await
    }

    /// Tasks whose attributes satisfy the given evaluation expression,
    /// e.g. `(language == "en" OR language == "fr") AND skill_rating >= 5.1`.
    pub async fn find_tasks(
        &self,
        evaluate_task_attributes: &str,
        limit: Option<u32>,
    ) -> Result<Vec<Task>> {
        validate_non_empty("find_tasks", "evaluate_task_attributes", evaluate_task_attributes)?;

        let mut tasks: Vec<Task> = self
            .client
            .list_all(
                "find_tasks",
                self.url("/Tasks"),
                &[("EvaluateTaskAttributes", evaluate_task_attributes.to_string())],
            )
            .await?;
        if let Some(limit) = limit {
            tasks.truncate(limit as usize);
        }
        Ok(tasks)
    }
}
