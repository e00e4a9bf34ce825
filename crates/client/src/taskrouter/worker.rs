//! Workers within a workspace

use relaykit_domain::validation::validate_non_empty;
use relaykit_domain::{validate_sid, Result, SidKind, Worker};

use super::Workspace;

impl Workspace<'_> {
    /// Fetch a worker by its SID.
    pub async fn fetch_worker(&self, worker_sid: &str) -> Result<Worker> {
        validate_sid(SidKind::Worker, worker_sid, "fetch_worker")?;
        self.client
            .get_json("fetch_worker", self.url(&format!("/Workers/{worker_sid}")), &[])
            .await
    }

    /// Workers matching the given target expression,
    /// e.g. `name IN ['Alice','Bob']`.
    pub async fn find_workers(
        &self,
        target_workers_expression: &str,
        limit: Option<u32>,
    ) -> Result<Vec<Worker>> {
        validate_non_empty(
            "find_workers",
            "target_workers_expression",
            target_workers_expression,
        )?;

        let mut workers: Vec<Worker> = self
            .client
            .list_all(
                "find_workers",
                self.url("/Workers"),
                &[("TargetWorkersExpression", target_workers_expression.to_string())],
            )
            .await?;
        if let Some(limit) = limit {
            workers.truncate(limit as usize);
        }
        Ok(workers)
    }
}
