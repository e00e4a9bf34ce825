//! Executions of a Studio flow

use tracing::info;

use relaykit_domain::validation::validate_address;
use relaykit_domain::{
    validate_sid, Execution, ExecutionParams, RelayError, Result, SidKind,
};

use super::StudioApi;

impl StudioApi<'_> {
    /// All executions of a flow, across every page of the listing.
    pub async fn list_executions(&self, flow_sid: &str) -> Result<Vec<Execution>> {
        validate_sid(SidKind::StudioFlow, flow_sid, "list_executions")?;
        self.client
            .list_all(
                "list_executions",
                self.url(&format!("/Flows/{flow_sid}/Executions")),
                &[],
            )
            .await
    }

    /// Start a new execution of a flow against a contact address.
    pub async fn create_execution(
        &self,
        flow_sid: &str,
        params: &ExecutionParams,
    ) -> Result<Execution> {
        validate_sid(SidKind::StudioFlow, flow_sid, "create_execution")?;
        validate_address("create_execution", "to", &params.to)?;
        validate_address("create_execution", "from", &params.from)?;

        let mut form: Vec<(&str, String)> = vec![
            ("To", params.to.clone()),
            ("From", params.from.clone()),
        ];
        if let Some(parameters) = &params.parameters {
            let encoded = serde_json::to_string(parameters).map_err(|e| {
                RelayError::validation(
                    "create_execution",
                    format!("parameters must serialize to JSON: {e}"),
                )
            })?;
            form.push(("Parameters", encoded));
        }

        let execution: Execution = self
            .client
            .post_form(
                "create_execution",
                self.url(&format!("/Flows/{flow_sid}/Executions")),
                &form,
            )
            .await?;
        info!(sid = %execution.sid, flow_sid, "created studio execution");
        Ok(execution)
    }
}
