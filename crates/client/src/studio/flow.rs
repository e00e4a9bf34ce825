//! Studio flow definitions

use relaykit_domain::{validate_sid, Flow, RelayError, Result, SidKind};

use super::StudioApi;

const STUDIO_DOCS_URL: &str = "https://www.twilio.com/docs/studio";
const STUDIO_CONSOLE_URL: &str = "https://console.twilio.com/us1/develop/studio/flows";

impl StudioApi<'_> {
    /// All Studio flows of the account.
    ///
    /// Zero flows signals a misconfigured account and raises a 404 with a
    /// stable code rather than returning an empty vector.
    pub async fn list_flows(&self) -> Result<Vec<Flow>> {
        let flows: Vec<Flow> =
            self.client.list_all("list_flows", self.url("/Flows"), &[]).await?;

        if flows.is_empty() {
            return Err(RelayError::api(
                "list_flows",
                "studio flows not found",
                404,
                "STUDIO_FLOWS_NOT_FOUND",
                STUDIO_DOCS_URL,
                format!(
                    "No studio flows exist in this account; create one in the console: {STUDIO_CONSOLE_URL}"
                ),
            ));
        }
        Ok(flows)
    }

    /// Fetch a Studio flow by its SID.
    pub async fn fetch_flow(&self, flow_sid: &str) -> Result<Flow> {
        validate_sid(SidKind::StudioFlow, flow_sid, "fetch_flow")?;
        self.client.get_json("fetch_flow", self.url(&format!("/Flows/{flow_sid}")), &[]).await
    }
}
