//! Studio API area
//!
//! Flow definitions and their executions.

mod execution;
mod flow;

use crate::client::TwilioClient;

/// Operations on Studio flows and executions.
#[derive(Debug)]
pub struct StudioApi<'a> {
    client: &'a TwilioClient,
}

impl TwilioClient {
    /// The Studio API area.
    pub fn studio(&self) -> StudioApi<'_> {
        StudioApi { client: self }
    }
}

impl StudioApi<'_> {
    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.client.urls().studio)
    }
}
