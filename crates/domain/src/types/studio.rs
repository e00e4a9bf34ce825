//! Studio flow and execution resources

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A Studio flow definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flow {
    /// Flow SID (`FW` prefix).
    pub sid: String,
    pub account_sid: Option<String>,
    pub friendly_name: Option<String>,
    /// `draft` or `published`.
    pub status: Option<String>,
    pub valid: Option<bool>,
    pub version: Option<u32>,
    pub date_created: Option<DateTime<Utc>>,
    pub date_updated: Option<DateTime<Utc>>,
}

/// One run of a flow against a contact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Execution {
    /// Execution SID (`FN` prefix).
    pub sid: String,
    pub account_sid: Option<String>,
    pub flow_sid: Option<String>,
    /// The address the flow is engaging.
    pub contact_channel_address: Option<String>,
    /// `active` or `ended`.
    pub status: Option<String>,
    pub date_created: Option<DateTime<Utc>>,
    pub date_updated: Option<DateTime<Utc>>,
}

/// Parameters for starting a flow execution.
#[derive(Debug, Clone)]
pub struct ExecutionParams {
    /// Destination address; must contain a 10-digit run.
    pub to: String,
    /// Originating address; must contain a 10-digit run.
    pub from: String,
    /// JSON context handed to the flow.
    pub parameters: Option<serde_json::Value>,
}
