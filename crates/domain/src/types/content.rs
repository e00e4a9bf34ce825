//! Content template resources

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A content template as returned by the Content API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    /// Content SID (`HX` prefix).
    pub sid: String,
    pub account_sid: Option<String>,
    pub friendly_name: Option<String>,
    pub language: Option<String>,
    /// Default placeholder values keyed by position.
    pub variables: Option<serde_json::Value>,
    /// Per-channel template bodies, opaque to this library.
    pub types: Option<serde_json::Value>,
    pub date_created: Option<DateTime<Utc>>,
    pub date_updated: Option<DateTime<Utc>>,
}
