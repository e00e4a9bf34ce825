//! Sync map resources

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A key-value map within a sync service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncMap {
    /// Sync map SID (`MP` prefix).
    pub sid: String,
    pub account_sid: Option<String>,
    pub service_sid: Option<String>,
    /// Caller-chosen name, addressable in place of the SID.
    pub unique_name: Option<String>,
    pub date_created: Option<DateTime<Utc>>,
    pub date_expires: Option<DateTime<Utc>>,
}

/// One entry of a sync map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncMapItem {
    pub key: String,
    pub map_sid: Option<String>,
    pub service_sid: Option<String>,
    /// Arbitrary JSON payload.
    pub data: serde_json::Value,
    pub revision: Option<String>,
    pub date_created: Option<DateTime<Utc>>,
    pub date_expires: Option<DateTime<Utc>>,
}

/// Parameters for creating a sync map item.
#[derive(Debug, Clone)]
pub struct SyncItemParams {
    /// Item key, at most 320 characters.
    pub key: String,
    /// JSON object payload.
    pub data: serde_json::Value,
    /// Time-to-live in seconds; the item expires afterwards.
    pub item_ttl: Option<u32>,
}
