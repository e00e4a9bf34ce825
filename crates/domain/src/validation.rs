//! Precondition checks applied before any network call
//!
//! Each function returns `Ok(())` or a validation error attributed to the
//! calling operation; input is never mutated. Rules that the type system
//! already enforces (enumerations, required fields) have no function here.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::{RelayError, Result};
use crate::types::{
    ListByParticipantParams, SyncItemParams, TaskQueueParams, WebhookParams, WebhookTarget,
};

/// Maximum length of a sync map item key.
pub const MAX_SYNC_ITEM_KEY_LEN: usize = 320;

/// Inclusive bounds for page sizes and accumulation limits.
pub const PAGE_BOUNDS: (u32, u32) = (1, 1000);

/// Inclusive bounds for a task queue's reserved-worker count.
pub const RESERVED_WORKER_BOUNDS: (u32, u32) = (1, 50);

/// Ten consecutive digits, the minimum for a routable address.
static ADDRESS_DIGIT_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d{10}").expect("valid digit-run pattern"));

/// An address is any non-whitespace string containing at least ten
/// consecutive digits (e.g. `whatsapp:+15551234567`).
pub fn validate_address(operation: &str, name: &str, value: &str) -> Result<()> {
    let well_formed = !value.is_empty()
        && !value.contains(char::is_whitespace)
        && ADDRESS_DIGIT_RUN.is_match(value);
    if well_formed {
        return Ok(());
    }
    Err(RelayError::validation(
        operation,
        format!("{name} must be a non-whitespace string containing 10 consecutive digits, got {value:?}"),
    ))
}

/// Auth tokens are 32 non-whitespace characters with no prefix.
pub fn validate_auth_token(operation: &str, value: &str) -> Result<()> {
    let well_formed = value.chars().count() == 32 && !value.contains(char::is_whitespace);
    if well_formed {
        return Ok(());
    }
    Err(RelayError::validation(
        operation,
        "Auth Token must be 32 non-whitespace characters",
    ))
}

/// Required string fields must be non-empty.
pub fn validate_non_empty(operation: &str, name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(RelayError::validation(operation, format!("{name} must not be empty")));
    }
    Ok(())
}

fn validate_bound(operation: &str, name: &str, value: u32, (min, max): (u32, u32)) -> Result<()> {
    if (min..=max).contains(&value) {
        return Ok(());
    }
    Err(RelayError::validation(
        operation,
        format!("{name} must be between {min} and {max}, got {value}"),
    ))
}

/// Sync map item keys are non-empty and at most 320 characters.
pub fn validate_sync_item_key(operation: &str, key: &str) -> Result<()> {
    validate_non_empty(operation, "key", key)?;
    if key.chars().count() > MAX_SYNC_ITEM_KEY_LEN {
        return Err(RelayError::validation(
            operation,
            format!("key must be at most {MAX_SYNC_ITEM_KEY_LEN} characters"),
        ));
    }
    Ok(())
}

/// Item creation rules: a bounded key and a JSON object payload.
pub fn validate_sync_item_params(operation: &str, params: &SyncItemParams) -> Result<()> {
    validate_sync_item_key(operation, &params.key)?;
    if !params.data.is_object() {
        return Err(RelayError::validation(operation, "data must be a JSON object"));
    }
    Ok(())
}

/// Page size and limit filters stay within 1..=1000.
pub fn validate_list_params(operation: &str, params: &ListByParticipantParams) -> Result<()> {
    if let Some(page_size) = params.page_size {
        validate_bound(operation, "page_size", page_size, PAGE_BOUNDS)?;
    }
    if let Some(limit) = params.limit {
        validate_bound(operation, "limit", limit, PAGE_BOUNDS)?;
    }
    Ok(())
}

/// Target-specific webhook rules: studio targets name a flow, webhook
/// targets name a URL, and present filter/trigger lists are non-empty.
pub fn validate_webhook_params(operation: &str, params: &WebhookParams) -> Result<()> {
    match params.target {
        WebhookTarget::Studio if params.flow_sid.is_none() => {
            return Err(RelayError::validation(
                operation,
                "a studio target requires flow_sid",
            ));
        }
        WebhookTarget::Webhook if params.url.is_none() => {
            return Err(RelayError::validation(
                operation,
                "a webhook target requires url",
            ));
        }
        _ => {}
    }
    if params.filters.as_ref().is_some_and(|filters| filters.is_empty()) {
        return Err(RelayError::validation(operation, "filters must contain at least one event"));
    }
    if params.triggers.as_ref().is_some_and(|triggers| triggers.is_empty()) {
        return Err(RelayError::validation(operation, "triggers must contain at least one word"));
    }
    Ok(())
}

/// Queue creation rules: a friendly name, and a reserved-worker count
/// within 1..=50 when supplied.
pub fn validate_task_queue_params(operation: &str, params: &TaskQueueParams) -> Result<()> {
    validate_non_empty(operation, "friendly_name", &params.friendly_name)?;
    if let Some(limit) = params.max_reserved_workers {
        validate_bound(operation, "max_reserved_workers", limit, RESERVED_WORKER_BOUNDS)?;
    }
    Ok(())
}
