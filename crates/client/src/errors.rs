//! Conversions from transport failures into the domain error taxonomy.
//!
//! Twilio rejections arrive as a JSON envelope (`status`, numeric `code`,
//! `message`, `more_info`); those fields propagate verbatim into
//! [`RelayError::Api`], with the message prefixed by the originating
//! operation. Transport-level failures (no response) carry status 0.

use relaykit_domain::RelayError;
use reqwest::Response;
use serde::Deserialize;

/// Vendor code for "the requested resource was not found".
///
/// Deletion-style operations treat this as success (idempotent delete).
pub const NOT_FOUND_CODE: &str = "20404";

/// The error envelope Twilio returns on non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    status: Option<u16>,
    code: Option<i64>,
    message: Option<String>,
    more_info: Option<String>,
}

/// Normalize a failure that produced no usable response.
pub(crate) fn transport_error(operation: &str, err: &reqwest::Error) -> RelayError {
    let summary = if err.is_timeout() {
        "request timed out"
    } else if err.is_connect() {
        "connection failure"
    } else {
        "transport error"
    };
    let status = err.status().map_or(0, |s| s.as_u16());
    RelayError::api(operation, summary, status, "", "", err.to_string())
}

/// Normalize a 2xx response whose body failed to decode.
pub(crate) fn decode_error(operation: &str, err: &dyn std::fmt::Display) -> RelayError {
    RelayError::api(
        operation,
        "failed to decode response body",
        0,
        "",
        "",
        err.to_string(),
    )
}

/// Normalize a non-2xx response into a vendor error.
///
/// Falls back to the raw body text when the envelope does not parse.
pub(crate) async fn error_from_response(operation: &str, response: Response) -> RelayError {
    let http_status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();

    match serde_json::from_str::<ErrorEnvelope>(&body) {
        Ok(envelope) => RelayError::api(
            operation,
            envelope.message.unwrap_or_else(|| format!("HTTP {http_status}")),
            envelope.status.unwrap_or(http_status),
            envelope.code.map(|code| code.to_string()).unwrap_or_default(),
            envelope.more_info.unwrap_or_default(),
            "",
        ),
        Err(_) => RelayError::api(
            operation,
            format!("HTTP {http_status}"),
            http_status,
            "",
            "",
            body,
        ),
    }
}

/// Whether an error is the vendor's "resource not found" rejection.
pub(crate) fn is_not_found(error: &RelayError) -> bool {
    error.code() == Some(NOT_FOUND_CODE)
}
