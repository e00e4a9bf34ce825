//! Serverless HTTP response helper
//!
//! Functions return a status/body/headers triple to the host runtime.
//! When no headers are supplied the response defaults to permissive CORS
//! plus a JSON content type, matching what browser-called functions need.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::json;

use relaykit_domain::RelayError;

/// Status used when an error carries none (e.g. transport failures).
const FALLBACK_ERROR_STATUS: u16 = 400;

/// A status/body/headers triple handed back to the serverless host.
#[derive(Debug, Clone, Serialize)]
pub struct ServerlessResponse {
    pub status_code: u16,
    pub body: serde_json::Value,
    pub headers: BTreeMap<String, String>,
}

impl ServerlessResponse {
    /// Response with the default permissive headers.
    pub fn new(status_code: u16, body: serde_json::Value) -> Self {
        Self { status_code, body, headers: default_headers() }
    }

    /// Response with exactly the supplied headers, no defaults added.
    pub fn with_headers(
        status_code: u16,
        body: serde_json::Value,
        headers: BTreeMap<String, String>,
    ) -> Self {
        Self { status_code, body, headers }
    }

    /// Shape an error for the catch block of a function handler.
    ///
    /// The body mirrors the error's taxonomy fields under `success: false`;
    /// vendor code and documentation link appear only when the kind
    /// carries them.
    pub fn from_error(error: &RelayError) -> Self {
        let status = match error.status() {
            0 => FALLBACK_ERROR_STATUS,
            status => status,
        };

        let mut body = json!({
            "success": false,
            "message": error.to_string(),
            "status": status,
            "details": error.details(),
        });
        if let Some(code) = error.code() {
            body["code"] = json!(code);
        }
        if let Some(more_info) = error.more_info() {
            body["more_info"] = json!(more_info);
        }

        Self::new(status, body)
    }
}

fn default_headers() -> BTreeMap<String, String> {
    BTreeMap::from([
        ("Access-Control-Allow-Origin".into(), "*".into()),
        ("Access-Control-Allow-Methods".into(), "OPTIONS, POST, GET".into()),
        ("Access-Control-Allow-Headers".into(), "Content-Type".into()),
        ("Content-Type".into(), "application/json".into()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_headers_allow_cross_origin_json() {
        let response = ServerlessResponse::new(200, json!({ "success": true }));
        assert_eq!(response.headers.get("Access-Control-Allow-Origin").map(String::as_str), Some("*"));
        assert_eq!(response.headers.get("Content-Type").map(String::as_str), Some("application/json"));
        assert_eq!(response.status_code, 200);
    }

    #[test]
    fn supplied_headers_replace_the_defaults_entirely() {
        let headers = BTreeMap::from([
            ("Access-Control-Allow-Origin".to_string(), "https://example.com".to_string()),
            ("Access-Control-Allow-Methods".to_string(), "PATCH, PUT".to_string()),
        ]);
        let response = ServerlessResponse::with_headers(200, json!({}), headers);
        assert_eq!(response.headers.len(), 2);
        assert!(!response.headers.contains_key("Content-Type"));
    }

    #[test]
    fn error_body_carries_the_taxonomy_fields() {
        let error = RelayError::api(
            "fetch_flow",
            "not found",
            404,
            "20404",
            "https://www.twilio.com/docs/errors/20404",
            "",
        );
        let response = ServerlessResponse::from_error(&error);
        assert_eq!(response.status_code, 404);
        assert_eq!(response.body["success"], false);
        assert_eq!(response.body["code"], "20404");
        assert_eq!(response.body["more_info"], "https://www.twilio.com/docs/errors/20404");
    }

    #[test]
    fn statusless_errors_fall_back_to_400() {
        let error = RelayError::api("list_contents", "transport error", 0, "", "", "io error");
        let response = ServerlessResponse::from_error(&error);
        assert_eq!(response.status_code, 400);
    }

    #[test]
    fn validation_errors_keep_their_428() {
        let error = RelayError::validation("create_message", "body must not be empty");
        let response = ServerlessResponse::from_error(&error);
        assert_eq!(response.status_code, 428);
        assert!(response.body.get("code").is_none());
    }
}
