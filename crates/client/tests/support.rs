//! Shared helpers for the integration tests.

use relaykit_client::{ClientOptions, ClientParams, ProductUrls, TwilioClient};

/// A well-formed SID for the given prefix.
pub fn sid(prefix: &str) -> String {
    format!("{prefix}{}", "x".repeat(32))
}

/// A client whose every product URL points at the mock server.
pub fn test_client(base: &str) -> TwilioClient {
    TwilioClient::with_options(
        ClientParams { account_sid: sid("AC"), auth_token: "t".repeat(32) },
        ClientOptions {
            urls: Some(ProductUrls::single_host(base)),
            ..Default::default()
        },
    )
    .expect("test client")
}

/// A one-page list envelope with the given item key and items.
pub fn list_envelope(key: &str, items: serde_json::Value) -> serde_json::Value {
    list_envelope_with_next(key, items, None)
}

/// A list envelope with an explicit next-page link.
pub fn list_envelope_with_next(
    key: &str,
    items: serde_json::Value,
    next_page_url: Option<&str>,
) -> serde_json::Value {
    let mut envelope = serde_json::Map::new();
    envelope.insert(
        "meta".into(),
        serde_json::json!({ "key": key, "next_page_url": next_page_url }),
    );
    envelope.insert(key.to_string(), items);
    serde_json::Value::Object(envelope)
}

/// The vendor's not-found error envelope.
pub fn not_found_envelope() -> serde_json::Value {
    serde_json::json!({
        "status": 404,
        "code": 20404,
        "message": "The requested resource was not found",
        "more_info": "https://www.twilio.com/docs/errors/20404"
    })
}
