//! Studio flows and executions against a mock server.

use serde_json::json;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use relaykit_domain::{ExecutionParams, RelayError};

#[path = "support.rs"]
mod support;

#[tokio::test]
async fn fetches_a_flow_by_sid() {
    let server = MockServer::start().await;
    let flow_sid = support::sid("FW");

    Mock::given(method("GET"))
        .and(path(format!("/Flows/{flow_sid}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sid": flow_sid,
            "friendly_name": "onboarding",
            "status": "published",
            "valid": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = support::test_client(&server.uri());
    let flow = client.studio().fetch_flow(&flow_sid).await.expect("flow");
    assert_eq!(flow.status.as_deref(), Some("published"));
    assert_eq!(flow.valid, Some(true));
}

#[tokio::test]
async fn lists_every_execution_of_a_flow() {
    let server = MockServer::start().await;
    let flow_sid = support::sid("FW");

    Mock::given(method("GET"))
        .and(path(format!("/Flows/{flow_sid}/Executions")))
        .respond_with(ResponseTemplate::new(200).set_body_json(support::list_envelope(
            "executions",
            json!([
                { "sid": support::sid("FN"), "status": "ended" },
                { "sid": support::sid("FO"), "status": "active" }
            ]),
        )))
        .mount(&server)
        .await;

    let client = support::test_client(&server.uri());
    let executions = client.studio().list_executions(&flow_sid).await.expect("executions");
    assert_eq!(executions.len(), 2);
    assert_eq!(executions[0].status.as_deref(), Some("ended"));
}

#[tokio::test]
async fn creates_an_execution_with_addresses_and_parameters() {
    let server = MockServer::start().await;
    let flow_sid = support::sid("FW");

    Mock::given(method("POST"))
        .and(path(format!("/Flows/{flow_sid}/Executions")))
        .and(body_string_contains("Parameters="))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "sid": support::sid("FN"),
            "flow_sid": flow_sid,
            "contact_channel_address": "whatsapp:+15551234567",
            "status": "active"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = support::test_client(&server.uri());
    let params = ExecutionParams {
        to: "whatsapp:+15551234567".into(),
        from: "whatsapp:+15559990000".into(),
        parameters: Some(json!({ "campaign": "spring" })),
    };
    let execution =
        client.studio().create_execution(&flow_sid, &params).await.expect("execution");
    assert_eq!(execution.status.as_deref(), Some("active"));
}

#[tokio::test]
async fn execution_addresses_are_validated_before_any_request() {
    let server = MockServer::start().await;
    let client = support::test_client(&server.uri());

    let params = ExecutionParams {
        to: "no-digits-here".into(),
        from: "whatsapp:+15559990000".into(),
        parameters: None,
    };
    let err =
        client.studio().create_execution(&support::sid("FW"), &params).await.unwrap_err();
    assert!(matches!(err, RelayError::Validation { .. }));
    assert!(err.details().contains("to"));

    let requests = server.received_requests().await.unwrap();
    assert!(requests.is_empty());
}
