//! Pagination accumulation and the zero-result listing rules.

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use relaykit_domain::RelayError;

#[path = "support.rs"]
mod support;

#[tokio::test]
async fn accumulates_two_pages_preserving_order() {
    let server = MockServer::start().await;
    let next_url = format!("{}/ContentPage2", server.uri());

    Mock::given(method("GET"))
        .and(path("/Content"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            support::list_envelope_with_next(
                "contents",
                json!([
                    { "sid": support::sid("HA"), "friendly_name": "first" },
                    { "sid": support::sid("HB"), "friendly_name": "second" }
                ]),
                Some(&next_url),
            ),
        ))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/ContentPage2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(support::list_envelope(
            "contents",
            json!([
                { "sid": support::sid("HC"), "friendly_name": "third" },
                { "sid": support::sid("HD"), "friendly_name": "fourth" }
            ]),
        )))
        .expect(1)
        .mount(&server)
        .await;

    let client = support::test_client(&server.uri());
    let contents = client.content().list_contents().await.expect("contents");

    let names: Vec<_> =
        contents.iter().filter_map(|c| c.friendly_name.as_deref()).collect();
    assert_eq!(names, vec!["first", "second", "third", "fourth"]);
}

#[tokio::test]
async fn a_page_without_an_item_collection_yields_an_empty_list() {
    let server = MockServer::start().await;

    // The envelope names a key but carries no collection under it.
    Mock::given(method("GET"))
        .and(path("/ParticipantConversations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(support::list_envelope(
            "conversations",
            serde_json::Value::Null,
        )))
        .mount(&server)
        .await;

    let client = support::test_client(&server.uri());
    let conversations = client
        .conversations()
        .conversations_for_address("whatsapp:+15551234567")
        .await
        .expect("empty result");
    assert!(conversations.is_empty());
}

#[tokio::test]
async fn failure_on_a_later_page_propagates_to_the_caller() {
    let server = MockServer::start().await;
    let next_url = format!("{}/ContentPage2", server.uri());

    Mock::given(method("GET"))
        .and(path("/Content"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            support::list_envelope_with_next(
                "contents",
                json!([{ "sid": support::sid("HA") }]),
                Some(&next_url),
            ),
        ))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/ContentPage2"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "status": 500,
            "code": 20500,
            "message": "Internal server error",
            "more_info": "https://www.twilio.com/docs/errors/20500"
        })))
        .mount(&server)
        .await;

    let client = support::test_client(&server.uri());
    let err = client.content().list_contents().await.unwrap_err();
    assert_eq!(err.status(), 500);
    assert_eq!(err.code(), Some("20500"));
}

#[tokio::test]
async fn zero_content_templates_raise_a_stable_not_found_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/Content"))
        .respond_with(ResponseTemplate::new(200).set_body_json(support::list_envelope(
            "contents",
            json!([]),
        )))
        .mount(&server)
        .await;

    let client = support::test_client(&server.uri());
    let err = client.content().list_contents().await.unwrap_err();

    assert!(matches!(err, RelayError::Api { .. }));
    assert_eq!(err.status(), 404);
    assert_eq!(err.code(), Some("CONTENTS_NOT_FOUND"));
    assert!(err.more_info().is_some_and(|url| url.contains("content-editor")));
}

#[tokio::test]
async fn zero_studio_flows_raise_a_stable_not_found_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/Flows"))
        .respond_with(ResponseTemplate::new(200).set_body_json(support::list_envelope(
            "flows",
            json!([]),
        )))
        .mount(&server)
        .await;

    let client = support::test_client(&server.uri());
    let err = client.studio().list_flows().await.unwrap_err();

    assert_eq!(err.status(), 404);
    assert_eq!(err.code(), Some("STUDIO_FLOWS_NOT_FOUND"));
}

#[tokio::test]
async fn find_content_by_name_matches_the_friendly_name() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/Content"))
        .respond_with(ResponseTemplate::new(200).set_body_json(support::list_envelope(
            "contents",
            json!([
                { "sid": support::sid("HA"), "friendly_name": "order-update" },
                { "sid": support::sid("HB"), "friendly_name": "welcome" }
            ]),
        )))
        .mount(&server)
        .await;

    let client = support::test_client(&server.uri());
    let found =
        client.content().find_content_by_name("welcome").await.expect("listed");
    assert_eq!(found.expect("a match").sid, support::sid("HB"));

    let missing =
        client.content().find_content_by_name("unknown").await.expect("listed");
    assert!(missing.is_none());
}
