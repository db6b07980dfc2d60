use std::time::Duration;

use lemlist_api::rest::WebhookEventType;
use lemlist_api::{ClientConfig, ErrorKind, LemlistRestClient};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::common::{setup, API_KEY};

#[tokio::test]
async fn non_json_body_is_decode_failure() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/team"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("<html>Bad gateway</html>", "text/html"))
        .mount(&server)
        .await;

    let err = client.get_team().await.unwrap_err();
    assert!(
        matches!(err.kind, ErrorKind::Decode(ref m) if m.contains("content-type: text/html")),
        "unexpected error: {err:?}"
    );
}

#[tokio::test]
async fn missing_required_field_is_validation_failure() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/campaigns/cam_1/pause"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"_id": "cam_1"})))
        .mount(&server)
        .await;

    let err = client.pause_campaign("cam_1").await.unwrap_err();
    assert!(err.is_validation());
    assert!(err.to_string().contains("state"));
}

#[tokio::test]
async fn out_of_picklist_value_is_validation_failure() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/hooks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "_id": "hoo_1",
            "targetUrl": "https://example.com/hook",
            "type": "emailsForwarded",
            "createdAt": "2024-01-01"
        }])))
        .mount(&server)
        .await;

    let err = client.get_webhooks().await.unwrap_err();
    assert!(err.is_validation());

    // Sanity check: a declared value passes.
    assert_eq!(
        serde_json::from_value::<WebhookEventType>(json!("emailsBounced")).unwrap(),
        WebhookEventType::EmailsBounced
    );
}

#[tokio::test]
async fn unreachable_host_is_failure_not_panic() {
    let config = ClientConfig::builder()
        .with_base_url("http://127.0.0.1:9/api")
        .with_connect_timeout(Duration::from_secs(2))
        .build();
    let client = LemlistRestClient::with_config(API_KEY, config).unwrap();

    let err = client.get_campaigns(None).await.unwrap_err();
    assert!(err.is_transport(), "unexpected error: {err:?}");
}

#[tokio::test]
async fn rate_limit_carries_retry_after() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/team/credits"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "12"))
        .expect(1)
        .mount(&server)
        .await;

    let err = client.get_team_credits().await.unwrap_err();
    assert!(err.is_rate_limited());
    assert_eq!(err.retry_after(), Some(Duration::from_secs(12)));
}

#[tokio::test]
async fn rejected_key_is_not_echoed() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/team"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({"message": format!("Invalid API key {API_KEY}")})),
        )
        .mount(&server)
        .await;

    let err = client.get_team().await.unwrap_err();
    assert!(err.is_auth_error());
    let rendered = err.to_string();
    assert!(!rendered.contains(API_KEY));
    assert!(rendered.contains("[REDACTED]"));
}

#[tokio::test]
async fn server_error_is_api_error() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/api/hooks/hoo_1"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
        .expect(1)
        .mount(&server)
        .await;

    let err = client.delete_webhook("hoo_1").await.unwrap_err();
    assert!(err.is_api_error());
    assert_eq!(err.status(), Some(503));
    assert!(matches!(err.kind, ErrorKind::Http { ref message, .. } if message == "upstream unavailable"));
}

#[tokio::test]
async fn no_retry_on_failure() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/team/senders"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    assert!(client.get_team_senders().await.is_err());
}
