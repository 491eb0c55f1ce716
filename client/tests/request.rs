//! Integration tests for request execution: headers, status handling and
//! error envelopes.

use erasmus_client::ClientError;
use erasmus_testing::{fixtures, init_tracing, MockBackend};
use reqwest::Method;
use serde_json::json;

#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn test_json_api_headers_without_token() {
    init_tracing();
    let backend = MockBackend::start().await;
    backend
        .respond("GET", "/v1/events", 200, fixtures::collection(vec![]))
        .await;

    let client = backend.client();
    client.request(Method::GET, "/v1/events", None).await.unwrap();

    assert_eq!(
        backend.last_header("content-type").await.as_deref(),
        Some("application/vnd.api+json")
    );
    assert_eq!(
        backend.last_header("accept").await.as_deref(),
        Some("application/vnd.api+json")
    );
    assert_eq!(backend.last_header("authorization").await, None);
}

#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn test_token_sent_with_jwt_scheme() {
    let backend = MockBackend::start().await;
    backend
        .respond("GET", "/v1/users/me", 200, fixtures::document(fixtures::sample_user(1)))
        .await;

    let client = backend.client();
    client.set_token(Some("abc.def.ghi".to_string())).unwrap();
    client.request(Method::GET, "/v1/users/me", None).await.unwrap();

    assert_eq!(
        backend.last_header("authorization").await.as_deref(),
        Some("JWT abc.def.ghi")
    );
}

#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn test_body_returned_verbatim() {
    let backend = MockBackend::start().await;
    let document = fixtures::collection(vec![fixtures::sample_event(1), fixtures::sample_event(2)]);
    backend.respond("GET", "/v1/events", 200, document.clone()).await;

    let body = backend
        .client()
        .request(Method::GET, "/v1/events", None)
        .await
        .unwrap();
    assert_eq!(body, document);
}

#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn test_no_content_yields_empty_object() {
    let backend = MockBackend::start().await;
    backend.respond_empty("DELETE", "/v1/events/4", 204).await;

    let body = backend
        .client()
        .request(Method::DELETE, "/v1/events/4", None)
        .await
        .unwrap();
    assert_eq!(body, json!({}));
}

#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn test_error_detail_becomes_message() {
    let backend = MockBackend::start().await;
    backend
        .respond("GET", "/v1/events/99", 404, json!({ "errors": [{ "detail": "X" }] }))
        .await;

    let err = backend
        .client()
        .request(Method::GET, "/v1/events/99", None)
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "X");
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn test_error_without_detail_uses_generic_message() {
    let backend = MockBackend::start().await;
    backend
        .respond("POST", "/v1/events", 500, json!({ "errors": [] }))
        .await;

    let err = backend
        .client()
        .request(Method::POST, "/v1/events", Some(&json!({ "data": {} })))
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Api { status: 500, .. }));
    assert_eq!(err.to_string(), "API request failed");
}

#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn test_non_json_error_body_is_reported() {
    let backend = MockBackend::start().await;
    backend
        .respond_raw("GET", "/v1/events", 502, "<html>Bad Gateway</html>")
        .await;

    let err = backend
        .client()
        .request(Method::GET, "/v1/events", None)
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::MalformedErrorBody { status: 502, .. }));
}

#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn test_non_json_success_body_is_a_parse_error() {
    let backend = MockBackend::start().await;
    backend.respond_raw("GET", "/v1/events", 200, "not json").await;

    let err = backend
        .client()
        .request(Method::GET, "/v1/events", None)
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::ResponseParseFailed(_)));
}

#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn test_trailing_slash_on_base_url() {
    use erasmus_client::{ApiClient, ClientConfig, Session};
    use std::sync::Arc;

    let backend = MockBackend::start().await;
    backend
        .respond("GET", "/v1/events/upcoming", 200, fixtures::collection(vec![]))
        .await;

    let config = ClientConfig::new(format!("{}/", backend.uri()));
    let client = ApiClient::new(config, Arc::new(Session::new())).unwrap();
    let events = client.get_upcoming_events().await.unwrap();

    assert!(events.is_empty());
    assert_eq!(backend.requests().await[0].url.path(), "/v1/events/upcoming");
}
