//! Integration tests for login, registration, users and session restore.

use erasmus_client::models::{UserPatch, UserRegistration};
use erasmus_client::{ClientError, Session};
use erasmus_testing::{fixtures, init_tracing, MockBackend, RecordingTokenStore};
use serde_json::json;
use std::sync::Arc;

#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn test_login_stores_token() {
    init_tracing();
    let backend = MockBackend::start().await;
    backend
        .respond(
            "POST",
            "/v1/auth/login",
            200,
            json!({ "access_token": "jwt-123", "token_type": "JWT" }),
        )
        .await;

    let store = Arc::new(RecordingTokenStore::new());
    let client = backend.client_with_session(Arc::new(Session::with_store(store.clone())));

    let auth = client.login("jan@example.eu", "s3cret").await.unwrap();

    assert_eq!(auth.access_token, "jwt-123");
    assert_eq!(auth.token_type, "JWT");
    assert_eq!(client.token().as_deref(), Some("jwt-123"));
    assert_eq!(store.stored().as_deref(), Some("jwt-123"));

    assert_eq!(
        backend.last_body().await,
        json!({ "email": "jan@example.eu", "password": "s3cret" })
    );
    assert_eq!(
        backend.last_header("content-type").await.as_deref(),
        Some("application/json")
    );
}

#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn test_login_failure_uses_error_field() {
    let backend = MockBackend::start().await;
    backend
        .respond("POST", "/v1/auth/login", 401, json!({ "error": "Account locked" }))
        .await;

    let client = backend.client();
    let err = client.login("jan@example.eu", "wrong").await.unwrap_err();

    assert!(matches!(err, ClientError::InvalidCredentials(_)));
    assert_eq!(err.to_string(), "Account locked");
    assert_eq!(client.token(), None);
}

#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn test_login_failure_generic_message() {
    let backend = MockBackend::start().await;
    backend
        .respond_raw("POST", "/v1/auth/login", 401, "Unauthorized")
        .await;

    let err = backend.client().login("jan@example.eu", "wrong").await.unwrap_err();
    assert_eq!(err.to_string(), "Invalid credentials");
}

#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn test_logout_makes_no_request() {
    let backend = MockBackend::start().await;
    let client = backend.client();
    client.set_token(Some("jwt-123".to_string())).unwrap();

    client.logout().unwrap();

    assert_eq!(client.token(), None);
    assert_eq!(backend.request_count().await, 0);
}

#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn test_register_sends_user_resource() {
    let backend = MockBackend::start().await;
    backend
        .respond("POST", "/v1/users", 201, fixtures::document(fixtures::sample_user(14)))
        .await;

    let input = UserRegistration::new("jan@example.eu", "s3cret").with_name("Jan", "Kowalski");
    let user = backend.client().register(&input).await.unwrap();
    assert_eq!(user.id, 14);
    assert!(user.is_admin);

    assert_eq!(
        backend.last_body().await,
        json!({
            "data": {
                "type": "user",
                "attributes": {
                    "email": "jan@example.eu",
                    "password": "s3cret",
                    "first-name": "Jan",
                    "last-name": "Kowalski"
                }
            }
        })
    );
}

#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn test_register_duplicate_email() {
    let backend = MockBackend::start().await;
    backend
        .respond("POST", "/v1/users", 409, fixtures::error_document("Email already exists"))
        .await;

    let err = backend
        .client()
        .register(&UserRegistration::new("jan@example.eu", "s3cret"))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Email already exists");
}

#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn test_current_user_and_update() {
    let backend = MockBackend::start().await;
    backend
        .respond("GET", "/v1/users/me", 200, fixtures::document(fixtures::sample_user(3)))
        .await;
    backend
        .respond("PATCH", "/v1/users/3", 200, fixtures::document(fixtures::sample_user(3)))
        .await;

    let client = backend.client();
    let me = client.get_current_user().await.unwrap();
    assert_eq!(me.first_name.as_deref(), Some("Jan"));
    assert_eq!(me.is_verified, Some(true));

    let patch = UserPatch {
        last_name: Some("Nowak".to_string()),
        ..UserPatch::default()
    };
    client.update_user(me.id, &patch).await.unwrap();

    assert_eq!(
        backend.last_body().await,
        json!({
            "data": { "type": "user", "id": "3", "attributes": { "last-name": "Nowak" } }
        })
    );
}

#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn test_get_user() {
    let backend = MockBackend::start().await;
    backend
        .respond("GET", "/v1/users/3", 200, fixtures::document(fixtures::sample_user(3)))
        .await;

    let user = backend.client().get_user(3).await.unwrap();
    assert_eq!(user.email, "coordinator@example.eu");
}

#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn test_restore_session_without_token() {
    let backend = MockBackend::start().await;

    let restored = backend.client().restore_session().await.unwrap();

    assert_eq!(restored, None);
    assert_eq!(backend.request_count().await, 0);
}

#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn test_restore_session_with_persisted_token() {
    let backend = MockBackend::start().await;
    backend
        .respond("GET", "/v1/users/me", 200, fixtures::document(fixtures::sample_user(3)))
        .await;

    let store = Arc::new(RecordingTokenStore::with_token("persisted-jwt"));
    let client = backend.client_with_session(Arc::new(Session::with_store(store.clone())));

    let restored = client.restore_session().await.unwrap();

    assert_eq!(restored.map(|user| user.id), Some(3));
    assert_eq!(
        backend.last_header("authorization").await.as_deref(),
        Some("JWT persisted-jwt")
    );
    assert_eq!(store.loads(), 1);
}

#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn test_restore_session_clears_rejected_token() {
    let backend = MockBackend::start().await;
    backend
        .respond("GET", "/v1/users/me", 401, fixtures::error_document("Token expired"))
        .await;

    let store = Arc::new(RecordingTokenStore::with_token("expired-jwt"));
    let client = backend.client_with_session(Arc::new(Session::with_store(store.clone())));

    let restored = client.restore_session().await.unwrap();

    assert_eq!(restored, None);
    assert_eq!(client.token(), None);
    assert_eq!(store.stored(), None);
    assert_eq!(store.clears(), 1);
}
