//! Mock backend and token stores.

use erasmus_client::{ApiClient, ClientConfig, ClientError, Session, TokenStore};
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

/// Fake Erasmus backend on a local port.
///
/// Routes are registered with [`MockBackend::respond`] and friends; every
/// request is recorded for later inspection.
pub struct MockBackend {
    server: MockServer,
}

impl MockBackend {
    /// Start a backend with no routes.
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Base URL of the backend.
    #[must_use]
    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Underlying wiremock server, for custom matchers.
    #[must_use]
    pub const fn server(&self) -> &MockServer {
        &self.server
    }

    /// Client with a fresh in-memory session.
    #[must_use]
    pub fn client(&self) -> ApiClient {
        self.client_with_session(Arc::new(Session::new()))
    }

    /// Client sharing `session`.
    #[must_use]
    pub fn client_with_session(&self, session: Arc<Session>) -> ApiClient {
        ApiClient::new(ClientConfig::new(self.uri()), session)
            .expect("mock server URI is a valid base URL")
    }

    /// Answer `verb path` with a JSON body.
    pub async fn respond(&self, verb: &str, route: &str, status: u16, body: Value) {
        Mock::given(method(verb))
            .and(path(route))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Answer `verb path` with no body.
    pub async fn respond_empty(&self, verb: &str, route: &str, status: u16) {
        Mock::given(method(verb))
            .and(path(route))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
    }

    /// Answer `verb path` with a raw text body.
    pub async fn respond_raw(&self, verb: &str, route: &str, status: u16, body: &str) {
        Mock::given(method(verb))
            .and(path(route))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&self.server)
            .await;
    }

    /// Every request received so far, oldest first.
    pub async fn requests(&self) -> Vec<Request> {
        self.server
            .received_requests()
            .await
            .expect("request recording is enabled")
    }

    /// Number of requests received so far.
    pub async fn request_count(&self) -> usize {
        self.requests().await.len()
    }

    /// JSON body of the most recent request.
    pub async fn last_body(&self) -> Value {
        let request = self
            .requests()
            .await
            .pop()
            .expect("backend received at least one request");
        request.body_json().expect("request body is JSON")
    }

    /// Header `name` of the most recent request.
    pub async fn last_header(&self, name: &str) -> Option<String> {
        let request = self.requests().await.pop()?;
        request
            .headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
    }
}

/// In-memory token store that counts how it is used.
#[derive(Debug, Default)]
pub struct RecordingTokenStore {
    token: Mutex<Option<String>>,
    loads: AtomicUsize,
    saves: AtomicUsize,
    clears: AtomicUsize,
}

impl RecordingTokenStore {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that already holds `token`.
    #[must_use]
    pub fn with_token(token: &str) -> Self {
        Self {
            token: Mutex::new(Some(token.to_string())),
            ..Self::default()
        }
    }

    /// Stored token, read without counting as a load.
    #[must_use]
    pub fn stored(&self) -> Option<String> {
        self.token.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Number of `load` calls.
    #[must_use]
    pub fn loads(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }

    /// Number of `save` calls.
    #[must_use]
    pub fn saves(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    /// Number of `clear` calls.
    #[must_use]
    pub fn clears(&self) -> usize {
        self.clears.load(Ordering::SeqCst)
    }
}

impl TokenStore for RecordingTokenStore {
    fn load(&self) -> erasmus_client::Result<Option<String>> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        Ok(self.stored())
    }

    fn save(&self, token: &str) -> erasmus_client::Result<()> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> erasmus_client::Result<()> {
        self.clears.fetch_add(1, Ordering::SeqCst);
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = None;
        Ok(())
    }
}

/// Token store whose every operation fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingTokenStore;

impl TokenStore for FailingTokenStore {
    fn load(&self) -> erasmus_client::Result<Option<String>> {
        Err(ClientError::TokenStore("load refused".to_string()))
    }

    fn save(&self, _token: &str) -> erasmus_client::Result<()> {
        Err(ClientError::TokenStore("save refused".to_string()))
    }

    fn clear(&self) -> erasmus_client::Result<()> {
        Err(ClientError::TokenStore("clear refused".to_string()))
    }
}
