//! Erasmus backend client: request execution and authentication.
//!
//! Resource operations live in [`crate::resources`], one `impl ApiClient`
//! block per resource, all going through [`ApiClient::request`].

use crate::config::ClientConfig;
use crate::error::{ClientError, Result, GENERIC_API_FAILURE, INVALID_CREDENTIALS};
use crate::jsonapi::{self, Page, Resource, MEDIA_TYPE};
use crate::models::AuthResponse;
use crate::session::Session;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, StatusCode};
use serde_json::{json, Map, Value};
use std::sync::Arc;

/// Login endpoint; the only call that does not speak JSON:API.
pub const LOGIN_ENDPOINT: &str = "/v1/auth/login";

/// Erasmus backend client.
///
/// Cheap to clone; clones share the connection pool and the [`Session`].
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    config: Arc<ClientConfig>,
    session: Arc<Session>,
}

impl ApiClient {
    /// Create a client for `config` sending the token held by `session`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] if the configuration is invalid and
    /// [`ClientError::RequestFailed`] if the HTTP client cannot be built.
    pub fn new(config: ClientConfig, session: Arc<Session>) -> Result<Self> {
        config.validate()?;
        let http = Client::builder().user_agent(config.user_agent.as_str()).build()?;

        Ok(Self {
            http,
            config: Arc::new(config),
            session,
        })
    }

    /// Create a client from `ERASMUS_API_URL` / `ERASMUS_TOKEN_DIR`.
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::new`].
    pub fn from_env() -> Result<Self> {
        let config = ClientConfig::from_env();
        let session = Arc::new(config.session());
        Self::new(config, session)
    }

    /// Configuration in use
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Session shared by this client and its clones
    #[must_use]
    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    /// Replace the bearer token; `None` logs out.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::TokenStore`] if the token cannot be persisted.
    pub fn set_token(&self, token: Option<String>) -> Result<()> {
        self.session.set_token(token)
    }

    /// Current bearer token
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.session.token()
    }

    /// Execute one JSON:API request and return the raw response body.
    ///
    /// `endpoint` is appended to the base URL as is. A `204 No Content`
    /// answer yields an empty JSON object.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Api`] on a non-2xx status, carrying
    ///   `errors[0].detail` or a generic message
    /// - [`ClientError::MalformedErrorBody`] if that error body is not JSON
    /// - [`ClientError::RequestFailed`] on transport failure
    /// - [`ClientError::ResponseParseFailed`] if a success body is not JSON
    pub async fn request(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&Value>,
    ) -> Result<Value> {
        tracing::debug!(%method, endpoint, "Sending request");

        let mut builder = self
            .http
            .request(method.clone(), self.config.url(endpoint))
            .header(CONTENT_TYPE, MEDIA_TYPE)
            .header(ACCEPT, MEDIA_TYPE);

        if let Some(token) = self.session.token() {
            builder = builder.header(AUTHORIZATION, format!("JWT {token}"));
        }
        if let Some(body) = body {
            builder = builder.body(body.to_string());
        }

        let response = builder.send().await?;
        let status = response.status();
        tracing::debug!(%method, endpoint, status = status.as_u16(), "Received response");

        if status == StatusCode::NO_CONTENT {
            return Ok(Value::Object(Map::new()));
        }

        let bytes = response.bytes().await?;

        if !status.is_success() {
            let err = api_error(status, &bytes);
            tracing::warn!(%method, endpoint, status = status.as_u16(), error = %err, "Request failed");
            return Err(err);
        }

        serde_json::from_slice(&bytes)
            .map_err(|e| ClientError::ResponseParseFailed(format!("{method} {endpoint}: {e}")))
    }

    /// Exchange credentials for a bearer token and store it in the session.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidCredentials`] carrying the backend's
    /// `error` field, or "Invalid credentials" when there is none.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse> {
        tracing::debug!(endpoint = LOGIN_ENDPOINT, "Sending login request");

        let response = self
            .http
            .post(self.config.url(LOGIN_ENDPOINT))
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await?;

        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let message = serde_json::from_slice::<Value>(&bytes)
                .ok()
                .and_then(|body| body.get("error").and_then(Value::as_str).map(str::to_string))
                .filter(|message| !message.is_empty())
                .unwrap_or_else(|| INVALID_CREDENTIALS.to_string());
            tracing::warn!(status = status.as_u16(), "Login rejected");
            return Err(ClientError::InvalidCredentials(message));
        }

        let auth: AuthResponse = serde_json::from_slice(&bytes)
            .map_err(|e| ClientError::ResponseParseFailed(format!("login response: {e}")))?;
        self.session.set_token(Some(auth.access_token.clone()))?;

        tracing::info!("Logged in");
        Ok(auth)
    }

    /// Drop the bearer token. No request is sent.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::TokenStore`] if the persisted token cannot be removed.
    pub fn logout(&self) -> Result<()> {
        self.session.clear()?;
        tracing::info!("Logged out");
        Ok(())
    }

    /// GET a collection endpoint and keep the reported total.
    ///
    /// The typed list calls return only the items; use this when the
    /// backend's `meta.count` matters, e.g. `/v1/events/3/attendees`.
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::request`], plus
    /// [`ClientError::ResponseParseFailed`] if the body is not a
    /// collection of `R`.
    pub async fn fetch_page<R: Resource>(&self, endpoint: &str) -> Result<Page<R>> {
        jsonapi::decode_page(self.request(Method::GET, endpoint, None).await?)
    }

    pub(crate) async fn fetch_one<R: Resource>(&self, endpoint: &str) -> Result<R> {
        jsonapi::decode_one(self.request(Method::GET, endpoint, None).await?)
    }

    pub(crate) async fn fetch_many<R: Resource>(&self, endpoint: &str) -> Result<Vec<R>> {
        jsonapi::decode_many(self.request(Method::GET, endpoint, None).await?)
    }

    pub(crate) async fn send_one<R: Resource>(
        &self,
        method: Method,
        endpoint: &str,
        body: &Value,
    ) -> Result<R> {
        jsonapi::decode_one(self.request(method, endpoint, Some(body)).await?)
    }

    pub(crate) async fn delete(&self, endpoint: &str) -> Result<()> {
        self.request(Method::DELETE, endpoint, None).await?;
        Ok(())
    }
}

fn api_error(status: StatusCode, body: &[u8]) -> ClientError {
    match serde_json::from_slice::<Value>(body) {
        Ok(body) => ClientError::Api {
            status: status.as_u16(),
            message: jsonapi::error_detail(&body)
                .unwrap_or(GENERIC_API_FAILURE)
                .to_string(),
        },
        Err(e) => ClientError::MalformedErrorBody {
            status: status.as_u16(),
            reason: e.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_uses_detail() {
        let err = api_error(
            StatusCode::NOT_FOUND,
            br#"{"errors":[{"detail":"Event not found"}]}"#,
        );
        assert!(matches!(err, ClientError::Api { status: 404, .. }));
        assert_eq!(err.to_string(), "Event not found");
    }

    #[test]
    fn test_api_error_generic_fallback() {
        let err = api_error(StatusCode::UNPROCESSABLE_ENTITY, br#"{"message":"nope"}"#);
        assert_eq!(err.to_string(), GENERIC_API_FAILURE);
        assert_eq!(err.status(), Some(422));
    }

    #[test]
    fn test_api_error_malformed_body() {
        let err = api_error(StatusCode::BAD_GATEWAY, b"<html>Bad Gateway</html>");
        assert!(matches!(err, ClientError::MalformedErrorBody { status: 502, .. }));
    }

    #[test]
    fn test_new_rejects_invalid_base_url() {
        let result = ApiClient::new(ClientConfig::new("localhost:8080"), Arc::new(Session::new()));
        assert!(matches!(result, Err(ClientError::Config(_))));
    }
}
