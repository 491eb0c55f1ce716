//! Google OAuth 2.0 sign-in helpers.
//!
//! Used to let applicants register with a Google account: build the
//! consent URL, exchange the returned code, and read the profile.
//!
//! # Configuration
//!
//! 1. Create OAuth 2.0 credentials in Google Cloud Console
//! 2. Add the callback URL to the authorized redirect URIs
//! 3. Set `GOOGLE_CLIENT_ID` and `GOOGLE_CLIENT_SECRET`

use crate::error::{ClientError, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Consent screen endpoint.
pub const AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";

/// Code exchange endpoint.
pub const TOKEN_URL: &str = "https://oauth2.googleapis.com/token";

/// Profile endpoint.
pub const USERINFO_URL: &str = "https://www.googleapis.com/oauth2/v2/userinfo";

/// Scopes needed to prefill a registration.
pub const SCOPES: &str = "openid email profile";

const EXCHANGE_FAILED: &str = "Failed to exchange code for token";
const USER_INFO_FAILED: &str = "Failed to get user info";

/// OAuth client credentials.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct GoogleOAuthConfig {
    /// OAuth 2.0 client ID
    pub client_id: String,
    /// OAuth 2.0 client secret
    pub client_secret: String,
}

impl GoogleOAuthConfig {
    /// Credentials given explicitly.
    #[must_use]
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    /// Read `GOOGLE_CLIENT_ID` and `GOOGLE_CLIENT_SECRET`; missing values are empty.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup.
    #[must_use]
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            client_id: lookup("GOOGLE_CLIENT_ID").unwrap_or_default(),
            client_secret: lookup("GOOGLE_CLIENT_SECRET").unwrap_or_default(),
        }
    }

    /// Whether both credentials are set.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.client_id.is_empty() && !self.client_secret.is_empty()
    }
}

impl fmt::Debug for GoogleOAuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GoogleOAuthConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

/// Tokens returned by the code exchange.
#[derive(Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct GoogleTokens {
    /// Short-lived access token
    pub access_token: String,
    /// Present when offline access was granted
    #[serde(default)]
    pub refresh_token: Option<String>,
}

impl fmt::Debug for GoogleTokens {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GoogleTokens")
            .field("access_token", &"<redacted>")
            .field("has_refresh_token", &self.refresh_token.is_some())
            .finish()
    }
}

/// Google account profile.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct GoogleUser {
    /// Google account id
    pub id: String,
    /// Primary email
    pub email: String,
    /// Email verified by Google
    #[serde(default)]
    pub verified_email: bool,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Given name
    #[serde(default)]
    pub given_name: String,
    /// Family name
    #[serde(default)]
    pub family_name: String,
    /// Avatar URL
    #[serde(default)]
    pub picture: String,
    /// Preferred locale
    #[serde(default)]
    pub locale: String,
}

/// Google OAuth helper bound to one set of credentials.
#[derive(Clone, Debug)]
pub struct GoogleOAuth {
    config: GoogleOAuthConfig,
    http: Client,
    auth_url: String,
    token_url: String,
    userinfo_url: String,
}

impl GoogleOAuth {
    /// Helper talking to Google's production endpoints.
    #[must_use]
    pub fn new(config: GoogleOAuthConfig) -> Self {
        Self {
            config,
            http: Client::new(),
            auth_url: AUTH_URL.to_string(),
            token_url: TOKEN_URL.to_string(),
            userinfo_url: USERINFO_URL.to_string(),
        }
    }

    /// Builder: Override the consent screen endpoint
    #[must_use]
    pub fn with_auth_url(mut self, url: impl Into<String>) -> Self {
        self.auth_url = url.into();
        self
    }

    /// Builder: Override the code exchange endpoint
    #[must_use]
    pub fn with_token_url(mut self, url: impl Into<String>) -> Self {
        self.token_url = url.into();
        self
    }

    /// Builder: Override the profile endpoint
    #[must_use]
    pub fn with_userinfo_url(mut self, url: impl Into<String>) -> Self {
        self.userinfo_url = url.into();
        self
    }

    /// Credentials in use
    #[must_use]
    pub fn config(&self) -> &GoogleOAuthConfig {
        &self.config
    }

    /// URL of the consent screen. `state` is echoed back to the callback.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::OAuth`] if the query cannot be encoded.
    pub fn authorization_url(&self, redirect_uri: &str, state: Option<&str>) -> Result<String> {
        let mut params = vec![
            ("client_id", self.config.client_id.as_str()),
            ("redirect_uri", redirect_uri),
            ("response_type", "code"),
            ("scope", SCOPES),
            ("access_type", "offline"),
            ("prompt", "consent"),
        ];
        if let Some(state) = state {
            params.push(("state", state));
        }

        let query = serde_urlencoded::to_string(&params)
            .map_err(|e| ClientError::OAuth(format!("Failed to build URL: {e}")))?;

        Ok(format!("{}?{query}", self.auth_url))
    }

    /// Trade an authorization code for tokens.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::OAuth`] if Google rejects the code, and
    /// [`ClientError::RequestFailed`] on transport failure.
    pub async fn exchange_code(&self, code: &str, redirect_uri: &str) -> Result<GoogleTokens> {
        let params = [
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
            ("code", code),
            ("grant_type", "authorization_code"),
            ("redirect_uri", redirect_uri),
        ];

        let response = self.http.post(&self.token_url).form(&params).send().await?;

        if !response.status().is_success() {
            tracing::warn!(status = response.status().as_u16(), "Google code exchange rejected");
            return Err(ClientError::OAuth(EXCHANGE_FAILED.to_string()));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ResponseParseFailed(format!("Google token response: {e}")))
    }

    /// Read the profile of the account `access_token` belongs to.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::OAuth`] if Google rejects the token, and
    /// [`ClientError::RequestFailed`] on transport failure.
    pub async fn user_info(&self, access_token: &str) -> Result<GoogleUser> {
        let response = self
            .http
            .get(&self.userinfo_url)
            .bearer_auth(access_token)
            .send()
            .await?;

        if !response.status().is_success() {
            tracing::warn!(status = response.status().as_u16(), "Google profile request rejected");
            return Err(ClientError::OAuth(USER_INFO_FAILED.to_string()));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ResponseParseFailed(format!("Google user info: {e}")))
    }
}
