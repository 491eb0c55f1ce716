//! Client configuration.
//!
//! Configuration values come from the application or the environment;
//! nothing beyond the local development default is hardcoded.

use crate::error::{ClientError, Result};
use crate::session::Session;
use crate::store::FileTokenStore;
use std::path::PathBuf;
use std::sync::Arc;

/// Environment variable holding the backend base URL.
pub const API_URL_VAR: &str = "ERASMUS_API_URL";

/// Environment variable holding the token directory.
pub const TOKEN_DIR_VAR: &str = "ERASMUS_TOKEN_DIR";

/// Base URL used when nothing is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Where and how the client talks to the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL without trailing slash, e.g. `https://api.example.eu`.
    pub base_url: String,

    /// Directory for the persisted token. `None` keeps the token in memory.
    pub token_dir: Option<PathBuf>,

    /// `User-Agent` header sent with every request.
    pub user_agent: String,
}

impl ClientConfig {
    /// Configuration for `base_url`. One trailing `/` is dropped.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            token_dir: None,
            user_agent: concat!("erasmus-client/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }

    /// Read [`API_URL_VAR`] and [`TOKEN_DIR_VAR`] from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup. Empty values count as unset.
    #[must_use]
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let config = Self::new(var(API_URL_VAR).unwrap_or_else(|| DEFAULT_API_URL.to_string()));
        match var(TOKEN_DIR_VAR) {
            Some(dir) => config.with_token_dir(dir),
            None => config,
        }
    }

    /// Builder: Persist the token under `dir`
    #[must_use]
    pub fn with_token_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.token_dir = Some(dir.into());
        self
    }

    /// Builder: Override the `User-Agent` header
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Full URL for `endpoint` (which starts with `/`).
    #[must_use]
    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{endpoint}", self.base_url)
    }

    /// Check the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] if the base URL is not an
    /// `http://` or `https://` URL with a host.
    pub fn validate(&self) -> Result<()> {
        let rest = self
            .base_url
            .strip_prefix("https://")
            .or_else(|| self.base_url.strip_prefix("http://"))
            .ok_or_else(|| {
                ClientError::Config(format!(
                    "base URL must start with http:// or https://: {}",
                    self.base_url
                ))
            })?;

        if rest.is_empty() || rest.starts_with('/') {
            return Err(ClientError::Config(format!(
                "base URL has no host: {}",
                self.base_url
            )));
        }
        Ok(())
    }

    /// Session matching this configuration: file-backed when a token
    /// directory is set, in-memory otherwise.
    #[must_use]
    pub fn session(&self) -> Session {
        match &self.token_dir {
            Some(dir) => Session::with_store(Arc::new(FileTokenStore::new(dir))),
            None => Session::new(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}
