//! Persistent token storage.
//!
//! A [`Session`](crate::Session) keeps the bearer token in memory and
//! mirrors it into a [`TokenStore`] so it survives restarts.
//! [`FileTokenStore`] keeps one file per key under a directory, the way a
//! browser keeps an entry in local storage.

use crate::error::{ClientError, Result};
use std::fmt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

/// Key the bearer token is persisted under.
pub const TOKEN_KEY: &str = "erasmus_token";

/// Durable home for the bearer token.
///
/// Calls are synchronous and short. A session holds its lock while it
/// loads, so `load` must not call back into the session.
pub trait TokenStore: Send + Sync {
    /// Read the persisted token, `None` if nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::TokenStore`] if the backing storage fails.
    fn load(&self) -> Result<Option<String>>;

    /// Persist `token`, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::TokenStore`] if the backing storage fails.
    fn save(&self, token: &str) -> Result<()>;

    /// Forget the persisted token. Clearing an empty store is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::TokenStore`] if the backing storage fails.
    fn clear(&self) -> Result<()>;
}

/// Process-local token store.
#[derive(Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `token`.
    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(token.into())),
        }
    }
}

impl fmt::Debug for MemoryTokenStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let has_token = self
            .token
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some();
        f.debug_struct("MemoryTokenStore")
            .field("has_token", &has_token)
            .finish()
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<Option<String>> {
        Ok(self
            .token
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }

    fn save(&self, token: &str) -> Result<()> {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = None;
        Ok(())
    }
}

/// Token store backed by a file named [`TOKEN_KEY`] in a directory.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Store the token under `dir`. The directory is created on first save.
    #[must_use]
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(TOKEN_KEY),
        }
    }

    /// File the token is written to.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => {
                let token = contents.trim();
                Ok((!token.is_empty()).then(|| token.to_string()))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ClientError::TokenStore(format!(
                "reading {}: {e}",
                self.path.display()
            ))),
        }
    }

    fn save(&self, token: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ClientError::TokenStore(format!("creating {}: {e}", parent.display()))
            })?;
        }
        std::fs::write(&self.path, token)
            .map_err(|e| ClientError::TokenStore(format!("writing {}: {e}", self.path.display())))
    }

    fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Err(e) if e.kind() != ErrorKind::NotFound => Err(ClientError::TokenStore(format!(
                "removing {}: {e}",
                self.path.display()
            ))),
            _ => Ok(()),
        }
    }
}
