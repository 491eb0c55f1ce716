//! Bearer token session.

use crate::error::Result;
use crate::store::TokenStore;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Default)]
struct TokenState {
    token: Option<String>,
    loaded: bool,
}

/// Holder of the bearer token sent with every request.
///
/// A session is shared by [`Arc`] between every client built on it;
/// separate sessions never see each other's token. When a
/// [`TokenStore`] is attached, the token is mirrored into it on every
/// change and read back lazily, at most once per session, the first time
/// no in-memory token is available.
pub struct Session {
    state: Mutex<TokenState>,
    store: Option<Arc<dyn TokenStore>>,
}

impl Session {
    /// Session that lives only in memory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Mutex::new(TokenState::default()),
            store: None,
        }
    }

    /// Session persisted through `store`.
    #[must_use]
    pub fn with_store(store: Arc<dyn TokenStore>) -> Self {
        Self {
            state: Mutex::new(TokenState::default()),
            store: Some(store),
        }
    }

    fn state(&self) -> MutexGuard<'_, TokenState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replace the token; `None` logs out.
    ///
    /// The in-memory token changes even if mirroring into the store fails.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::TokenStore`](crate::ClientError::TokenStore)
    /// if the attached store cannot be updated.
    pub fn set_token(&self, token: Option<String>) -> Result<()> {
        {
            let mut state = self.state();
            state.token.clone_from(&token);
            state.loaded = true;
        }

        match (&self.store, token) {
            (Some(store), Some(token)) => store.save(&token),
            (Some(store), None) => store.clear(),
            (None, _) => Ok(()),
        }
    }

    /// Current token, reading the store on first use.
    ///
    /// A store that fails to load is treated as empty.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        let mut state = self.state();
        if !state.loaded {
            state.loaded = true;
            // Lock stays held for the load; callers and logouts queue behind it.
            if let Some(store) = &self.store {
                match store.load() {
                    Ok(token) => state.token = token,
                    Err(e) => tracing::warn!(error = %e, "Failed to load persisted token"),
                }
            }
        }
        state.token.clone()
    }

    /// Whether a token is available.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Forget the token here and in the store.
    ///
    /// # Errors
    ///
    /// Same as [`Session::set_token`].
    pub fn clear(&self) -> Result<()> {
        self.set_token(None)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state();
        f.debug_struct("Session")
            .field("has_token", &state.token.is_some())
            .field("loaded", &state.loaded)
            .field("persistent", &self.store.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingStore {
        token: Mutex<Option<String>>,
        loads: AtomicUsize,
        fail_load: bool,
    }

    impl TokenStore for CountingStore {
        fn load(&self) -> Result<Option<String>> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            if self.fail_load {
                return Err(ClientError::TokenStore("disk on fire".to_string()));
            }
            Ok(self.token.lock().unwrap_or_else(PoisonError::into_inner).clone())
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

    #[test]
    fn test_memory_session() {
        let session = Session::new();
        assert_eq!(session.token(), None);
        assert!(session.set_token(Some("abc".to_string())).is_ok());
        assert_eq!(session.token().as_deref(), Some("abc"));
        assert!(session.set_token(None).is_ok());
        assert_eq!(session.token(), None);
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_store_is_read_once() {
        let store = Arc::new(CountingStore {
            token: Mutex::new(Some("persisted".to_string())),
            ..CountingStore::default()
        });
        let session = Session::with_store(store.clone());

        assert_eq!(session.token().as_deref(), Some("persisted"));
        assert_eq!(session.token().as_deref(), Some("persisted"));
        assert_eq!(store.loads.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_set_token_skips_store_read() {
        let store = Arc::new(CountingStore::default());
        let session = Session::with_store(store.clone());

        assert!(session.set_token(Some("abc".to_string())).is_ok());
        assert_eq!(session.token().as_deref(), Some("abc"));
        assert_eq!(store.loads.load(Ordering::SeqCst), 0);
        assert_eq!(store.load().ok().flatten().as_deref(), Some("abc"));
    }

    #[test]
    fn test_cleared_token_is_not_reloaded() {
        let store = Arc::new(CountingStore {
            token: Mutex::new(Some("stale".to_string())),
            ..CountingStore::default()
        });
        let session = Session::with_store(store.clone());

        assert!(session.clear().is_ok());
        assert_eq!(session.token(), None);
        assert_eq!(store.loads.load(Ordering::SeqCst), 0);
        assert_eq!(store.load().ok().flatten(), None);
    }

    #[test]
    fn test_failing_load_counts_as_empty() {
        let store = Arc::new(CountingStore {
            fail_load: true,
            ..CountingStore::default()
        });
        let session = Session::with_store(store.clone());

        assert_eq!(session.token(), None);
        assert_eq!(session.token(), None);
        assert_eq!(store.loads.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_debug_hides_token() {
        let session = Session::new();
        assert!(session.set_token(Some("super-secret".to_string())).is_ok());
        assert!(!format!("{session:?}").contains("super-secret"));
    }
}
