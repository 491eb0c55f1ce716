use crate::client::ApiClient;
use crate::error::Result;
use crate::jsonapi::{NewResource, Resource};
use crate::models::{User, UserPatch, UserRegistration};
use reqwest::Method;

impl ApiClient {
    /// Create an account. Does not log in.
    ///
    /// # Errors
    ///
    /// Fails on transport, API or decoding errors; a taken email surfaces
    /// as [`ClientError::Api`](crate::ClientError::Api).
    pub async fn register(&self, user: &UserRegistration) -> Result<User> {
        let body = NewResource::create(User::TYPE, user.to_attributes()).into_document();
        let created: User = self.send_one(Method::POST, "/v1/users", &body).await?;
        tracing::info!(user_id = created.id, "Registered user");
        Ok(created)
    }

    /// Fetch the user the current token belongs to.
    ///
    /// # Errors
    ///
    /// Fails on transport, API or decoding errors.
    pub async fn get_current_user(&self) -> Result<User> {
        self.fetch_one("/v1/users/me").await
    }

    /// Fetch one user.
    ///
    /// # Errors
    ///
    /// Fails on transport, API or decoding errors.
    pub async fn get_user(&self, id: u64) -> Result<User> {
        self.fetch_one(&format!("/v1/users/{id}")).await
    }

    /// Change a user's names.
    ///
    /// # Errors
    ///
    /// Fails on transport, API or decoding errors.
    pub async fn update_user(&self, id: u64, patch: &UserPatch) -> Result<User> {
        let body = NewResource::update(User::TYPE, id, patch.to_attributes()).into_document();
        self.send_one(Method::PATCH, &format!("/v1/users/{id}"), &body).await
    }

    /// Resume a stored session at startup.
    ///
    /// Returns `None` without a request when there is no token. A token the
    /// backend no longer accepts is dropped and also yields `None`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::TokenStore`](crate::ClientError::TokenStore)
    /// only if dropping a rejected token fails.
    pub async fn restore_session(&self) -> Result<Option<User>> {
        if self.token().is_none() {
            return Ok(None);
        }

        match self.get_current_user().await {
            Ok(user) => {
                tracing::debug!(user_id = user.id, "Restored session");
                Ok(Some(user))
            }
            Err(e) => {
                tracing::warn!(error = %e, "Stored token rejected, clearing session");
                self.session().clear()?;
                Ok(None)
            }
        }
    }
}
