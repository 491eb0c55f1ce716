//! Users and authentication payloads.

use crate::jsonapi::Resource;
use crate::wire::{wire_fields, Attributes};
use serde::{Deserialize, Serialize};
use std::fmt;

wire_fields! {
    /// User attribute keys.
    pub enum UserField {
        Email => ("email", "email"),
        Password => ("password", "password"),
        FirstName => ("first_name", "first-name"),
        LastName => ("last_name", "last-name"),
        IsAdmin => ("is_admin", "is-admin"),
        IsSuperAdmin => ("is_super_admin", "is-super-admin"),
        IsVerified => ("is_verified", "is-verified"),
        WasRegisteredWithOrder => ("was_registered_with_order", "was-registered-with-order"),
    }
}

/// An authenticated principal.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// User id
    pub id: u64,
    /// Login email
    pub email: String,
    /// Given name
    pub first_name: Option<String>,
    /// Family name
    pub last_name: Option<String>,
    /// Event administrator
    #[serde(default)]
    pub is_admin: bool,
    /// Platform administrator
    #[serde(default)]
    pub is_super_admin: bool,
    /// Email verified
    pub is_verified: Option<bool>,
    /// Account created implicitly by an order
    pub was_registered_with_order: Option<bool>,
}

impl Resource for User {
    const TYPE: &'static str = "user";
    type Field = UserField;
}

/// Sign-up input.
#[derive(Clone, PartialEq, Eq)]
pub struct UserRegistration {
    /// Login email
    pub email: String,
    /// Plain-text password, sent once over TLS
    pub password: String,
    /// Given name
    pub first_name: Option<String>,
    /// Family name
    pub last_name: Option<String>,
}

impl UserRegistration {
    /// Registration with credentials only.
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            first_name: None,
            last_name: None,
        }
    }

    /// Builder: Set display names
    #[must_use]
    pub fn with_name(mut self, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self.last_name = Some(last_name.into());
        self
    }

    /// Wire attributes.
    #[must_use]
    pub fn to_attributes(&self) -> Attributes<UserField> {
        let mut attrs = Attributes::new();
        attrs
            .set(UserField::Email, self.email.as_str())
            .set(UserField::Password, self.password.as_str())
            .set_opt(UserField::FirstName, self.first_name.as_deref())
            .set_opt(UserField::LastName, self.last_name.as_deref());
        attrs
    }
}

impl fmt::Debug for UserRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserRegistration")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .finish()
    }
}

/// Partial profile update; only names can be changed through the API.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserPatch {
    /// Given name
    pub first_name: Option<String>,
    /// Family name
    pub last_name: Option<String>,
}

impl UserPatch {
    /// Wire attributes for the fields present in the patch.
    #[must_use]
    pub fn to_attributes(&self) -> Attributes<UserField> {
        let mut attrs = Attributes::new();
        attrs
            .set_opt(UserField::FirstName, self.first_name.as_deref())
            .set_opt(UserField::LastName, self.last_name.as_deref());
        attrs
    }
}

/// Response of the credential exchange endpoint.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
    /// Bearer token
    pub access_token: String,
    /// Token scheme reported by the backend
    #[serde(default)]
    pub token_type: String,
}

impl fmt::Debug for AuthResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthResponse")
            .field("access_token", &"<redacted>")
            .field("token_type", &self.token_type)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_registration_attributes() {
        let input = UserRegistration::new("jan@example.eu", "s3cret").with_name("Jan", "Kowalski");
        assert_eq!(
            Value::Object(input.to_attributes().into_map()),
            json!({
                "email": "jan@example.eu",
                "password": "s3cret",
                "first-name": "Jan",
                "last-name": "Kowalski"
            })
        );
    }

    #[test]
    fn test_registration_debug_hides_password() {
        let input = UserRegistration::new("jan@example.eu", "s3cret");
        assert!(!format!("{input:?}").contains("s3cret"));
    }

    #[test]
    fn test_patch_sends_empty_string() {
        let patch = UserPatch { first_name: Some(String::new()), last_name: None };
        assert_eq!(
            Value::Object(patch.to_attributes().into_map()),
            json!({ "first-name": "" })
        );
    }
}
