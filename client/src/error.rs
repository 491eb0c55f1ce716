//! Error types for the Erasmus API client

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Generic message used when the backend error envelope carries no detail.
pub const GENERIC_API_FAILURE: &str = "API request failed";

/// Generic message used when a failed login carries no `error` field.
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Errors that can occur when interacting with the Erasmus backend.
///
/// The backend does not distinguish "not found", "validation" and
/// "server" failures in a machine-readable way; every non-2xx response
/// collapses into [`ClientError::Api`] carrying the best human-readable
/// message the error envelope offers.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Backend answered with a non-2xx status.
    ///
    /// `Display` is exactly the backend's `errors[0].detail`, or
    /// [`GENERIC_API_FAILURE`] when the envelope has none.
    #[error("{message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Message extracted from the JSON:API error envelope
        message: String,
    },

    /// Backend answered with a non-2xx status and a body that is not a
    /// JSON error envelope.
    #[error("API request failed (status {status}): malformed error body: {reason}")]
    MalformedErrorBody {
        /// HTTP status code
        status: u16,
        /// Why the body could not be parsed
        reason: String,
    },

    /// Login was rejected.
    #[error("{0}")]
    InvalidCredentials(String),

    /// HTTP transport failed before a response arrived.
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// A success response did not have the expected JSON:API shape.
    #[error("Response parsing failed: {0}")]
    ResponseParseFailed(String),

    /// A resource object carried an id that is not a positive integer.
    #[error("Invalid resource id: {id:?}")]
    InvalidResourceId {
        /// The raw id string from the wire
        id: String,
    },

    /// Reading or writing the persisted token failed.
    #[error("Token store error: {0}")]
    TokenStore(String),

    /// Client configuration is unusable.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Google OAuth exchange failed.
    #[error("{0}")]
    OAuth(String),
}

impl ClientError {
    /// HTTP status associated with the error, when there is one.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } | Self::MalformedErrorBody { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::RequestFailed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_displays_backend_detail_only() {
        let err = ClientError::Api {
            status: 422,
            message: "Email already registered".to_string(),
        };
        assert_eq!(err.to_string(), "Email already registered");
        assert_eq!(err.status(), Some(422));
    }

    #[test]
    fn test_invalid_credentials_display() {
        let err = ClientError::InvalidCredentials(INVALID_CREDENTIALS.to_string());
        assert_eq!(err.to_string(), "Invalid credentials");
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_malformed_error_body_keeps_status() {
        let err = ClientError::MalformedErrorBody {
            status: 502,
            reason: "expected value at line 1 column 1".to_string(),
        };
        assert_eq!(err.status(), Some(502));
        assert!(err.to_string().contains("status 502"));
    }
}
