//! Client error types

use std::time::Duration;

use shared::ErrorCode;
use thiserror::Error;

/// Fallback text when neither the server nor the error itself has anything
/// better to show a shopper.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with an error envelope
    #[error("API error {code}: {message}")]
    Api { code: u16, message: String },

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Authentication required (token missing, expired or rejected)
    #[error("Authentication required")]
    Unauthorized,

    /// Permission denied
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The call did not finish within the configured timeout
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// The call was aborted through the client's cancellation token
    #[error("Request cancelled")]
    Cancelled,

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Session store failure
    #[error("Session error: {0}")]
    Session(String),

    /// Filesystem error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ClientError {
    /// The envelope code as a known [`ErrorCode`], for `Api` errors
    pub fn error_code(&self) -> Option<ErrorCode> {
        match self {
            Self::Api { code, .. } => ErrorCode::try_from(*code).ok(),
            Self::Unauthorized => Some(ErrorCode::NotAuthenticated),
            Self::Timeout(_) => Some(ErrorCode::TimeoutError),
            _ => None,
        }
    }

    /// Whether the request may or may not have reached the server.
    ///
    /// A transport failure leaves the outcome of a write unknown; anything
    /// else is a definitive answer.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Timeout(_) | Self::Cancelled)
    }

    /// Text for a transient notification: the server-provided message when
    /// there is one, a generic fallback otherwise.
    pub fn user_message(&self) -> String {
        match self {
            Self::Api { message, .. }
            | Self::Forbidden(message)
            | Self::NotFound(message)
            | Self::Validation(message)
                if !message.trim().is_empty() =>
            {
                message.clone()
            }
            Self::Unauthorized => "Your session has expired. Please sign in again.".to_string(),
            Self::Timeout(_) => "The server took too long to respond. Please try again.".to_string(),
            Self::Cancelled => "The request was cancelled.".to_string(),
            Self::Http(_) => "Cannot reach the server. Check your connection.".to_string(),
            _ => GENERIC_ERROR_MESSAGE.to_string(),
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
