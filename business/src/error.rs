//! Error taxonomy for the authentication flow.
//!
//! Every error that reaches a UI handler is wrapped into a [`HandlerError`]
//! so the log line (and, for form submissions, the inline alert) names the
//! handler that triggered it.

use thiserror::Error;

/// Failure reported by an [`AuthClient`](crate::AuthClient) call.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    /// The backend rejected the request (bad credentials, expired session, network failure).
    #[error("{0}")]
    Authentication(String),
    /// The auth client is missing or misconfigured.
    #[error("invalid auth client setting: {0}")]
    Configuration(String),
    /// Anything else raised while talking to the client.
    #[error("{0}")]
    Other(String),
}

impl AuthError {
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::Authentication(message.into())
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }

    /// Raised when a handler runs before any client was configured.
    pub fn missing_client() -> Self {
        Self::Configuration("no auth client configured".to_string())
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}

/// Client-side validation failure on the new-password form.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum PasswordError {
    #[error("passwords do not match. Please re-enter.")]
    Mismatch,
    #[error("password does not meet criteria. Please re-enter.")]
    Criteria,
}

/// An [`AuthError`] annotated with the handler it escaped from.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{handler}: {source}")]
pub struct HandlerError {
    pub handler: &'static str,
    pub source: AuthError,
}

impl HandlerError {
    pub fn new(handler: &'static str, source: AuthError) -> Self {
        Self { handler, source }
    }

    pub fn is_configuration(&self) -> bool {
        self.source.is_configuration()
    }
}
