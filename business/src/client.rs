//! Contract for the externally supplied authentication client.
//!
//! The controller never issues tokens or stores sessions itself; it only
//! forwards credentials to an [`AuthClient`] and reacts to the outcome.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::AuthError;

/// Username/password pair submitted by the sign-in form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    #[serde(rename = "Username")]
    pub username: String,
    #[serde(rename = "Password")]
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Status returned by [`AuthClient::authenticate`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AuthenticateStatus {
    #[default]
    Success,
    /// The user signed in with a temporary password and must pick a new one.
    NewPasswordRequired,
    /// Any status the controller does not distinguish; handled like `Success`.
    #[serde(other)]
    Unknown,
}

impl AuthenticateStatus {
    pub fn requires_new_password(self) -> bool {
        matches!(self, Self::NewPasswordRequired)
    }
}

/// Cognito-style authentication client.
///
/// All methods may fail; failures are surfaced as [`AuthError`]s and caught by
/// the controller at the boundary of the handler that issued the call.
///
/// On wasm32 the returned futures are not `Send`, so JS-backed clients can
/// await browser promises directly.
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait AuthClient: Send + Sync {
    async fn authenticate(&self, credentials: &Credentials)
    -> Result<AuthenticateStatus, AuthError>;

    async fn confirm_new_password(&self, password: &str) -> Result<(), AuthError>;

    /// Refreshes the credentials of the current session.
    async fn get_credentials(&self) -> Result<(), AuthError>;

    /// Checks whether a previously established session is still usable.
    async fn check_status(&self) -> Result<(), AuthError>;

    async fn sign_out(&self) -> Result<(), AuthError>;

    /// Username of the current user, if any.
    fn username(&self) -> Option<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_serialize_with_cognito_field_names() {
        let credentials = Credentials::new("alice", "Passw0rd!");
        let json = serde_json::to_string(&credentials).expect("Should serialize");
        assert!(json.contains("\"Username\":\"alice\""));
        assert!(json.contains("\"Password\":\"Passw0rd!\""));
    }

    #[test]
    fn test_status_deserialization() {
        let status: AuthenticateStatus =
            serde_json::from_str("\"newPasswordRequired\"").expect("Should deserialize");
        assert!(status.requires_new_password());

        let status: AuthenticateStatus =
            serde_json::from_str("\"success\"").expect("Should deserialize");
        assert_eq!(status, AuthenticateStatus::Success);

        let status: AuthenticateStatus =
            serde_json::from_str("\"mfaRequired\"").expect("Should deserialize");
        assert_eq!(status, AuthenticateStatus::Unknown);
        assert!(!status.requires_new_password());
    }
}
