//! UI configuration.
//!
//! - [`ModalConfig`]: handles and captions for the auth widgets, fixed at construction.
//! - [`DemoConfig`]: the demo user served by the bundled in-memory client,
//!   read from `GATEHOUSE_*` environment variables.

use bon::Builder;
use log::info;
use serde::Deserialize;

/// Handles and captions of the sign-in/sign-out surfaces.
///
/// The four handles are used as egui id salts, so two controllers can live in
/// the same context as long as their handles differ.
#[derive(Debug, Clone, Builder)]
pub struct ModalConfig {
    #[builder(into, default = "signinBtn".to_string())]
    pub signin_btn: String,
    #[builder(into, default = "signoutBtn".to_string())]
    pub signout_btn: String,
    #[builder(into, default = "modalSignin".to_string())]
    pub modal_signin: String,
    #[builder(into, default = "modalNewPassword".to_string())]
    pub modal_new_password: String,
    #[builder(into, default = "Sign In".to_string())]
    pub signin_label: String,
    #[builder(into, default = "Cognito".to_string())]
    pub signin_title: String,
    #[builder(into, default = "New Password Required".to_string())]
    pub new_password_title: String,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawDemoConfig {
    gatehouse_username: Option<String>,
    gatehouse_password: Option<String>,
    gatehouse_temporary_password: Option<bool>,
    gatehouse_restore_session: Option<bool>,
}

/// The user record backing the demo build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    pub username: String,
    pub password: String,
    /// First sign-in must go through the new-password modal.
    pub temporary_password: bool,
    /// Start with an established session so start-up restore signs in.
    pub restore_session: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self::from_raw(RawDemoConfig::default())
    }
}

impl DemoConfig {
    /// Reads the demo user from the process environment.
    pub fn init() -> anyhow::Result<Self> {
        info!("Loading demo configuration from environment variables");
        Self::from_vars(std::env::vars())
    }

    pub fn from_vars<S: AsRef<str>>(vars: impl IntoIterator<Item = (S, S)>) -> anyhow::Result<Self> {
        let raw: RawDemoConfig = serde_env::from_iter(vars)?;
        Ok(Self::from_raw(raw))
    }

    fn from_raw(raw: RawDemoConfig) -> Self {
        let RawDemoConfig {
            gatehouse_username,
            gatehouse_password,
            gatehouse_temporary_password,
            gatehouse_restore_session,
        } = raw;

        let username = gatehouse_username.unwrap_or_else(|| {
            info!("GATEHOUSE_USERNAME not set, defaulting to 'demo'");
            "demo".to_string()
        });
        let password = gatehouse_password.unwrap_or_else(|| "Passw0rd!".to_string());

        Self {
            username,
            password,
            temporary_password: gatehouse_temporary_password.unwrap_or(false),
            restore_session: gatehouse_restore_session.unwrap_or(false),
        }
    }
}
