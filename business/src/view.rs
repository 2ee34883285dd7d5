//! View state for the sign-in / sign-out surfaces.
//!
//! The controller manipulates these plain values; the UI crate renders them.
//! Nothing here knows about egui.

use crate::Credentials;

/// Externally observable authentication UI state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UiState {
    #[default]
    SignedOut,
    SignedIn,
    PasswordChangeRequired,
}

/// Sign-in modal: username/password fields plus an alert region.
#[derive(Debug, Clone, Default)]
pub struct SignInForm {
    pub open: bool,
    pub username: String,
    pub password: String,
    pub alert: Option<String>,
}

impl SignInForm {
    /// Opens the modal, clearing any stale alert first.
    pub fn show(&mut self) {
        self.alert = None;
        self.open = true;
    }

    /// Closes the modal and wipes the password and alert.
    pub fn hide(&mut self) {
        self.open = false;
        self.password.clear();
        self.alert = None;
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.username.clone(), self.password.clone())
    }
}

/// New-password modal shown when the backend requires a password change.
#[derive(Debug, Clone, Default)]
pub struct NewPasswordForm {
    pub open: bool,
    pub password: String,
    pub retype: String,
    pub alert: Option<String>,
}

impl NewPasswordForm {
    pub fn show(&mut self) {
        self.open = true;
    }

    /// Closes the modal and wipes both password fields and the alert.
    pub fn hide(&mut self) {
        self.open = false;
        self.password.clear();
        self.retype.clear();
        self.alert = None;
    }
}

/// All regions the controller drives.
#[derive(Debug, Clone)]
pub struct AuthView {
    pub signin_button_visible: bool,
    pub signout_button_visible: bool,
    /// Label of the sign-out button, e.g. `Welcome, alice`.
    pub signout_label: String,
    pub signin: SignInForm,
    pub new_password: NewPasswordForm,
}

impl Default for AuthView {
    fn default() -> Self {
        Self {
            signin_button_visible: true,
            signout_button_visible: false,
            signout_label: String::new(),
            signin: SignInForm::default(),
            new_password: NewPasswordForm::default(),
        }
    }
}

impl AuthView {
    pub fn show_signed_in(&mut self, username: &str) {
        self.signin_button_visible = false;
        self.signout_label = format!("Welcome, {username}");
        self.signout_button_visible = true;
    }

    pub fn show_signed_out(&mut self) {
        self.signin_button_visible = true;
        self.signout_button_visible = false;
    }

    pub fn ui_state(&self) -> UiState {
        if self.new_password.open {
            UiState::PasswordChangeRequired
        } else if self.signout_button_visible {
            UiState::SignedIn
        } else {
            UiState::SignedOut
        }
    }
}
