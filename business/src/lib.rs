//! Business logic for the Gatehouse sign-in flow.
//!
//! The crate is rendering-agnostic: [`AuthModalController`] drives an
//! [`AuthView`] and talks to an injected [`AuthClient`]; the `gatehouse-ui`
//! crate draws the view with egui.

mod client;
mod controller;
mod error;
mod memory_client;
pub mod password;
mod task;
mod view;

pub use client::{AuthClient, AuthenticateStatus, Credentials};
pub use controller::{
    AuthCallback, AuthEvent, AuthModalController, LOAD_USER, NEW_PASSWORD_FORM_SUBMIT,
    SIGN_IN_PROCEDURE, SIGNIN_FORM_SUBMIT, SIGNOUT_CLICK, SignInOutcome,
};
pub use error::{AuthError, HandlerError, PasswordError};
pub use memory_client::MemoryAuthClient;
pub use view::{AuthView, NewPasswordForm, SignInForm, UiState};
