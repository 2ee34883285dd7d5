//! In-process [`AuthClient`] backed by a single user record.
//!
//! Used by the demo binary and UI tests. Optionally marks the password as
//! temporary so the first sign-in hits the new-password challenge.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use log::debug;

use crate::{AuthClient, AuthError, AuthenticateStatus, Credentials};

#[derive(Debug)]
struct MemoryUser {
    username: String,
    password: String,
    temporary_password: bool,
    challenge_pending: bool,
    session: bool,
}

#[derive(Debug)]
pub struct MemoryAuthClient {
    user: Mutex<MemoryUser>,
}

impl MemoryAuthClient {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user: Mutex::new(MemoryUser {
                username: username.into(),
                password: password.into(),
                temporary_password: false,
                challenge_pending: false,
                session: false,
            }),
        }
    }

    /// The first successful `authenticate` will require a new password.
    pub fn with_temporary_password(self) -> Self {
        self.update(|user| user.temporary_password = true)
    }

    /// Starts with an established session, as if restored from storage.
    pub fn with_session(self) -> Self {
        self.update(|user| user.session = true)
    }

    pub fn has_session(&self) -> bool {
        self.lock().map(|user| user.session).unwrap_or(false)
    }

    fn update(self, f: impl FnOnce(&mut MemoryUser)) -> Self {
        if let Ok(mut user) = self.user.lock() {
            f(&mut user);
        }
        self
    }

    fn lock(&self) -> Result<MutexGuard<'_, MemoryUser>, AuthError> {
        self.user
            .lock()
            .map_err(|err| AuthError::other(format!("user store poisoned: {err}")))
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl AuthClient for MemoryAuthClient {
    async fn authenticate(
        &self,
        credentials: &Credentials,
    ) -> Result<AuthenticateStatus, AuthError> {
        let mut user = self.lock()?;
        if credentials.username != user.username || credentials.password != user.password {
            return Err(AuthError::authentication("Incorrect username or password."));
        }

        if user.temporary_password {
            debug!("MemoryAuthClient: '{}' must set a new password", user.username);
            user.challenge_pending = true;
            return Ok(AuthenticateStatus::NewPasswordRequired);
        }

        user.session = true;
        Ok(AuthenticateStatus::Success)
    }

    async fn confirm_new_password(&self, password: &str) -> Result<(), AuthError> {
        let mut user = self.lock()?;
        if !user.challenge_pending {
            return Err(AuthError::authentication("no pending new password challenge"));
        }

        user.password = password.to_string();
        user.temporary_password = false;
        user.challenge_pending = false;
        user.session = true;
        Ok(())
    }

    async fn get_credentials(&self) -> Result<(), AuthError> {
        if self.lock()?.session {
            Ok(())
        } else {
            Err(AuthError::authentication("no active session"))
        }
    }

    async fn check_status(&self) -> Result<(), AuthError> {
        if self.lock()?.session {
            Ok(())
        } else {
            Err(AuthError::authentication("no current user session"))
        }
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        self.lock()?.session = false;
        Ok(())
    }

    fn username(&self) -> Option<String> {
        let user = self.user.lock().ok()?;
        user.session.then(|| user.username.clone())
    }
}
