//! Authentication UI flow controller.
//!
//! Mediates between UI events and the [`AuthClient`]:
//!
//! - **Sign-in submit**: `authenticate`, then either the new-password modal or
//!   the sign-in success procedure
//! - **New-password submit**: local validation, `confirm_new_password`, then the
//!   sign-in success procedure
//! - **Sign-out click**: `sign_out`, then back to the signed-out buttons
//! - **Session restore** ([`AuthModalController::load_user`]): `check_status`,
//!   then the sign-in success procedure, failing silently
//!
//! Each handler spawns one task that runs the whole client call sequence and
//! reports an [`AuthEvent`] over a `flume` channel. The UI thread drains the
//! channel with [`AuthModalController::poll`] once per frame; view state and
//! callbacks are only ever touched there. Concurrent submissions are not
//! fenced against each other.
//!
//! Natively the handlers run on the ambient Tokio runtime. Without one, a
//! handler fails with a configuration error instead of spawning. A task that
//! dies before reporting (a panicking client, say) still reports a failure,
//! so `in_flight` always returns to zero.

use std::{future::Future, sync::Arc};

use bon::bon;
use flume::{Receiver, Sender};
use log::{debug, error, info, warn};

use crate::{
    AuthClient, AuthError, AuthView, Credentials, HandlerError, NewPasswordForm, SignInForm,
    UiState,
    password::validate_new_password,
    task::{self, MaybeSend},
};

/// Handler name for sign-in form submissions.
pub const SIGNIN_FORM_SUBMIT: &str = "signinForm.submit";
/// Handler name for new-password form submissions.
pub const NEW_PASSWORD_FORM_SUBMIT: &str = "newPasswordForm.submit";
/// Handler name for sign-out button clicks.
pub const SIGNOUT_CLICK: &str = "signoutBtn.click";
/// Handler name for the shared sign-in success procedure.
pub const SIGN_IN_PROCEDURE: &str = "AuthModalController.signIn";
/// Handler name for session restore.
pub const LOAD_USER: &str = "AuthModalController.loadUser";

/// Observer invoked after a transition into signed-in or signed-out.
pub type AuthCallback = Box<dyn Fn(&AuthModalController) + Send>;

/// Outcome of a sign-in form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignInOutcome {
    NewPasswordRequired,
    /// Authentication succeeded; carries the username if the success procedure did.
    Completed(Option<String>),
}

/// Result of a spawned handler, applied on the UI thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthEvent {
    SignIn(Result<SignInOutcome, HandlerError>),
    NewPassword(Result<Option<String>, HandlerError>),
    SignOut(Result<(), HandlerError>),
    /// Session restore finished; `None` means nothing to restore.
    Restore(Option<String>),
}

pub struct AuthModalController {
    client: Option<Arc<dyn AuthClient>>,
    view: AuthView,
    on_sign_in: Option<AuthCallback>,
    on_sign_out: Option<AuthCallback>,
    events_tx: Sender<AuthEvent>,
    events_rx: Receiver<AuthEvent>,
    in_flight: usize,
}

impl Default for AuthModalController {
    fn default() -> Self {
        Self::builder().build()
    }
}

#[bon]
impl AuthModalController {
    #[builder]
    pub fn new(
        client: Option<Arc<dyn AuthClient>>,
        on_sign_in: Option<AuthCallback>,
        on_sign_out: Option<AuthCallback>,
    ) -> Self {
        let (events_tx, events_rx) = flume::unbounded();
        Self {
            client,
            view: AuthView::default(),
            on_sign_in,
            on_sign_out,
            events_tx,
            events_rx,
            in_flight: 0,
        }
    }
}

impl AuthModalController {
    pub fn client(&self) -> Option<&Arc<dyn AuthClient>> {
        self.client.as_ref()
    }

    pub fn set_client(&mut self, client: Arc<dyn AuthClient>) {
        self.client = Some(client);
    }

    pub fn view(&self) -> &AuthView {
        &self.view
    }

    pub fn signin_form(&self) -> &SignInForm {
        &self.view.signin
    }

    pub fn signin_form_mut(&mut self) -> &mut SignInForm {
        &mut self.view.signin
    }

    pub fn new_password_form(&self) -> &NewPasswordForm {
        &self.view.new_password
    }

    pub fn new_password_form_mut(&mut self) -> &mut NewPasswordForm {
        &mut self.view.new_password
    }

    pub fn ui_state(&self) -> UiState {
        self.view.ui_state()
    }

    /// Number of handlers whose client calls have not settled yet.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Sign-in button clicked.
    ///
    /// Ignored while the new-password modal is up; only one dialog is shown at a time.
    pub fn show_signin_modal(&mut self) {
        if self.view.new_password.open {
            debug!("sign-in modal requested during a password change, ignoring");
            return;
        }
        self.view.signin.show();
    }

    /// Sign-in modal dismissed.
    pub fn hide_signin_modal(&mut self) {
        self.view.signin.hide();
    }

    /// Sign-in form submitted.
    pub fn submit_sign_in(&mut self) {
        let client = self.client.clone();
        let credentials = self.view.signin.credentials();
        info!("{SIGNIN_FORM_SUBMIT}: authenticating '{}'", credentials.username);

        self.spawn_handler(SIGNIN_FORM_SUBMIT, aborted_sign_in, async move {
            AuthEvent::SignIn(
                sign_in(client, credentials)
                    .await
                    .map_err(|err| HandlerError::new(SIGNIN_FORM_SUBMIT, err)),
            )
        });
    }

    /// New-password form submitted.
    ///
    /// Mismatched or non-compliant passwords are reported inline and never
    /// reach the client.
    pub fn submit_new_password(&mut self) {
        let form = &mut self.view.new_password;
        if let Err(err) = validate_new_password(&form.password, &form.retype) {
            info!("{NEW_PASSWORD_FORM_SUBMIT}: {err}");
            form.alert = Some(err.to_string());
            return;
        }

        let client = self.client.clone();
        let password = form.password.clone();

        self.spawn_handler(NEW_PASSWORD_FORM_SUBMIT, aborted_new_password, async move {
            AuthEvent::NewPassword(
                confirm_new_password(client, password)
                    .await
                    .map_err(|err| HandlerError::new(NEW_PASSWORD_FORM_SUBMIT, err)),
            )
        });
    }

    /// Sign-out button clicked.
    pub fn sign_out(&mut self) {
        let Some(client) = self.client.clone() else {
            error!(
                "{}",
                HandlerError::new(SIGNOUT_CLICK, AuthError::missing_client())
            );
            return;
        };

        info!("Bye {}", client.username().unwrap_or_default());

        self.spawn_handler(SIGNOUT_CLICK, aborted_sign_out, async move {
            AuthEvent::SignOut(
                client
                    .sign_out()
                    .await
                    .map_err(|err| HandlerError::new(SIGNOUT_CLICK, err)),
            )
        });
    }

    /// Best-effort session restore, typically on start-up.
    ///
    /// Replaces the client when one is given. Only configuration errors are
    /// logged at error level; anything else is dropped without touching the UI.
    pub fn load_user(&mut self, client: Option<Arc<dyn AuthClient>>) {
        if let Some(client) = client {
            self.client = Some(client);
        }
        let client = self.client.clone();

        self.spawn_handler(LOAD_USER, aborted_load_user, async move {
            match check_status(client).await {
                Ok(client) => AuthEvent::Restore(sign_in_procedure(client.as_ref()).await),
                Err(err) => {
                    let err = HandlerError::new(LOAD_USER, err);
                    if err.is_configuration() {
                        error!("{err}");
                    } else {
                        debug!("{err}");
                    }
                    AuthEvent::Restore(None)
                }
            }
        });
    }

    /// Applies every event that has already arrived. Call once per frame.
    ///
    /// Returns the number of events applied.
    pub fn poll(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.events_rx.try_recv() {
            self.apply(event);
            applied += 1;
        }
        applied
    }

    /// Waits for the next in-flight handler to settle and applies its event.
    ///
    /// Returns `false` immediately when nothing is in flight.
    pub async fn settle(&mut self) -> bool {
        if self.in_flight == 0 {
            return false;
        }
        match self.events_rx.recv_async().await {
            Ok(event) => {
                self.apply(event);
                true
            }
            Err(err) => {
                warn!("auth event channel closed: {err}");
                false
            }
        }
    }

    /// Settles every in-flight handler.
    pub async fn settle_all(&mut self) {
        while self.settle().await {}
    }

    fn spawn_handler<F>(&mut self, handler: &'static str, on_abort: AbortEvent, future: F)
    where
        F: Future<Output = AuthEvent> + MaybeSend + 'static,
    {
        self.in_flight += 1;
        let reporter = Reporter {
            handler,
            on_abort,
            events_tx: self.events_tx.clone(),
            reported: false,
        };

        if let Err(err) = task::ensure_runtime() {
            reporter.abort(err);
            return;
        }

        task::spawn(async move {
            let event = future.await;
            reporter.report(event);
        });
    }

    fn apply(&mut self, event: AuthEvent) {
        self.in_flight = self.in_flight.saturating_sub(1);

        match event {
            AuthEvent::SignIn(Ok(SignInOutcome::NewPasswordRequired)) => {
                info!("{SIGNIN_FORM_SUBMIT}: new password required");
                self.view.signin.hide();
                self.view.new_password.show();
            }
            AuthEvent::SignIn(Ok(SignInOutcome::Completed(session))) => {
                self.finish_sign_in(session);
                self.view.signin.hide();
            }
            AuthEvent::SignIn(Err(err)) => {
                error!("{err}");
                self.view.signin.alert = Some(err.to_string());
            }
            AuthEvent::NewPassword(Ok(session)) => {
                self.finish_sign_in(session);
                self.view.new_password.hide();
            }
            AuthEvent::NewPassword(Err(err)) => {
                error!("{err}");
                self.view.new_password.alert = Some(err.to_string());
            }
            AuthEvent::SignOut(Ok(())) => {
                self.view.show_signed_out();
                if let Some(callback) = &self.on_sign_out {
                    callback(&*self);
                }
            }
            AuthEvent::SignOut(Err(err)) => error!("{err}"),
            AuthEvent::Restore(session) => self.finish_sign_in(session),
        }
    }

    fn finish_sign_in(&mut self, session: Option<String>) {
        let Some(username) = session else {
            return;
        };
        info!("signed in as '{username}'");
        self.view.show_signed_in(&username);
        if let Some(callback) = &self.on_sign_in {
            callback(&*self);
        }
    }
}

/// Builds the event reported for a handler whose task never produced one.
type AbortEvent = fn(HandlerError) -> AuthEvent;

fn aborted_sign_in(err: HandlerError) -> AuthEvent {
    AuthEvent::SignIn(Err(err))
}

fn aborted_new_password(err: HandlerError) -> AuthEvent {
    AuthEvent::NewPassword(Err(err))
}

fn aborted_sign_out(err: HandlerError) -> AuthEvent {
    AuthEvent::SignOut(Err(err))
}

fn aborted_load_user(_err: HandlerError) -> AuthEvent {
    AuthEvent::Restore(None)
}

/// Sends exactly one event per spawned handler.
///
/// Dropped without [`Reporter::report`] (the task panicked or was never
/// spawned), it sends the handler's abort event instead.
struct Reporter {
    handler: &'static str,
    on_abort: AbortEvent,
    events_tx: Sender<AuthEvent>,
    reported: bool,
}

impl Reporter {
    fn report(mut self, event: AuthEvent) {
        self.send(event);
    }

    fn abort(mut self, err: AuthError) {
        let err = HandlerError::new(self.handler, err);
        error!("{err}");
        let event = (self.on_abort)(err);
        self.send(event);
    }

    fn send(&mut self, event: AuthEvent) {
        self.reported = true;
        // Unbounded, so this never blocks.
        if self.events_tx.send(event).is_err() {
            warn!("auth controller dropped before {} settled", self.handler);
        }
    }
}

impl Drop for Reporter {
    fn drop(&mut self) {
        if self.reported {
            return;
        }
        let err = HandlerError::new(
            self.handler,
            AuthError::other("task ended before reporting an outcome"),
        );
        error!("{err}");
        let event = (self.on_abort)(err);
        self.send(event);
    }
}

async fn sign_in(
    client: Option<Arc<dyn AuthClient>>,
    credentials: Credentials,
) -> Result<SignInOutcome, AuthError> {
    let client = client.ok_or_else(AuthError::missing_client)?;
    let status = client.authenticate(&credentials).await?;

    if status.requires_new_password() {
        return Ok(SignInOutcome::NewPasswordRequired);
    }
    Ok(SignInOutcome::Completed(
        sign_in_procedure(client.as_ref()).await,
    ))
}

async fn confirm_new_password(
    client: Option<Arc<dyn AuthClient>>,
    password: String,
) -> Result<Option<String>, AuthError> {
    let client = client.ok_or_else(AuthError::missing_client)?;
    client.confirm_new_password(&password).await?;
    Ok(sign_in_procedure(client.as_ref()).await)
}

async fn check_status(
    client: Option<Arc<dyn AuthClient>>,
) -> Result<Arc<dyn AuthClient>, AuthError> {
    let client = client.ok_or_else(AuthError::missing_client)?;
    client.check_status().await?;
    Ok(client)
}

/// Sign-in success procedure: refresh credentials and read the username.
///
/// Failures are logged here and reported as `None`, which leaves the buttons untouched.
async fn sign_in_procedure(client: &dyn AuthClient) -> Option<String> {
    let result = async {
        client.get_credentials().await?;
        client
            .username()
            .ok_or_else(|| AuthError::other("current user has no username"))
    }
    .await;

    match result {
        Ok(username) => Some(username),
        Err(err) => {
            error!("{}", HandlerError::new(SIGN_IN_PROCEDURE, err));
            None
        }
    }
}
