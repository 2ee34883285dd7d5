use std::sync::Mutex;

use async_trait::async_trait;
use gatehouse_business::{AuthClient, AuthError, AuthenticateStatus, Credentials};

/// Auth client with canned results that records every call it receives.
pub struct ScriptedClient {
    authenticate: Result<AuthenticateStatus, AuthError>,
    confirm_new_password: Result<(), AuthError>,
    get_credentials: Result<(), AuthError>,
    check_status: Result<(), AuthError>,
    sign_out: Result<(), AuthError>,
    username: Option<String>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedClient {
    /// A client for which every call succeeds and the user is `username`.
    pub fn happy(username: &str) -> Self {
        Self {
            authenticate: Ok(AuthenticateStatus::Success),
            confirm_new_password: Ok(()),
            get_credentials: Ok(()),
            check_status: Ok(()),
            sign_out: Ok(()),
            username: Some(username.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn authenticate_returns(mut self, result: Result<AuthenticateStatus, AuthError>) -> Self {
        self.authenticate = result;
        self
    }

    pub fn confirm_returns(mut self, result: Result<(), AuthError>) -> Self {
        self.confirm_new_password = result;
        self
    }

    pub fn credentials_return(mut self, result: Result<(), AuthError>) -> Self {
        self.get_credentials = result;
        self
    }

    pub fn status_returns(mut self, result: Result<(), AuthError>) -> Self {
        self.check_status = result;
        self
    }

    pub fn sign_out_returns(mut self, result: Result<(), AuthError>) -> Self {
        self.sign_out = result;
        self
    }

    pub fn without_username(mut self) -> Self {
        self.username = None;
        self
    }

    /// Recorded calls, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("calls lock").clone()
    }

    pub fn count(&self, name: &str) -> usize {
        self.calls().iter().filter(|call| call.as_str() == name).count()
    }

    fn record(&self, call: String) {
        self.calls.lock().expect("calls lock").push(call);
    }
}

#[async_trait]
impl AuthClient for ScriptedClient {
    async fn authenticate(
        &self,
        credentials: &Credentials,
    ) -> Result<AuthenticateStatus, AuthError> {
        self.record(format!(
            "authenticate:{}:{}",
            credentials.username, credentials.password
        ));
        self.authenticate.clone()
    }

    async fn confirm_new_password(&self, password: &str) -> Result<(), AuthError> {
        self.record(format!("confirm_new_password:{password}"));
        self.confirm_new_password.clone()
    }

    async fn get_credentials(&self) -> Result<(), AuthError> {
        self.record("get_credentials".to_string());
        self.get_credentials.clone()
    }

    async fn check_status(&self) -> Result<(), AuthError> {
        self.record("check_status".to_string());
        self.check_status.clone()
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        self.record("sign_out".to_string());
        self.sign_out.clone()
    }

    fn username(&self) -> Option<String> {
        self.username.clone()
    }
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
