use std::sync::Arc;

use gatehouse_business::{AuthClient, AuthModalController, MemoryAuthClient};
use log::info;

use crate::config::{DemoConfig, ModalConfig};

/// The main application state.
pub struct State {
    /// Drives the auth flow; owns the view state the widgets render.
    pub controller: AuthModalController,
    /// Widget handles and captions.
    pub config: ModalConfig,
}

impl Default for State {
    fn default() -> Self {
        Self::new(AuthModalController::default(), ModalConfig::default())
    }
}

impl State {
    pub fn new(controller: AuthModalController, config: ModalConfig) -> Self {
        Self { controller, config }
    }

    /// State backed by the in-memory demo user, with a start-up session restore queued.
    pub fn demo(demo: &DemoConfig) -> Self {
        let mut client = MemoryAuthClient::new(demo.username.clone(), demo.password.clone());
        if demo.temporary_password {
            client = client.with_temporary_password();
        }
        if demo.restore_session {
            client = client.with_session();
        }
        info!("Serving demo user '{}'", demo.username);

        let mut state = Self::default();
        state.controller.load_user(Some(Arc::new(client)));
        state
    }

    /// State wired to `client`, with default handles.
    pub fn test(client: Arc<dyn AuthClient>) -> Self {
        Self::new(
            AuthModalController::builder().client(client).build(),
            ModalConfig::default(),
        )
    }
}
