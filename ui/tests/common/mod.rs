use std::sync::Arc;

use egui_kittest::Harness;
use kittest::Queryable;
use gatehouse_business::{AuthClient, MemoryAuthClient};
use gatehouse_ui::GatehouseApp;
use gatehouse_ui::state::State;

pub const USERNAME: &str = "alice";
pub const PASSWORD: &str = "Passw0rd!";

pub struct TestCtx<'a> {
    client: Arc<MemoryAuthClient>,
    harness: Harness<'a, GatehouseApp>,
}

impl<'a> TestCtx<'a> {
    /// App wired to an in-memory client holding `USERNAME`/`PASSWORD`.
    pub fn new_app() -> Self {
        Self::with_client(MemoryAuthClient::new(USERNAME, PASSWORD))
    }

    pub fn with_client(client: MemoryAuthClient) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();

        let client = Arc::new(client);
        let dyn_client: Arc<dyn AuthClient> = client.clone();
        let app = GatehouseApp::new(State::test(dyn_client));
        let harness = Harness::new_eframe(|_| app);

        Self { client, harness }
    }

    #[allow(unused)]
    pub fn client(&self) -> &MemoryAuthClient {
        &self.client
    }

    pub fn harness_mut(&mut self) -> &mut Harness<'a, GatehouseApp> {
        &mut self.harness
    }

    #[allow(unused)]
    pub fn harness(&self) -> &Harness<'a, GatehouseApp> {
        &self.harness
    }

    /// Clicks the top-bar "Sign In" and waits for the modal to be laid out.
    ///
    /// A freshly shown window is still sizing itself on its first frame, so
    /// clicks into it only land from the second frame on.
    #[allow(unused)]
    pub fn open_signin(&mut self) {
        self.harness.get_by_label("Sign In").click();
        self.harness.step();
        self.harness.step();
    }

    /// Fills the sign-in form, as if typed.
    #[allow(unused)]
    pub fn fill_signin(&mut self, username: &str, password: &str) {
        let form = self.harness.state_mut().state_mut().controller.signin_form_mut();
        form.username = username.to_string();
        form.password = password.to_string();
    }

    /// Waits for every in-flight auth handler, then renders a frame.
    pub async fn settle(&mut self) {
        self.harness
            .state_mut()
            .state_mut()
            .controller
            .settle_all()
            .await;
        self.harness.step();
    }
}
