use gatehouse_business::UiState;
use kittest::Queryable;

use crate::common::{PASSWORD, TestCtx, USERNAME};

mod common;

#[tokio::test]
async fn test_signin_button_visible_when_signed_out() {
    let mut ctx = TestCtx::new_app();

    let harness = ctx.harness_mut();
    harness.step();

    assert!(
        harness.query_by_label("Sign In").is_some(),
        "'Sign In' button should be visible in the app"
    );
    assert!(
        harness.query_by_label("Sign in to continue.").is_some(),
        "signed-out status should be visible"
    );
    assert!(
        harness.query_by_label_contains("Welcome").is_none(),
        "sign-out button should be hidden while signed out"
    );
}

#[tokio::test]
async fn test_clicking_signin_opens_modal() {
    let mut ctx = TestCtx::new_app();

    let harness = ctx.harness_mut();
    harness.step();
    assert!(harness.query_by_label("Username").is_none());

    harness.get_by_label("Sign In").click();
    harness.step();
    harness.step();

    assert!(harness.state().state().controller.signin_form().open);
    assert!(
        harness.query_by_label("Username").is_some(),
        "modal should show the Username field"
    );
    assert!(
        harness.query_by_label("Password").is_some(),
        "modal should show the Password field"
    );
    assert!(
        harness
            .query_by_label("You can also enter your email address.")
            .is_some()
    );
    assert!(harness.query_by_label("Sign in").is_some());
}

#[tokio::test]
async fn test_successful_signin_shows_welcome_button() {
    let mut ctx = TestCtx::new_app();
    ctx.harness_mut().step();
    ctx.open_signin();

    ctx.fill_signin(USERNAME, PASSWORD);
    ctx.harness_mut().step();
    ctx.harness_mut().get_by_label("Sign in").click();
    ctx.harness_mut().step();

    ctx.settle().await;
    ctx.harness_mut().step();

    let harness = ctx.harness();
    assert!(
        harness.query_by_label("Welcome, alice").is_some(),
        "sign-out button should greet the user"
    );
    assert!(harness.query_by_label("Sign In").is_none());
    assert!(
        harness.query_by_label("Username").is_none(),
        "modal should close after sign-in"
    );
    assert_eq!(
        harness.state().state().controller.ui_state(),
        UiState::SignedIn
    );
    assert!(ctx.client().has_session());
}

#[tokio::test]
async fn test_failed_signin_shows_alert_and_keeps_modal_open() {
    let mut ctx = TestCtx::new_app();
    ctx.harness_mut().step();
    ctx.open_signin();

    ctx.fill_signin(USERNAME, "wrong-password");
    ctx.harness_mut().step();
    ctx.harness_mut().get_by_label("Sign in").click();
    ctx.harness_mut().step();

    ctx.settle().await;
    ctx.harness_mut().step();

    let harness = ctx.harness();
    assert!(
        harness
            .query_by_label_contains("Incorrect username or password.")
            .is_some(),
        "alert should carry the client's message"
    );
    assert!(harness.query_by_label("Username").is_some());
    assert!(harness.query_by_label("Sign In").is_some());
    assert!(harness.query_by_label_contains("Welcome").is_none());
}

#[tokio::test]
async fn test_reopening_modal_clears_alert_and_password() {
    let mut ctx = TestCtx::new_app();
    ctx.harness_mut().step();
    ctx.open_signin();

    ctx.fill_signin(USERNAME, "wrong-password");
    ctx.harness_mut().get_by_label("Sign in").click();
    ctx.harness_mut().step();
    ctx.settle().await;

    assert!(
        ctx.harness()
            .state()
            .state()
            .controller
            .signin_form()
            .alert
            .is_some(),
        "the failed sign-in should have set an alert"
    );
    assert!(
        ctx.harness()
            .query_by_label_contains("Incorrect username or password.")
            .is_some()
    );

    {
        let controller = &mut ctx.harness_mut().state_mut().state_mut().controller;
        controller.hide_signin_modal();
        controller.show_signin_modal();
    }
    ctx.harness_mut().step();

    let harness = ctx.harness();
    let form = harness.state().state().controller.signin_form();
    assert!(form.alert.is_none());
    assert!(form.password.is_empty());
    assert_eq!(form.username, USERNAME, "username survives a hide");
    assert!(
        harness
            .query_by_label_contains("Incorrect username or password.")
            .is_none()
    );
}
