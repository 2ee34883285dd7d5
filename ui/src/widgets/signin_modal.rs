//! Sign-in modal: username and password, submitted to the controller.

use egui::{Context, Id, Key, TextEdit, Window};
use gatehouse_business::AuthModalController;

use super::alert;
use crate::config::ModalConfig;

/// Renders the sign-in modal while it is open.
///
/// Closing the window runs the same hygiene as [`AuthModalController::hide_signin_modal`]:
/// the password and any alert are cleared, the username is kept.
pub fn signin_modal(ctx: &Context, controller: &mut AuthModalController, config: &ModalConfig) {
    if !controller.signin_form().open {
        return;
    }

    let busy = controller.in_flight() > 0;
    let mut open = true;
    let mut submit = false;

    Window::new(config.signin_title.as_str())
        .id(Id::new(&config.modal_signin))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .fixed_size([320.0, 220.0])
        .show(ctx, |ui| {
            let form = controller.signin_form_mut();

            if let Some(message) = &form.alert {
                alert(ui, message);
            }

            ui.label("Username");
            let username = ui.add(
                TextEdit::singleline(&mut form.username)
                    .desired_width(f32::INFINITY),
            );
            ui.small("You can also enter your email address.");
            ui.add_space(8.0);

            ui.label("Password");
            let password = ui.add(
                TextEdit::singleline(&mut form.password)
                    .password(true)
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(12.0);

            ui.horizontal(|ui| {
                if ui.button("Sign in").clicked() {
                    submit = true;
                }
                if busy {
                    ui.spinner();
                }
            });

            // Enter only counts when it left one of this form's fields.
            let entered = username.lost_focus() || password.lost_focus();
            if entered && ui.input(|i| i.key_pressed(Key::Enter)) {
                submit = true;
            }
        });

    if !open {
        controller.hide_signin_modal();
    } else if submit {
        controller.submit_sign_in();
    }
}
