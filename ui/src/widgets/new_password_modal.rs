//! New-password modal, shown when the service demands a password change.
//!
//! Has no close control: the only way out is a successful update.

use egui::{Context, Id, Key, TextEdit, Window};
use gatehouse_business::{AuthModalController, password::PASSWORD_CRITERIA_HINT};

use super::alert;
use crate::config::ModalConfig;

pub fn new_password_modal(
    ctx: &Context,
    controller: &mut AuthModalController,
    config: &ModalConfig,
) {
    if !controller.new_password_form().open {
        return;
    }

    let busy = controller.in_flight() > 0;
    let mut submit = false;

    Window::new(config.new_password_title.as_str())
        .id(Id::new(&config.modal_new_password))
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .fixed_size([320.0, 240.0])
        .show(ctx, |ui| {
            let form = controller.new_password_form_mut();

            if let Some(message) = &form.alert {
                alert(ui, message);
            }

            ui.label("New Password");
            let password = ui.add(
                TextEdit::singleline(&mut form.password)
                    .password(true)
                    .desired_width(f32::INFINITY),
            );
            ui.small(PASSWORD_CRITERIA_HINT);
            ui.add_space(8.0);

            ui.label("Re-type password");
            let retype = ui.add(
                TextEdit::singleline(&mut form.retype)
                    .password(true)
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(12.0);

            ui.horizontal(|ui| {
                if ui.button("Update").clicked() {
                    submit = true;
                }
                if busy {
                    ui.spinner();
                }
            });

            let entered = password.lost_focus() || retype.lost_focus();
            if entered && ui.input(|i| i.key_pressed(Key::Enter)) {
                submit = true;
            }
        });

    if submit {
        controller.submit_new_password();
    }
}
