mod auth_buttons;
mod new_password_modal;
mod signin_modal;

pub use auth_buttons::auth_buttons;
pub use new_password_modal::new_password_modal;
pub use signin_modal::signin_modal;

use egui::{Color32, Frame, Margin, RichText, Ui};

use crate::utils::colors::COLOR_RED;

/// Inline error shown at the top of a modal.
fn alert(ui: &mut Ui, message: &str) {
    Frame::NONE
        .fill(COLOR_RED)
        .inner_margin(Margin::symmetric(8, 4))
        .corner_radius(4.0)
        .show(ui, |ui| {
            ui.label(RichText::new(message).color(Color32::WHITE).small());
        });
    ui.add_space(8.0);
}
