//! Top-bar sign-in and sign-out buttons.
//!
//! Exactly one of the two is visible at a time; the controller's view decides which.

use egui::{Color32, Frame, Margin, Response, RichText, Ui};
use gatehouse_business::AuthModalController;

use crate::{
    config::ModalConfig,
    utils::colors::{COLOR_BLUE, COLOR_GREEN},
};

/// Renders whichever auth button the view currently shows.
pub fn auth_buttons(controller: &mut AuthModalController, config: &ModalConfig, ui: &mut Ui) {
    let view = controller.view();
    let signin_visible = view.signin_button_visible;
    let signout_visible = view.signout_button_visible;
    let signout_label = view.signout_label.clone();

    if signin_visible {
        let clicked = ui
            .push_id(&config.signin_btn, |ui| {
                button(ui, &config.signin_label, COLOR_BLUE)
            })
            .inner
            .clicked();
        if clicked {
            controller.show_signin_modal();
        }
    }

    if signout_visible {
        let clicked = ui
            .push_id(&config.signout_btn, |ui| button(ui, &signout_label, COLOR_GREEN))
            .inner
            .clicked();
        if clicked {
            controller.sign_out();
        }
    }
}

fn button(ui: &mut Ui, text: &str, fill: Color32) -> Response {
    Frame::NONE
        .fill(fill)
        .inner_margin(Margin::symmetric(12, 4))
        .outer_margin(Margin::symmetric(0, 4))
        .corner_radius(4.0)
        .show(ui, |ui| {
            ui.add(
                egui::Label::new(RichText::new(text).color(Color32::WHITE))
                    .selectable(false)
                    .sense(egui::Sense::click()),
            )
        })
        .inner
}
