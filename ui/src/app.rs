use std::time::Duration;

use gatehouse_business::UiState;

use crate::{state::State, widgets};

/// How often to repaint while a client call is in flight.
const PENDING_REPAINT: Duration = Duration::from_millis(100);

pub struct GatehouseApp {
    state: State,
}

impl GatehouseApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }
}

impl eframe::App for GatehouseApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let State { controller, config } = &mut self.state;

        // Apply whatever the auth handlers finished since the last frame
        controller.poll();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    widgets::auth_buttons(controller, config, ui);
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Gatehouse");
            ui.label(status_message(controller.ui_state()));
        });

        widgets::signin_modal(ctx, controller, config);
        widgets::new_password_modal(ctx, controller, config);

        if controller.in_flight() > 0 {
            ctx.request_repaint_after(PENDING_REPAINT);
        }
    }
}

fn status_message(ui_state: UiState) -> &'static str {
    match ui_state {
        UiState::SignedOut => "Sign in to continue.",
        UiState::PasswordChangeRequired => "Choose a new password to finish signing in.",
        UiState::SignedIn => "You are signed in.",
    }
}
