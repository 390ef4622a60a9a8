use eframe::egui;

use super::{
    messages::{
        self,
        MessageKey,
    },
    theme::{
        type_color,
        Theme,
    },
};
use crate::core::CaughtPokemon;

/// Outcome of the capture attempt currently on screen. Transient: cleared on
/// reset, replaced by the next attempt.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum CaptureState {
    #[default]
    Idle,
    Loading,
    Caught(CaughtPokemon),
    Failed(String),
}

impl CaptureState {
    pub fn is_loading(&self) -> bool {
        matches!(self, CaptureState::Loading)
    }
}

/// Dimmed full-screen overlay with a spinner while the request is in flight.
pub fn loading_overlay(ctx: &egui::Context, state: &CaptureState, theme: &Theme) {
    if !state.is_loading() {
        return;
    }

    egui::Area::new(egui::Id::new("capture_overlay"))
        .order(egui::Order::Foreground)
        .fixed_pos(egui::Pos2::new(0.0, 0.0))
        .show(ctx, |ui| {
            let screen_size = ui.ctx().screen_rect().size();
            ui.allocate_space(screen_size);
            ui.painter().rect_filled(
                ui.ctx().screen_rect(),
                0.0,
                egui::Color32::from_black_alpha(120),
            );
        });

    egui::Window::new("capture_box")
        .order(egui::Order::Foreground)
        .collapsible(false)
        .resizable(false)
        .title_bar(false)
        .fixed_size(egui::Vec2::new(220.0, 80.0))
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::new(0.0, 0.0))
        .show(ctx, |ui| {
            ui.style_mut().visuals.window_stroke = egui::Stroke::new(2.0, theme.red());

            ui.centered_and_justified(|ui| {
                ui.add(egui::Spinner::new());
                ui.label(messages::text(MessageKey::CaptureLoading));
            });
        });
}

/// Inline card under the timer showing the latest outcome. Returns true when
/// the retry button was clicked.
pub fn capture_card(ui: &mut egui::Ui, state: &CaptureState, theme: &Theme) -> bool {
    match state {
        CaptureState::Idle | CaptureState::Loading => false,

        CaptureState::Caught(pokemon) => {
            ui.add_space(12.0);
            ui.group(|ui| {
                ui.vertical_centered(|ui| {
                    ui.label(theme.heading(messages::text(MessageKey::CaptureSuccess)));
                    if let Some(url) = &pokemon.image {
                        ui.add(
                            egui::Image::new(url.as_str())
                                .fit_to_exact_size(egui::vec2(96.0, 96.0)),
                        );
                    }
                    ui.label(theme.bold(&format!("{} {}", pokemon.padded_id(), pokemon.name)));
                    type_chips(ui, &pokemon.types);
                });
            });
            false
        }

        CaptureState::Failed(details) => {
            ui.add_space(12.0);
            let mut retry = false;
            ui.group(|ui| {
                ui.vertical_centered(|ui| {
                    ui.label(theme.bold(messages::text(MessageKey::CaptureFailed)));
                    ui.label(theme.dim(details));
                    if ui.button(messages::text(MessageKey::Retry)).clicked() {
                        retry = true;
                    }
                });
            });
            retry
        }
    }
}

pub fn type_chips(ui: &mut egui::Ui, types: &[String]) {
    ui.horizontal(|ui| {
        for type_name in types {
            ui.label(
                egui::RichText::new(format!(" {} ", type_name))
                    .background_color(type_color(type_name))
                    .color(egui::Color32::BLACK),
            );
        }
    });
}
