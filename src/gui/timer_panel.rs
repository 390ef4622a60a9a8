use eframe::egui;

use super::{
    messages::{
        self,
        MessageKey,
    },
    theme::Theme,
};
use crate::core::CountdownTimer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerAction {
    Toggle,
    Reset,
    OpenPokedex,
}

/// Duration fields as typed. Non-numeric entry counts as zero.
pub struct TimerInputs {
    pub minutes: String,
    pub seconds: String,
}

impl TimerInputs {
    pub fn from_timer(timer: &CountdownTimer) -> Self {
        Self { minutes: timer.minutes().to_string(), seconds: timer.seconds().to_string() }
    }
}

pub fn parse_duration_field(value: &str) -> u32 {
    value.trim().parse().unwrap_or(0)
}

pub fn show(
    ui: &mut egui::Ui,
    timer: &mut CountdownTimer,
    inputs: &mut TimerInputs,
    caught_count: usize,
    theme: &Theme,
) -> Option<TimerAction> {
    let mut action = None;

    ui.vertical_centered(|ui| {
        ui.add_space(16.0);
        ui.label(theme.heading("PokeStudy"));
        ui.add_space(8.0);

        ui.label(egui::RichText::new(timer.display()).size(64.0).monospace());
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            // Keep the row roughly centered in the panel.
            let row_width = 220.0;
            let pad = ((ui.available_width() - row_width) / 2.0).max(0.0);
            ui.add_space(pad);

            let editable = !timer.is_running();

            let minutes_edit = ui.add_enabled(
                editable,
                egui::TextEdit::singleline(&mut inputs.minutes).desired_width(40.0),
            );
            ui.label(theme.dim(messages::text(MessageKey::Minutes)));

            let seconds_edit = ui.add_enabled(
                editable,
                egui::TextEdit::singleline(&mut inputs.seconds).desired_width(40.0),
            );
            ui.label(theme.dim(messages::text(MessageKey::Seconds)));

            if minutes_edit.changed() {
                timer.set_minutes(parse_duration_field(&inputs.minutes));
            }
            if seconds_edit.changed() {
                timer.set_seconds(parse_duration_field(&inputs.seconds));
            }
        });

        ui.add_space(12.0);

        ui.horizontal(|ui| {
            let row_width = 220.0;
            let pad = ((ui.available_width() - row_width) / 2.0).max(0.0);
            ui.add_space(pad);

            let toggle_text = if timer.is_running() {
                messages::text(MessageKey::Pause)
            } else {
                messages::text(MessageKey::Start)
            };

            let can_toggle = timer.remaining_secs() > 0;
            if ui.add_enabled(can_toggle, egui::Button::new(toggle_text)).clicked() {
                action = Some(TimerAction::Toggle);
            }

            if ui.button(messages::text(MessageKey::Reset)).clicked() {
                action = Some(TimerAction::Reset);
            }

            let pokedex_text =
                format!("{} ({})", messages::text(MessageKey::OpenPokedex), caught_count);
            if ui.button(pokedex_text).clicked() {
                action = Some(TimerAction::OpenPokedex);
            }
        });
    });

    action
}
