use eframe::egui;

use super::{
    capture_status::type_chips,
    messages::{
        self,
        MessageKey,
    },
    theme::Theme,
};
use crate::core::{
    CaughtPokemon,
    Collection,
};

const GRID_COLUMNS: usize = 3;

/// Modal grid of the collection, sorted by Pokédex number. Read-only: the
/// only state it touches is its own open flag.
pub struct PokedexModal {
    open: bool,
}

impl PokedexModal {
    pub fn new() -> Self {
        Self { open: false }
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn show(&mut self, ctx: &egui::Context, collection: &Collection, theme: &Theme) {
        if !self.open {
            return;
        }

        let modal = egui::Modal::new(egui::Id::new("pokedex_modal")).show(ctx, |ui| {
            ui.set_width(420.0);

            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(messages::text(MessageKey::PokedexTitle))
                        .size(20.0)
                        .strong(),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button(messages::text(MessageKey::Close)).clicked() {
                        ui.close();
                    }
                });
            });

            ui.separator();

            if collection.is_empty() {
                ui.add_space(24.0);
                ui.vertical_centered(|ui| {
                    ui.label(theme.dim(messages::text(MessageKey::PokedexEmpty)));
                });
                ui.add_space(24.0);
                return;
            }

            egui::ScrollArea::vertical().max_height(420.0).show(ui, |ui| {
                let sorted = collection.sorted_by_id();
                egui::Grid::new("pokedex_grid").num_columns(GRID_COLUMNS).spacing([8.0, 8.0]).show(
                    ui,
                    |ui| {
                        for (i, pokemon) in sorted.iter().enumerate() {
                            entry_card(ui, pokemon, theme);
                            if (i + 1) % GRID_COLUMNS == 0 {
                                ui.end_row();
                            }
                        }
                    },
                );
            });
        });

        if modal.should_close() {
            self.open = false;
        }
    }
}

impl Default for PokedexModal {
    fn default() -> Self {
        Self::new()
    }
}

fn entry_card(ui: &mut egui::Ui, pokemon: &CaughtPokemon, theme: &Theme) {
    ui.group(|ui| {
        ui.set_width(120.0);
        ui.vertical_centered(|ui| {
            if let Some(url) = &pokemon.image {
                ui.add(egui::Image::new(url.as_str()).fit_to_exact_size(egui::vec2(72.0, 72.0)));
            } else {
                ui.add_space(72.0);
            }
            ui.label(theme.bold(&format!("{} {}", pokemon.padded_id(), pokemon.name)));
            type_chips(ui, &pokemon.types);
            ui.label(
                theme.dim(&format!(
                    "{} {}",
                    messages::text(MessageKey::CaughtOn),
                    pokemon.capture_date
                )),
            );
        });
    });
}
