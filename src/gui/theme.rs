use eframe::egui::{
    self,
    Color32,
    RichText,
    Stroke,
    Visuals,
};

#[derive(Clone)]
pub struct Theme {
    background: Color32,
    panel: Color32,
    text: Color32,
    red: Color32,
    yellow: Color32,
    gray: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        Self::pokedex()
    }
}

impl Theme {
    /// Pokédex-red accents on a dark slate background.
    pub fn pokedex() -> Self {
        Self {
            background: Color32::from_rgb(40, 44, 52),
            panel: Color32::from_rgb(33, 37, 43),
            text: Color32::from_rgb(220, 223, 228),
            red: Color32::from_rgb(222, 56, 49),
            yellow: Color32::from_rgb(255, 203, 5),
            gray: Color32::from_rgb(130, 137, 151),
        }
    }

    pub fn heading(&self, content: &str) -> RichText {
        RichText::new(content).color(self.yellow).strong()
    }

    pub fn bold(&self, content: &str) -> RichText {
        RichText::new(content).color(self.red).strong()
    }

    pub fn dim(&self, content: &str) -> RichText {
        RichText::new(content).color(self.gray)
    }

    pub fn red(&self) -> Color32 {
        self.red
    }
}

pub fn set_theme(ctx: &egui::Context, theme: Theme) {
    let mut visuals = Visuals::dark();
    visuals.panel_fill = theme.background;
    visuals.window_fill = theme.panel;
    visuals.override_text_color = Some(theme.text);
    visuals.selection.bg_fill = theme.red;
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, theme.yellow);
    ctx.set_visuals(visuals);
}

/// Chip colors per Pokémon type, roughly the classic game palette.
pub fn type_color(type_name: &str) -> Color32 {
    match type_name {
        "fire" => Color32::from_rgb(238, 129, 48),
        "water" => Color32::from_rgb(99, 144, 240),
        "grass" => Color32::from_rgb(122, 199, 76),
        "electric" => Color32::from_rgb(247, 208, 44),
        "ice" => Color32::from_rgb(150, 217, 214),
        "fighting" => Color32::from_rgb(194, 46, 40),
        "poison" => Color32::from_rgb(163, 62, 161),
        "ground" => Color32::from_rgb(226, 191, 101),
        "flying" => Color32::from_rgb(169, 143, 243),
        "psychic" => Color32::from_rgb(249, 85, 135),
        "bug" => Color32::from_rgb(166, 185, 26),
        "rock" => Color32::from_rgb(182, 161, 54),
        "ghost" => Color32::from_rgb(115, 87, 151),
        "dragon" => Color32::from_rgb(111, 53, 252),
        "normal" => Color32::from_rgb(168, 167, 122),
        _ => Color32::from_rgb(130, 137, 151),
    }
}
