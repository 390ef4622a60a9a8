use serde::{
    Deserialize,
    Serialize,
};

/// One entry in the Pokédex. Field names follow the stored document
/// (`caughtPokemon` is a plain JSON array of these), so older data files
/// deserialize as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaughtPokemon {
    pub id: u32,
    pub name: String,
    pub types: Vec<String>,
    pub image: Option<String>,
    pub capture_date: String,
}

impl CaughtPokemon {
    /// Pokédex-style number, e.g. "#025".
    pub fn padded_id(&self) -> String {
        format!("#{:03}", self.id)
    }
}

/// The local date at capture time, as stored in `captureDate`.
pub fn capture_date_today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_field_names_match_original_document() {
        let pokemon = CaughtPokemon {
            id: 25,
            name: "pikachu".to_string(),
            types: vec!["electric".to_string()],
            image: Some("https://example.com/25.png".to_string()),
            capture_date: "2026-08-30".to_string(),
        };

        let json = serde_json::to_value(&pokemon).unwrap();
        assert_eq!(json["id"], 25);
        assert_eq!(json["name"], "pikachu");
        assert_eq!(json["types"][0], "electric");
        assert_eq!(json["image"], "https://example.com/25.png");
        assert_eq!(json["captureDate"], "2026-08-30");
    }

    #[test]
    fn padded_id_is_three_digits() {
        let mut pokemon = CaughtPokemon {
            id: 4,
            name: "charmander".to_string(),
            types: vec!["fire".to_string()],
            image: None,
            capture_date: "2026-08-30".to_string(),
        };
        assert_eq!(pokemon.padded_id(), "#004");

        pokemon.id = 150;
        assert_eq!(pokemon.padded_id(), "#150");
    }
}
