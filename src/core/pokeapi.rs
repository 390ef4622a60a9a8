use rand::Rng;
use reqwest::Client;
use serde::Deserialize;

use crate::core::{
    models::{
        self,
        CaughtPokemon,
    },
    PokeStudyError,
};

const API_URL: &str = "https://pokeapi.co/api/v2/pokemon";

// Original 151 only.
pub const MIN_POKEMON_ID: u32 = 1;
pub const MAX_POKEMON_ID: u32 = 151;

#[derive(Debug, Deserialize)]
pub struct PokemonResponse {
    pub id: u32,
    pub name: String,
    pub types: Vec<TypeSlot>,
    pub sprites: Sprites,
}

#[derive(Debug, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub type_ref: NamedResource,
}

#[derive(Debug, Deserialize)]
pub struct NamedResource {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct Sprites {
    pub front_default: Option<String>,
}

pub fn random_id() -> u32 {
    rand::rng().random_range(MIN_POKEMON_ID..=MAX_POKEMON_ID)
}

/// Fetch one Pokémon by id and stamp it with today's capture date.
pub async fn fetch_pokemon(id: u32) -> Result<CaughtPokemon, PokeStudyError> {
    let response = Client::new().get(format!("{}/{}", API_URL, id)).send().await?;

    if !response.status().is_success() {
        return Err(PokeStudyError::HttpStatus(response.status()));
    }

    let body: PokemonResponse = response.json().await?;
    Ok(into_caught(body, models::capture_date_today()))
}

/// Flatten the provider response into the record the Pokédex stores.
fn into_caught(body: PokemonResponse, capture_date: String) -> CaughtPokemon {
    CaughtPokemon {
        id: body.id,
        name: body.name,
        types: body.types.into_iter().map(|slot| slot.type_ref.name).collect(),
        image: body.sprites.front_default,
        capture_date,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_body() -> serde_json::Value {
        serde_json::json!({
            "id": 25,
            "name": "pikachu",
            "base_experience": 112,
            "types": [
                { "slot": 1, "type": { "name": "electric", "url": "https://pokeapi.co/api/v2/type/13/" } }
            ],
            "sprites": {
                "front_default": "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/25.png",
                "back_default": null
            }
        })
    }

    #[test]
    fn maps_response_into_caught_pokemon() {
        let body: PokemonResponse = serde_json::from_value(sample_body()).unwrap();
        let caught = into_caught(body, "2026-08-30".to_string());

        assert_eq!(caught.id, 25);
        assert_eq!(caught.name, "pikachu");
        assert_eq!(caught.types, vec!["electric".to_string()]);
        assert_eq!(
            caught.image.as_deref(),
            Some("https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/25.png")
        );
        assert_eq!(caught.capture_date, "2026-08-30");
    }

    #[test]
    fn flattens_multiple_types_in_slot_order() {
        let mut body = sample_body();
        body["types"] = serde_json::json!([
            { "slot": 1, "type": { "name": "grass" } },
            { "slot": 2, "type": { "name": "poison" } }
        ]);

        let response: PokemonResponse = serde_json::from_value(body).unwrap();
        let caught = into_caught(response, "2026-08-30".to_string());
        assert_eq!(caught.types, vec!["grass".to_string(), "poison".to_string()]);
    }

    #[test]
    fn missing_sprite_maps_to_none() {
        let mut body = sample_body();
        body["sprites"]["front_default"] = serde_json::Value::Null;

        let response: PokemonResponse = serde_json::from_value(body).unwrap();
        let caught = into_caught(response, "2026-08-30".to_string());
        assert_eq!(caught.image, None);
    }

    #[test]
    fn truncated_body_is_a_decode_error() {
        let result = serde_json::from_str::<PokemonResponse>(r#"{"id": 25, "name": "pikachu"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn random_id_stays_in_kanto() {
        for _ in 0..1000 {
            let id = random_id();
            assert!((MIN_POKEMON_ID..=MAX_POKEMON_ID).contains(&id));
        }
    }
}
