use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    core::models::CaughtPokemon,
    persistence,
};

pub const COLLECTION_FILE: &str = "caughtPokemon.json";

/// The caught Pokémon, in capture order. Duplicate ids are kept: catching the
/// same Pokémon twice appends twice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Collection {
    entries: Vec<CaughtPokemon>,
}

impl Collection {
    /// Read the persisted Pokédex once at startup. A missing or malformed
    /// data file starts an empty collection instead of failing.
    pub fn hydrate() -> Self {
        persistence::load_json_or_default(COLLECTION_FILE)
    }

    /// Write the current contents. Called after each successful append, so an
    /// untouched empty collection never overwrites the stored file.
    pub fn persist(&self) {
        if let Err(e) = persistence::save_json(self, COLLECTION_FILE) {
            eprintln!("Failed to save Pokédex: {}", e);
        }
    }

    pub fn push(&mut self, pokemon: CaughtPokemon) {
        self.entries.push(pokemon);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CaughtPokemon> {
        self.entries.iter()
    }

    /// Pokédex display order: ascending id, ties kept in capture order.
    pub fn sorted_by_id(&self) -> Vec<&CaughtPokemon> {
        let mut view: Vec<&CaughtPokemon> = self.entries.iter().collect();
        view.sort_by_key(|p| p.id);
        view
    }
}
