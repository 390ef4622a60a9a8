pub mod collection;
pub mod errors;
pub mod models;
pub mod pokeapi;
pub mod tasks;
pub mod timer;

pub use collection::Collection;
pub use errors::PokeStudyError;
pub use models::CaughtPokemon;
pub use timer::CountdownTimer;
