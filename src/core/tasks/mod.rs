pub mod manager;

pub use manager::TaskManager;

use crate::core::CaughtPokemon;

/// Delivered to the GUI thread over the task channel, one per finished
/// background task.
#[derive(Debug, Clone)]
pub enum TaskResult {
    Capture(Result<CaughtPokemon, String>),
}
