pub mod app;
pub mod capture_status;
pub mod messages;
pub mod pokedex_modal;
pub mod theme;
pub mod timer_panel;

pub use app::PokeStudyApp;
