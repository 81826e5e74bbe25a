//! The components module contains the card's widgets and the state machines behind them.

mod audio_manager;
mod card;
mod card_controller;
mod cover_art;
mod gesture;
mod icons;
mod navigation;
mod panel;
mod player;
mod telemetry;
mod viewport;
pub mod views;

pub use audio_manager::*;
pub use card::*;
pub use card_controller::*;
pub use cover_art::*;
pub use gesture::*;
pub use icons::*;
pub use navigation::*;
pub use panel::*;
pub use player::*;
pub use telemetry::*;
pub use viewport::*;
// Panel bodies are accessed via views::PanelName
