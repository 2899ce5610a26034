//! Core engine types: configuration, RNG and game state.

pub mod config;
pub mod rng;
pub mod state;

pub use config::{DeckOrder, GameConfig, DEFAULT_COLUMNS};
pub use rng::GameRng;
pub use state::{Counters, GameState};
