//! Game rules: which moves are legal now, and when the game is over.
//!
//! Both the interactive controllers and the solver ask `available_moves`
//! for the current legal set and apply one of the returned moves.

pub mod engine;

pub use engine::{available_moves, game_result, GameResult, MoveList};
