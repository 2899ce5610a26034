//! # baroness
//!
//! Move engine for Baroness (also known as Thirteens), a one-player
//! patience game played with a standard 52-card deck.
//!
//! ## Rules in Brief
//!
//! The stock is dealt one card per column, right to left. Two exposed cards
//! whose ranks sum to thirteen go to the foundation together; an exposed
//! King goes alone. A column's top card may move into an empty column as
//! long as its own column is not emptied. The score counts the cards not yet
//! on the foundation; the game is won at zero.
//!
//! ## Design Principles
//!
//! 1. **Moves Are Values**: Every move binds its columns at construction,
//!    decides legality once, and applies or reverses its exact transfer.
//!
//! 2. **Addresses, Not References**: Moves name columns by `ColumnId`. An id
//!    that does not name a column yields an invalid move, never a panic.
//!
//! 3. **No Hidden State**: All mutable state lives in `GameState`, which is
//!    passed explicitly to every move.
//!
//! ## Modules
//!
//! - `cards`: Suits, ranks, cards and the standard deck
//! - `core`: Configuration, RNG, counters and game state
//! - `zones`: Piles, the tableau and its invariant checks
//! - `moves`: The four move kinds and the `Move` contract
//! - `rules`: Move enumeration and terminal detection
//! - `play`: Drag, drop and click gestures plus undo history
//! - `solver`: Policy-driven automated play

pub mod cards;
pub mod core;
pub mod zones;
pub mod moves;
pub mod rules;
pub mod play;
pub mod solver;

// Re-export commonly used types
pub use crate::cards::{Card, CardId, Rank, Suit, standard_deck, DECK_SIZE};

pub use crate::core::{Counters, DeckOrder, GameConfig, GameRng, GameState};

pub use crate::zones::{ColumnId, InvariantViolation, Pile, PileId, Tableau};

pub use crate::moves::{
    AnyMove, DealMove, Move, MoveKind, MoveToEmptyColumnMove, PlayKingMove, PlayPairMove,
};

pub use crate::rules::{available_moves, game_result, GameResult, MoveList};

pub use crate::play::{DragSession, Dropped, UndoHistory};

pub use crate::solver::{
    FirstLegal, MovePolicy, RandomMove, SolveOutcome, SolveStats, Solver, SolverConfig,
};
