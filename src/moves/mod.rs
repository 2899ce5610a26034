//! Move engine.
//!
//! Four move kinds, each binding column addresses (and optionally a card
//! the player has lifted) at construction, checking legality once, and
//! applying or reversing its exact card transfer.
//!
//! ## Key Types
//!
//! - `Move`: the construct / `is_valid` / `apply` / `undo` contract
//! - `DealMove`: stock to columns, right to left
//! - `PlayPairMove`: two cards summing to thirteen to the foundation
//! - `PlayKingMove`: a King to the foundation
//! - `MoveToEmptyColumnMove`: one card into an empty column
//! - `AnyMove`: closed union used by the enumerator and solver

pub mod any;
pub mod deal;
pub mod empty_column;
pub mod king;
pub mod pair;
pub mod traits;

pub use any::AnyMove;
pub use deal::DealMove;
pub use empty_column::MoveToEmptyColumnMove;
pub use king::PlayKingMove;
pub use pair::PlayPairMove;
pub use traits::{Move, MoveKind};
