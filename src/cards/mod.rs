//! Card model: suits, ranks, card identity and the standard deck.
//!
//! ## Key Types
//!
//! - `Rank`: 1 (Ace) to 13 (King); pairs are ranks summing to thirteen
//! - `Suit`: the four suits, in by-suit deck order
//! - `CardId`: identity of a physical card within one deck
//! - `Card`: immutable card value

pub mod card;
pub mod deck;

pub use card::{Card, CardId, Rank, Suit};
pub use deck::{standard_deck, DECK_SIZE};
