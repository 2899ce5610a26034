//! Game configuration.
//!
//! A `GameConfig` fixes everything needed to reproduce a deal: the stock
//! order and the number of columns. The classic game uses five columns and
//! a seeded shuffle.

use serde::{Deserialize, Serialize};

/// Number of columns in the classic layout.
pub const DEFAULT_COLUMNS: usize = 5;

/// How the stock is ordered at the start of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeckOrder {
    /// By-suit order shuffled deterministically from the seed.
    Shuffled(u64),
    /// Unshuffled: Clubs Ace..King at the bottom, Spades King on top.
    BySuit,
}

/// Game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Initial stock order.
    pub deck_order: DeckOrder,

    /// Number of tableau columns (1..=13). Also the size of a full deal.
    pub column_count: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            deck_order: DeckOrder::Shuffled(0),
            column_count: DEFAULT_COLUMNS,
        }
    }
}

impl GameConfig {
    /// Shuffle the stock with the given seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.deck_order = DeckOrder::Shuffled(seed);
        self
    }

    /// Leave the stock in by-suit order.
    #[must_use]
    pub fn by_suit(mut self) -> Self {
        self.deck_order = DeckOrder::BySuit;
        self
    }

    /// Use a custom number of columns.
    #[must_use]
    pub fn with_columns(mut self, count: usize) -> Self {
        self.column_count = count;
        self
    }

    /// The shuffle seed, if the stock is shuffled.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        match self.deck_order {
            DeckOrder::Shuffled(seed) => Some(seed),
            DeckOrder::BySuit => None,
        }
    }
}
