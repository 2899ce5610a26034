//! Game state: the table plus the derived counters.
//!
//! ## Counters
//!
//! `score` is the number of cards not yet on the foundation and
//! `cards_left` the number still in the stock. They are projections of the
//! table, updated by moves as a side effect and never consulted for
//! legality.
//!
//! ## GameState
//!
//! Owns the `Tableau` and the `Counters`. Moves take `&mut GameState`, so
//! every counter update is explicit at the call site.

use serde::{Deserialize, Serialize};

use super::config::GameConfig;
use crate::cards::{standard_deck, DECK_SIZE};
use crate::zones::{InvariantViolation, Tableau, MAX_COLUMNS};

/// Score and cards-left projections.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counters {
    /// Cards not yet played to the foundation. Zero means the game is won.
    pub score: i32,
    /// Cards remaining in the stock.
    pub cards_left: i32,
}

impl Counters {
    /// Counters for a fresh game of `total` cards.
    #[must_use]
    pub fn new(total: usize) -> Self {
        Self {
            score: total as i32,
            cards_left: total as i32,
        }
    }

    /// Modify the score by delta.
    pub fn adjust_score(&mut self, delta: i32) {
        self.score += delta;
    }

    /// Modify the cards-left counter by delta.
    pub fn adjust_cards_left(&mut self, delta: i32) {
        self.cards_left += delta;
    }

    #[must_use]
    pub fn has_won(&self) -> bool {
        self.score == 0
    }
}

/// Full game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Stock, columns and foundation.
    pub tableau: Tableau,

    /// Score and cards-left projections.
    pub counters: Counters,

    config: GameConfig,
}

impl GameState {
    /// Create a game with a full stock and empty columns and foundation.
    ///
    /// Panics if the column count is outside 1..=13.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        assert!(config.column_count > 0, "Must have at least 1 column");
        assert!(config.column_count <= MAX_COLUMNS, "At most 13 columns supported");

        Self {
            tableau: Tableau::new(standard_deck(config.deck_order), config.column_count),
            counters: Counters::new(DECK_SIZE),
            config: config.clone(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Copy of the table, for comparing before/after states.
    #[must_use]
    pub fn snapshot(&self) -> Tableau {
        self.tableau.clone()
    }

    /// Won: every card is on the foundation.
    #[must_use]
    pub fn has_won(&self) -> bool {
        self.counters.has_won()
    }

    /// Verify conservation and uniqueness of all 52 cards.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        self.tableau.check_invariants(DECK_SIZE)
    }
}
