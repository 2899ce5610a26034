//! The table: one stock, an ordered row of columns and one foundation.
//!
//! Cards only move between these piles through moves. The tableau never
//! creates or destroys cards, which `check_invariants` verifies.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::pile::{ColumnId, Pile, PileId};
use crate::cards::{Card, CardId};

/// Broken structural invariant of the table.
///
/// These indicate a programming error, never an illegal move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvariantViolation {
    /// Cards were created or lost.
    CardCount { expected: usize, found: usize },
    /// The same card sits in two places at once.
    DuplicateCard(CardId),
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvariantViolation::CardCount { expected, found } => {
                write!(f, "expected {} cards on the table, found {}", expected, found)
            }
            InvariantViolation::DuplicateCard(id) => write!(f, "{} appears more than once", id),
        }
    }
}

impl std::error::Error for InvariantViolation {}

/// Most columns a table may have: one per rank.
pub const MAX_COLUMNS: usize = 13;

/// Stock, columns and foundation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tableau {
    stock: Pile,
    columns: Vec<Pile>,
    foundation: Pile,
}

impl Tableau {
    /// Create a table with `stock` (bottom to top) and `column_count` empty columns.
    ///
    /// Panics if `column_count` is outside 1..=13.
    #[must_use]
    pub fn new(stock: Vec<Card>, column_count: usize) -> Self {
        assert!(column_count > 0, "Must have at least 1 column");
        assert!(column_count <= MAX_COLUMNS, "At most 13 columns supported");

        Self {
            stock: Pile::from_cards(stock),
            columns: vec![Pile::new(); column_count],
            foundation: Pile::new(),
        }
    }

    // === Stock ===

    #[must_use]
    pub fn stock(&self) -> &Pile {
        &self.stock
    }

    pub fn stock_mut(&mut self) -> &mut Pile {
        &mut self.stock
    }

    // === Columns ===

    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Iterate over the ids of every column, left to right.
    pub fn column_ids(&self) -> impl Iterator<Item = ColumnId> {
        ColumnId::all(self.columns.len())
    }

    /// Get a column, or `None` if `id` does not name one.
    #[must_use]
    pub fn column(&self, id: ColumnId) -> Option<&Pile> {
        self.columns.get(id.index())
    }

    pub fn column_mut(&mut self, id: ColumnId) -> Option<&mut Pile> {
        self.columns.get_mut(id.index())
    }

    /// Top card of a column, if the column exists and is non-empty.
    #[must_use]
    pub fn column_top(&self, id: ColumnId) -> Option<&Card> {
        self.column(id).and_then(Pile::top)
    }

    #[must_use]
    pub fn columns(&self) -> &[Pile] {
        &self.columns
    }

    // === Foundation ===

    #[must_use]
    pub fn foundation(&self) -> &Pile {
        &self.foundation
    }

    pub fn foundation_mut(&mut self) -> &mut Pile {
        &mut self.foundation
    }

    // === Inspection ===

    /// Look up any pile by address.
    #[must_use]
    pub fn pile(&self, id: PileId) -> Option<&Pile> {
        match id {
            PileId::Stock => Some(&self.stock),
            PileId::Column(column) => self.column(column),
            PileId::Foundation => Some(&self.foundation),
        }
    }

    /// Iterate over every pile with its address: stock, columns, foundation.
    pub fn piles(&self) -> impl Iterator<Item = (PileId, &Pile)> {
        std::iter::once((PileId::Stock, &self.stock))
            .chain(
                self.columns
                    .iter()
                    .enumerate()
                    .map(|(i, pile)| (PileId::Column(ColumnId(i as u8)), pile)),
            )
            .chain(std::iter::once((PileId::Foundation, &self.foundation)))
    }

    /// Cards across all piles.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.piles().map(|(_, pile)| pile.len()).sum()
    }

    /// Cards still in play: stock plus columns.
    #[must_use]
    pub fn cards_in_play(&self) -> usize {
        self.stock.len() + self.columns.iter().map(Pile::len).sum::<usize>()
    }

    /// Stock and every column are empty.
    #[must_use]
    pub fn is_cleared(&self) -> bool {
        self.cards_in_play() == 0
    }

    /// Check that exactly `expected` cards exist and none is duplicated.
    pub fn check_invariants(&self, expected: usize) -> Result<(), InvariantViolation> {
        let found = self.total_cards();
        if found != expected {
            return Err(InvariantViolation::CardCount { expected, found });
        }

        let mut seen = FxHashSet::default();
        for (_, pile) in self.piles() {
            for card in pile.cards() {
                if !seen.insert(card.id()) {
                    return Err(InvariantViolation::DuplicateCard(card.id()));
                }
            }
        }

        Ok(())
    }
}
