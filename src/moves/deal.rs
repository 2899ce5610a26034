//! Dealing a batch of cards from the stock onto the columns.

use tracing::debug;

use super::traits::{Move, MoveKind};
use crate::core::GameState;
use crate::zones::ColumnId;

/// Deal one card to each column, right to left.
///
/// The first card taken from the stock goes to the rightmost column, the
/// next to its left neighbour, and so on. When the stock holds fewer cards
/// than there are columns, only the remainder is dealt, onto the rightmost
/// columns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DealMove {
    cards_moved: usize,
    valid: bool,
    applied: bool,
}

impl DealMove {
    /// Bind a deal from the stock onto all columns of `state`.
    ///
    /// Valid iff the stock is non-empty.
    #[must_use]
    pub fn new(state: &GameState) -> Self {
        let stock = state.tableau.stock();
        Self {
            cards_moved: state.tableau.column_count().min(stock.len()),
            valid: !stock.is_empty(),
            applied: false,
        }
    }

    /// Number of cards this deal moves.
    #[must_use]
    pub fn cards_moved(&self) -> usize {
        self.cards_moved
    }
}

impl Move for DealMove {
    fn kind(&self) -> MoveKind {
        MoveKind::Deal
    }

    fn is_valid(&self, _state: &GameState) -> bool {
        self.valid
    }

    fn apply(&mut self, state: &mut GameState) -> bool {
        let columns = state.tableau.column_count();
        if !self.valid
            || self.applied
            || self.cards_moved > columns
            || state.tableau.stock().len() < self.cards_moved
        {
            return false;
        }

        for i in 0..self.cards_moved {
            let target = ColumnId((columns - 1 - i) as u8);
            let Some(card) = state.tableau.stock_mut().pop_top() else {
                break;
            };
            if let Some(column) = state.tableau.column_mut(target) {
                column.push_top(card);
            }
        }

        state.counters.adjust_cards_left(-(self.cards_moved as i32));
        self.applied = true;
        debug!(
            cards = self.cards_moved,
            cards_left = state.counters.cards_left,
            "dealt"
        );
        true
    }

    fn undo(&mut self, state: &mut GameState) -> bool {
        let columns = state.tableau.column_count();
        if !self.applied || self.cards_moved > columns {
            return false;
        }

        let dealt_to: Vec<ColumnId> = (columns - self.cards_moved..columns)
            .map(|i| ColumnId(i as u8))
            .collect();
        if dealt_to.iter().any(|&id| state.tableau.column_top(id).is_none()) {
            return false;
        }

        // Leftmost first: its card sat deepest in the stock.
        for id in dealt_to {
            if let Some(card) = state.tableau.column_mut(id).and_then(|c| c.pop_top()) {
                state.tableau.stock_mut().push_top(card);
            }
        }

        state.counters.adjust_cards_left(self.cards_moved as i32);
        self.applied = false;
        debug!(
            cards = self.cards_moved,
            cards_left = state.counters.cards_left,
            "undid deal"
        );
        true
    }
}
