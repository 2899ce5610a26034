//! Playing a lone King.

use tracing::debug;

use super::traits::{Move, MoveKind};
use crate::cards::Card;
use crate::core::GameState;
use crate::zones::ColumnId;

/// Move an exposed King to the foundation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayKingMove {
    source: ColumnId,
    dragged: Option<Card>,
    valid: bool,
    applied: bool,
}

impl PlayKingMove {
    /// Play the top card of `source`.
    #[must_use]
    pub fn new(state: &GameState, source: ColumnId) -> Self {
        let valid = state
            .tableau
            .column_top(source)
            .is_some_and(Card::is_king);

        Self {
            source,
            dragged: None,
            valid,
            applied: false,
        }
    }

    /// Play a card the player lifted off `source`.
    #[must_use]
    pub fn with_dragged(state: &GameState, source: ColumnId, dragged: Option<Card>) -> Self {
        let valid = state.tableau.column(source).is_some() && dragged.is_some_and(|c| c.is_king());

        Self {
            source,
            dragged,
            valid,
            applied: false,
        }
    }

    #[must_use]
    pub fn source(&self) -> ColumnId {
        self.source
    }

    /// The lifted card this move carries, if any.
    #[must_use]
    pub fn dragged(&self) -> Option<Card> {
        self.dragged
    }
}

impl Move for PlayKingMove {
    fn kind(&self) -> MoveKind {
        MoveKind::PlayKing
    }

    fn is_valid(&self, _state: &GameState) -> bool {
        self.valid
    }

    fn apply(&mut self, state: &mut GameState) -> bool {
        if !self.valid || self.applied {
            return false;
        }

        let card = match self.dragged {
            Some(card) => Some(card),
            None => state.tableau.column_mut(self.source).and_then(|c| c.pop_top()),
        };
        let Some(card) = card else {
            return false;
        };
        state.tableau.foundation_mut().push_top(card);

        state.counters.adjust_score(-1);
        self.applied = true;
        debug!(source = %self.source, card = %card, score = state.counters.score, "played king");
        true
    }

    fn undo(&mut self, state: &mut GameState) -> bool {
        if !self.applied
            || state.tableau.foundation().is_empty()
            || state.tableau.column(self.source).is_none()
        {
            return false;
        }

        if let Some(card) = state.tableau.foundation_mut().pop_top() {
            if let Some(column) = state.tableau.column_mut(self.source) {
                column.push_top(card);
            }
        }

        // A dragged card is now back on its source column.
        self.dragged = None;
        state.counters.adjust_score(1);
        self.applied = false;
        debug!(source = %self.source, score = state.counters.score, "undid king");
        true
    }
}
