//! Playing two exposed cards that sum to thirteen.

use tracing::debug;

use super::traits::{Move, MoveKind};
use crate::cards::Card;
use crate::core::GameState;
use crate::zones::ColumnId;

/// Move a pair of cards summing to thirteen to the foundation.
///
/// The pair is either the top cards of two different columns, or a card
/// already lifted off `source` by the player plus the top card of `target`.
/// The target's card goes to the foundation first, the source's second.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayPairMove {
    source: ColumnId,
    target: ColumnId,
    dragged: Option<Card>,
    valid: bool,
    applied: bool,
}

impl PlayPairMove {
    /// Pair the top cards of `source` and `target`.
    #[must_use]
    pub fn new(state: &GameState, source: ColumnId, target: ColumnId) -> Self {
        let tableau = &state.tableau;
        let valid = source != target
            && match (tableau.column_top(source), tableau.column_top(target)) {
                (Some(a), Some(b)) => a.pairs_with(b),
                _ => false,
            };

        Self {
            source,
            target,
            dragged: None,
            valid,
            applied: false,
        }
    }

    /// Pair a card the player lifted off `source` with the top card of `target`.
    ///
    /// `dragged` must no longer be on `source`; the caller holds it until
    /// the move is applied, and takes it back if the move is rejected.
    #[must_use]
    pub fn with_dragged(
        state: &GameState,
        source: ColumnId,
        target: ColumnId,
        dragged: Option<Card>,
    ) -> Self {
        let tableau = &state.tableau;
        let valid = source != target
            && tableau.column(source).is_some()
            && match (dragged, tableau.column_top(target)) {
                (Some(card), Some(top)) => card.pairs_with(top),
                _ => false,
            };

        Self {
            source,
            target,
            dragged,
            valid,
            applied: false,
        }
    }

    #[must_use]
    pub fn source(&self) -> ColumnId {
        self.source
    }

    #[must_use]
    pub fn target(&self) -> ColumnId {
        self.target
    }

    /// The lifted card this move carries, if any.
    #[must_use]
    pub fn dragged(&self) -> Option<Card> {
        self.dragged
    }
}

impl Move for PlayPairMove {
    fn kind(&self) -> MoveKind {
        MoveKind::PlayPair
    }

    fn is_valid(&self, _state: &GameState) -> bool {
        self.valid
    }

    fn apply(&mut self, state: &mut GameState) -> bool {
        if !self.valid || self.applied {
            return false;
        }
        let tableau = &mut state.tableau;
        let source_ready = self.dragged.is_some() || tableau.column_top(self.source).is_some();
        if !source_ready || tableau.column_top(self.target).is_none() {
            return false;
        }

        let target_card = tableau.column_mut(self.target).and_then(|c| c.pop_top());
        let source_card = match self.dragged {
            Some(card) => Some(card),
            None => tableau.column_mut(self.source).and_then(|c| c.pop_top()),
        };
        let (Some(target_card), Some(source_card)) = (target_card, source_card) else {
            return false;
        };
        tableau.foundation_mut().push_top(target_card);
        tableau.foundation_mut().push_top(source_card);

        state.counters.adjust_score(-2);
        self.applied = true;
        debug!(
            source = %self.source,
            target = %self.target,
            source_card = %source_card,
            target_card = %target_card,
            score = state.counters.score,
            "played pair"
        );
        true
    }

    fn undo(&mut self, state: &mut GameState) -> bool {
        let tableau = &mut state.tableau;
        if !self.applied
            || tableau.foundation().len() < 2
            || tableau.column(self.source).is_none()
            || tableau.column(self.target).is_none()
        {
            return false;
        }

        // Source card was pushed last.
        if let Some(card) = tableau.foundation_mut().pop_top() {
            if let Some(column) = tableau.column_mut(self.source) {
                column.push_top(card);
            }
        }
        if let Some(card) = tableau.foundation_mut().pop_top() {
            if let Some(column) = tableau.column_mut(self.target) {
                column.push_top(card);
            }
        }

        // A dragged card is now back on its source column.
        self.dragged = None;
        state.counters.adjust_score(2);
        self.applied = false;
        debug!(
            source = %self.source,
            target = %self.target,
            score = state.counters.score,
            "undid pair"
        );
        true
    }
}
