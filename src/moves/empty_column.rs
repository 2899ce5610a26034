//! Relocating a card into an empty column.

use tracing::debug;

use super::traits::{Move, MoveKind};
use crate::cards::Card;
use crate::core::GameState;
use crate::zones::ColumnId;

/// Move one card from `source` onto the empty column `target`.
///
/// The last card of a column may not be relocated: without a lifted card,
/// `source` must hold more than one card; with one, `source` must still
/// hold at least one card after the lift.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveToEmptyColumnMove {
    source: ColumnId,
    target: ColumnId,
    dragged: Option<Card>,
    valid: bool,
    applied: bool,
}

impl MoveToEmptyColumnMove {
    /// Move the top card of `source` to `target`.
    #[must_use]
    pub fn new(state: &GameState, source: ColumnId, target: ColumnId) -> Self {
        let tableau = &state.tableau;
        let valid = match (tableau.column(source), tableau.column(target)) {
            (Some(from), Some(to)) => to.is_empty() && from.len() > 1,
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

    /// Move a card the player lifted off `source` to `target`.
    #[must_use]
    pub fn with_dragged(
        state: &GameState,
        source: ColumnId,
        target: ColumnId,
        dragged: Option<Card>,
    ) -> Self {
        let tableau = &state.tableau;
        let valid = dragged.is_some()
            && match (tableau.column(source), tableau.column(target)) {
                (Some(from), Some(to)) => to.is_empty() && !from.is_empty(),
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

impl Move for MoveToEmptyColumnMove {
    fn kind(&self) -> MoveKind {
        MoveKind::MoveToEmptyColumn
    }

    fn is_valid(&self, _state: &GameState) -> bool {
        self.valid
    }

    fn apply(&mut self, state: &mut GameState) -> bool {
        if !self.valid || self.applied || state.tableau.column(self.target).is_none() {
            return false;
        }

        let card = match self.dragged {
            Some(card) => Some(card),
            None => state.tableau.column_mut(self.source).and_then(|c| c.pop_top()),
        };
        let Some(card) = card else {
            return false;
        };
        if let Some(column) = state.tableau.column_mut(self.target) {
            column.push_top(card);
        }

        self.applied = true;
        debug!(source = %self.source, target = %self.target, card = %card, "moved to empty column");
        true
    }

    fn undo(&mut self, state: &mut GameState) -> bool {
        if !self.applied
            || state.tableau.column_top(self.target).is_none()
            || state.tableau.column(self.source).is_none()
        {
            return false;
        }

        if let Some(card) = state.tableau.column_mut(self.target).and_then(|c| c.pop_top()) {
            if let Some(column) = state.tableau.column_mut(self.source) {
                column.push_top(card);
            }
        }

        // A dragged card is now back on its source column.
        self.dragged = None;
        self.applied = false;
        debug!(source = %self.source, target = %self.target, "undid move to empty column");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;
    use crate::moves::{DealMove, PlayKingMove};

    fn col(i: u8) -> ColumnId {
        ColumnId::new(i)
    }

    /// By-suit stock with column 4 emptied: col0..3 = (9,4) (10,5) (11,6) (12,7,8).
    fn with_empty_column() -> GameState {
        let mut state = GameState::new(&GameConfig::default().by_suit());
        DealMove::new(&state).apply(&mut state);
        PlayKingMove::new(&state, col(4)).apply(&mut state);
        DealMove::new(&state).apply(&mut state);
        let card = state.tableau.column_mut(col(4)).unwrap().pop_top().unwrap();
        state.tableau.column_mut(col(3)).unwrap().push_top(card);
        state
    }

    #[test]
    fn test_relocate_top_card() {
        let mut state = with_empty_column();
        let before = state.snapshot();
        let mut relocate = MoveToEmptyColumnMove::new(&state, col(0), col(4));

        assert!(relocate.is_valid(&state));
        assert!(relocate.apply(&mut state));
        assert_eq!(state.tableau.column(col(0)).unwrap().len(), 1);
        assert_eq!(state.tableau.column_top(col(4)).unwrap().rank.value(), 4);
        assert_eq!(state.counters.score, 51);

        assert!(relocate.undo(&mut state));
        assert_eq!(state.snapshot(), before);
        assert!(!relocate.undo(&mut state));
    }

    #[test]
    fn test_target_must_be_empty() {
        let mut state = with_empty_column();
        let before = state.snapshot();
        let mut relocate = MoveToEmptyColumnMove::new(&state, col(0), col(1));

        assert!(!relocate.is_valid(&state));
        assert!(!relocate.apply(&mut state));
        assert!(!relocate.undo(&mut state));
        assert_eq!(state.snapshot(), before);
    }

    #[test]
    fn test_single_card_source_invalid() {
        let mut state = with_empty_column();
        // Leave column 0 with a single card
        let card = state.tableau.column_mut(col(0)).unwrap().pop_top().unwrap();
        state.tableau.column_mut(col(1)).unwrap().push_top(card);

        assert!(!MoveToEmptyColumnMove::new(&state, col(0), col(4)).is_valid(&state));
    }

    #[test]
    fn test_same_or_absent_column_invalid() {
        let state = with_empty_column();
        assert!(!MoveToEmptyColumnMove::new(&state, col(4), col(4)).is_valid(&state));
        assert!(!MoveToEmptyColumnMove::new(&state, col(8), col(4)).is_valid(&state));
        assert!(!MoveToEmptyColumnMove::new(&state, col(0), col(8)).is_valid(&state));
        assert!(!MoveToEmptyColumnMove::with_dragged(&state, col(0), col(4), None).is_valid(&state));
    }

    #[test]
    fn test_dragged_card() {
        let mut state = with_empty_column();
        let lifted = state.tableau.column_mut(col(2)).unwrap().pop_top();

        let mut relocate = MoveToEmptyColumnMove::with_dragged(&state, col(2), col(4), lifted);
        assert!(relocate.is_valid(&state));
        assert!(relocate.apply(&mut state));
        assert_eq!(state.tableau.column_top(col(4)).copied(), lifted);

        assert!(relocate.undo(&mut state));
        assert_eq!(state.snapshot(), with_empty_column().snapshot());
        assert_eq!(relocate.dragged(), None);
    }

    #[test]
    fn test_dragged_last_card_invalid() {
        let mut state = with_empty_column();
        // Column 1 down to one card, then lift it
        let card = state.tableau.column_mut(col(1)).unwrap().pop_top().unwrap();
        state.tableau.column_mut(col(0)).unwrap().push_top(card);
        let lifted = state.tableau.column_mut(col(1)).unwrap().pop_top();

        let relocate = MoveToEmptyColumnMove::with_dragged(&state, col(1), col(4), lifted);
        assert!(!relocate.is_valid(&state));
    }
}
