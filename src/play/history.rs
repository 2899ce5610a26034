//! Undo history of applied moves.

use tracing::debug;

use crate::core::GameState;
use crate::moves::{AnyMove, Move};

/// Applied moves, most recent last.
#[derive(Clone, Debug, Default)]
pub struct UndoHistory {
    moves: Vec<AnyMove>,
}

impl UndoHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a move that has just been applied.
    pub fn push(&mut self, mv: AnyMove) {
        self.moves.push(mv);
    }

    /// Undo the most recent move.
    ///
    /// Returns false if the history is empty or the move refuses to undo;
    /// in the latter case it stays on the history.
    pub fn undo_last(&mut self, state: &mut GameState) -> bool {
        let Some(mut mv) = self.moves.pop() else {
            return false;
        };
        if mv.undo(state) {
            true
        } else {
            debug!(kind = %mv.kind(), "undo refused");
            self.moves.push(mv);
            false
        }
    }

    #[must_use]
    pub fn last(&self) -> Option<&AnyMove> {
        self.moves.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn clear(&mut self) {
        self.moves.clear();
    }
}
