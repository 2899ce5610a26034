//! Move enumeration and terminal detection.
//!
//! `available_moves` is stateless: it builds one candidate move per board
//! position, keeps the valid ones and never applies any of them. Its order
//! is fixed so that solvers replay identically:
//!
//! 1. Kings, by column
//! 2. Pairs, source-major then target-minor
//! 3. Relocations to empty columns, same nesting
//! 4. The deal, last

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

use crate::core::GameState;
use crate::moves::{AnyMove, DealMove, Move, MoveToEmptyColumnMove, PlayKingMove, PlayPairMove};

/// Legal moves of one position. Rarely more than a handful.
pub type MoveList = SmallVec<[AnyMove; 8]>;

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Every card reached the foundation.
    Won,
    /// No legal move remains; `score` cards are still in play.
    Stuck { score: i32 },
}

impl GameResult {
    #[must_use]
    pub fn is_win(&self) -> bool {
        matches!(self, GameResult::Won)
    }
}

/// Enumerate every legal move of the current position, in canonical order.
#[must_use]
pub fn available_moves(state: &GameState) -> MoveList {
    let mut moves = MoveList::new();
    let columns: SmallVec<[_; 8]> = state.tableau.column_ids().collect();

    for &source in &columns {
        keep_valid(state, &mut moves, PlayKingMove::new(state, source));
    }

    for &source in &columns {
        for &target in &columns {
            keep_valid(state, &mut moves, PlayPairMove::new(state, source, target));
        }
    }

    for &source in &columns {
        for &target in &columns {
            keep_valid(state, &mut moves, MoveToEmptyColumnMove::new(state, source, target));
        }
    }

    keep_valid(state, &mut moves, DealMove::new(state));

    trace!(legal = moves.len(), "enumerated moves");
    moves
}

fn keep_valid<M: Move + Into<AnyMove>>(state: &GameState, out: &mut MoveList, candidate: M) {
    if candidate.is_valid(state) {
        out.push(candidate.into());
    }
}

/// Check if the game is over.
///
/// Returns `Some(result)` when no legal move remains, `None` otherwise.
#[must_use]
pub fn game_result(state: &GameState) -> Option<GameResult> {
    if !available_moves(state).is_empty() {
        return None;
    }

    if state.has_won() {
        Some(GameResult::Won)
    } else {
        Some(GameResult::Stuck {
            score: state.counters.score,
        })
    }
}
