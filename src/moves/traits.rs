//! The move contract shared by every move kind.

use crate::core::GameState;

/// Kind of a move, for logging and statistics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoveKind {
    Deal,
    PlayPair,
    PlayKing,
    MoveToEmptyColumn,
}

impl std::fmt::Display for MoveKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            MoveKind::Deal => "deal",
            MoveKind::PlayPair => "play pair",
            MoveKind::PlayKing => "play king",
            MoveKind::MoveToEmptyColumn => "move to empty column",
        };
        f.write_str(name)
    }
}

/// A reversible, validity-checked transformation of the table.
///
/// Constructors of implementing types inspect the state once and store the
/// verdict; they never mutate it. After that:
///
/// - `is_valid` returns the stored verdict. The table is not re-inspected,
///   even if it has changed since construction.
/// - `apply` performs the transfer and updates the counters, returning
///   `true`, only for a valid move that is not currently applied. Otherwise
///   it returns `false` and touches nothing.
/// - `undo` reverses a successful `apply` exactly, returning `true`. On a
///   move that is not currently applied it returns `false` and touches
///   nothing.
///
/// Illegal moves are an expected outcome and are reported as `false`,
/// never as errors or panics.
pub trait Move {
    /// Which kind of move this is.
    fn kind(&self) -> MoveKind;

    /// The legality snapshot taken at construction.
    ///
    /// `state` is accepted for interface uniformity and is not inspected.
    fn is_valid(&self, state: &GameState) -> bool;

    /// Perform the move.
    fn apply(&mut self, state: &mut GameState) -> bool;

    /// Reverse a successful `apply`.
    fn undo(&mut self, state: &mut GameState) -> bool;
}
