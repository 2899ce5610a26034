//! Resolving player gestures into moves.
//!
//! A drag lifts the top card off a column; the card is held by the
//! `DragSession`, outside every pile, until it is dropped. Dropping builds
//! the move that fits the drop target and applies it. A rejected drop puts
//! the card back where it came from, so the table is unchanged.

use tracing::debug;

use crate::cards::Card;
use crate::core::GameState;
use crate::moves::{AnyMove, DealMove, Move, MoveToEmptyColumnMove, PlayKingMove, PlayPairMove};
use crate::zones::ColumnId;

/// A card lifted off a column and not yet dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use = "a lifted card must be dropped or cancelled"]
pub struct DragSession {
    source: ColumnId,
    card: Card,
}

impl DragSession {
    /// Lift the top card of `column`. `None` if it is empty or absent.
    pub fn pick_up(state: &mut GameState, column: ColumnId) -> Option<Self> {
        let card = state.tableau.column_mut(column)?.pop_top()?;
        Some(Self {
            source: column,
            card,
        })
    }

    #[must_use]
    pub fn source(&self) -> ColumnId {
        self.source
    }

    #[must_use]
    pub fn card(&self) -> Card {
        self.card
    }

    /// Put the card back on its column.
    pub fn cancel(self, state: &mut GameState) {
        if let Some(column) = state.tableau.column_mut(self.source) {
            column.push_top(self.card);
        }
    }
}

/// Outcome of dropping a dragged card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Dropped {
    /// The move was applied; push it onto the undo history.
    Applied(AnyMove),
    /// The move was illegal; the card went back to its column.
    Rejected,
    /// Dropped onto its own column; the card went back.
    Returned,
}

/// Drop a dragged card onto a column.
///
/// An empty target receives the card as a relocation; a non-empty target
/// is asked to pair with it.
pub fn drop_on_column(state: &mut GameState, session: DragSession, target: ColumnId) -> Dropped {
    if target == session.source {
        session.cancel(state);
        return Dropped::Returned;
    }

    let dragged = Some(session.card);
    let target_empty = state.tableau.column(target).is_some_and(|c| c.is_empty());
    let candidate: AnyMove = if target_empty {
        MoveToEmptyColumnMove::with_dragged(state, session.source, target, dragged).into()
    } else {
        PlayPairMove::with_dragged(state, session.source, target, dragged).into()
    };

    resolve(state, session, candidate)
}

/// Drop a dragged card onto the foundation. Only a King is accepted.
pub fn drop_on_foundation(state: &mut GameState, session: DragSession) -> Dropped {
    let candidate = PlayKingMove::with_dragged(state, session.source, Some(session.card)).into();
    resolve(state, session, candidate)
}

fn resolve(state: &mut GameState, session: DragSession, mut candidate: AnyMove) -> Dropped {
    if candidate.apply(state) {
        Dropped::Applied(candidate)
    } else {
        debug!(card = %session.card, source = %session.source, kind = %candidate.kind(), "rejected drop");
        session.cancel(state);
        Dropped::Rejected
    }
}

/// Click a column: play its top card if it is a King.
pub fn click_column(state: &mut GameState, column: ColumnId) -> Option<AnyMove> {
    let mut candidate = PlayKingMove::new(state, column);
    candidate.apply(state).then(|| candidate.into())
}

/// Click the stock: deal the next batch.
pub fn click_stock(state: &mut GameState) -> Option<AnyMove> {
    let mut candidate = DealMove::new(state);
    candidate.apply(state).then(|| candidate.into())
}
