//! Closed union over every move kind.
//!
//! The enumerator, the undo history and the solver all handle moves of
//! mixed kinds; `AnyMove` lets them do so without boxing.

use super::deal::DealMove;
use super::empty_column::MoveToEmptyColumnMove;
use super::king::PlayKingMove;
use super::pair::PlayPairMove;
use super::traits::{Move, MoveKind};
use crate::core::GameState;

/// Any move of the game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnyMove {
    Deal(DealMove),
    PlayPair(PlayPairMove),
    PlayKing(PlayKingMove),
    MoveToEmptyColumn(MoveToEmptyColumnMove),
}

impl AnyMove {
    fn inner(&self) -> &dyn Move {
        match self {
            AnyMove::Deal(m) => m,
            AnyMove::PlayPair(m) => m,
            AnyMove::PlayKing(m) => m,
            AnyMove::MoveToEmptyColumn(m) => m,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn Move {
        match self {
            AnyMove::Deal(m) => m,
            AnyMove::PlayPair(m) => m,
            AnyMove::PlayKing(m) => m,
            AnyMove::MoveToEmptyColumn(m) => m,
        }
    }
}

impl Move for AnyMove {
    fn kind(&self) -> MoveKind {
        self.inner().kind()
    }

    fn is_valid(&self, state: &GameState) -> bool {
        self.inner().is_valid(state)
    }

    fn apply(&mut self, state: &mut GameState) -> bool {
        self.inner_mut().apply(state)
    }

    fn undo(&mut self, state: &mut GameState) -> bool {
        self.inner_mut().undo(state)
    }
}

impl From<DealMove> for AnyMove {
    fn from(m: DealMove) -> Self {
        AnyMove::Deal(m)
    }
}

impl From<PlayPairMove> for AnyMove {
    fn from(m: PlayPairMove) -> Self {
        AnyMove::PlayPair(m)
    }
}

impl From<PlayKingMove> for AnyMove {
    fn from(m: PlayKingMove) -> Self {
        AnyMove::PlayKing(m)
    }
}

impl From<MoveToEmptyColumnMove> for AnyMove {
    fn from(m: MoveToEmptyColumnMove) -> Self {
        AnyMove::MoveToEmptyColumn(m)
    }
}

impl std::fmt::Display for AnyMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnyMove::Deal(m) => write!(f, "deal {}", m.cards_moved()),
            AnyMove::PlayPair(m) => write!(f, "pair {} {}", m.source(), m.target()),
            AnyMove::PlayKing(m) => write!(f, "king {}", m.source()),
            AnyMove::MoveToEmptyColumn(m) => write!(f, "move {} -> {}", m.source(), m.target()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;
    use crate::zones::ColumnId;

    #[test]
    fn test_delegates_to_inner_move() {
        let mut state = GameState::new(&GameConfig::default().by_suit());
        let before = state.snapshot();

        let mut deal = AnyMove::from(DealMove::new(&state));
        assert_eq!(deal.kind(), MoveKind::Deal);
        assert!(deal.is_valid(&state));
        assert!(deal.apply(&mut state));
        assert_eq!(state.counters.cards_left, 47);

        let mut king = AnyMove::from(PlayKingMove::new(&state, ColumnId::new(4)));
        assert_eq!(king.kind(), MoveKind::PlayKing);
        assert!(king.apply(&mut state));

        assert!(king.undo(&mut state));
        assert!(deal.undo(&mut state));
        assert_eq!(state.snapshot(), before);
    }

    #[test]
    fn test_display() {
        let state = GameState::new(&GameConfig::default().by_suit());
        let pair = AnyMove::from(PlayPairMove::new(&state, ColumnId::new(0), ColumnId::new(3)));
        let relocate = AnyMove::from(MoveToEmptyColumnMove::new(&state, ColumnId::new(1), ColumnId::new(2)));

        assert_eq!(AnyMove::from(DealMove::new(&state)).to_string(), "deal 5");
        assert_eq!(pair.to_string(), "pair col1 col4");
        assert_eq!(relocate.to_string(), "move col2 -> col3");
        assert_eq!(MoveKind::PlayPair.to_string(), "play pair");
    }

    #[test]
    fn test_display_absent_column() {
        let state = GameState::new(&GameConfig::default().by_suit());
        let far = ColumnId::new(255);

        let king = AnyMove::from(PlayKingMove::new(&state, far));
        assert!(!king.is_valid(&state));
        assert_eq!(king.to_string(), "king col256");

        let pair = AnyMove::from(PlayPairMove::new(&state, far, ColumnId::new(0)));
        assert_eq!(pair.to_string(), "pair col256 col1");
        let relocate = AnyMove::from(MoveToEmptyColumnMove::new(&state, ColumnId::new(0), far));
        assert_eq!(relocate.to_string(), "move col1 -> col256");
    }
}
