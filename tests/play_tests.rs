//! Interactive play: gestures and undo across a whole game.

use baroness::core::{GameConfig, GameState};
use baroness::moves::{AnyMove, Move};
use baroness::play::{
    click_column, click_stock, drop_on_column, drop_on_foundation, DragSession, Dropped,
    UndoHistory,
};
use baroness::rules::available_moves;
use baroness::zones::ColumnId;

/// Replay an enumerated move through the matching gesture.
fn play_by_gesture(state: &mut GameState, mv: &AnyMove) -> Option<AnyMove> {
    match mv {
        AnyMove::Deal(_) => click_stock(state),
        AnyMove::PlayKing(king) => click_column(state, king.source()),
        AnyMove::PlayPair(pair) => {
            let session = DragSession::pick_up(state, pair.source())?;
            match drop_on_column(state, session, pair.target()) {
                Dropped::Applied(applied) => Some(applied),
                _ => None,
            }
        }
        AnyMove::MoveToEmptyColumn(relocate) => {
            let session = DragSession::pick_up(state, relocate.source())?;
            match drop_on_column(state, session, relocate.target()) {
                Dropped::Applied(applied) => Some(applied),
                _ => None,
            }
        }
    }
}

/// Gestures reach every enumerated move, and undo unwinds the whole game.
#[test]
fn test_full_game_by_gesture_then_undo() {
    let mut state = GameState::new(&GameConfig::default().with_seed(17));
    let start = state.clone();
    let mut history = UndoHistory::new();

    loop {
        let moves = available_moves(&state);
        let Some(first) = moves.first() else {
            break;
        };
        let applied = play_by_gesture(&mut state, first).expect("enumerated move must apply");
        assert_eq!(applied.kind(), first.kind());
        history.push(applied);
        assert!(state.check_invariants().is_ok());
    }

    while !history.is_empty() {
        assert!(history.undo_last(&mut state));
    }
    assert_eq!(state, start);
}

/// Dragging a non-King to the foundation changes nothing.
#[test]
fn test_foundation_rejects_non_king() {
    let mut state = GameState::new(&GameConfig::default().by_suit());
    click_stock(&mut state).unwrap();
    let before = state.clone();

    for i in 0..4 {
        let session = DragSession::pick_up(&mut state, ColumnId::new(i)).unwrap();
        assert_eq!(drop_on_foundation(&mut state, session), Dropped::Rejected);
    }
    assert_eq!(state, before);
}

/// Dropping onto a column that does not exist is rejected.
#[test]
fn test_drop_on_absent_column() {
    let mut state = GameState::new(&GameConfig::default().by_suit());
    click_stock(&mut state).unwrap();
    let before = state.clone();

    let session = DragSession::pick_up(&mut state, ColumnId::new(0)).unwrap();
    assert_eq!(drop_on_column(&mut state, session, ColumnId::new(9)), Dropped::Rejected);
    assert_eq!(state, before);
}
