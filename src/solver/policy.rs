//! Move selection policies.
//!
//! A policy only picks among the moves the enumerator produced; it never
//! builds moves itself.

use crate::core::{GameRng, GameState};
use crate::moves::AnyMove;

use super::config::SolverConfig;

/// Policy for choosing which legal move to play next.
pub trait MovePolicy {
    /// Select the index of the move to play.
    ///
    /// Returns `None` to stop, which the solver reads as no playable move.
    fn select(&mut self, state: &GameState, moves: &[AnyMove]) -> Option<usize>;
}

/// Always plays the first legal move.
///
/// With the enumerator's order this prefers Kings, then pairs, then
/// relocations, and deals only when nothing else is possible.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstLegal;

impl MovePolicy for FirstLegal {
    fn select(&mut self, _state: &GameState, moves: &[AnyMove]) -> Option<usize> {
        if moves.is_empty() {
            None
        } else {
            Some(0)
        }
    }
}

/// Plays a uniformly random legal move.
#[derive(Clone, Debug)]
pub struct RandomMove {
    rng: GameRng,
}

impl RandomMove {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }

    /// Seed the policy from `config.seed`.
    #[must_use]
    pub fn from_config(config: &SolverConfig) -> Self {
        Self::new(config.seed)
    }
}

impl MovePolicy for RandomMove {
    fn select(&mut self, _state: &GameState, moves: &[AnyMove]) -> Option<usize> {
        self.rng.choose_index(moves.len())
    }
}

impl<P: MovePolicy + ?Sized> MovePolicy for Box<P> {
    fn select(&mut self, state: &GameState, moves: &[AnyMove]) -> Option<usize> {
        (**self).select(state, moves)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;
    use crate::rules::available_moves;

    fn after_two_deals() -> (GameState, Vec<AnyMove>) {
        let mut state = GameState::new(&GameConfig::default().by_suit());
        for _ in 0..2 {
            let mut moves = available_moves(&state);
            let mut deal = moves.pop().unwrap();
            crate::moves::Move::apply(&mut deal, &mut state);
        }
        let moves = available_moves(&state).into_vec();
        (state, moves)
    }

    #[test]
    fn test_first_legal() {
        let (state, moves) = after_two_deals();
        let mut policy = FirstLegal;

        assert_eq!(policy.select(&state, &moves), Some(0));
        assert_eq!(policy.select(&state, &[]), None);
    }

    #[test]
    fn test_random_in_range() {
        let (state, moves) = after_two_deals();
        let mut policy = RandomMove::new(3);

        for _ in 0..100 {
            let index = policy.select(&state, &moves).unwrap();
            assert!(index < moves.len());
        }
        assert_eq!(policy.select(&state, &[]), None);
    }

    #[test]
    fn test_random_deterministic() {
        let (state, moves) = after_two_deals();
        let mut a = RandomMove::from_config(&SolverConfig::default().with_seed(9));
        let mut b = RandomMove::new(9);

        let picks_a: Vec<_> = (0..20).map(|_| a.select(&state, &moves)).collect();
        let picks_b: Vec<_> = (0..20).map(|_| b.select(&state, &moves)).collect();
        assert_eq!(picks_a, picks_b);
    }

    #[test]
    fn test_boxed_policy() {
        let (state, moves) = after_two_deals();
        let mut policy: Box<dyn MovePolicy> = Box::new(FirstLegal);
        assert_eq!(policy.select(&state, &moves), Some(0));
    }
}
