//! The automated play loop.

use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::core::GameState;
use crate::moves::Move;
use crate::rules::{available_moves, GameResult};

use super::config::SolverConfig;
use super::policy::MovePolicy;
use super::stats::SolveStats;

/// How a solver run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolveOutcome {
    /// Every card reached the foundation.
    Won,
    /// No legal move was left.
    Stuck { score: i32 },
    /// The step limit ran out first.
    StepLimit { score: i32 },
}

impl SolveOutcome {
    #[must_use]
    pub fn is_win(&self) -> bool {
        matches!(self, SolveOutcome::Won)
    }

    /// Final score: cards not yet on the foundation.
    #[must_use]
    pub fn score(&self) -> i32 {
        match self {
            SolveOutcome::Won => 0,
            SolveOutcome::Stuck { score } | SolveOutcome::StepLimit { score } => *score,
        }
    }

    /// The game result, if the game actually ended.
    #[must_use]
    pub fn game_result(&self) -> Option<GameResult> {
        match *self {
            SolveOutcome::Won => Some(GameResult::Won),
            SolveOutcome::Stuck { score } => Some(GameResult::Stuck { score }),
            SolveOutcome::StepLimit { .. } => None,
        }
    }
}

impl std::fmt::Display for SolveOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolveOutcome::Won => write!(f, "won"),
            SolveOutcome::Stuck { score } => write!(f, "stuck with {} cards left", score),
            SolveOutcome::StepLimit { score } => {
                write!(f, "step limit reached with {} cards left", score)
            }
        }
    }
}

/// Plays a game to the end by repeatedly asking a policy for a move.
///
/// Generic over the selection policy. The solver owns no game state; every
/// run works on the state passed in.
pub struct Solver<P: MovePolicy> {
    policy: P,
    config: SolverConfig,
    stats: SolveStats,
}

impl<P: MovePolicy> Solver<P> {
    pub fn new(policy: P, config: SolverConfig) -> Self {
        Self {
            policy,
            config,
            stats: SolveStats::default(),
        }
    }

    /// Play `state` until it is won, stuck or out of steps.
    pub fn run(&mut self, state: &mut GameState) -> SolveOutcome {
        self.stats.reset();
        let start = Instant::now();

        let outcome = loop {
            if state.has_won() {
                break SolveOutcome::Won;
            }
            let score = state.counters.score;
            if self.stats.steps >= self.config.max_steps {
                break SolveOutcome::StepLimit { score };
            }

            let moves = available_moves(state);
            let Some(mut chosen) = self
                .policy
                .select(state, &moves)
                .and_then(|index| moves.get(index).cloned())
            else {
                break SolveOutcome::Stuck { score };
            };

            if !chosen.apply(state) {
                warn!(mv = %chosen, "enumerated move refused to apply");
                break SolveOutcome::Stuck { score };
            }
            self.stats.record(chosen.kind());
        };

        self.stats.time_us = start.elapsed().as_micros() as u64;
        info!(
            outcome = %outcome,
            steps = self.stats.steps,
            score = outcome.score(),
            "solver finished"
        );
        outcome
    }

    /// Statistics of the most recent run.
    pub fn stats(&self) -> &SolveStats {
        &self.stats
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }
}
