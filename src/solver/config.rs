//! Solver configuration parameters.

use serde::{Deserialize, Serialize};

/// Solver configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Maximum number of moves applied before giving up.
    pub max_steps: u32,

    /// Seed for policies that draw random numbers.
    /// Same seed replays the same game.
    pub seed: u64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_steps: 10_000,
            seed: 42,
        }
    }
}

impl SolverConfig {
    /// Create a new config with a custom step limit.
    pub fn with_max_steps(mut self, max_steps: u32) -> Self {
        self.max_steps = max_steps;
        self
    }

    /// Create a new config with a custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
