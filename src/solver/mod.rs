//! Automated play on top of the move engine.
//!
//! The solver asks the enumerator for the legal moves of the current
//! position, lets a `MovePolicy` pick one and applies it, until the game is
//! won, stuck or the step limit runs out. It looks no further ahead than
//! the current position.

pub mod config;
pub mod policy;
pub mod runner;
pub mod stats;

pub use config::SolverConfig;
pub use policy::{FirstLegal, MovePolicy, RandomMove};
pub use runner::{SolveOutcome, Solver};
pub use stats::SolveStats;
