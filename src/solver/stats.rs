//! Solver statistics for diagnostics.

use serde::{Deserialize, Serialize};

use crate::moves::MoveKind;

/// Statistics collected during one solver run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveStats {
    /// Total moves applied.
    pub steps: u32,

    pub deals: u32,
    pub pairs: u32,
    pub kings: u32,

    /// Cards moved into empty columns.
    pub relocations: u32,

    /// Total time spent solving (microseconds).
    pub time_us: u64,
}

impl SolveStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Count one applied move.
    pub fn record(&mut self, kind: MoveKind) {
        self.steps += 1;
        match kind {
            MoveKind::Deal => self.deals += 1,
            MoveKind::PlayPair => self.pairs += 1,
            MoveKind::PlayKing => self.kings += 1,
            MoveKind::MoveToEmptyColumn => self.relocations += 1,
        }
    }

    /// Cards sent to the foundation.
    #[must_use]
    pub fn cards_played(&self) -> u32 {
        self.pairs * 2 + self.kings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record() {
        let mut stats = SolveStats::new();
        stats.record(MoveKind::Deal);
        stats.record(MoveKind::PlayPair);
        stats.record(MoveKind::PlayPair);
        stats.record(MoveKind::PlayKing);
        stats.record(MoveKind::MoveToEmptyColumn);

        assert_eq!(stats.steps, 5);
        assert_eq!(stats.deals, 1);
        assert_eq!(stats.pairs, 2);
        assert_eq!(stats.kings, 1);
        assert_eq!(stats.relocations, 1);
        assert_eq!(stats.cards_played(), 5);
    }

    #[test]
    fn test_reset() {
        let mut stats = SolveStats::new();
        stats.record(MoveKind::Deal);
        stats.time_us = 10;
        stats.reset();
        assert_eq!(stats, SolveStats::default());
    }
}
