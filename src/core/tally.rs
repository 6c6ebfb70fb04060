//! Win/loss tallies.

use serde::{Deserialize, Serialize};

/// Cumulative wins and losses for a session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    /// Rounds won.
    pub wins: u32,

    /// Rounds lost, including abandoned points.
    pub losses: u32,
}

impl Tally {
    /// Create a tally with the given counts.
    #[must_use]
    pub fn new(wins: u32, losses: u32) -> Self {
        Self { wins, losses }
    }

    /// Record a won round.
    pub fn record_win(&mut self) {
        self.wins += 1;
    }

    /// Record a lost round.
    pub fn record_loss(&mut self) {
        self.losses += 1;
    }

    /// Rounds decided so far.
    #[must_use]
    pub fn rounds(&self) -> u64 {
        u64::from(self.wins) + u64::from(self.losses)
    }

    /// Units won (positive) or lost (negative) on a unit pass-line bet.
    #[must_use]
    pub fn net(&self) -> i64 {
        i64::from(self.wins) - i64::from(self.losses)
    }

    /// Net result per round played.
    ///
    /// Returns `None` when no rounds have been decided.
    #[must_use]
    pub fn return_rate(&self) -> Option<f64> {
        match self.rounds() {
            0 => None,
            rounds => Some(self.net() as f64 / rounds as f64),
        }
    }
}
