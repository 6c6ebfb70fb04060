//! Automated players.

use crate::core::Point;
use crate::engine::{DecisionError, PointContinuationDecider, RoundStartDecider};

/// A scripted player that needs no input.
///
/// Starts a fixed number of rounds. With a patience limit it gives up a
/// point after that many point-phase rolls, which ends the session with a
/// loss.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Strategy {
    rounds: u32,
    patience: Option<u32>,
    started: u32,
    point_rolls: u32,
    abandoned: bool,
}

impl Strategy {
    /// Play exactly `rounds` rounds, never abandoning a point.
    pub fn rounds(rounds: u32) -> Self {
        Self {
            rounds,
            patience: None,
            started: 0,
            point_rolls: 0,
            abandoned: false,
        }
    }

    /// Play up to `rounds` rounds, abandoning any point not resolved within
    /// `patience` rolls.
    pub fn impatient(rounds: u32, patience: u32) -> Self {
        Self {
            patience: Some(patience),
            ..Self::rounds(rounds)
        }
    }

    /// Rounds started so far.
    pub fn rounds_started(&self) -> u32 {
        self.started
    }

    /// Whether this player walked away from a live point.
    pub fn abandoned(&self) -> bool {
        self.abandoned
    }
}

impl RoundStartDecider for Strategy {
    fn play_again(&mut self, _wins: u32, _losses: u32) -> Result<bool, DecisionError> {
        if self.started >= self.rounds {
            return Ok(false);
        }
        self.started += 1;
        self.point_rolls = 0;
        Ok(true)
    }
}

impl PointContinuationDecider for Strategy {
    fn continue_play(&mut self, _point: Point) -> Result<bool, DecisionError> {
        match self.patience {
            Some(patience) if self.point_rolls >= patience => {
                self.abandoned = true;
                Ok(false)
            }
            _ => {
                self.point_rolls += 1;
                Ok(true)
            }
        }
    }
}
