//! Per-session roll transcript.
//!
//! A transcript records one session from the engine's point of view:
//! - Every roll, in the order it was thrown
//! - How each roll was classified
//! - The point given up, if the session ended by abandoning one
//!
//! Replaying the recorded rolls under the same decisions reproduces the
//! session exactly.

use serde::{Deserialize, Serialize};

use crate::core::{DiceRngState, Point, Roll, RollOutcome, ScriptedDice, Tally};

/// One recorded roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollRecord {
    /// Position of the roll in the session (0-indexed).
    pub index: u64,

    /// The dice thrown.
    pub roll: Roll,

    /// How the roll was resolved.
    pub outcome: RollOutcome,
}

/// A complete session record.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    /// Dice position the session started from, when the dice can report one.
    pub start: Option<DiceRngState>,

    /// All rolls in the session.
    pub records: Vec<RollRecord>,

    /// Point abandoned at the end of the session, if any.
    pub abandoned: Option<Point>,
}

impl Transcript {
    /// Start an empty transcript.
    pub fn new(start: Option<DiceRngState>) -> Self {
        Self {
            start,
            records: Vec::new(),
            abandoned: None,
        }
    }

    /// Append a roll.
    pub fn push(&mut self, roll: Roll, outcome: RollOutcome) {
        let index = self.records.len() as u64;
        self.records.push(RollRecord { index, roll, outcome });
    }

    /// Mark the session as ended by abandoning `point`.
    pub fn set_abandoned(&mut self, point: Point) {
        self.abandoned = Some(point);
    }

    /// Number of recorded rolls.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if no rolls were recorded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over the recorded rolls.
    pub fn rolls(&self) -> impl Iterator<Item = Roll> + '_ {
        self.records.iter().map(|r| r.roll)
    }

    /// Recompute wins and losses from the records.
    ///
    /// An abandoned point counts as one loss.
    #[must_use]
    pub fn tally(&self) -> Tally {
        let mut tally = Tally::default();
        for record in &self.records {
            if record.outcome.is_win() {
                tally.record_win();
            } else if record.outcome.is_loss() {
                tally.record_loss();
            }
        }
        if self.abandoned.is_some() {
            tally.record_loss();
        }
        tally
    }

    /// Dice that throw exactly the recorded rolls.
    #[must_use]
    pub fn replay_dice(&self) -> ScriptedDice {
        ScriptedDice::new(self.rolls())
    }
}
