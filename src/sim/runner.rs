//! Batch simulation of automated sessions.
//!
//! Runs many sessions with a [`Strategy`] player and aggregates the results,
//! giving the long-run return rate of a unit pass-line bet.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::{DiceRng, Roll, Tally};
use crate::engine::{EngineError, RoundEngine, Shared};

use super::strategy::Strategy;

/// Configuration for a simulation run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of independent sessions.
    pub sessions: u32,

    /// Rounds each session starts.
    pub rounds_per_session: u32,

    /// Root seed. Each session rolls its own fork of it.
    pub seed: u64,

    /// Abandon a point after this many point-phase rolls (`None` = never).
    pub point_patience: Option<u32>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            sessions: 1_000,
            rounds_per_session: 10,
            seed: 42,
            point_patience: None,
        }
    }
}

impl SimulationConfig {
    /// Create a simulation config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of sessions.
    pub fn with_sessions(mut self, sessions: u32) -> Self {
        self.sessions = sessions;
        self
    }

    /// Set the rounds per session.
    pub fn with_rounds(mut self, rounds: u32) -> Self {
        self.rounds_per_session = rounds;
        self
    }

    /// Set the root seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Abandon points after `patience` rolls.
    pub fn with_patience(mut self, patience: u32) -> Self {
        self.point_patience = Some(patience);
        self
    }

    fn strategy(&self) -> Strategy {
        match self.point_patience {
            Some(patience) => Strategy::impatient(self.rounds_per_session, patience),
            None => Strategy::rounds(self.rounds_per_session),
        }
    }
}

/// Aggregated results of a simulation run.
///
/// Totals are 64-bit: a run can decide up to `sessions * rounds_per_session`
/// rounds, which does not fit a session [`Tally`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Sessions played.
    pub sessions: u32,

    /// Rounds won over all sessions.
    pub wins: u64,

    /// Rounds lost over all sessions, including abandoned points.
    pub losses: u64,

    /// Rolls thrown over all sessions.
    pub rolls: u64,

    /// Sessions that ended by abandoning a point.
    pub abandoned: u32,
}

impl SimulationReport {
    /// Fold one finished session into the totals.
    pub fn record_session(&mut self, tally: Tally, rolls: u64, abandoned: bool) {
        self.sessions += 1;
        self.wins += u64::from(tally.wins);
        self.losses += u64::from(tally.losses);
        self.rolls += rolls;
        if abandoned {
            self.abandoned += 1;
        }
    }

    /// Rounds decided over all sessions.
    #[must_use]
    pub fn rounds(&self) -> u64 {
        self.wins + self.losses
    }

    /// Units won (positive) or lost (negative) on a unit pass-line bet.
    #[must_use]
    pub fn net(&self) -> i128 {
        i128::from(self.wins) - i128::from(self.losses)
    }

    /// Net units per round; `None` if no round was decided.
    #[must_use]
    pub fn return_rate(&self) -> Option<f64> {
        match self.rounds() {
            0 => None,
            rounds => Some(self.net() as f64 / rounds as f64),
        }
    }

    /// Average rolls per decided round.
    #[must_use]
    pub fn rolls_per_round(&self) -> f64 {
        match self.rounds() {
            0 => 0.0,
            rounds => self.rolls as f64 / rounds as f64,
        }
    }
}

/// Runs sessions as described by a [`SimulationConfig`].
#[derive(Clone, Debug)]
pub struct SimulationRunner {
    config: SimulationConfig,
}

impl SimulationRunner {
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Play every session and aggregate the results.
    ///
    /// The same config always produces the same report.
    pub fn run(&self) -> Result<SimulationReport, EngineError> {
        let mut root = DiceRng::new(self.config.seed);
        let mut report = SimulationReport::default();

        for session in 0..self.config.sessions {
            let player = Shared::new(self.config.strategy());
            let mut engine = RoundEngine::new(root.fork())
                .with_roll_reporter(|_: Roll| {})
                .with_round_start_decider(player.clone())
                .with_point_decider(player.clone());

            engine.play()?;

            let abandoned = player.borrow().abandoned();
            debug!(session, wins = engine.wins(), losses = engine.losses(), abandoned, "session finished");

            report.record_session(engine.tally(), engine.rolls(), abandoned);
        }

        info!(
            sessions = report.sessions,
            wins = report.wins,
            losses = report.losses,
            return_rate = ?report.return_rate(),
            "simulation complete"
        );
        Ok(report)
    }
}
