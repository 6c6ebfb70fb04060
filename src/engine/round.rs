//! The round engine.

use std::fmt;

use tracing::{debug, info, trace, warn};

use crate::core::{
    ComeOutResult, DiceRng, DiceSource, EngineConfig, Phase, Point, PointResult, Roll, RollOutcome,
    Tally,
};
use crate::history::Transcript;

use super::callbacks::{PointContinuationDecider, RollReporter, RoundStartDecider};
use super::error::{CallbackKind, EngineError};

/// Solitaire craps state machine.
///
/// Owns the phase and the win/loss tallies, and drives rounds by calling out
/// to a [`RollReporter`], a [`RoundStartDecider`] and a
/// [`PointContinuationDecider`]. All three must be bound before [`play`].
///
/// ## Decisions
///
/// - Declining at come-out ends the session with no penalty.
/// - Declining while a point is live scores a loss and ends the whole
///   session, even if the round-start decider would have continued.
///
/// [`play`]: RoundEngine::play
pub struct RoundEngine<'a, D: DiceSource = DiceRng> {
    dice: D,
    phase: Phase,
    tally: Tally,
    point: Option<Point>,
    rolls: u64,
    reporter: Option<Box<dyn RollReporter + 'a>>,
    round_start: Option<Box<dyn RoundStartDecider + 'a>>,
    point_decider: Option<Box<dyn PointContinuationDecider + 'a>>,
    history: Option<Transcript>,
}

impl<'a> RoundEngine<'a, DiceRng> {
    /// Create an engine as described by `config`.
    pub fn from_config(config: &EngineConfig) -> Self {
        let mut engine = Self::new(config.dice());
        if config.record_history {
            engine.enable_history();
        }
        engine
    }

    /// Create an engine with seeded dice.
    pub fn seeded(seed: u64) -> Self {
        Self::new(DiceRng::new(seed))
    }
}

impl<'a, D: DiceSource> RoundEngine<'a, D> {
    /// Create an engine rolling `dice`, with zero tallies and no callbacks.
    pub fn new(dice: D) -> Self {
        Self {
            dice,
            phase: Phase::ComeOut,
            tally: Tally::default(),
            point: None,
            rolls: 0,
            reporter: None,
            round_start: None,
            point_decider: None,
            history: None,
        }
    }

    /// Bind the roll reporter.
    pub fn set_roll_reporter(&mut self, reporter: impl RollReporter + 'a) {
        self.reporter = Some(Box::new(reporter));
    }

    /// Bind the round-start decider.
    pub fn set_round_start_decider(&mut self, decider: impl RoundStartDecider + 'a) {
        self.round_start = Some(Box::new(decider));
    }

    /// Bind the point-continuation decider.
    pub fn set_point_decider(&mut self, decider: impl PointContinuationDecider + 'a) {
        self.point_decider = Some(Box::new(decider));
    }

    pub fn with_roll_reporter(mut self, reporter: impl RollReporter + 'a) -> Self {
        self.set_roll_reporter(reporter);
        self
    }

    pub fn with_round_start_decider(mut self, decider: impl RoundStartDecider + 'a) -> Self {
        self.set_round_start_decider(decider);
        self
    }

    pub fn with_point_decider(mut self, decider: impl PointContinuationDecider + 'a) -> Self {
        self.set_point_decider(decider);
        self
    }

    /// Start recording rolls into a fresh transcript.
    pub fn enable_history(&mut self) {
        self.history = Some(Transcript::new(self.dice.checkpoint()));
    }

    /// The transcript of the current session, if recording.
    pub fn transcript(&self) -> Option<&Transcript> {
        self.history.as_ref()
    }

    /// Take the transcript, leaving recording off.
    pub fn take_transcript(&mut self) -> Option<Transcript> {
        self.history.take()
    }

    /// Rounds won.
    pub fn wins(&self) -> u32 {
        self.tally.wins
    }

    /// Rounds lost.
    pub fn losses(&self) -> u32 {
        self.tally.losses
    }

    /// Wins and losses together.
    pub fn tally(&self) -> Tally {
        self.tally
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The live point, while the phase is [`Phase::Point`].
    pub fn point(&self) -> Option<Point> {
        self.point
    }

    /// Rolls thrown since construction or the last reset.
    pub fn rolls(&self) -> u64 {
        self.rolls
    }

    /// The dice this engine rolls.
    pub fn dice(&self) -> &D {
        &self.dice
    }

    /// Begin a new session: zero tallies, come-out phase, same callbacks.
    ///
    /// The dice stream continues where it left off. A recording engine starts
    /// a fresh transcript.
    pub fn reset(&mut self) {
        self.phase = Phase::ComeOut;
        self.tally = Tally::default();
        self.point = None;
        self.rolls = 0;
        if self.history.is_some() {
            self.enable_history();
        }
    }

    /// Play rounds until the round-start decider declines or a point is
    /// abandoned. Always leaves the engine in [`Phase::Done`] on success.
    ///
    /// Fails with [`EngineError::MissingCallback`] before rolling anything if
    /// a callback is unbound. A decider's error is returned as-is, with the
    /// engine left exactly as it was when that decider was asked.
    pub fn play(&mut self) -> Result<(), EngineError> {
        let Self {
            dice,
            phase,
            tally,
            point,
            rolls,
            reporter,
            round_start,
            point_decider,
            history,
        } = self;

        let reporter = reporter
            .as_deref_mut()
            .ok_or(EngineError::MissingCallback(CallbackKind::RollReporter))?;
        let round_start = round_start
            .as_deref_mut()
            .ok_or(EngineError::MissingCallback(CallbackKind::RoundStartDecider))?;
        let point_decider = point_decider
            .as_deref_mut()
            .ok_or(EngineError::MissingCallback(CallbackKind::PointContinuationDecider))?;

        let mut throw = || -> Roll {
            let roll = dice.roll();
            *rolls += 1;
            reporter.report(roll);
            roll
        };

        while *phase == Phase::ComeOut {
            let again = round_start.play_again(tally.wins, tally.losses)?;
            trace!(wins = tally.wins, losses = tally.losses, again, "round-start decision");
            if !again {
                break;
            }

            let roll = throw();
            let result = ComeOutResult::classify(roll.sum());
            debug!(%roll, sum = roll.sum(), ?result, "come-out roll");
            record(history, roll, RollOutcome::ComeOut(result));

            let established = match result {
                ComeOutResult::CrapOut => {
                    tally.record_loss();
                    continue;
                }
                ComeOutResult::Natural => {
                    tally.record_win();
                    continue;
                }
                ComeOutResult::Point(established) => established,
            };

            *point = Some(established);
            *phase = Phase::Point;

            while *phase == Phase::Point {
                let keep_rolling = point_decider.continue_play(established)?;
                trace!(point = %established, keep_rolling, "point decision");
                if !keep_rolling {
                    break;
                }

                let roll = throw();
                let result = PointResult::classify(established, roll.sum());
                debug!(%roll, sum = roll.sum(), point = %established, ?result, "point roll");
                record(history, roll, RollOutcome::Point(result));

                match result {
                    PointResult::Made => tally.record_win(),
                    PointResult::SevenOut => tally.record_loss(),
                    PointResult::NoDecision => continue,
                }
                *phase = Phase::ComeOut;
                *point = None;
            }

            if *phase == Phase::Point {
                warn!(point = %established, "point abandoned; scored as a loss");
                tally.record_loss();
                *phase = Phase::Done;
                if let Some(history) = history.as_mut() {
                    history.set_abandoned(established);
                }
            }
        }

        *phase = Phase::Done;
        *point = None;
        info!(wins = tally.wins, losses = tally.losses, rolls = *rolls, "session over");
        Ok(())
    }
}

fn record(history: &mut Option<Transcript>, roll: Roll, outcome: RollOutcome) {
    if let Some(history) = history.as_mut() {
        history.push(roll, outcome);
    }
}

impl<D: DiceSource + fmt::Debug> fmt::Debug for RoundEngine<'_, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoundEngine")
            .field("dice", &self.dice)
            .field("phase", &self.phase)
            .field("tally", &self.tally)
            .field("point", &self.point)
            .field("rolls", &self.rolls)
            .field("reporter_bound", &self.reporter.is_some())
            .field("round_start_bound", &self.round_start.is_some())
            .field("point_decider_bound", &self.point_decider.is_some())
            .field("recording", &self.history.is_some())
            .finish()
    }
}
