//! # craps-engine
//!
//! Solitaire craps: one player rolls two dice round after round, and the
//! engine keeps the win/loss tally.
//!
//! ## Design Principles
//!
//! 1. **Rules in one place**: the round engine owns phase and tallies. Display
//!    and decisions are injected callbacks that only see copies of its values.
//!
//! 2. **Injectable dice**: every roll goes through a `DiceSource`, so sessions
//!    are reproducible from a seed or a scripted list of rolls.
//!
//! 3. **Forfeit on walking away**: declining at come-out ends the session for
//!    free; declining while a point is live is a loss and ends the session.
//!
//! ## Modules
//!
//! - `core`: rolls, points, classification, phases, tallies, dice, config
//! - `engine`: the round engine, its callbacks and errors
//! - `history`: per-session roll transcripts
//! - `sim`: automated players and batch simulation
//! - `console`: console prompts over any reader/writer
//!
//! ```
//! use craps_engine::{Point, Roll, RoundEngine, ScriptedDice};
//!
//! // Come-out 5, then 1+4 makes the point.
//! let mut engine = RoundEngine::new(ScriptedDice::from_pairs(&[(2, 3), (1, 4)]))
//!     .with_roll_reporter(|roll: Roll| println!("Roll: {roll}"))
//!     .with_round_start_decider(|wins: u32, losses: u32| wins + losses == 0)
//!     .with_point_decider(|_: Point| true);
//!
//! engine.play().unwrap();
//! assert_eq!((engine.wins(), engine.losses()), (1, 0));
//! ```

pub mod core;
pub mod engine;
pub mod history;
pub mod sim;
pub mod console;

// Re-export commonly used types
pub use crate::core::{
    Roll, Point, Phase, Tally,
    ComeOutResult, PointResult, RollOutcome,
    DiceSource, DiceRng, DiceRngState, ScriptedDice,
    EngineConfig,
};

pub use crate::engine::{
    RoundEngine, EngineError, CallbackKind, DecisionError,
    RollReporter, RoundStartDecider, PointContinuationDecider,
    Fallible, Shared,
};

pub use crate::history::{RollRecord, Transcript};

pub use crate::sim::{SimulationConfig, SimulationReport, SimulationRunner, Strategy};

pub use crate::console::ConsolePlayer;
