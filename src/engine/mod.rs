//! The round engine and the callbacks it drives.
//!
//! [`RoundEngine`] owns all game rules and state. It calls out to three
//! injected capabilities:
//!
//! - [`RollReporter`]: told about every roll, before it is resolved
//! - [`RoundStartDecider`]: asked before each come-out roll
//! - [`PointContinuationDecider`]: asked before each roll while a point is live
//!
//! and exposes the cumulative wins and losses.

pub mod callbacks;
pub mod error;
pub mod round;

pub use callbacks::{Fallible, PointContinuationDecider, RollReporter, RoundStartDecider, Shared};
pub use error::{CallbackKind, DecisionError, EngineError};
pub use round::RoundEngine;
