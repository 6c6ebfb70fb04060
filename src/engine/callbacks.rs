//! Callback traits the round engine calls out to.
//!
//! Each trait has a single method and a blanket impl for closures, so a
//! caller can bind either a plain closure or a type implementing several of
//! them (see `ConsolePlayer` and `Strategy`). Deciders receive copies of the
//! engine's values; they cannot reach into engine state.

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use crate::core::{Point, Roll};

use super::error::DecisionError;

/// Notified of every roll, before the roll is resolved.
pub trait RollReporter {
    fn report(&mut self, roll: Roll);
}

/// Asked before each round whether to start it.
///
/// `Ok(false)` ends the session with no penalty.
pub trait RoundStartDecider {
    fn play_again(&mut self, wins: u32, losses: u32) -> Result<bool, DecisionError>;
}

/// Asked before each roll while a point is live.
///
/// `Ok(false)` abandons the point: it is scored as a loss and ends the
/// whole session.
pub trait PointContinuationDecider {
    fn continue_play(&mut self, point: Point) -> Result<bool, DecisionError>;
}

impl<F: FnMut(Roll)> RollReporter for F {
    fn report(&mut self, roll: Roll) {
        self(roll)
    }
}

impl<F: FnMut(u32, u32) -> bool> RoundStartDecider for F {
    fn play_again(&mut self, wins: u32, losses: u32) -> Result<bool, DecisionError> {
        Ok(self(wins, losses))
    }
}

impl<F: FnMut(Point) -> bool> PointContinuationDecider for F {
    fn continue_play(&mut self, point: Point) -> Result<bool, DecisionError> {
        Ok(self(point))
    }
}

/// Adapts a closure that can fail into a decider.
///
/// ```
/// use craps_engine::engine::{DecisionError, Fallible, RoundStartDecider};
///
/// let mut decider = Fallible(|wins: u32, _losses: u32| {
///     if wins > 100 {
///         Err(DecisionError::new("suspiciously lucky"))
///     } else {
///         Ok(true)
///     }
/// });
/// assert!(decider.play_again(0, 0).unwrap());
/// assert!(decider.play_again(101, 0).is_err());
/// ```
#[derive(Clone, Debug)]
pub struct Fallible<F>(pub F);

impl<F> RoundStartDecider for Fallible<F>
where
    F: FnMut(u32, u32) -> Result<bool, DecisionError>,
{
    fn play_again(&mut self, wins: u32, losses: u32) -> Result<bool, DecisionError> {
        (self.0)(wins, losses)
    }
}

impl<F> PointContinuationDecider for Fallible<F>
where
    F: FnMut(Point) -> Result<bool, DecisionError>,
{
    fn continue_play(&mut self, point: Point) -> Result<bool, DecisionError> {
        (self.0)(point)
    }
}

/// One player bound to several callback slots.
///
/// The engine owns each callback it is given, so a type that implements more
/// than one callback trait is shared through this handle. Keep a clone to
/// inspect the player after `play()`.
#[derive(Debug, Default)]
pub struct Shared<P>(Rc<RefCell<P>>);

impl<P> Shared<P> {
    pub fn new(player: P) -> Self {
        Self(Rc::new(RefCell::new(player)))
    }

    /// Borrow the player.
    ///
    /// # Panics
    ///
    /// Panics if called from inside one of the player's own callbacks.
    pub fn borrow(&self) -> Ref<'_, P> {
        self.0.borrow()
    }
}

impl<P> Clone for Shared<P> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<P: RollReporter> RollReporter for Shared<P> {
    fn report(&mut self, roll: Roll) {
        self.0.borrow_mut().report(roll)
    }
}

impl<P: RoundStartDecider> RoundStartDecider for Shared<P> {
    fn play_again(&mut self, wins: u32, losses: u32) -> Result<bool, DecisionError> {
        self.0.borrow_mut().play_again(wins, losses)
    }
}

impl<P: PointContinuationDecider> PointContinuationDecider for Shared<P> {
    fn continue_play(&mut self, point: Point) -> Result<bool, DecisionError> {
        self.0.borrow_mut().continue_play(point)
    }
}
