use std::error::Error as StdError;
use std::fmt;

use thiserror::Error;

/// The three callbacks a [`RoundEngine`](super::RoundEngine) needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallbackKind {
    RollReporter,
    RoundStartDecider,
    PointContinuationDecider,
}

impl fmt::Display for CallbackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CallbackKind::RollReporter => "roll reporter",
            CallbackKind::RoundStartDecider => "round-start decider",
            CallbackKind::PointContinuationDecider => "point-continuation decider",
        };
        f.write_str(name)
    }
}

/// Failure raised by a decider, carried through `play()` untouched.
#[derive(Debug)]
pub struct DecisionError(Box<dyn StdError + Send + Sync + 'static>);

impl DecisionError {
    /// Wrap any error raised while deciding.
    pub fn new<E>(error: E) -> Self
    where
        E: Into<Box<dyn StdError + Send + Sync + 'static>>,
    {
        Self(error.into())
    }

    /// The underlying error.
    pub fn inner(&self) -> &(dyn StdError + Send + Sync + 'static) {
        &*self.0
    }

    /// Recover the underlying error.
    pub fn into_inner(self) -> Box<dyn StdError + Send + Sync + 'static> {
        self.0
    }
}

impl fmt::Display for DecisionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl StdError for DecisionError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.0.source()
    }
}

impl From<std::io::Error> for DecisionError {
    fn from(error: std::io::Error) -> Self {
        Self::new(error)
    }
}

/// Errors from the round engine.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("{0} callback is not bound")]
    MissingCallback(CallbackKind),

    #[error("die value {0} is outside 1..=6")]
    InvalidDie(u8),

    #[error("{0} cannot be a point")]
    InvalidPoint(u8),

    #[error("decider failed: {0}")]
    Decision(#[from] DecisionError),
}
