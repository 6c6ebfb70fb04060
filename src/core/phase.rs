//! Round engine phases.

use serde::{Deserialize, Serialize};

/// Where the round engine is in its state machine.
///
/// `ComeOut` is the initial phase. `Done` is terminal: no transition leaves it
/// within a `play()` call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting to start a round; the next roll is a come-out roll.
    #[default]
    ComeOut,
    /// A point is live; rolling to repeat it before a 7.
    Point,
    /// The session is over.
    Done,
}

impl Phase {
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::Done)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_come_out() {
        assert_eq!(Phase::default(), Phase::ComeOut);
    }

    #[test]
    fn test_only_done_is_terminal() {
        assert!(!Phase::ComeOut.is_terminal());
        assert!(!Phase::Point.is_terminal());
        assert!(Phase::Done.is_terminal());
    }
}
