//! Roll classification.
//!
//! The rule sets of the game live here and nowhere else:
//!
//! - Come-out: 2, 3, 12 crap out; 7, 11 are naturals; anything else is a point.
//! - Point phase: the point wins, 7 loses, anything else is ignored.

use serde::{Deserialize, Serialize};

use super::roll::Point;

/// Result of a come-out roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComeOutResult {
    /// 7 or 11: the round is won.
    Natural,
    /// 2, 3 or 12: the round is lost.
    CrapOut,
    /// Any other sum becomes the point.
    Point(Point),
}

impl ComeOutResult {
    /// Classify a come-out sum.
    ///
    /// Sums outside `2..=12` cannot come from two dice; they fall through to
    /// `CrapOut` rather than panic.
    #[must_use]
    pub fn classify(sum: u8) -> Self {
        match sum {
            7 | 11 => ComeOutResult::Natural,
            _ => match Point::from_sum(sum) {
                Some(point) => ComeOutResult::Point(point),
                None => ComeOutResult::CrapOut,
            },
        }
    }
}

/// Result of a roll thrown while a point is live.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointResult {
    /// The point was repeated: the round is won.
    Made,
    /// A 7 came before the point: the round is lost.
    SevenOut,
    /// Neither; keep rolling.
    NoDecision,
}

impl PointResult {
    /// Classify a sum rolled against `point`.
    #[must_use]
    pub fn classify(point: Point, sum: u8) -> Self {
        if sum == point.value() {
            PointResult::Made
        } else if sum == 7 {
            PointResult::SevenOut
        } else {
            PointResult::NoDecision
        }
    }
}

/// A classified roll, tagged with the phase it was thrown in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RollOutcome {
    ComeOut(ComeOutResult),
    Point(PointResult),
}

impl RollOutcome {
    /// Whether this roll won the round.
    #[must_use]
    pub fn is_win(&self) -> bool {
        matches!(
            self,
            RollOutcome::ComeOut(ComeOutResult::Natural) | RollOutcome::Point(PointResult::Made)
        )
    }

    /// Whether this roll lost the round.
    #[must_use]
    pub fn is_loss(&self) -> bool {
        matches!(
            self,
            RollOutcome::ComeOut(ComeOutResult::CrapOut) | RollOutcome::Point(PointResult::SevenOut)
        )
    }

    /// Whether this roll ended the round either way.
    #[must_use]
    pub fn resolves_round(&self) -> bool {
        self.is_win() || self.is_loss()
    }
}
