//! Dice rolls and established points.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::engine::EngineError;

/// Number of faces on each die.
pub const DIE_FACES: u8 = 6;

/// A throw of two dice.
///
/// Both values are always in `1..=6`; construct through [`Roll::new`] to
/// have that checked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[u8; 2]", into = "[u8; 2]")]
pub struct Roll {
    die1: u8,
    die2: u8,
}

impl Roll {
    /// Create a roll, rejecting die values outside `1..=6`.
    pub fn new(die1: u8, die2: u8) -> Result<Self, EngineError> {
        for value in [die1, die2] {
            if !(1..=DIE_FACES).contains(&value) {
                return Err(EngineError::InvalidDie(value));
            }
        }
        Ok(Self { die1, die2 })
    }

    /// Value of the first die.
    #[must_use]
    pub fn die1(&self) -> u8 {
        self.die1
    }

    /// Value of the second die.
    #[must_use]
    pub fn die2(&self) -> u8 {
        self.die2
    }

    /// Both dice as an array, in throw order.
    #[must_use]
    pub fn dice(&self) -> [u8; 2] {
        [self.die1, self.die2]
    }

    /// Total of both dice, in `2..=12`.
    #[must_use]
    pub fn sum(&self) -> u8 {
        self.die1 + self.die2
    }
}

impl TryFrom<[u8; 2]> for Roll {
    type Error = EngineError;

    fn try_from([die1, die2]: [u8; 2]) -> Result<Self, Self::Error> {
        Self::new(die1, die2)
    }
}

impl From<Roll> for [u8; 2] {
    fn from(roll: Roll) -> Self {
        roll.dice()
    }
}

impl fmt::Display for Roll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.die1, self.die2)
    }
}

/// A point established by a come-out roll.
///
/// Only 4, 5, 6, 8, 9 and 10 can become a point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Point(u8);

impl Point {
    /// All sums that establish a point.
    pub const ALL: [u8; 6] = [4, 5, 6, 8, 9, 10];

    /// The point established by `sum`, if any.
    #[must_use]
    pub fn from_sum(sum: u8) -> Option<Self> {
        Self::ALL.contains(&sum).then_some(Self(sum))
    }

    /// The sum that must be rolled again to win.
    #[must_use]
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Point {
    type Error = EngineError;

    fn try_from(sum: u8) -> Result<Self, Self::Error> {
        Self::from_sum(sum).ok_or(EngineError::InvalidPoint(sum))
    }
}

impl From<Point> for u8 {
    fn from(point: Point) -> Self {
        point.0
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
