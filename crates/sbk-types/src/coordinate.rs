use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// (over, ball) pair identifying a unique delivery slot.
///
/// Overs are numbered from 1; balls are numbered 1–6 within the over. A
/// wide or no-ball re-bowled on the same slot shares the coordinate of the
/// legal delivery that eventually consumes it, so a coordinate names a
/// *slot*, not an individual swing of the arm.
///
/// Ordering: over first, then ball (total order matching play order).
#[derive(
    Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct BallCoordinate {
    over: u32,
    ball: u8,
}

impl BallCoordinate {
    /// Create a coordinate, validating that the over is at least 1 and the
    /// ball is within 1–6.
    pub fn new(over: u32, ball: u8) -> Result<Self, TypeError> {
        if over == 0 || ball == 0 || ball > 6 {
            return Err(TypeError::InvalidCoordinate { over, ball });
        }
        Ok(Self { over, ball })
    }

    /// The over number (1-based).
    pub fn over(&self) -> u32 {
        self.over
    }

    /// The ball number within the over (1–6).
    pub fn ball(&self) -> u8 {
        self.ball
    }

    /// The next slot in play order, rolling into the following over after
    /// ball 6.
    pub fn next(&self) -> Self {
        if self.ball == 6 {
            Self {
                over: self.over + 1,
                ball: 1,
            }
        } else {
            Self {
                over: self.over,
                ball: self.ball + 1,
            }
        }
    }
}

impl fmt::Debug for BallCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BallCoordinate({}.{})", self.over, self.ball)
    }
}

impl fmt::Display for BallCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.over, self.ball)
    }
}

impl FromStr for BallCoordinate {
    type Err = TypeError;

    /// Parse the scoreboard notation `"over.ball"`, e.g. `"12.3"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || TypeError::UnparseableCoordinate(s.to_string());
        let (over, ball) = s.split_once('.').ok_or_else(bad)?;
        let over: u32 = over.parse().map_err(|_| bad())?;
        let ball: u8 = ball.parse().map_err(|_| bad())?;
        Self::new(over, ball)
    }
}
