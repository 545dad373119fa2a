use std::fmt;

use serde::{Deserialize, Serialize};

/// What happened off a delivery.
///
/// Wide and NoBall are the two invalid outcomes: they do not consume one of
/// the over's six ball slots. Everything else is a valid delivery.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BallOutcome {
    Dot,
    Single,
    Double,
    Triple,
    Four,
    Six,
    Wicket,
    Wide,
    NoBall,
    Bye,
    LegBye,
    WicketAndRuns,
}

impl BallOutcome {
    /// Returns `true` if the delivery counts toward the 6-ball over.
    pub fn is_valid_delivery(&self) -> bool {
        !matches!(self, Self::Wide | Self::NoBall)
    }

    /// Returns `true` if the outcome records a dismissal.
    pub fn is_wicket(&self) -> bool {
        matches!(self, Self::Wicket | Self::WicketAndRuns)
    }

    /// Returns `true` if the outcome is an extras category (runs credited
    /// to the extras total rather than the striker).
    pub fn is_extra(&self) -> bool {
        matches!(self, Self::Wide | Self::NoBall | Self::Bye | Self::LegBye)
    }
}

impl fmt::Display for BallOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Dot => "Dot Ball",
            Self::Single => "1 Run",
            Self::Double => "2 Runs",
            Self::Triple => "3 Runs",
            Self::Four => "FOUR!",
            Self::Six => "SIX!",
            Self::Wicket => "WICKET!",
            Self::Wide => "Wide",
            Self::NoBall => "No Ball",
            Self::Bye => "Bye",
            Self::LegBye => "Leg Bye",
            Self::WicketAndRuns => "Wicket + Runs",
        };
        write!(f, "{label}")
    }
}

/// How a batsman was dismissed.
///
/// Absence of a dismissal is modeled as `Option::<WicketKind>::None`, not a
/// sentinel variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WicketKind {
    Bowled,
    Caught,
    Lbw,
    RunOut,
    Stumped,
    HitWicket,
    CaughtAndBowled,
    CaughtBehind,
    ObstructingField,
    HitBallTwice,
    TimedOut,
}

impl WicketKind {
    /// Returns `true` if the dismissal credits a fielder (catches and
    /// run-outs carry a fielder reference on the delivery).
    pub fn involves_fielder(&self) -> bool {
        matches!(
            self,
            Self::Caught | Self::CaughtBehind | Self::RunOut | Self::Stumped
        )
    }
}

impl fmt::Display for WicketKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Bowled => "Bowled",
            Self::Caught => "Caught",
            Self::Lbw => "LBW",
            Self::RunOut => "Run Out",
            Self::Stumped => "Stumped",
            Self::HitWicket => "Hit Wicket",
            Self::CaughtAndBowled => "Caught & Bowled",
            Self::CaughtBehind => "Caught Behind",
            Self::ObstructingField => "Obstructing the Field",
            Self::HitBallTwice => "Hit the Ball Twice",
            Self::TimedOut => "Timed Out",
        };
        write!(f, "{label}")
    }
}
