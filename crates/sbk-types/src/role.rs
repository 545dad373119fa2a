use std::fmt;

use serde::{Deserialize, Serialize};

/// Role flags held as a set on a player.
///
/// A player can carry several roles at once (a wicket-keeper who captains,
/// an all-rounder who is vice-captain). Membership is a pure set query on
/// the player's role set.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum PlayerRole {
    Batsman,
    Bowler,
    AllRounder,
    WicketKeeper,
    WicketKeeperBatsman,
    Captain,
    ViceCaptain,
}

impl fmt::Display for PlayerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Batsman => "Batsman",
            Self::Bowler => "Bowler",
            Self::AllRounder => "All-Rounder",
            Self::WicketKeeper => "Wicket-Keeper",
            Self::WicketKeeperBatsman => "WK-Batsman",
            Self::Captain => "Captain",
            Self::ViceCaptain => "Vice-Captain",
        };
        write!(f, "{label}")
    }
}
