use std::fmt;

use serde::{Deserialize, Serialize};

use sbk_ledger::Innings;

/// Recognized match formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchFormat {
    Odi,
    T20,
    Test,
    FirstClass,
}

impl fmt::Display for MatchFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Odi => "One Day International",
            Self::T20 => "T20",
            Self::Test => "Test Match",
            Self::FirstClass => "First Class Match",
        };
        write!(f, "{label}")
    }
}

/// Format-specific match behavior.
///
/// The trait is object-safe and `Send + Sync` so a scorebook can hold the
/// selected format as a `Box<dyn MatchRules>`.
pub trait MatchRules: Send + Sync {
    /// The format these rules implement.
    fn format(&self) -> MatchFormat;

    /// Over cap per innings, or `None` for uncapped formats.
    fn max_overs(&self) -> Option<u32>;

    /// Innings each side bats.
    fn innings_per_side(&self) -> u8;

    /// Whether the innings is over: already closed, all out, or (for
    /// capped formats) the over limit has been bowled out.
    fn innings_complete(&self, innings: &Innings) -> bool {
        if innings.is_completed() || innings.is_all_out() {
            return true;
        }
        match self.max_overs() {
            Some(cap) => {
                let bowled = innings.overs().len() as u32;
                bowled >= cap && innings.overs().last().is_some_and(|o| o.is_complete())
            }
            None => false,
        }
    }
}
