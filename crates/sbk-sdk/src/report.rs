use serde::{Deserialize, Serialize};

use sbk_ledger::ExtrasBreakdown;
use sbk_reconcile::{ConflictStats, ScorerSummary};
use sbk_rules::MatchFormat;
use sbk_types::{BallCoordinate, BallOutcome, MatchId, PlayerId, WicketKind};

/// What the live-scoring path hands the scorebook for one delivery.
///
/// Bowler and batsman identities are not part of the input: the scorebook
/// resolves them from the current over and the batsmen at the crease.
#[derive(Clone, Debug)]
pub struct DeliveryInput {
    pub coordinate: BallCoordinate,
    pub outcome: BallOutcome,
    pub runs: u32,
    pub extras: u32,
    pub wicket: Option<WicketKind>,
    pub fielder: Option<PlayerId>,
    pub commentary: Option<String>,
}

impl DeliveryInput {
    pub fn new(coordinate: BallCoordinate, outcome: BallOutcome, runs: u32) -> Self {
        Self {
            coordinate,
            outcome,
            runs,
            extras: 0,
            wicket: None,
            fielder: None,
            commentary: None,
        }
    }

    pub fn with_extras(mut self, extras: u32) -> Self {
        self.extras = extras;
        self
    }

    pub fn with_wicket(mut self, kind: WicketKind, fielder: Option<PlayerId>) -> Self {
        self.wicket = Some(kind);
        self.fielder = fielder;
        self
    }

    pub fn with_commentary(mut self, commentary: impl Into<String>) -> Self {
        self.commentary = Some(commentary.into());
        self
    }
}

/// One innings score line for the summary.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InningsLine {
    pub number: u8,
    pub batting_team: String,
    pub runs: u32,
    pub wickets: u8,
    /// Overs bowled in scoreboard notation, e.g. `"12.3"`.
    pub overs: String,
    pub extras: ExtrasBreakdown,
    pub run_rate: f64,
    pub completed: bool,
    pub all_out: bool,
    pub declared: bool,
}

/// The scorebook summary: who contributed, what is disputed, and where
/// each innings stands.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScorebookSummary {
    pub match_id: MatchId,
    pub format: MatchFormat,
    pub contributors: Vec<ScorerSummary>,
    pub conflicts: ConflictStats,
    pub innings: Vec<InningsLine>,
}
