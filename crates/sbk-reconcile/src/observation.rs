use std::fmt;

use serde::{Deserialize, Serialize};

use sbk_types::{BallCoordinate, BallOutcome, ScorerId, Timestamp, WicketKind};

/// One scorer's claim about what happened on a delivery slot.
///
/// Observations are an audit stream layered over the canonical ledger:
/// they carry only the scored outcome, never the bowler/batsman references
/// that the canonical delivery record resolves.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    pub scorer: ScorerId,
    pub scorer_name: String,
    pub coordinate: BallCoordinate,
    pub outcome: BallOutcome,
    pub runs: u32,
    pub extras: u32,
    pub wicket: Option<WicketKind>,
    pub submitted_at: Timestamp,
    /// Store-assigned submission sequence (1-based, monotonic across the
    /// whole store). Zero until the observation has been submitted.
    pub seq: u64,
}

impl Observation {
    pub fn new(
        scorer: ScorerId,
        scorer_name: impl Into<String>,
        coordinate: BallCoordinate,
        outcome: BallOutcome,
        runs: u32,
        extras: u32,
        wicket: Option<WicketKind>,
    ) -> Self {
        Self {
            scorer,
            scorer_name: scorer_name.into(),
            coordinate,
            outcome,
            runs,
            extras,
            wicket,
            submitted_at: Timestamp::now(),
            seq: 0,
        }
    }

    /// Agreement equality: two observations agree when their scored fields
    /// (runs, extras, outcome, wicket kind) match. Identity, commentary,
    /// and timing never affect agreement.
    pub fn agrees_with(&self, other: &Self) -> bool {
        self.runs == other.runs
            && self.extras == other.extras
            && self.outcome == other.outcome
            && self.wicket == other.wicket
    }

    /// The signature observations are grouped by for majority voting.
    ///
    /// Narrower than agreement: the vote groups on (runs, extras, outcome)
    /// only, leaving wicket detail to the resolving authority.
    pub fn vote_signature(&self) -> VoteSignature {
        VoteSignature {
            runs: self.runs,
            extras: self.extras,
            outcome: self.outcome,
        }
    }
}

/// Grouping key for majority voting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VoteSignature {
    pub runs: u32,
    pub extras: u32,
    pub outcome: BallOutcome,
}

impl fmt::Display for VoteSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+{} {}", self.runs, self.extras, self.outcome)
    }
}
