use serde::{Deserialize, Serialize};

use sbk_types::{BallCoordinate, BallOutcome, PlayerId, Timestamp, WicketKind};

/// The canonical, authoritative record of one delivery.
///
/// A delivery is immutable once appended to an over, with one exception:
/// the most recently appended delivery may still have its wicket detail
/// and commentary augmented until the next delivery lands (a dismissal is
/// often confirmed a beat after the ball is dead).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delivery {
    pub coordinate: BallCoordinate,
    pub bowler: PlayerId,
    pub striker: PlayerId,
    pub non_striker: PlayerId,
    /// Runs scored off the bat (byes and leg-byes also land here, as run
    /// counts credited to extras by the fold).
    pub runs: u32,
    /// Penalty runs for the delivery itself (wides, no-balls).
    pub extras: u32,
    pub outcome: BallOutcome,
    pub wicket: Option<WicketKind>,
    /// Fielder credited with a catch, stumping, or run-out.
    pub fielder: Option<PlayerId>,
    /// `false` for wides and no-balls: the slot is not consumed.
    pub is_valid: bool,
    pub commentary: String,
    pub recorded_at: Timestamp,
}

impl Delivery {
    /// Create a delivery. Validity is derived from the outcome.
    pub fn new(
        coordinate: BallCoordinate,
        bowler: PlayerId,
        striker: PlayerId,
        non_striker: PlayerId,
        outcome: BallOutcome,
        runs: u32,
        extras: u32,
    ) -> Self {
        Self {
            coordinate,
            bowler,
            striker,
            non_striker,
            runs,
            extras,
            outcome,
            wicket: None,
            fielder: None,
            is_valid: outcome.is_valid_delivery(),
            commentary: String::new(),
            recorded_at: Timestamp::now(),
        }
    }

    /// Attach a dismissal, with the fielder involved for catches and
    /// run-outs.
    pub fn with_wicket(mut self, kind: WicketKind, fielder: Option<PlayerId>) -> Self {
        self.wicket = Some(kind);
        self.fielder = fielder;
        self
    }

    /// Attach free-text commentary.
    pub fn with_commentary(mut self, commentary: impl Into<String>) -> Self {
        self.commentary = commentary.into();
        self
    }

    /// Total runs conceded by the delivery (off the bat plus penalties).
    pub fn total_runs(&self) -> u32 {
        self.runs + self.extras
    }

    /// Returns `true` if a batsman was dismissed on this delivery.
    ///
    /// Determined by the wicket detail, not the outcome: a dismissal may
    /// be augmented onto a delivery after the fact.
    pub fn is_wicket(&self) -> bool {
        self.wicket.is_some()
    }
}
