use serde::{Deserialize, Serialize};
use tracing::debug;

use sbk_types::{BallOutcome, PlayerId, TeamId, WicketKind};

use crate::delivery::Delivery;
use crate::error::LedgerError;
use crate::over::Over;

/// Extras conceded, broken down by kind.
///
/// Each kind increments both its own counter and the shared total: wides
/// and no-balls by the delivery's penalty runs, byes and leg-byes by the
/// runs actually run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtrasBreakdown {
    pub wides: u32,
    pub no_balls: u32,
    pub byes: u32,
    pub leg_byes: u32,
    pub total: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
struct CurrentBatsmen {
    first: PlayerId,
    second: PlayerId,
    striker_first: bool,
}

/// One innings: the fold over the delivery ledger.
///
/// The innings exclusively owns its overs, which exclusively own their
/// deliveries. All derived state (totals, strike holder, completion) is
/// maintained incrementally as deliveries are appended in play order by
/// the single live-scoring writer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Innings {
    number: u8,
    batting_team: TeamId,
    bowling_team: TeamId,
    overs: Vec<Over>,
    batsmen: Option<CurrentBatsmen>,
    total_runs: u32,
    total_wickets: u8,
    extras: ExtrasBreakdown,
    completed: bool,
    all_out: bool,
    declared: bool,
}

impl Innings {
    pub fn new(number: u8, batting_team: TeamId, bowling_team: TeamId) -> Self {
        Self {
            number,
            batting_team,
            bowling_team,
            overs: Vec::new(),
            batsmen: None,
            total_runs: 0,
            total_wickets: 0,
            extras: ExtrasBreakdown::default(),
            completed: false,
            all_out: false,
            declared: false,
        }
    }

    /// Put a pair of batsmen at the crease; the first takes strike.
    pub fn set_batsmen(&mut self, striker: PlayerId, non_striker: PlayerId) {
        self.batsmen = Some(CurrentBatsmen {
            first: striker,
            second: non_striker,
            striker_first: true,
        });
    }

    /// The batsman currently on strike.
    pub fn striker(&self) -> Result<&PlayerId, LedgerError> {
        let batsmen = self.batsmen.as_ref().ok_or(LedgerError::NoBatsmen)?;
        Ok(if batsmen.striker_first {
            &batsmen.first
        } else {
            &batsmen.second
        })
    }

    /// The batsman at the non-striker's end.
    pub fn non_striker(&self) -> Result<&PlayerId, LedgerError> {
        let batsmen = self.batsmen.as_ref().ok_or(LedgerError::NoBatsmen)?;
        Ok(if batsmen.striker_first {
            &batsmen.second
        } else {
            &batsmen.first
        })
    }

    /// Open a new over.
    ///
    /// The caller enforces over order: starting a new over while the
    /// previous one is incomplete is a precondition violation unless the
    /// side was dismissed mid-over (in which case the innings is already
    /// closed and this fails as such).
    pub fn start_over(&mut self, bowler: PlayerId) -> Result<u32, LedgerError> {
        if self.completed {
            return Err(LedgerError::InningsClosed);
        }
        if let Some(last) = self.overs.last() {
            if !last.is_complete() {
                return Err(LedgerError::OverIncomplete);
            }
        }
        let number = self.overs.len() as u32 + 1;
        debug!(over = number, bowler = %bowler, "over started");
        self.overs.push(Over::new(number, bowler));
        Ok(number)
    }

    /// Append a delivery to the current over and fold it into the running
    /// state.
    ///
    /// Update order is fixed: totals and extras, then wickets and the
    /// all-out check, then strike rotation (odd-run flip first, then the
    /// over-completion flip — on an odd-run delivery that also ends the
    /// over the two flips cancel out).
    pub fn record_delivery(&mut self, delivery: Delivery) -> Result<(), LedgerError> {
        if self.completed {
            return Err(LedgerError::InningsClosed);
        }
        if self.batsmen.is_none() {
            return Err(LedgerError::NoBatsmen);
        }

        let runs = delivery.runs;
        let extras = delivery.extras;
        let outcome = delivery.outcome;
        let is_valid = delivery.is_valid;
        let is_wicket = delivery.is_wicket();
        let coordinate = delivery.coordinate;

        let over = self.overs.last_mut().ok_or(LedgerError::NoActiveOver)?;
        over.push(delivery)?;
        let over_completed = over.is_complete();

        self.total_runs += runs + extras;
        match outcome {
            BallOutcome::Wide => {
                self.extras.wides += extras;
                self.extras.total += extras;
            }
            BallOutcome::NoBall => {
                self.extras.no_balls += extras;
                self.extras.total += extras;
            }
            BallOutcome::Bye => {
                self.extras.byes += runs;
                self.extras.total += runs;
            }
            BallOutcome::LegBye => {
                self.extras.leg_byes += runs;
                self.extras.total += runs;
            }
            _ => {}
        }

        if is_wicket {
            self.note_wicket();
        }

        if runs % 2 == 1 && is_valid {
            self.flip_strike();
        }
        if over_completed {
            self.flip_strike();
        }

        debug!(
            %coordinate,
            runs = self.total_runs,
            wickets = self.total_wickets,
            "delivery recorded"
        );
        Ok(())
    }

    /// Augment the most recent delivery with a dismissal confirmed after
    /// the ball was recorded.
    pub fn augment_wicket(
        &mut self,
        kind: WicketKind,
        fielder: Option<PlayerId>,
    ) -> Result<(), LedgerError> {
        let over = self.overs.last_mut().ok_or(LedgerError::NothingToAugment)?;
        let delivery = over
            .last_delivery_mut()
            .ok_or(LedgerError::NothingToAugment)?;

        let already_counted = delivery.is_wicket();
        delivery.wicket = Some(kind);
        delivery.fielder = fielder;

        if !already_counted {
            over.note_augmented_wicket();
            self.note_wicket();
        }
        Ok(())
    }

    /// Attach commentary to the most recent delivery.
    pub fn annotate_last(&mut self, commentary: impl Into<String>) -> Result<(), LedgerError> {
        let delivery = self
            .overs
            .last_mut()
            .and_then(Over::last_delivery_mut)
            .ok_or(LedgerError::NothingToAugment)?;
        delivery.commentary = commentary.into();
        Ok(())
    }

    /// Declare the innings closed (Test and First-Class formats).
    pub fn declare(&mut self) {
        self.completed = true;
        self.declared = true;
    }

    /// Mark the innings complete (format rules: over cap reached, etc.).
    pub fn close(&mut self) {
        self.completed = true;
    }

    /// Runs per over: completed overs count 1.0, the in-progress over
    /// contributes `valid_balls / 6`. Zero when no over has been played.
    pub fn current_run_rate(&self) -> f64 {
        if self.overs.is_empty() {
            return 0.0;
        }
        let mut overs_played = self.overs.len() as f64;
        if let Some(last) = self.overs.last() {
            if !last.is_complete() {
                overs_played = overs_played - 1.0 + f64::from(last.valid_ball_count()) / 6.0;
            }
        }
        if overs_played > 0.0 {
            f64::from(self.total_runs) / overs_played
        } else {
            0.0
        }
    }

    fn note_wicket(&mut self) {
        self.total_wickets += 1;
        if self.total_wickets >= 10 {
            self.all_out = true;
            self.completed = true;
            debug!(innings = self.number, "all out");
        }
    }

    fn flip_strike(&mut self) {
        if let Some(batsmen) = self.batsmen.as_mut() {
            batsmen.striker_first = !batsmen.striker_first;
        }
    }

    pub fn number(&self) -> u8 {
        self.number
    }

    pub fn batting_team(&self) -> &TeamId {
        &self.batting_team
    }

    pub fn bowling_team(&self) -> &TeamId {
        &self.bowling_team
    }

    pub fn overs(&self) -> &[Over] {
        &self.overs
    }

    pub fn total_runs(&self) -> u32 {
        self.total_runs
    }

    pub fn total_wickets(&self) -> u8 {
        self.total_wickets
    }

    pub fn extras(&self) -> &ExtrasBreakdown {
        &self.extras
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn is_all_out(&self) -> bool {
        self.all_out
    }

    pub fn is_declared(&self) -> bool {
        self.declared
    }
}
