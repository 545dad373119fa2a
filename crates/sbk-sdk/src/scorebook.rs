use tracing::{debug, info};

use sbk_ledger::{Delivery, Innings, LedgerError};
use sbk_reconcile::{Conflict, Observation, ObservationStore, SubmitReceipt};
use sbk_roster::Roster;
use sbk_rules::{rules_for, MatchFormat, MatchRules};
use sbk_types::{BallCoordinate, BallOutcome, MatchId, PlayerId, ScorerId, TeamId, WicketKind};

use crate::error::{ScorebookError, ScorebookResult};
use crate::report::{DeliveryInput, InningsLine, ScorebookSummary};

/// The scorebook: canonical ledger and observation audit stream for one
/// match.
///
/// Two write paths exist. The live-scoring path (`start_over`,
/// `record_delivery`, augmentation) is single-writer and feeds the
/// canonical innings ledger; the scorer path (`submit_observation`) is
/// concurrent and feeds the reconciliation engine. Resolution reconciles
/// the observation record — it never rewrites the canonical ledger.
pub struct Scorebook {
    match_id: MatchId,
    rules: Box<dyn MatchRules>,
    roster: Roster,
    innings: Vec<Innings>,
    observations: ObservationStore,
}

impl Scorebook {
    /// Open a scorebook for a match of the given format.
    pub fn new(format: MatchFormat, roster: Roster) -> Self {
        let match_id = MatchId::new();
        info!(%match_id, %format, "scorebook opened");
        Self {
            match_id,
            rules: rules_for(format),
            roster,
            innings: Vec::new(),
            observations: ObservationStore::new(),
        }
    }

    pub fn match_id(&self) -> &MatchId {
        &self.match_id
    }

    pub fn format(&self) -> MatchFormat {
        self.rules.format()
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    // ---- Live-scoring path (single writer) ----

    /// Begin the next innings with the opening pair at the crease.
    pub fn start_innings(
        &mut self,
        batting_team: TeamId,
        bowling_team: TeamId,
        striker: PlayerId,
        non_striker: PlayerId,
    ) -> ScorebookResult<u8> {
        if let Some(last) = self.innings.last() {
            if !last.is_completed() {
                return Err(ScorebookError::InningsInProgress(last.number()));
            }
        }
        self.roster.team(&batting_team)?;
        self.roster.team(&bowling_team)?;
        self.roster.player(&striker)?;
        self.roster.player(&non_striker)?;

        let number = self.innings.len() as u8 + 1;
        let mut innings = Innings::new(number, batting_team, bowling_team);
        innings.set_batsmen(striker, non_striker);
        info!(innings = number, "innings started");
        self.innings.push(innings);
        Ok(number)
    }

    /// Replace the pair at the crease (new batsman after a dismissal).
    pub fn set_batsmen(
        &mut self,
        striker: PlayerId,
        non_striker: PlayerId,
    ) -> ScorebookResult<()> {
        self.roster.player(&striker)?;
        self.roster.player(&non_striker)?;
        self.current_innings_mut()?.set_batsmen(striker, non_striker);
        Ok(())
    }

    /// Open a new over for the given bowler.
    pub fn start_over(&mut self, bowler: PlayerId) -> ScorebookResult<u32> {
        self.roster.player(&bowler)?;
        let number = self.current_innings_mut()?.start_over(bowler)?;
        Ok(number)
    }

    /// Record the canonical delivery for a slot and fold it into the
    /// innings, then apply the format's completion check.
    pub fn record_delivery(&mut self, input: DeliveryInput) -> ScorebookResult<()> {
        let innings = self
            .innings
            .last_mut()
            .ok_or(ScorebookError::NoActiveInnings)?;

        let striker = innings.striker()?.clone();
        let non_striker = innings.non_striker()?.clone();
        let bowler = innings
            .overs()
            .last()
            .ok_or(LedgerError::NoActiveOver)?
            .bowler
            .clone();

        let mut delivery = Delivery::new(
            input.coordinate,
            bowler,
            striker,
            non_striker,
            input.outcome,
            input.runs,
            input.extras,
        );
        if let Some(kind) = input.wicket {
            delivery = delivery.with_wicket(kind, input.fielder);
        }
        if let Some(commentary) = input.commentary {
            delivery = delivery.with_commentary(commentary);
        }

        innings.record_delivery(delivery)?;

        if self.rules.innings_complete(innings) {
            innings.close();
            debug!(innings = innings.number(), "innings complete per format rules");
        }
        Ok(())
    }

    /// Augment the most recent delivery with a confirmed dismissal.
    pub fn augment_wicket(
        &mut self,
        kind: WicketKind,
        fielder: Option<PlayerId>,
    ) -> ScorebookResult<()> {
        self.current_innings_mut()?.augment_wicket(kind, fielder)?;
        Ok(())
    }

    /// Attach commentary to the most recent delivery.
    pub fn annotate_last(&mut self, commentary: impl Into<String>) -> ScorebookResult<()> {
        self.current_innings_mut()?.annotate_last(commentary)?;
        Ok(())
    }

    /// Declare the current innings closed.
    pub fn declare(&mut self) -> ScorebookResult<()> {
        self.current_innings_mut()?.declare();
        Ok(())
    }

    /// Run rate of the innings in progress.
    pub fn current_run_rate(&self) -> ScorebookResult<f64> {
        Ok(self.current_innings()?.current_run_rate())
    }

    /// The innings currently being scored (the most recent one).
    pub fn current_innings(&self) -> ScorebookResult<&Innings> {
        self.innings.last().ok_or(ScorebookError::NoActiveInnings)
    }

    /// All innings in play order.
    pub fn innings(&self) -> &[Innings] {
        &self.innings
    }

    // ---- Scorer path (concurrent) ----

    /// Submit one scorer's observation of a delivery slot.
    #[allow(clippy::too_many_arguments)]
    pub fn submit_observation(
        &self,
        scorer: ScorerId,
        scorer_name: impl Into<String>,
        coordinate: BallCoordinate,
        outcome: BallOutcome,
        runs: u32,
        extras: u32,
        wicket: Option<WicketKind>,
    ) -> ScorebookResult<SubmitReceipt> {
        let observation = Observation::new(
            scorer,
            scorer_name,
            coordinate,
            outcome,
            runs,
            extras,
            wicket,
        );
        Ok(self.observations.submit(observation)?)
    }

    /// All observations submitted for a slot, in submission order.
    pub fn observation_entries(
        &self,
        coordinate: &BallCoordinate,
    ) -> ScorebookResult<Vec<Observation>> {
        Ok(self.observations.entries_for(coordinate)?)
    }

    /// Unresolved conflicts in discovery order.
    pub fn list_unresolved_conflicts(&self) -> ScorebookResult<Vec<Conflict>> {
        Ok(self.observations.unresolved_conflicts()?)
    }

    /// The conflict for a slot, if any was detected.
    pub fn conflict_at(&self, coordinate: &BallCoordinate) -> ScorebookResult<Option<Conflict>> {
        Ok(self.observations.conflict_at(coordinate)?)
    }

    /// Settle a conflict by authority. `Ok(true)` exactly once per
    /// coordinate.
    pub fn resolve_conflict(
        &self,
        coordinate: &BallCoordinate,
        correct: Observation,
        resolver: ScorerId,
    ) -> ScorebookResult<bool> {
        Ok(self
            .observations
            .resolve_by_authority(coordinate, correct, resolver)?)
    }

    /// Advisory majority vote over a conflict's entries.
    pub fn vote_resolution(&self, coordinate: &BallCoordinate) -> ScorebookResult<Observation> {
        Ok(self.observations.majority_vote(coordinate)?)
    }

    // ---- Reporting ----

    /// Contributors, conflict statistics, and innings score lines.
    pub fn summary(&self) -> ScorebookResult<ScorebookSummary> {
        let innings = self
            .innings
            .iter()
            .map(|innings| InningsLine {
                number: innings.number(),
                batting_team: self.team_name(innings.batting_team()),
                runs: innings.total_runs(),
                wickets: innings.total_wickets(),
                overs: overs_notation(innings),
                extras: *innings.extras(),
                run_rate: innings.current_run_rate(),
                completed: innings.is_completed(),
                all_out: innings.is_all_out(),
                declared: innings.is_declared(),
            })
            .collect();

        Ok(ScorebookSummary {
            match_id: self.match_id.clone(),
            format: self.rules.format(),
            contributors: self.observations.scorer_summaries()?,
            conflicts: self.observations.conflict_stats()?,
            innings,
        })
    }

    fn current_innings_mut(&mut self) -> ScorebookResult<&mut Innings> {
        self.innings
            .last_mut()
            .ok_or(ScorebookError::NoActiveInnings)
    }

    fn team_name(&self, id: &TeamId) -> String {
        self.roster
            .team(id)
            .map(|t| t.name)
            .unwrap_or_else(|_| id.as_str().to_string())
    }
}

fn overs_notation(innings: &Innings) -> String {
    match innings.overs().last() {
        None => "0.0".to_string(),
        Some(last) if last.is_complete() => format!("{}.0", innings.overs().len()),
        Some(last) => format!(
            "{}.{}",
            innings.overs().len() - 1,
            last.valid_ball_count()
        ),
    }
}
