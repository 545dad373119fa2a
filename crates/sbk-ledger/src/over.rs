use serde::{Deserialize, Serialize};

use sbk_types::PlayerId;

use crate::delivery::Delivery;
use crate::error::LedgerError;

/// An ordered group of deliveries bowled by one bowler.
///
/// An over accepts new deliveries only while it holds fewer than six valid
/// ones. Wides and no-balls never consume a slot, so an over can hold more
/// than six deliveries in total.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Over {
    pub number: u32,
    pub bowler: PlayerId,
    deliveries: Vec<Delivery>,
    runs: u32,
    wickets: u8,
    maiden: bool,
}

impl Over {
    pub fn new(number: u32, bowler: PlayerId) -> Self {
        Self {
            number,
            bowler,
            deliveries: Vec::new(),
            runs: 0,
            wickets: 0,
            maiden: false,
        }
    }

    /// Append a delivery, updating the over's derived totals.
    ///
    /// Fails with [`LedgerError::OverFull`] once six valid deliveries are
    /// present, and with [`LedgerError::WrongOver`] if the coordinate names
    /// a different over.
    pub fn push(&mut self, delivery: Delivery) -> Result<(), LedgerError> {
        if delivery.coordinate.over() != self.number {
            return Err(LedgerError::WrongOver {
                coordinate: delivery.coordinate,
                current_over: self.number,
            });
        }
        if self.is_complete() {
            return Err(LedgerError::OverFull);
        }

        self.runs += delivery.total_runs();
        if delivery.is_wicket() {
            self.wickets += 1;
        }
        self.deliveries.push(delivery);

        if self.is_complete() && self.runs == 0 && self.wickets == 0 {
            self.maiden = true;
        }
        Ok(())
    }

    /// Number of deliveries that consumed a ball slot.
    pub fn valid_ball_count(&self) -> u8 {
        self.deliveries.iter().filter(|d| d.is_valid).count() as u8
    }

    /// Returns `true` once six valid deliveries have been bowled.
    pub fn is_complete(&self) -> bool {
        self.valid_ball_count() >= 6
    }

    /// All deliveries in append order, including wides and no-balls.
    pub fn deliveries(&self) -> &[Delivery] {
        &self.deliveries
    }

    /// Mutable access to the most recent delivery, for augmentation.
    pub(crate) fn last_delivery_mut(&mut self) -> Option<&mut Delivery> {
        self.deliveries.last_mut()
    }

    /// Record a wicket augmented onto the most recent delivery.
    pub(crate) fn note_augmented_wicket(&mut self) {
        self.wickets += 1;
        // A wicket disqualifies a maiden even if it was confirmed late.
        self.maiden = false;
    }

    /// Runs conceded in the over so far.
    pub fn runs_conceded(&self) -> u32 {
        self.runs
    }

    /// Wickets that fell in the over so far.
    pub fn wickets_taken(&self) -> u8 {
        self.wickets
    }

    /// A complete over conceding zero runs and zero wickets.
    pub fn is_maiden(&self) -> bool {
        self.maiden
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sbk_types::{BallCoordinate, BallOutcome, WicketKind};

    fn player(key: &str) -> PlayerId {
        PlayerId::new(key).unwrap()
    }

    fn delivery(over: u32, ball: u8, outcome: BallOutcome, runs: u32, extras: u32) -> Delivery {
        Delivery::new(
            BallCoordinate::new(over, ball).unwrap(),
            player("bowler"),
            player("striker"),
            player("non-striker"),
            outcome,
            runs,
            extras,
        )
    }

    fn over_of_dots() -> Over {
        let mut over = Over::new(1, player("bowler"));
        for ball in 1..=6 {
            over.push(delivery(1, ball, BallOutcome::Dot, 0, 0)).unwrap();
        }
        over
    }

    #[test]
    fn six_valid_balls_complete_the_over() {
        let mut over = Over::new(1, player("bowler"));
        for ball in 1..=5 {
            over.push(delivery(1, ball, BallOutcome::Dot, 0, 0)).unwrap();
            assert!(!over.is_complete());
        }
        over.push(delivery(1, 6, BallOutcome::Single, 1, 0)).unwrap();
        assert!(over.is_complete());
    }

    #[test]
    fn wides_do_not_consume_slots() {
        let mut over = Over::new(1, player("bowler"));
        over.push(delivery(1, 1, BallOutcome::Wide, 0, 1)).unwrap();
        over.push(delivery(1, 1, BallOutcome::Wide, 0, 1)).unwrap();
        over.push(delivery(1, 1, BallOutcome::Dot, 0, 0)).unwrap();
        assert_eq!(over.valid_ball_count(), 1);
        assert_eq!(over.deliveries().len(), 3);
        assert!(!over.is_complete());
    }

    #[test]
    fn seventh_valid_ball_is_rejected() {
        let mut over = over_of_dots();
        let error = over
            .push(delivery(1, 6, BallOutcome::Single, 1, 0))
            .unwrap_err();
        assert_eq!(error, LedgerError::OverFull);
    }

    #[test]
    fn wrong_over_coordinate_is_rejected() {
        let mut over = Over::new(2, player("bowler"));
        let error = over
            .push(delivery(3, 1, BallOutcome::Dot, 0, 0))
            .unwrap_err();
        assert!(matches!(error, LedgerError::WrongOver { current_over: 2, .. }));
    }

    #[test]
    fn maiden_requires_complete_scoreless_wicketless_over() {
        let over = over_of_dots();
        assert!(over.is_maiden());

        let mut scoring = Over::new(1, player("bowler"));
        scoring.push(delivery(1, 1, BallOutcome::Single, 1, 0)).unwrap();
        for ball in 2..=6 {
            scoring.push(delivery(1, ball, BallOutcome::Dot, 0, 0)).unwrap();
        }
        assert!(scoring.is_complete());
        assert!(!scoring.is_maiden());
    }

    #[test]
    fn wide_runs_disqualify_a_maiden() {
        let mut over = Over::new(1, player("bowler"));
        over.push(delivery(1, 1, BallOutcome::Wide, 0, 1)).unwrap();
        for ball in 1..=6 {
            over.push(delivery(1, ball, BallOutcome::Dot, 0, 0)).unwrap();
        }
        assert!(over.is_complete());
        assert_eq!(over.runs_conceded(), 1);
        assert!(!over.is_maiden());
    }

    #[test]
    fn totals_accumulate() {
        let mut over = Over::new(1, player("bowler"));
        over.push(delivery(1, 1, BallOutcome::Four, 4, 0)).unwrap();
        over.push(delivery(1, 2, BallOutcome::NoBall, 0, 1)).unwrap();
        over.push(
            delivery(1, 2, BallOutcome::Wicket, 0, 0)
                .with_wicket(WicketKind::Bowled, None),
        )
        .unwrap();
        assert_eq!(over.runs_conceded(), 5);
        assert_eq!(over.wickets_taken(), 1);
    }
}
