use serde::{Deserialize, Serialize};

use sbk_types::{BallCoordinate, ScorerId, Timestamp};

use crate::observation::Observation;

/// How a conflict was settled.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    /// The observation declared correct.
    pub observation: Observation,
    /// Who resolved it.
    pub resolved_by: ScorerId,
    /// When it was resolved.
    pub resolved_at: Timestamp,
}

/// A coordinate where submitted observations disagree.
///
/// One conflict exists per coordinate, created lazily on the first
/// detected disagreement and never deleted. The entry list holds read-only
/// copies of the disagreeing observations in submission order; the
/// originals stay in the observation store's intake stream. Resolution is
/// single-use: once settled, a conflict stays settled.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conflict {
    pub coordinate: BallCoordinate,
    entries: Vec<Observation>,
    resolution: Option<Resolution>,
}

impl Conflict {
    pub(crate) fn new(coordinate: BallCoordinate, entries: Vec<Observation>) -> Self {
        Self {
            coordinate,
            entries,
            resolution: None,
        }
    }

    /// The disagreeing observations, in submission order.
    pub fn entries(&self) -> &[Observation] {
        &self.entries
    }

    pub fn is_resolved(&self) -> bool {
        self.resolution.is_some()
    }

    pub fn resolution(&self) -> Option<&Resolution> {
        self.resolution.as_ref()
    }

    /// Settle the conflict. Returns `false` if it was already settled.
    pub(crate) fn resolve(&mut self, observation: Observation, resolved_by: ScorerId) -> bool {
        if self.resolution.is_some() {
            return false;
        }
        self.resolution = Some(Resolution {
            observation,
            resolved_by,
            resolved_at: Timestamp::now(),
        });
        true
    }
}

/// Returns `true` if the reduced observation set disagrees.
///
/// Pairwise comparison of the first entry against the rest; any mismatch
/// on the scored fields is a disagreement.
pub(crate) fn entries_disagree(entries: &[Observation]) -> bool {
    match entries.split_first() {
        Some((first, rest)) => rest.iter().any(|other| !first.agrees_with(other)),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sbk_types::BallOutcome;

    fn observation(scorer: &str, outcome: BallOutcome, runs: u32) -> Observation {
        Observation::new(
            ScorerId::new(scorer).unwrap(),
            scorer,
            BallCoordinate::new(1, 2).unwrap(),
            outcome,
            runs,
            0,
            None,
        )
    }

    #[test]
    fn agreeing_entries_do_not_disagree() {
        let entries = vec![
            observation("user1", BallOutcome::Dot, 0),
            observation("user2", BallOutcome::Dot, 0),
            observation("user3", BallOutcome::Dot, 0),
        ];
        assert!(!entries_disagree(&entries));
    }

    #[test]
    fn any_differing_entry_disagrees() {
        let entries = vec![
            observation("user1", BallOutcome::Four, 4),
            observation("user2", BallOutcome::Four, 4),
            observation("user3", BallOutcome::Single, 1),
        ];
        assert!(entries_disagree(&entries));
    }

    #[test]
    fn fewer_than_two_entries_cannot_disagree() {
        assert!(!entries_disagree(&[]));
        assert!(!entries_disagree(&[observation("user1", BallOutcome::Six, 6)]));
    }

    #[test]
    fn resolution_is_single_use() {
        let mut conflict = Conflict::new(
            BallCoordinate::new(1, 2).unwrap(),
            vec![
                observation("user1", BallOutcome::Four, 4),
                observation("user2", BallOutcome::Single, 1),
            ],
        );
        assert!(!conflict.is_resolved());

        let correct = observation("user1", BallOutcome::Four, 4);
        let supervisor = ScorerId::new("sup1").unwrap();
        assert!(conflict.resolve(correct.clone(), supervisor.clone()));
        assert!(conflict.is_resolved());

        // A second resolution attempt loses, and the first one stands.
        assert!(!conflict.resolve(observation("user2", BallOutcome::Single, 1), supervisor));
        let resolution = conflict.resolution().unwrap();
        assert_eq!(resolution.observation.outcome, BallOutcome::Four);
        assert_eq!(resolution.resolved_by.as_str(), "sup1");
    }

    #[test]
    fn serde_roundtrip() {
        let conflict = Conflict::new(
            BallCoordinate::new(1, 2).unwrap(),
            vec![
                observation("user1", BallOutcome::Four, 4),
                observation("user2", BallOutcome::Single, 1),
            ],
        );
        let json = serde_json::to_string(&conflict).unwrap();
        let parsed: Conflict = serde_json::from_str(&json).unwrap();
        assert_eq!(conflict, parsed);
    }
}
