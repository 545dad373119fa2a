//! Conflict resolution: authoritative override and advisory majority vote.
//!
//! Neither operation touches the canonical delivery ledger. Resolution
//! settles the *observation* record for a disputed coordinate; the
//! canonical delivery was recorded by the live-scoring path ahead of it.

use std::collections::HashMap;

use tracing::{debug, info};

use sbk_types::{BallCoordinate, ScorerId};

use crate::error::ReconcileError;
use crate::observation::{Observation, VoteSignature};
use crate::store::ObservationStore;

impl ObservationStore {
    /// Settle a conflict with a caller-supplied correct observation.
    ///
    /// Returns `Ok(true)` for the resolver that wins, `Ok(false)` for any
    /// later attempt (resolution is single-use per coordinate), and
    /// [`ReconcileError::ConflictNotFound`] when the coordinate has no
    /// conflict. Atomic with respect to concurrent resolvers: the shard
    /// write lock serializes them and exactly one observes `true`.
    pub fn resolve_by_authority(
        &self,
        coordinate: &BallCoordinate,
        correct: Observation,
        resolver: ScorerId,
    ) -> Result<bool, ReconcileError> {
        let mut shard = self
            .shard_for(coordinate)
            .write()
            .map_err(|e| ReconcileError::LockPoisoned(e.to_string()))?;

        let conflict = shard
            .conflicts
            .get_mut(coordinate)
            .ok_or(ReconcileError::ConflictNotFound(*coordinate))?;

        if conflict.resolve(correct, resolver.clone()) {
            info!(%coordinate, resolver = %resolver, "conflict resolved");
            Ok(true)
        } else {
            debug!(%coordinate, resolver = %resolver, "conflict already resolved");
            Ok(false)
        }
    }

    /// Advisory majority vote over a conflict's entries.
    ///
    /// Groups the entries by (runs, extras, outcome) signature and returns
    /// the first-submitted observation of the most common signature. Ties
    /// break to the signature that appeared first, so the result is
    /// deterministic. The conflict itself is not touched — the caller
    /// decides whether to feed the winner into
    /// [`resolve_by_authority`](Self::resolve_by_authority).
    pub fn majority_vote(
        &self,
        coordinate: &BallCoordinate,
    ) -> Result<Observation, ReconcileError> {
        let shard = self
            .shard_for(coordinate)
            .read()
            .map_err(|e| ReconcileError::LockPoisoned(e.to_string()))?;

        let conflict = shard
            .conflicts
            .get(coordinate)
            .ok_or(ReconcileError::ConflictNotFound(*coordinate))?;

        majority(conflict.entries())
            .cloned()
            .ok_or(ReconcileError::ConflictNotFound(*coordinate))
    }
}

/// The first-submitted observation of the most common vote signature.
///
/// Counting and tie-breaking both follow first-occurrence order, so the
/// winner is independent of map iteration order.
fn majority(entries: &[Observation]) -> Option<&Observation> {
    let mut order: Vec<VoteSignature> = Vec::new();
    let mut counts: HashMap<VoteSignature, usize> = HashMap::new();
    for entry in entries {
        let signature = entry.vote_signature();
        if !counts.contains_key(&signature) {
            order.push(signature);
        }
        *counts.entry(signature).or_insert(0) += 1;
    }

    let mut winner: Option<(VoteSignature, usize)> = None;
    for signature in order {
        let count = counts[&signature];
        if winner.map_or(true, |(_, best)| count > best) {
            winner = Some((signature, count));
        }
    }

    winner.and_then(|(signature, _)| {
        entries.iter().find(|e| e.vote_signature() == signature)
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use super::*;
    use sbk_types::BallOutcome;

    fn coordinate(over: u32, ball: u8) -> BallCoordinate {
        BallCoordinate::new(over, ball).unwrap()
    }

    fn observation(
        scorer: &str,
        coord: BallCoordinate,
        outcome: BallOutcome,
        runs: u32,
    ) -> Observation {
        Observation::new(
            ScorerId::new(scorer).unwrap(),
            scorer,
            coord,
            outcome,
            runs,
            0,
            None,
        )
    }

    fn store_with_conflict(coord: BallCoordinate) -> ObservationStore {
        let store = ObservationStore::new();
        store
            .submit(observation("user1", coord, BallOutcome::Four, 4))
            .unwrap();
        store
            .submit(observation("user2", coord, BallOutcome::Single, 1))
            .unwrap();
        store
            .submit(observation("user3", coord, BallOutcome::Four, 4))
            .unwrap();
        store
    }

    #[test]
    fn majority_wins_the_vote() {
        let coord = coordinate(1, 2);
        let store = store_with_conflict(coord);
        let winner = store.majority_vote(&coord).unwrap();
        assert_eq!(winner.outcome, BallOutcome::Four);
        assert_eq!(winner.runs, 4);
        // The winner is the first submission of the winning signature.
        assert_eq!(winner.scorer.as_str(), "user1");
    }

    #[test]
    fn tie_breaks_to_first_submitted_signature() {
        let coord = coordinate(1, 4);
        let store = ObservationStore::new();
        store
            .submit(observation("user1", coord, BallOutcome::Double, 2))
            .unwrap();
        store
            .submit(observation("user2", coord, BallOutcome::Triple, 3))
            .unwrap();

        let winner = store.majority_vote(&coord).unwrap();
        assert_eq!(winner.outcome, BallOutcome::Double);
        assert_eq!(winner.scorer.as_str(), "user1");
    }

    #[test]
    fn vote_is_advisory_and_repeatable() {
        let coord = coordinate(1, 2);
        let store = store_with_conflict(coord);
        let first = store.majority_vote(&coord).unwrap();
        let second = store.majority_vote(&coord).unwrap();
        assert_eq!(first, second);
        assert!(!store.conflict_at(&coord).unwrap().unwrap().is_resolved());
    }

    #[test]
    fn vote_without_conflict_is_not_found() {
        let store = ObservationStore::new();
        let coord = coordinate(9, 1);
        assert_eq!(
            store.majority_vote(&coord).unwrap_err(),
            ReconcileError::ConflictNotFound(coord)
        );
    }

    #[test]
    fn authority_resolution_is_single_use() {
        let coord = coordinate(1, 2);
        let store = store_with_conflict(coord);
        let correct = store.majority_vote(&coord).unwrap();
        let supervisor = ScorerId::new("sup1").unwrap();

        assert!(store
            .resolve_by_authority(&coord, correct.clone(), supervisor.clone())
            .unwrap());
        assert!(!store
            .resolve_by_authority(&coord, correct, supervisor)
            .unwrap());

        let conflict = store.conflict_at(&coord).unwrap().unwrap();
        assert!(conflict.is_resolved());
        assert_eq!(conflict.resolution().unwrap().resolved_by.as_str(), "sup1");

        let stats = store.conflict_stats().unwrap();
        assert_eq!(stats.total, 1);
        assert_eq!(stats.resolved, 1);
        assert_eq!(stats.pending(), 0);
    }

    #[test]
    fn resolving_a_missing_conflict_is_not_found() {
        let store = ObservationStore::new();
        let coord = coordinate(9, 1);
        let error = store
            .resolve_by_authority(
                &coord,
                observation("sup1", coord, BallOutcome::Dot, 0),
                ScorerId::new("sup1").unwrap(),
            )
            .unwrap_err();
        assert_eq!(error, ReconcileError::ConflictNotFound(coord));
    }

    #[test]
    fn concurrent_resolvers_race_to_exactly_one_winner() {
        let coord = coordinate(1, 2);
        let store = Arc::new(store_with_conflict(coord));
        let correct = store.majority_vote(&coord).unwrap();

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = Arc::clone(&store);
                let correct = correct.clone();
                thread::spawn(move || {
                    store
                        .resolve_by_authority(
                            &coord,
                            correct,
                            ScorerId::new(format!("sup{i}")).unwrap(),
                        )
                        .unwrap()
                })
            })
            .collect();

        let wins = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|won| *won)
            .count();
        assert_eq!(wins, 1);
    }

    #[test]
    fn resolution_does_not_reopen_for_late_disagreement() {
        let coord = coordinate(1, 2);
        let store = store_with_conflict(coord);
        let correct = store.majority_vote(&coord).unwrap();
        store
            .resolve_by_authority(&coord, correct, ScorerId::new("sup1").unwrap())
            .unwrap();

        // A fresh disagreeing observation after resolution lands in the
        // intake stream but the settled conflict stays settled.
        store
            .submit(observation("user4", coord, BallOutcome::Six, 6))
            .unwrap();
        let conflict = store.conflict_at(&coord).unwrap().unwrap();
        assert!(conflict.is_resolved());
        assert_eq!(store.conflicts().unwrap().len(), 1);
    }
}
