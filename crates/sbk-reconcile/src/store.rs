//! Observation intake and conflict detection.
//!
//! [`ObservationStore`] is the concurrent half of the scorebook: many
//! scorers call [`submit`](ObservationStore::submit) at once. State is
//! sharded by coordinate hash so a submission and its conflict evaluation
//! run under one shard write lock — linearizable per coordinate — while
//! submissions for coordinates on other shards proceed in parallel. There
//! is no global lock.

use std::collections::{BTreeMap, HashMap};
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use sbk_types::{BallCoordinate, ScorerId};

use crate::conflict::{entries_disagree, Conflict};
use crate::error::ReconcileError;
use crate::observation::Observation;

const SHARD_COUNT: usize = 16;

/// What a submission did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubmitReceipt {
    /// The sequence stamped on the stored observation.
    pub seq: u64,
    /// `true` if this submission created the coordinate's conflict.
    pub conflict_created: bool,
    /// `true` if the coordinate has an unresolved conflict after this
    /// submission (whether or not this submission created it).
    pub conflict_open: bool,
}

/// Per-scorer intake statistics for the scorebook summary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScorerSummary {
    pub scorer: ScorerId,
    pub name: String,
    pub entries: u64,
}

/// Conflict counters for the scorebook summary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictStats {
    pub total: u64,
    pub resolved: u64,
}

impl ConflictStats {
    pub fn pending(&self) -> u64 {
        self.total - self.resolved
    }
}

#[derive(Default)]
pub(crate) struct Shard {
    pub(crate) entries: HashMap<BallCoordinate, Vec<Observation>>,
    pub(crate) conflicts: HashMap<BallCoordinate, Conflict>,
}

/// Append-only intake of scorer observations with conflict detection.
///
/// Submissions are never rejected and never deduplicated: a scorer
/// resubmitting a coordinate appends a correction, and only their most
/// recent entry per coordinate participates in agreement comparison.
pub struct ObservationStore {
    shards: Vec<RwLock<Shard>>,
    next_seq: AtomicU64,
    /// Coordinates with conflicts, in discovery order.
    discovered: RwLock<Vec<BallCoordinate>>,
    scorers: RwLock<BTreeMap<ScorerId, ScorerSummary>>,
}

impl ObservationStore {
    pub fn new() -> Self {
        Self {
            shards: (0..SHARD_COUNT).map(|_| RwLock::new(Shard::default())).collect(),
            next_seq: AtomicU64::new(0),
            discovered: RwLock::new(Vec::new()),
            scorers: RwLock::new(BTreeMap::new()),
        }
    }

    /// Record an observation and evaluate the coordinate for conflict.
    ///
    /// Detection runs in the same critical section as the append: if the
    /// reduced entry set (most recent per scorer) disagrees and no conflict
    /// exists yet for the coordinate, one is created seeded with that set.
    /// An existing conflict is never re-created or re-opened by later
    /// submissions.
    pub fn submit(&self, mut observation: Observation) -> Result<SubmitReceipt, ReconcileError> {
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed) + 1;
        observation.seq = seq;

        let coordinate = observation.coordinate;
        let scorer = observation.scorer.clone();
        let scorer_name = observation.scorer_name.clone();

        let (conflict_created, conflict_open) = {
            let mut shard = self
                .shard_for(&coordinate)
                .write()
                .map_err(|e| ReconcileError::LockPoisoned(e.to_string()))?;

            shard
                .entries
                .entry(coordinate)
                .or_default()
                .push(observation);

            let reduced = reduce_latest_per_scorer(&shard.entries[&coordinate]);
            let mut created = false;
            if entries_disagree(&reduced) && !shard.conflicts.contains_key(&coordinate) {
                info!(
                    %coordinate,
                    entries = reduced.len(),
                    "conflict detected"
                );
                shard.conflicts.insert(coordinate, Conflict::new(coordinate, reduced));
                self.discovered
                    .write()
                    .map_err(|e| ReconcileError::LockPoisoned(e.to_string()))?
                    .push(coordinate);
                created = true;
            }
            let open = shard
                .conflicts
                .get(&coordinate)
                .is_some_and(|c| !c.is_resolved());
            (created, open)
        };

        let mut scorers = self
            .scorers
            .write()
            .map_err(|e| ReconcileError::LockPoisoned(e.to_string()))?;
        let summary = scorers.entry(scorer.clone()).or_insert_with(|| ScorerSummary {
            scorer,
            name: scorer_name.clone(),
            entries: 0,
        });
        summary.name = scorer_name;
        summary.entries += 1;
        drop(scorers);

        debug!(seq, %coordinate, conflict_created, "observation submitted");
        Ok(SubmitReceipt {
            seq,
            conflict_created,
            conflict_open,
        })
    }

    /// All observations for a coordinate across every scorer, in
    /// submission order.
    pub fn entries_for(&self, coordinate: &BallCoordinate) -> Result<Vec<Observation>, ReconcileError> {
        let shard = self
            .shard_for(coordinate)
            .read()
            .map_err(|e| ReconcileError::LockPoisoned(e.to_string()))?;
        Ok(shard.entries.get(coordinate).cloned().unwrap_or_default())
    }

    /// The entry set agreement is judged on: each scorer's most recent
    /// observation for the coordinate, ordered by submission.
    pub fn reduced_entries_for(
        &self,
        coordinate: &BallCoordinate,
    ) -> Result<Vec<Observation>, ReconcileError> {
        Ok(reduce_latest_per_scorer(&self.entries_for(coordinate)?))
    }

    /// The conflict for a coordinate, if one was ever detected.
    pub fn conflict_at(&self, coordinate: &BallCoordinate) -> Result<Option<Conflict>, ReconcileError> {
        let shard = self
            .shard_for(coordinate)
            .read()
            .map_err(|e| ReconcileError::LockPoisoned(e.to_string()))?;
        Ok(shard.conflicts.get(coordinate).cloned())
    }

    /// Every conflict, in coordinate discovery order.
    pub fn conflicts(&self) -> Result<Vec<Conflict>, ReconcileError> {
        let order = self
            .discovered
            .read()
            .map_err(|e| ReconcileError::LockPoisoned(e.to_string()))?
            .clone();
        let mut conflicts = Vec::with_capacity(order.len());
        for coordinate in order {
            if let Some(conflict) = self.conflict_at(&coordinate)? {
                conflicts.push(conflict);
            }
        }
        Ok(conflicts)
    }

    /// Unresolved conflicts, in coordinate discovery order.
    pub fn unresolved_conflicts(&self) -> Result<Vec<Conflict>, ReconcileError> {
        Ok(self
            .conflicts()?
            .into_iter()
            .filter(|c| !c.is_resolved())
            .collect())
    }

    /// Total and resolved conflict counts.
    pub fn conflict_stats(&self) -> Result<ConflictStats, ReconcileError> {
        let conflicts = self.conflicts()?;
        Ok(ConflictStats {
            total: conflicts.len() as u64,
            resolved: conflicts.iter().filter(|c| c.is_resolved()).count() as u64,
        })
    }

    /// Per-scorer intake statistics, ordered by scorer key.
    pub fn scorer_summaries(&self) -> Result<Vec<ScorerSummary>, ReconcileError> {
        let scorers = self
            .scorers
            .read()
            .map_err(|e| ReconcileError::LockPoisoned(e.to_string()))?;
        Ok(scorers.values().cloned().collect())
    }

    pub(crate) fn shard_for(&self, coordinate: &BallCoordinate) -> &RwLock<Shard> {
        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        coordinate.hash(&mut hasher);
        &self.shards[hasher.finish() as usize % SHARD_COUNT]
    }
}

impl Default for ObservationStore {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn reduce_latest_per_scorer(entries: &[Observation]) -> Vec<Observation> {
    let mut latest: HashMap<&ScorerId, &Observation> = HashMap::new();
    for observation in entries {
        latest.insert(&observation.scorer, observation);
    }
    let mut reduced: Vec<Observation> = latest.into_values().cloned().collect();
    reduced.sort_by_key(|o| o.seq);
    reduced
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

    #[test]
    fn agreeing_submissions_create_no_conflict() {
        let store = ObservationStore::new();
        let coord = coordinate(1, 1);
        for scorer in ["user1", "user2", "user3"] {
            let receipt = store
                .submit(observation(scorer, coord, BallOutcome::Dot, 0))
                .unwrap();
            assert!(!receipt.conflict_created);
            assert!(!receipt.conflict_open);
        }
        assert!(store.conflict_at(&coord).unwrap().is_none());
        assert_eq!(store.entries_for(&coord).unwrap().len(), 3);
    }

    #[test]
    fn disagreement_creates_exactly_one_conflict() {
        let store = ObservationStore::new();
        let coord = coordinate(1, 2);
        store
            .submit(observation("user1", coord, BallOutcome::Four, 4))
            .unwrap();
        let receipt = store
            .submit(observation("user2", coord, BallOutcome::Single, 1))
            .unwrap();
        assert!(receipt.conflict_created);
        assert!(receipt.conflict_open);

        // A third disagreeing submission lands in the stream but does not
        // create a second conflict.
        let receipt = store
            .submit(observation("user3", coord, BallOutcome::Four, 4))
            .unwrap();
        assert!(!receipt.conflict_created);
        assert!(receipt.conflict_open);

        let conflict = store.conflict_at(&coord).unwrap().unwrap();
        assert_eq!(conflict.entries().len(), 2);
        assert_eq!(store.conflicts().unwrap().len(), 1);
    }

    #[test]
    fn submissions_are_stamped_in_order() {
        let store = ObservationStore::new();
        let coord = coordinate(1, 1);
        let first = store
            .submit(observation("user1", coord, BallOutcome::Dot, 0))
            .unwrap();
        let second = store
            .submit(observation("user2", coord, BallOutcome::Dot, 0))
            .unwrap();
        assert!(second.seq > first.seq);

        let entries = store.entries_for(&coord).unwrap();
        assert_eq!(entries[0].seq, first.seq);
        assert_eq!(entries[1].seq, second.seq);
    }

    #[test]
    fn self_correction_does_not_conflict() {
        let store = ObservationStore::new();
        let coord = coordinate(1, 3);
        store
            .submit(observation("user1", coord, BallOutcome::Single, 1))
            .unwrap();
        // Same scorer corrects themselves; only the correction counts.
        let receipt = store
            .submit(observation("user1", coord, BallOutcome::Double, 2))
            .unwrap();
        assert!(!receipt.conflict_created);

        let reduced = store.reduced_entries_for(&coord).unwrap();
        assert_eq!(reduced.len(), 1);
        assert_eq!(reduced[0].outcome, BallOutcome::Double);
        // The raw intake keeps both entries.
        assert_eq!(store.entries_for(&coord).unwrap().len(), 2);
    }

    #[test]
    fn correction_to_agreement_avoids_conflict() {
        let store = ObservationStore::new();
        let coord = coordinate(1, 4);
        store
            .submit(observation("user1", coord, BallOutcome::Four, 4))
            .unwrap();
        store
            .submit(observation("user2", coord, BallOutcome::Single, 1))
            .unwrap();
        // The conflict already exists; user2's correction does not remove
        // it, but the reduced set now agrees.
        let receipt = store
            .submit(observation("user2", coord, BallOutcome::Four, 4))
            .unwrap();
        assert!(!receipt.conflict_created);
        let reduced = store.reduced_entries_for(&coord).unwrap();
        assert_eq!(reduced.len(), 2);
        assert!(reduced[0].agrees_with(&reduced[1]));
        assert_eq!(store.conflicts().unwrap().len(), 1);
    }

    #[test]
    fn conflicts_list_in_discovery_order() {
        let store = ObservationStore::new();
        let later = coordinate(2, 5);
        let earlier = coordinate(1, 2);

        store
            .submit(observation("user1", earlier, BallOutcome::Four, 4))
            .unwrap();
        store
            .submit(observation("user2", earlier, BallOutcome::Single, 1))
            .unwrap();
        store
            .submit(observation("user1", later, BallOutcome::Dot, 0))
            .unwrap();
        store
            .submit(observation("user2", later, BallOutcome::Six, 6))
            .unwrap();

        let conflicts = store.conflicts().unwrap();
        assert_eq!(conflicts.len(), 2);
        assert_eq!(conflicts[0].coordinate, earlier);
        assert_eq!(conflicts[1].coordinate, later);
    }

    #[test]
    fn scorer_summaries_count_entries() {
        let store = ObservationStore::new();
        store
            .submit(observation("user1", coordinate(1, 1), BallOutcome::Dot, 0))
            .unwrap();
        store
            .submit(observation("user1", coordinate(1, 2), BallOutcome::Dot, 0))
            .unwrap();
        store
            .submit(observation("user2", coordinate(1, 1), BallOutcome::Dot, 0))
            .unwrap();

        let summaries = store.scorer_summaries().unwrap();
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].scorer.as_str(), "user1");
        assert_eq!(summaries[0].entries, 2);
        assert_eq!(summaries[1].entries, 1);
    }

    #[test]
    fn concurrent_submissions_for_one_coordinate_yield_one_conflict() {
        let store = Arc::new(ObservationStore::new());
        let coord = coordinate(1, 2);

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    let (outcome, runs) = if i % 2 == 0 {
                        (BallOutcome::Four, 4)
                    } else {
                        (BallOutcome::Single, 1)
                    };
                    store
                        .submit(observation(&format!("user{i}"), coord, outcome, runs))
                        .unwrap()
                })
            })
            .collect();

        let created: usize = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|r| r.conflict_created)
            .count();

        assert_eq!(created, 1);
        assert_eq!(store.conflicts().unwrap().len(), 1);
        assert_eq!(store.entries_for(&coord).unwrap().len(), 8);
    }

    #[test]
    fn submissions_for_different_coordinates_are_independent() {
        let store = Arc::new(ObservationStore::new());

        let handles: Vec<_> = (0..6u8)
            .map(|i| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    let coord = coordinate(u32::from(i) + 1, (i % 6) + 1);
                    for scorer in ["user1", "user2"] {
                        store
                            .submit(observation(scorer, coord, BallOutcome::Dot, 0))
                            .unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert!(store.conflicts().unwrap().is_empty());
        for i in 0..6u8 {
            let coord = coordinate(u32::from(i) + 1, (i % 6) + 1);
            assert_eq!(store.entries_for(&coord).unwrap().len(), 2);
        }
    }
}
