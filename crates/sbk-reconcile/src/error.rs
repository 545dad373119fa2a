use sbk_types::BallCoordinate;
use thiserror::Error;

/// Errors produced by reconciliation operations.
///
/// Losing a resolution race is not an error: a second `resolve_by_authority`
/// on the same coordinate returns `Ok(false)` so concurrent resolvers can
/// stand down without special-casing. Conflict detection itself never fails.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReconcileError {
    #[error("no conflict recorded for ball {0}")]
    ConflictNotFound(BallCoordinate),

    #[error("observation store lock poisoned: {0}")]
    LockPoisoned(String),
}
