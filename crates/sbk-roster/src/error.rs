use sbk_types::{PlayerId, TeamId};
use thiserror::Error;

/// Errors produced by roster operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RosterError {
    #[error("player not found: {0}")]
    PlayerNotFound(PlayerId),

    #[error("team not found: {0}")]
    TeamNotFound(TeamId),

    #[error("player already registered: {0}")]
    DuplicatePlayer(PlayerId),

    #[error("team already registered: {0}")]
    DuplicateTeam(TeamId),

    #[error("roster lock poisoned: {0}")]
    LockPoisoned(String),
}
