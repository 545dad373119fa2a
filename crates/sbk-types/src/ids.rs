use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Stable key for a scorer (human or automated feed) submitting
/// observations.
///
/// Scorers are identified, never authenticated, at this layer —
/// authentication belongs to the transport that delivers submissions.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ScorerId(String);

impl ScorerId {
    /// Create a key, rejecting empty or whitespace-only input.
    pub fn new(key: impl Into<String>) -> Result<Self, TypeError> {
        validated(key.into()).map(Self)
    }

    /// The raw string key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ScorerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ScorerId({})", self.0)
    }
}

impl fmt::Display for ScorerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stable key for a player, resolved through the roster registry.
///
/// The core never holds a player by reference, only by key. Write access to
/// roster entities stays with the registry that owns them.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(String);

impl PlayerId {
    /// Create a key, rejecting empty or whitespace-only input.
    pub fn new(key: impl Into<String>) -> Result<Self, TypeError> {
        validated(key.into()).map(Self)
    }

    /// The raw string key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PlayerId({})", self.0)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stable key for a team, resolved through the roster registry.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TeamId(String);

impl TeamId {
    /// Create a key, rejecting empty or whitespace-only input.
    pub fn new(key: impl Into<String>) -> Result<Self, TypeError> {
        validated(key.into()).map(Self)
    }

    /// The raw string key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TeamId({})", self.0)
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn validated(key: String) -> Result<String, TypeError> {
    if key.trim().is_empty() {
        return Err(TypeError::EmptyIdentifier);
    }
    Ok(key)
}

/// Unique identifier for a match (UUID v7 for time-ordering).
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MatchId(uuid::Uuid);

impl MatchId {
    /// Generate a new time-ordered match ID (UUID v7).
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7())
    }

    /// Create from an existing UUID.
    pub fn from_uuid(uuid: uuid::Uuid) -> Self {
        Self(uuid)
    }

    /// The underlying UUID.
    pub fn as_uuid(&self) -> &uuid::Uuid {
        &self.0
    }

    /// Short representation (first 8 characters of UUID).
    pub fn short_id(&self) -> String {
        self.0.to_string()[..8].to_string()
    }
}

impl Default for MatchId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MatchId({})", self.short_id())
    }
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
