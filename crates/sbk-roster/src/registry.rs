//! In-memory roster registry.
//!
//! [`Roster`] owns every [`Player`] and [`Team`] and hands out clones by
//! key. All data lives in `HashMap`s behind `RwLock`s; concurrent readers
//! are cheap and the scoring core only ever reads.

use std::collections::HashMap;
use std::sync::RwLock;

use tracing::debug;

use sbk_types::{PlayerId, TeamId};

use crate::error::RosterError;
use crate::player::Player;
use crate::team::Team;

/// Owning registry for players and teams.
#[derive(Debug, Default)]
pub struct Roster {
    players: RwLock<HashMap<PlayerId, Player>>,
    teams: RwLock<HashMap<TeamId, Team>>,
}

impl Roster {
    /// Create an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a player. Fails if the key is already taken.
    pub fn add_player(&self, player: Player) -> Result<(), RosterError> {
        let mut players = self
            .players
            .write()
            .map_err(|e| RosterError::LockPoisoned(e.to_string()))?;
        if players.contains_key(&player.id) {
            return Err(RosterError::DuplicatePlayer(player.id.clone()));
        }
        debug!(player = %player.id, name = %player.name, "player registered");
        players.insert(player.id.clone(), player);
        Ok(())
    }

    /// Register a team. Fails if the key is already taken.
    pub fn add_team(&self, team: Team) -> Result<(), RosterError> {
        let mut teams = self
            .teams
            .write()
            .map_err(|e| RosterError::LockPoisoned(e.to_string()))?;
        if teams.contains_key(&team.id) {
            return Err(RosterError::DuplicateTeam(team.id.clone()));
        }
        debug!(team = %team.id, name = %team.name, "team registered");
        teams.insert(team.id.clone(), team);
        Ok(())
    }

    /// Resolve a player by key.
    pub fn player(&self, id: &PlayerId) -> Result<Player, RosterError> {
        let players = self
            .players
            .read()
            .map_err(|e| RosterError::LockPoisoned(e.to_string()))?;
        players
            .get(id)
            .cloned()
            .ok_or_else(|| RosterError::PlayerNotFound(id.clone()))
    }

    /// Resolve a team by key.
    pub fn team(&self, id: &TeamId) -> Result<Team, RosterError> {
        let teams = self
            .teams
            .read()
            .map_err(|e| RosterError::LockPoisoned(e.to_string()))?;
        teams
            .get(id)
            .cloned()
            .ok_or_else(|| RosterError::TeamNotFound(id.clone()))
    }

    /// Display name for a player key, falling back to the raw key when the
    /// player is unregistered (presentation must not fail mid-scorecard).
    pub fn display_name(&self, id: &PlayerId) -> String {
        self.player(id)
            .map(|p| p.name)
            .unwrap_or_else(|_| id.as_str().to_string())
    }

    /// Number of registered players.
    pub fn player_count(&self) -> usize {
        self.players.read().map(|p| p.len()).unwrap_or(0)
    }
}
