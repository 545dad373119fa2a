use serde::{Deserialize, Serialize};

use sbk_types::{PlayerId, TeamId};

/// A registered team: a name and an ordered playing XI of player keys.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub playing_xi: Vec<PlayerId>,
}

impl Team {
    pub fn new(id: TeamId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            playing_xi: Vec::new(),
        }
    }

    /// Append a player key to the playing XI.
    pub fn with_player(mut self, player: PlayerId) -> Self {
        self.playing_xi.push(player);
        self
    }

    /// Returns `true` if the player is in the playing XI.
    pub fn fields(&self, player: &PlayerId) -> bool {
        self.playing_xi.contains(player)
    }
}
