use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use sbk_types::{PlayerId, PlayerRole};

/// Which side the batsman takes guard on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattingStyle {
    RightHanded,
    LeftHanded,
}

/// Broad bowling classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BowlingStyle {
    Fast,
    Medium,
    OffSpin,
    LegSpin,
}

/// A registered player.
///
/// Roles are a set, not a single value — a wicket-keeper can also captain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub jersey_number: u8,
    pub batting_style: Option<BattingStyle>,
    pub bowling_style: Option<BowlingStyle>,
    pub roles: BTreeSet<PlayerRole>,
}

impl Player {
    /// Create a player with no roles assigned yet.
    pub fn new(id: PlayerId, name: impl Into<String>, jersey_number: u8) -> Self {
        Self {
            id,
            name: name.into(),
            jersey_number,
            batting_style: None,
            bowling_style: None,
            roles: BTreeSet::new(),
        }
    }

    /// Add a role flag. Adding a role twice is a no-op.
    pub fn with_role(mut self, role: PlayerRole) -> Self {
        self.roles.insert(role);
        self
    }

    /// Set the batting style.
    pub fn with_batting_style(mut self, style: BattingStyle) -> Self {
        self.batting_style = Some(style);
        self
    }

    /// Set the bowling style.
    pub fn with_bowling_style(mut self, style: BowlingStyle) -> Self {
        self.bowling_style = Some(style);
        self
    }

    /// Pure set query: does this player carry the given role?
    pub fn has_role(&self, role: PlayerRole) -> bool {
        self.roles.contains(&role)
    }

    /// Returns `true` if the player captains the side.
    pub fn is_captain(&self) -> bool {
        self.has_role(PlayerRole::Captain)
    }

    /// Returns `true` if the player keeps wicket (either keeper flag).
    pub fn keeps_wicket(&self) -> bool {
        self.has_role(PlayerRole::WicketKeeper)
            || self.has_role(PlayerRole::WicketKeeperBatsman)
    }
}
