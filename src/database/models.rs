use chrono::NaiveDateTime;
use serde::Serialize;

pub type PlayerId = i32;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub wins: i32,
    pub matches: i32,
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Match {
    pub id: i32,
    pub winner: PlayerId,
    pub loser: PlayerId,
    pub created_at: Option<NaiveDateTime>,
}

/// One row of the ranked standings view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Standing {
    pub id: PlayerId,
    pub name: String,
    pub wins: i32,
    pub matches: i32,
}

impl Standing {
    pub fn losses(&self) -> i32 {
        self.matches - self.wins
    }
}

impl From<Player> for Standing {
    fn from(player: Player) -> Self {
        Self {
            id: player.id,
            name: player.name,
            wins: player.wins,
            matches: player.matches,
        }
    }
}
