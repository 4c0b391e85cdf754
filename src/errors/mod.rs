use thiserror::Error;

use crate::database::PlayerId;

/// Input rejected before it reaches the store.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("player name must not be empty")]
    EmptyName,

    #[error("player name is {actual} characters long, the limit is {max}")]
    NameTooLong { max: usize, actual: usize },

    #[error("player {0} cannot play against themselves")]
    SelfMatch(PlayerId),

    #[error("no player with id {0}")]
    UnknownPlayer(PlayerId),
}
