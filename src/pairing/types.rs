use serde::Serialize;

use crate::database::{PlayerId, Standing};

/// Two opponents for the next round, higher-ranked player first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pairing {
    pub id1: PlayerId,
    pub name1: String,
    pub id2: PlayerId,
    pub name2: String,
}

impl Pairing {
    pub fn new(first: &Standing, second: &Standing) -> Self {
        Self {
            id1: first.id,
            name1: first.name.clone(),
            id2: second.id,
            name2: second.name.clone(),
        }
    }

    pub fn contains(&self, id: PlayerId) -> bool {
        self.id1 == id || self.id2 == id
    }
}
