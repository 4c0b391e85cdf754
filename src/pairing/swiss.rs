//! Adjacent-rank pairing for a simple Swiss round.
//!
//! The standings must already be ranked by wins. Neighbours are paired off in
//! order (first with second, third with fourth, ...). With an odd number of
//! players the last-ranked one gets no opponent. Rematches are not detected.

use super::types::Pairing;
use crate::database::Standing;

pub fn generate_pairings(standings: &[Standing]) -> Vec<Pairing> {
    if standings.len() % 2 == 1 {
        if let Some(last) = standings.last() {
            log::debug!("Odd player count, {} (id {}) left unpaired", last.name, last.id);
        }
    }

    standings
        .chunks_exact(2)
        .map(|pair| Pairing::new(&pair[0], &pair[1]))
        .collect()
}
