//! The birth / survival rule of the game of life (B3/S23).

use crate::{Error, Result};

/// largest number of neighbors a cell can have in a moore neighborhood.
pub const MAX_NEIGHBORS: usize = 8;

/// Computes the next state of a cell from its current state and the number
/// of its live neighbors.
///
/// Counts above [`MAX_NEIGHBORS`] are rejected with [`Error::InvalidArgument`].
pub fn next_state(alive: bool, live_neighbors: usize) -> Result<bool> {
    if live_neighbors > MAX_NEIGHBORS {
        return Err(Error::InvalidArgument { live_neighbors });
    }
    Ok(apply(alive, live_neighbors))
}

/// unchecked version of [`next_state`], for counts known to be in range.
pub(crate) fn apply(alive: bool, live_neighbors: usize) -> bool {
    match (alive, live_neighbors) {
        (true, 2) | (true, 3) => true, // survives
        (false, 3) => true,            // birth
        _ => false,                    // dies or stays dead
    }
}
