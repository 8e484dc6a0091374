//! Computer guessing: uniform random rejection sampling.

use rand::Rng;

use crate::common::{Coord, GameError};
use crate::grid::Grid;
use crate::policy;

/// Choose the computer's next guess on the opponent board.
///
/// Signals `Exhausted` when no unguessed cell remains instead of looping
/// forever. Otherwise samples uniformly random coordinates and retries
/// until the guess policy accepts one; the policy excludes every guessed
/// cell, so the agent never repeats a coordinate.
pub fn next_guess<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> Result<Coord, GameError> {
    if !grid.has_remaining_cells() {
        return Err(GameError::Exhausted);
    }
    loop {
        let coord = Coord::new(
            rng.random_range(0..grid.size()),
            rng.random_range(0..grid.size()),
        );
        if policy::is_valid(coord, grid) {
            return Ok(coord);
        }
    }
}
