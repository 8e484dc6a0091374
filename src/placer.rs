//! Random ship placement via rejection sampling.

use rand::Rng;

use crate::common::{Coord, GameError};
use crate::grid::Grid;

/// Fill the grid's ship set with uniformly random coordinates until the
/// configured quota is met, skipping cells that already hold a ship.
///
/// Terminates with probability 1: each round has at least one free cell
/// while the quota is unmet (`ship_capacity <= size²` is enforced by
/// `Grid::new`).
pub fn populate<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> Result<(), GameError> {
    while grid.ship_count() < grid.ship_capacity() {
        let coord = Coord::new(
            rng.random_range(0..grid.size()),
            rng.random_range(0..grid.size()),
        );
        match grid.place_ship(coord) {
            Ok(()) => log::debug!("placed ship at {}", coord),
            Err(GameError::DuplicateShip) => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(())
}
