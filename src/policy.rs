//! Guess validation, applied identically to human and computer guesses.

use crate::common::{Coord, GameError};
use crate::grid::Grid;

/// A guess is valid when it is inside the board and the cell has never
/// been guessed. Stateless predicate over the target grid.
pub fn is_valid(coord: Coord, grid: &Grid) -> bool {
    coord.row < grid.size()
        && coord.col < grid.size()
        && !grid.guessed(coord).unwrap_or(true)
}

/// Validate a raw `(row, col)` pair as typed by the user.
///
/// Negative or too-large values are numeric, so they are rejected as
/// `OutOfBounds` rather than `MalformedInput`; a repeated cell is
/// `AlreadyGuessed`. The distinction drives the re-prompt message.
pub fn check_guess(row: i64, col: i64, grid: &Grid) -> Result<Coord, GameError> {
    let size = grid.size() as i64;
    if row < 0 || row >= size || col < 0 || col >= size {
        return Err(GameError::OutOfBounds);
    }
    let coord = Coord::new(row as usize, col as usize);
    if grid.guessed(coord)? {
        return Err(GameError::AlreadyGuessed);
    }
    Ok(coord)
}
