//! Game grid state: ship locations, hit/miss masks and guess history.

use crate::bitgrid::BitGrid;
use crate::common::{CellState, Coord, GameError, GuessOutcome};

type Mask = BitGrid<u128>;

/// One side's board: `size × size` cells, a set of single-cell ship
/// locations and the ordered history of guesses resolved against it.
///
/// Cell state is derived from three masks that stay disjoint by
/// construction: a guessed cell is in exactly one of `hits`/`misses`, and
/// a ship cell counts as hit only once it has been guessed.
pub struct Grid {
    size: usize,
    ship_capacity: usize,
    ships: Mask,
    hits: Mask,
    misses: Mask,
    guess_history: Vec<Coord>,
}

impl Grid {
    /// Create an empty grid with no ships placed.
    pub fn new(size: usize, ship_capacity: usize) -> Result<Self, GameError> {
        if ship_capacity > size * size {
            return Err(GameError::CapacityExceeded);
        }
        Ok(Grid {
            size,
            ship_capacity,
            ships: Mask::new(size)?,
            hits: Mask::new(size)?,
            misses: Mask::new(size)?,
            guess_history: Vec::new(),
        })
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of ships this board is configured to hold; also the number
    /// of hits required to defeat its owner.
    pub fn ship_capacity(&self) -> usize {
        self.ship_capacity
    }

    /// Number of ships currently placed.
    pub fn ship_count(&self) -> usize {
        self.ships.count_ones()
    }

    /// Guesses resolved against this board, in order.
    pub fn guess_history(&self) -> &[Coord] {
        &self.guess_history
    }

    /// Iterator over the placed ship coordinates.
    pub fn ship_coords(&self) -> impl Iterator<Item = Coord> + '_ {
        self.ships.iter_set_bits().map(|(r, c)| Coord::new(r, c))
    }

    /// Place a single-cell ship.
    ///
    /// Fails with `CapacityExceeded` when the quota is already met,
    /// `OutOfBounds` outside the board and `DuplicateShip` when the cell
    /// already holds a ship. Must only be called before play begins.
    pub fn place_ship(&mut self, coord: Coord) -> Result<(), GameError> {
        if self.ship_count() == self.ship_capacity {
            return Err(GameError::CapacityExceeded);
        }
        self.check_bounds(coord)?;
        if self.ships.get(coord.row, coord.col)? {
            return Err(GameError::DuplicateShip);
        }
        self.ships.set(coord.row, coord.col)?;
        Ok(())
    }

    /// Resolve a guess, marking the cell and recording the history entry.
    ///
    /// This is the single source of truth for hit/miss determination.
    /// Callers validate through the guess policy first; duplicates and
    /// out-of-range coordinates are still rejected here so a stale caller
    /// can never corrupt the cell state.
    pub fn resolve_guess(&mut self, coord: Coord) -> Result<GuessOutcome, GameError> {
        self.check_bounds(coord)?;
        if self.guessed(coord)? {
            return Err(GameError::AlreadyGuessed);
        }
        let outcome = if self.ships.get(coord.row, coord.col)? {
            self.hits.set(coord.row, coord.col)?;
            GuessOutcome::Hit
        } else {
            self.misses.set(coord.row, coord.col)?;
            GuessOutcome::Miss
        };
        self.guess_history.push(coord);
        Ok(outcome)
    }

    /// True while at least one cell has never been guessed.
    pub fn has_remaining_cells(&self) -> bool {
        self.guess_history.len() < self.size * self.size
    }

    /// Whether the cell has already been guessed.
    pub fn guessed(&self, coord: Coord) -> Result<bool, GameError> {
        Ok(self.hits.get(coord.row, coord.col)? || self.misses.get(coord.row, coord.col)?)
    }

    /// Full-knowledge state of a cell. Rendering decides whether `Ship`
    /// is shown (owner view) or hidden (opponent view).
    pub fn cell(&self, coord: Coord) -> Result<CellState, GameError> {
        self.check_bounds(coord)?;
        let state = if self.hits.get(coord.row, coord.col)? {
            CellState::Hit
        } else if self.misses.get(coord.row, coord.col)? {
            CellState::Miss
        } else if self.ships.get(coord.row, coord.col)? {
            CellState::Ship
        } else {
            CellState::Empty
        };
        Ok(state)
    }

    fn check_bounds(&self, coord: Coord) -> Result<(), GameError> {
        if coord.row >= self.size || coord.col >= self.size {
            Err(GameError::OutOfBounds)
        } else {
            Ok(())
        }
    }
}

impl core::fmt::Debug for Grid {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(
            f,
            "Grid {{ size: {}, ships: {}/{}, guesses: {} }}",
            self.size,
            self.ship_count(),
            self.ship_capacity,
            self.guess_history.len()
        )?;
        writeln!(f, "ships: {:?}", self.ships)?;
        writeln!(f, "hits: {:?}", self.hits)?;
        write!(f, "misses: {:?}", self.misses)
    }
}
