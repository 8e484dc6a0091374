//! Match configuration: board size and ships per side.

use crate::bitgrid::BitGridError;
use crate::common::GameError;

pub const DEFAULT_BOARD_SIZE: usize = 5;
pub const DEFAULT_NUM_SHIPS: usize = 4;

/// Largest board side the u128-backed cell masks can hold (11*11 = 121 bits).
pub const MAX_BOARD_SIZE: usize = 11;

/// Configuration for one match. Both sides use identical values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchConfig {
    pub size: usize,
    pub ships: usize,
}

impl MatchConfig {
    /// Build a validated configuration.
    ///
    /// The size must be at most `MAX_BOARD_SIZE` and the ship quota must
    /// be in `1..=size*size` (which also rules out a zero-sized board).
    pub fn new(size: usize, ships: usize) -> Result<Self, GameError> {
        if size > MAX_BOARD_SIZE {
            return Err(GameError::Mask(BitGridError::SizeTooLarge {
                size,
                capacity: u128::BITS as usize,
            }));
        }
        if ships == 0 || ships > size * size {
            return Err(GameError::CapacityExceeded);
        }
        Ok(Self { size, ships })
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
            ships: DEFAULT_NUM_SHIPS,
        }
    }
}
