//! Common types: coordinates, cell states, guess outcomes and errors.

use core::fmt;

use crate::bitgrid::BitGridError;

/// A board position as a zero-based `(row, col)` pair.
///
/// Ships and guesses share the same coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// State of a single grid cell.
///
/// `Ship` marks an unguessed cell occupied by the owner's own ship and is
/// only ever shown in the owner's view; opponents see it as `Empty`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    /// Never guessed, no own ship.
    Empty,
    /// Guessed and missed.
    Miss,
    /// Guessed and hit a ship.
    Hit,
    /// Own unguessed ship (owner view only).
    Ship,
}

/// Result of resolving a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    Hit,
    Miss,
}

impl fmt::Display for GuessOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuessOutcome::Hit => write!(f, "Hit"),
            GuessOutcome::Miss => write!(f, "Miss"),
        }
    }
}

/// The two sides of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Player,
    Computer,
}

/// Final outcome of a match, computed once when a terminal condition is
/// first detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult {
    /// Player hit every computer ship.
    PlayerWin,
    /// Computer hit every player ship.
    ComputerWin,
    /// Boards exhausted, scores equal.
    StalemateTie,
    /// Boards exhausted, player ahead on hits.
    StalematePlayerAhead,
    /// Boards exhausted, computer ahead on hits.
    StalemateComputerAhead,
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchResult::PlayerWin => {
                write!(f, "Congratulations! You sank all the computer's ships!")
            }
            MatchResult::ComputerWin => {
                write!(f, "Sorry, the computer sank all your ships!")
            }
            MatchResult::StalemateTie => {
                write!(f, "Stalemate: every cell guessed, scores level. It's a tie!")
            }
            MatchResult::StalematePlayerAhead => {
                write!(f, "Stalemate: every cell guessed. You finish ahead on hits!")
            }
            MatchResult::StalemateComputerAhead => {
                write!(f, "Stalemate: every cell guessed. The computer finishes ahead on hits.")
            }
        }
    }
}

/// Errors returned by grid, policy, agent and engine operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Coordinate lies outside the board.
    OutOfBounds,
    /// Cell was already guessed.
    AlreadyGuessed,
    /// Attempted to place more ships than configured.
    CapacityExceeded,
    /// A ship already occupies this coordinate.
    DuplicateShip,
    /// Input text did not parse as a number.
    MalformedInput,
    /// No unguessed cell remains to choose from.
    Exhausted,
    /// The match has already reached a terminal state.
    MatchOver,
    /// Underlying bit grid error (invalid size or index).
    Mask(BitGridError),
}

impl From<BitGridError> for GameError {
    fn from(err: BitGridError) -> Self {
        GameError::Mask(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::OutOfBounds => write!(f, "Coordinate is outside the board"),
            GameError::AlreadyGuessed => write!(f, "That cell was already guessed"),
            GameError::CapacityExceeded => write!(f, "All configured ships are already placed"),
            GameError::DuplicateShip => write!(f, "A ship already occupies that coordinate"),
            GameError::MalformedInput => write!(f, "Input was not a number"),
            GameError::Exhausted => write!(f, "No unguessed cells remain"),
            GameError::MatchOver => write!(f, "The match is already over"),
            GameError::Mask(e) => write!(f, "Bit grid error: {}", e),
        }
    }
}

impl std::error::Error for GameError {}
