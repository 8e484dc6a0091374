//! Turn sequencing, scoring and terminal-state detection.

use rand::Rng;

use crate::agent;
use crate::common::{Coord, GameError, GuessOutcome, MatchResult, Side};
use crate::grid::Grid;
use crate::policy;

/// Hit counters for both sides, owned exclusively by the engine and
/// created fresh for every match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreBoard {
    player: usize,
    computer: usize,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, side: Side) -> usize {
        match side {
            Side::Player => self.player,
            Side::Computer => self.computer,
        }
    }

    fn record_hit(&mut self, side: Side) {
        match side {
            Side::Player => self.player += 1,
            Side::Computer => self.computer += 1,
        }
    }
}

/// Engine state machine. Play strictly alternates between the two waiting
/// states until a terminal result is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    AwaitingPlayerGuess,
    AwaitingComputerGuess,
    Finished(MatchResult),
}

/// Orchestrates one match: owns both grids and the score board, applies
/// validated guesses, and detects wins and stalemates.
///
/// The engine checks terminal conditions after every resolved guess, so
/// inspecting [`EngineState`] at the top of a round is equivalent to the
/// stalemate pre-check: a finished match never asks for another guess.
pub struct GameEngine {
    player_grid: Grid,
    computer_grid: Grid,
    scores: ScoreBoard,
    state: EngineState,
}

impl GameEngine {
    /// Create an engine over two prepared boards. Ships must already be
    /// placed; the player moves first.
    pub fn new(player_grid: Grid, computer_grid: Grid) -> Self {
        Self {
            player_grid,
            computer_grid,
            scores: ScoreBoard::new(),
            state: EngineState::AwaitingPlayerGuess,
        }
    }

    /// The board holding the player's own ships.
    pub fn player_grid(&self) -> &Grid {
        &self.player_grid
    }

    /// The board the player guesses against.
    pub fn computer_grid(&self) -> &Grid {
        &self.computer_grid
    }

    pub fn scores(&self) -> &ScoreBoard {
        &self.scores
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Validate a raw player guess against the computer's board without
    /// advancing the match. Used by the driver to re-prompt with a
    /// reason-specific message.
    pub fn check_player_guess(&self, row: i64, col: i64) -> Result<Coord, GameError> {
        policy::check_guess(row, col, &self.computer_grid)
    }

    /// Apply the player's guess to the computer's board.
    ///
    /// On a hit the player's score rises; reaching the computer's ship
    /// quota wins the match. Otherwise the boards are re-checked for
    /// exhaustion before the computer is allowed to act, since this guess
    /// may have filled the last cell.
    pub fn player_guess(&mut self, coord: Coord) -> Result<GuessOutcome, GameError> {
        if self.state != EngineState::AwaitingPlayerGuess {
            return Err(GameError::MatchOver);
        }
        let outcome = self.computer_grid.resolve_guess(coord)?;
        if outcome == GuessOutcome::Hit {
            self.scores.record_hit(Side::Player);
            if self.scores.get(Side::Player) == self.computer_grid.ship_capacity() {
                self.finish(MatchResult::PlayerWin);
                return Ok(outcome);
            }
        }
        if self.boards_exhausted() {
            self.finish(self.stalemate_result());
        } else {
            self.state = EngineState::AwaitingComputerGuess;
        }
        Ok(outcome)
    }

    /// Let the computer take its turn on the player's board.
    ///
    /// Returns the chosen coordinate and outcome for display, or `None`
    /// when the agent reports exhaustion and the match settles as a
    /// stalemate (under correct accounting the post-guess check above
    /// already caught this; the branch stays as a safeguard).
    pub fn computer_guess<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<Option<(Coord, GuessOutcome)>, GameError> {
        if self.state != EngineState::AwaitingComputerGuess {
            return Err(GameError::MatchOver);
        }
        let coord = match agent::next_guess(&self.player_grid, rng) {
            Ok(coord) => coord,
            Err(GameError::Exhausted) => {
                self.finish(self.stalemate_result());
                return Ok(None);
            }
            Err(e) => return Err(e),
        };
        let outcome = self.player_grid.resolve_guess(coord)?;
        log::debug!("computer guessed {} -> {}", coord, outcome);
        if outcome == GuessOutcome::Hit {
            self.scores.record_hit(Side::Computer);
            if self.scores.get(Side::Computer) == self.player_grid.ship_capacity() {
                self.finish(MatchResult::ComputerWin);
                return Ok(Some((coord, outcome)));
            }
        }
        if self.boards_exhausted() {
            self.finish(self.stalemate_result());
        } else {
            self.state = EngineState::AwaitingPlayerGuess;
        }
        Ok(Some((coord, outcome)))
    }

    fn boards_exhausted(&self) -> bool {
        !self.player_grid.has_remaining_cells() && !self.computer_grid.has_remaining_cells()
    }

    fn stalemate_result(&self) -> MatchResult {
        let player = self.scores.get(Side::Player);
        let computer = self.scores.get(Side::Computer);
        if player > computer {
            MatchResult::StalematePlayerAhead
        } else if computer > player {
            MatchResult::StalemateComputerAhead
        } else {
            MatchResult::StalemateTie
        }
    }

    fn finish(&mut self, result: MatchResult) {
        log::info!(
            "match finished: {:?} (player {} - computer {})",
            result,
            self.scores.get(Side::Player),
            self.scores.get(Side::Computer)
        );
        self.state = EngineState::Finished(result);
    }
}
