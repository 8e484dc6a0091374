//! Text rendering of boards and scores.

use crate::common::{CellState, Side};
use crate::engine::ScoreBoard;
use crate::grid::Grid;

/// Render a board as `size` lines of cell symbols with a column header.
///
/// Unguessed cells print as `.`, misses as `x`, hits as `*`. Ship cells
/// print as `@` only when `reveal` is set (the owner's own view); the
/// opponent view shows them as unguessed.
pub fn render_grid(grid: &Grid, reveal: bool) -> String {
    let mut out = String::new();
    out.push_str("   ");
    for c in 0..grid.size() {
        out.push_str(&format!(" {}", c));
    }
    out.push('\n');
    for r in 0..grid.size() {
        out.push_str(&format!("{:2} ", r));
        for c in 0..grid.size() {
            let state = grid
                .cell(crate::common::Coord::new(r, c))
                .unwrap_or(CellState::Empty);
            let ch = match state {
                CellState::Hit => '*',
                CellState::Miss => 'x',
                CellState::Ship if reveal => '@',
                CellState::Ship | CellState::Empty => '.',
            };
            out.push(' ');
            out.push(ch);
        }
        out.push('\n');
    }
    out
}

/// Print both boards: the player's own (ships revealed) above the
/// computer's (ships hidden). Called once per round before the player's
/// turn.
pub fn print_match_view(player_name: &str, player_grid: &Grid, computer_grid: &Grid) {
    println!("\n{}'s board:", player_name);
    print!("{}", render_grid(player_grid, true));
    println!("\nComputer's board:");
    print!("{}", render_grid(computer_grid, false));
}

/// Print the running score line and a round separator.
pub fn print_scores(scores: &ScoreBoard) {
    println!(
        "\nScores => Player: {}, Computer: {}",
        scores.get(Side::Player),
        scores.get(Side::Computer)
    );
    println!("{}", "-".repeat(40));
}

/// Print the welcome banner with the match parameters.
pub fn print_banner(size: usize, ships: usize) {
    println!("{}", "-".repeat(35));
    println!(" Welcome to YOU SUNK MY BATTLESHIP!!");
    println!(" Board size: {}. Number of ships: {}", size, ships);
    println!(" Top-left corner is row: 0, col: 0");
    println!("{}", "-".repeat(35));
}
