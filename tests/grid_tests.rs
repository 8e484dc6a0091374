use gridstrike::{CellState, Coord, GameError, Grid, GuessOutcome};

fn scenario_grid() -> Grid {
    // 5x5 board, ships on the diagonal at (0,0)..(3,3).
    let mut grid = Grid::new(5, 4).unwrap();
    for i in 0..4 {
        grid.place_ship(Coord::new(i, i)).unwrap();
    }
    grid
}

#[test]
fn test_place_and_guess_hit_then_reject_duplicate() {
    let mut grid = scenario_grid();

    assert_eq!(grid.resolve_guess(Coord::new(0, 0)).unwrap(), GuessOutcome::Hit);
    assert_eq!(grid.cell(Coord::new(0, 0)).unwrap(), CellState::Hit);

    // repeated guess is rejected and leaves the cell and history alone
    assert_eq!(
        grid.resolve_guess(Coord::new(0, 0)).unwrap_err(),
        GameError::AlreadyGuessed
    );
    assert_eq!(grid.cell(Coord::new(0, 0)).unwrap(), CellState::Hit);
    assert_eq!(grid.guess_history(), &[Coord::new(0, 0)]);
}

#[test]
fn test_miss_marks_cell_once() {
    let mut grid = scenario_grid();
    assert_eq!(grid.resolve_guess(Coord::new(0, 4)).unwrap(), GuessOutcome::Miss);
    assert_eq!(grid.cell(Coord::new(0, 4)).unwrap(), CellState::Miss);
    assert_eq!(
        grid.resolve_guess(Coord::new(0, 4)).unwrap_err(),
        GameError::AlreadyGuessed
    );
}

#[test]
fn test_guess_out_of_bounds_rejected() {
    let mut grid = scenario_grid();
    assert_eq!(
        grid.resolve_guess(Coord::new(5, 0)).unwrap_err(),
        GameError::OutOfBounds
    );
    assert_eq!(
        grid.resolve_guess(Coord::new(0, 5)).unwrap_err(),
        GameError::OutOfBounds
    );
    assert!(grid.guess_history().is_empty());
}

#[test]
fn test_placement_errors() {
    let mut grid = Grid::new(5, 2).unwrap();
    grid.place_ship(Coord::new(1, 1)).unwrap();
    assert_eq!(
        grid.place_ship(Coord::new(1, 1)).unwrap_err(),
        GameError::DuplicateShip
    );
    assert_eq!(
        grid.place_ship(Coord::new(9, 0)).unwrap_err(),
        GameError::OutOfBounds
    );
    grid.place_ship(Coord::new(2, 2)).unwrap();
    assert_eq!(
        grid.place_ship(Coord::new(3, 3)).unwrap_err(),
        GameError::CapacityExceeded
    );
    assert_eq!(grid.ship_count(), 2);
}

#[test]
fn test_capacity_cannot_exceed_board() {
    assert_eq!(Grid::new(2, 5).unwrap_err(), GameError::CapacityExceeded);
    assert!(Grid::new(2, 4).is_ok());
}

#[test]
fn test_owner_view_cell_states() {
    let mut grid = scenario_grid();
    // unguessed ship shows as Ship to the owner, Empty cells stay Empty
    assert_eq!(grid.cell(Coord::new(1, 1)).unwrap(), CellState::Ship);
    assert_eq!(grid.cell(Coord::new(4, 0)).unwrap(), CellState::Empty);
    grid.resolve_guess(Coord::new(1, 1)).unwrap();
    assert_eq!(grid.cell(Coord::new(1, 1)).unwrap(), CellState::Hit);
}

#[test]
fn test_has_remaining_cells_goes_false_exactly_at_full_board() {
    let mut grid = Grid::new(2, 1).unwrap();
    grid.place_ship(Coord::new(0, 0)).unwrap();
    let cells = [
        Coord::new(0, 0),
        Coord::new(0, 1),
        Coord::new(1, 0),
        Coord::new(1, 1),
    ];
    for (i, &coord) in cells.iter().enumerate() {
        assert!(grid.has_remaining_cells(), "cell {} should remain", i);
        grid.resolve_guess(coord).unwrap();
    }
    assert!(!grid.has_remaining_cells());
    assert_eq!(grid.guess_history().len(), 4);
    // once false it stays false: every further guess is rejected
    for &coord in &cells {
        assert_eq!(
            grid.resolve_guess(coord).unwrap_err(),
            GameError::AlreadyGuessed
        );
    }
    assert!(!grid.has_remaining_cells());
}

#[test]
fn test_hit_iff_ship_for_entire_history() {
    let mut grid = scenario_grid();
    for r in 0..5 {
        for c in 0..5 {
            grid.resolve_guess(Coord::new(r, c)).unwrap();
        }
    }
    let ships: Vec<Coord> = grid.ship_coords().collect();
    for &coord in grid.guess_history() {
        let state = grid.cell(coord).unwrap();
        if ships.contains(&coord) {
            assert_eq!(state, CellState::Hit);
        } else {
            assert_eq!(state, CellState::Miss);
        }
    }
}
