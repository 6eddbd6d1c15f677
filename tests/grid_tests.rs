use seabattle::{CellState, EngineError, Grid};

#[test]
fn test_new_sizes() {
    for size in 6..=15 {
        let grid = Grid::new(size).unwrap();
        assert_eq!(grid.size(), size);
        assert_eq!(grid.count(CellState::Empty), size * size);
    }
    assert_eq!(Grid::new(5).unwrap_err(), EngineError::InvalidBoardSize(5));
    assert_eq!(Grid::new(16).unwrap_err(), EngineError::InvalidBoardSize(16));
}

#[test]
fn test_get_set_and_bounds() {
    let mut grid = Grid::new(8).unwrap();
    grid.set(7, 7, CellState::Ship).unwrap();
    assert_eq!(grid.get(7, 7).unwrap(), CellState::Ship);

    assert_eq!(
        grid.get(8, 0).unwrap_err(),
        EngineError::OutOfBounds { row: 8, col: 0 }
    );
    assert_eq!(
        grid.set(0, 8, CellState::Miss).unwrap_err(),
        EngineError::OutOfBounds { row: 0, col: 8 }
    );
    // cells beyond the active size stay unreachable even on a smaller board
    assert!(grid.get(14, 14).is_err());
}

#[test]
fn test_neighborhood_is_clipped() {
    let grid = Grid::new(10).unwrap();
    let corner: Vec<_> = grid.neighborhood(0, 0).collect();
    assert_eq!(corner, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);

    let middle: Vec<_> = grid.neighborhood(5, 5).collect();
    assert_eq!(middle.len(), 9);

    let edge: Vec<_> = grid.neighborhood(9, 4).collect();
    assert_eq!(edge, vec![(8, 3), (8, 4), (8, 5), (9, 3), (9, 4), (9, 5)]);
}

#[test]
fn test_orthogonal_neighbors_order() {
    let grid = Grid::new(10).unwrap();
    let around: Vec<_> = grid.orthogonal_neighbors(4, 4).collect();
    assert_eq!(around, vec![(4, 5), (5, 4), (4, 3), (3, 4)]);

    let corner: Vec<_> = grid.orthogonal_neighbors(9, 0).collect();
    assert_eq!(corner, vec![(9, 1), (8, 0)]);
}

#[test]
fn test_target_view_hides_ships() {
    let mut grid = Grid::new(6).unwrap();
    grid.set(0, 0, CellState::Ship).unwrap();
    grid.set(0, 1, CellState::Hit).unwrap();
    grid.set(3, 3, CellState::Miss).unwrap();
    let view = grid.target_view();
    assert_eq!(view.get(0, 0).unwrap(), CellState::Empty);
    assert_eq!(view.get(0, 1).unwrap(), CellState::Hit);
    assert_eq!(view.get(3, 3).unwrap(), CellState::Miss);
    assert_eq!(view.count(CellState::Ship), 0);
}

#[test]
fn test_display_symbols() {
    let mut grid = Grid::new(6).unwrap();
    grid.set(0, 0, CellState::Ship).unwrap();
    grid.set(0, 1, CellState::Hit).unwrap();
    grid.set(0, 2, CellState::Miss).unwrap();
    let text = grid.to_string();
    let first = text.lines().next().unwrap();
    assert_eq!(first, "S X o . . . ");
    assert_eq!(text.lines().count(), 6);
}
