//! Shot resolution against a fleet grid.
//!
//! Ships are not stored with an identity. A ship is recovered as the
//! 4-connected component of occupied cells around a hit, which is sound only
//! because placement forbids ships from touching.

use crate::common::{EngineError, ShotResult};
use crate::config::MAX_BOARD_SIZE;
use crate::grid::{CellState, Coord, Grid};

/// Fire at (`row`, `col`): `Ship` becomes `Hit`, `Empty` becomes `Miss`.
/// Cells already struck are rejected and left as they are.
pub fn fire(grid: &mut Grid, row: usize, col: usize) -> Result<ShotResult, EngineError> {
    match grid.get(row, col)? {
        CellState::Hit | CellState::Miss => Err(EngineError::AlreadyTargeted { row, col }),
        CellState::Empty => {
            grid.set(row, col, CellState::Miss)?;
            Ok(ShotResult::Miss)
        }
        CellState::Ship => {
            grid.set(row, col, CellState::Hit)?;
            Ok(match sunk_ship_length(grid, row, col) {
                Some(length) => ShotResult::Sunk(length),
                None => ShotResult::Hit,
            })
        }
    }
}

/// `true` when the ship through the `Hit` cell at (`row`, `col`) has no
/// intact cell left.
pub fn is_sunk(grid: &Grid, row: usize, col: usize) -> bool {
    sunk_ship_length(grid, row, col).is_some()
}

/// Length of the ship through (`row`, `col`) if it is fully struck.
///
/// Walks the orthogonally connected ship cells with an explicit stack; any
/// `Ship` cell in the component means the ship is still afloat.
pub fn sunk_ship_length(grid: &Grid, row: usize, col: usize) -> Option<usize> {
    if grid.get(row, col).ok()? != CellState::Hit {
        return None;
    }
    let mut visited = [[false; MAX_BOARD_SIZE]; MAX_BOARD_SIZE];
    let mut stack: [Coord; MAX_BOARD_SIZE * MAX_BOARD_SIZE] =
        [(0, 0); MAX_BOARD_SIZE * MAX_BOARD_SIZE];
    let mut top = 0;
    let mut length = 0;

    visited[row][col] = true;
    stack[top] = (row, col);
    top += 1;
    while top > 0 {
        top -= 1;
        let (r, c) = stack[top];
        match grid.get(r, c).ok()? {
            CellState::Ship => return None,
            CellState::Hit => length += 1,
            _ => continue,
        }
        for (nr, nc) in grid.orthogonal_neighbors(r, c) {
            let occupied = grid.get(nr, nc).is_ok_and(CellState::is_occupied);
            if occupied && !visited[nr][nc] {
                visited[nr][nc] = true;
                stack[top] = (nr, nc);
                top += 1;
            }
        }
    }
    Some(length)
}

/// `true` when no `Ship` cell is left on the grid.
pub fn is_fleet_destroyed(grid: &Grid) -> bool {
    grid.cells().all(|(_, s)| s != CellState::Ship)
}
