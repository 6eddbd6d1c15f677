//! A fixed-capacity square grid of cell states.
//!
//! The grid is `no_std` friendly and avoids heap allocations: cells live in an
//! inline `MAX_BOARD_SIZE`×`MAX_BOARD_SIZE` array of which only the top-left
//! `size`×`size` block is in use.

use core::fmt;

use crate::common::EngineError;
use crate::config::{is_valid_board_size, MAX_BOARD_SIZE};

/// A `(row, col)` pair.
pub type Coord = (usize, usize);

/// Orthogonal offsets in probe order: right, down, left, up.
const ORTHOGONAL: [(isize, isize); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// State of a single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Empty,
    Ship,
    /// A ship cell that has been struck.
    Hit,
    /// An empty cell that has been struck.
    Miss,
}

impl CellState {
    /// Struck cells are terminal.
    pub fn is_struck(self) -> bool {
        matches!(self, CellState::Hit | CellState::Miss)
    }

    /// Ship cells, struck or not.
    pub fn is_occupied(self) -> bool {
        matches!(self, CellState::Ship | CellState::Hit)
    }

    fn symbol(self) -> char {
        match self {
            CellState::Empty => '.',
            CellState::Ship => 'S',
            CellState::Hit => 'X',
            CellState::Miss => 'o',
        }
    }
}

/// An N×N matrix of [`CellState`] with bounds-checked access.
#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    size: usize,
    cells: [[CellState; MAX_BOARD_SIZE]; MAX_BOARD_SIZE],
}

impl Grid {
    /// Create an all-`Empty` grid. Fails with `InvalidBoardSize` outside 6..=15.
    pub fn new(size: usize) -> Result<Self, EngineError> {
        if !is_valid_board_size(size) {
            return Err(EngineError::InvalidBoardSize(size));
        }
        Ok(Grid {
            size,
            cells: [[CellState::Empty; MAX_BOARD_SIZE]; MAX_BOARD_SIZE],
        })
    }

    /// Side length N.
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    #[inline]
    fn check_bounds(&self, row: usize, col: usize) -> Result<(), EngineError> {
        if self.in_bounds(row, col) {
            Ok(())
        } else {
            Err(EngineError::OutOfBounds { row, col })
        }
    }

    /// Gets the state at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<CellState, EngineError> {
        self.check_bounds(row, col)?;
        Ok(self.cells[row][col])
    }

    /// Sets the state at (row, col).
    pub fn set(&mut self, row: usize, col: usize, state: CellState) -> Result<(), EngineError> {
        self.check_bounds(row, col)?;
        self.cells[row][col] = state;
        Ok(())
    }

    /// Resets every cell to `Empty`.
    pub fn clear(&mut self) {
        self.cells = [[CellState::Empty; MAX_BOARD_SIZE]; MAX_BOARD_SIZE];
    }

    /// Number of cells currently in `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.cells().filter(|&(_, s)| s == state).count()
    }

    /// Row-major iterator over every in-bounds cell.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, CellState)> + '_ {
        (0..self.size)
            .flat_map(move |r| (0..self.size).map(move |c| ((r, c), self.cells[r][c])))
    }

    /// The 3×3 block centred on (row, col), clipped at the edges. Includes
    /// the centre itself.
    pub fn neighborhood(&self, row: usize, col: usize) -> impl Iterator<Item = Coord> {
        let last = self.size - 1;
        let (r0, r1) = (row.saturating_sub(1), (row + 1).min(last));
        let (c0, c1) = (col.saturating_sub(1), (col + 1).min(last));
        (r0..=r1).flat_map(move |r| (c0..=c1).map(move |c| (r, c)))
    }

    /// In-bounds orthogonal neighbours in the order right, down, left, up.
    pub fn orthogonal_neighbors(&self, row: usize, col: usize) -> impl Iterator<Item = Coord> + '_ {
        ORTHOGONAL
            .into_iter()
            .filter_map(move |(dr, dc)| self.offset(row, col, dr, dc))
    }

    fn offset(&self, row: usize, col: usize, dr: isize, dc: isize) -> Option<Coord> {
        let r = row.checked_add_signed(dr)?;
        let c = col.checked_add_signed(dc)?;
        self.in_bounds(r, c).then_some((r, c))
    }

    /// What an opponent is allowed to see: unstruck ships read as `Empty`.
    pub fn target_view(&self) -> Grid {
        let mut view = *self;
        for row in view.cells.iter_mut() {
            for cell in row.iter_mut() {
                if *cell == CellState::Ship {
                    *cell = CellState::Empty;
                }
            }
        }
        view
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid<{}>:", self.size)?;
        writeln!(f, "{}", self)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.size {
            for c in 0..self.size {
                write!(f, "{} ", self.cells[r][c].symbol())?;
            }
            if r + 1 < self.size {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
