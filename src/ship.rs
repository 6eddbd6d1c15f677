//! Ship orientation and the run of cells a placement covers.

use crate::grid::Coord;
use rand::Rng;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    /// The other orientation.
    pub fn rotated(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }

    /// Fair coin flip between the two orientations.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}

/// A ship of `length` cells starting at (`row`, `col`) and extending right
/// (horizontal) or down (vertical).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    pub row: usize,
    pub col: usize,
    pub length: usize,
    pub orientation: Orientation,
}

impl Placement {
    pub const fn new(row: usize, col: usize, length: usize, orientation: Orientation) -> Self {
        Self {
            row,
            col,
            length,
            orientation,
        }
    }

    /// Cells covered by the ship, starting at the origin.
    pub fn cells(&self) -> impl Iterator<Item = Coord> {
        let (row, col, orientation) = (self.row, self.col, self.orientation);
        (0..self.length).map(move |i| match orientation {
            Orientation::Horizontal => (row, col + i),
            Orientation::Vertical => (row + i, col),
        })
    }

    /// Whether the whole run lies inside an N×N board.
    pub fn fits(&self, size: usize) -> bool {
        let (rows, cols) = match self.orientation {
            Orientation::Horizontal => (1, self.length),
            Orientation::Vertical => (self.length, 1),
        };
        let within = |start: usize, extent: usize| {
            start.checked_add(extent).is_some_and(|end| end <= size)
        };
        self.length > 0 && within(self.row, rows) && within(self.col, cols)
    }
}
