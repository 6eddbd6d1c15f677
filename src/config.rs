use crate::common::EngineError;

pub const MIN_BOARD_SIZE: usize = 6;
pub const MAX_BOARD_SIZE: usize = 15;
pub const DEFAULT_BOARD_SIZE: usize = 10;

/// Upper bound on the number of ships in one fleet.
pub const MAX_FLEET_SHIPS: usize = 16;

/// One four-decker, two three-deckers, three two-deckers, four single-deckers.
pub const STANDARD_FLEET: [usize; 10] = [4, 3, 3, 2, 2, 2, 1, 1, 1, 1];

/// Total number of ship cells in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 4 + 3 + 3 + 2 + 2 + 2 + 1 + 1 + 1 + 1;

/// Random (orientation, origin) draws allowed per ship during auto placement.
pub const PLACEMENT_ATTEMPTS: usize = 100;

/// Whole-fleet auto placement rounds a session tries before giving up.
pub const FLEET_PLACEMENT_ROUNDS: usize = 20;

/// Random samples the search mode draws before widening to a full scan.
pub const SEARCH_ATTEMPTS: usize = 100;

/// Returns `true` if `size` is a supported board size.
pub fn is_valid_board_size(size: usize) -> bool {
    (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size)
}

/// Ordered ship lengths a side has to place. Stored inline so the engine
/// stays allocation free.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct FleetSpec {
    lengths: [usize; MAX_FLEET_SHIPS],
    len: usize,
}

impl FleetSpec {
    /// Build a fleet from ship lengths, in placement order.
    pub fn new(lengths: &[usize]) -> Result<Self, EngineError> {
        if lengths.is_empty() || lengths.len() > MAX_FLEET_SHIPS {
            return Err(EngineError::InvalidFleet);
        }
        if lengths.iter().any(|&l| l == 0 || l > MAX_BOARD_SIZE) {
            return Err(EngineError::InvalidFleet);
        }
        let mut stored = [0usize; MAX_FLEET_SHIPS];
        stored[..lengths.len()].copy_from_slice(lengths);
        Ok(Self {
            lengths: stored,
            len: lengths.len(),
        })
    }

    /// The standard ten-ship fleet.
    pub fn standard() -> Self {
        let mut lengths = [0usize; MAX_FLEET_SHIPS];
        lengths[..STANDARD_FLEET.len()].copy_from_slice(&STANDARD_FLEET);
        Self {
            lengths,
            len: STANDARD_FLEET.len(),
        }
    }

    pub fn lengths(&self) -> &[usize] {
        &self.lengths[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Sum of all ship lengths.
    pub fn total_cells(&self) -> usize {
        self.lengths().iter().sum()
    }

    /// Remove one ship of `length`, keeping the order of the rest.
    /// Returns `false` if no such ship is listed.
    pub fn remove_one(&mut self, length: usize) -> bool {
        match self.lengths().iter().position(|&l| l == length) {
            Some(idx) => {
                self.lengths.copy_within(idx + 1..self.len, idx);
                self.len -= 1;
                self.lengths[self.len] = 0;
                true
            }
            None => false,
        }
    }
}

impl Default for FleetSpec {
    fn default() -> Self {
        Self::standard()
    }
}
