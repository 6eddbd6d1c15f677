//! Fleet placement: bounds and no-touching validation, manual and random
//! placement of ships onto a [`Grid`].

use crate::common::EngineError;
use crate::config::{FleetSpec, PLACEMENT_ATTEMPTS};
use crate::grid::{CellState, Grid};
use crate::ship::{Orientation, Placement};
use log::debug;
use rand::Rng;

/// Returns `true` when the run fits on the grid and no cell of it has a
/// `Ship` anywhere in its 3×3 neighbourhood. Only ships already on the grid
/// are considered.
pub fn can_place(grid: &Grid, placement: &Placement) -> bool {
    if !placement.fits(grid.size()) {
        return false;
    }
    placement.cells().all(|(r, c)| {
        grid.neighborhood(r, c)
            .all(|(nr, nc)| grid.get(nr, nc).is_ok_and(|s| s != CellState::Ship))
    })
}

/// Writes `Ship` into every cell of the run. The placement is re-validated
/// first; an invalid one leaves the grid untouched.
pub fn place(grid: &mut Grid, placement: &Placement) -> Result<(), EngineError> {
    if !can_place(grid, placement) {
        return Err(EngineError::InvalidPlacement);
    }
    for (r, c) in placement.cells() {
        grid.set(r, c, CellState::Ship)?;
    }
    debug!(
        "placed {}-ship at ({}, {}) {:?}",
        placement.length, placement.row, placement.col, placement.orientation
    );
    Ok(())
}

/// Returns a random valid placement for a ship of `length`, drawing at most
/// [`PLACEMENT_ATTEMPTS`] (orientation, origin) pairs.
pub fn random_placement<R: Rng + ?Sized>(
    grid: &Grid,
    length: usize,
    rng: &mut R,
) -> Result<Placement, EngineError> {
    let size = grid.size();
    // origins are drawn so that the run always fits
    let Some(span) = size.checked_sub(length).map(|free| free + 1) else {
        return Err(EngineError::PlacementExhausted { length });
    };
    for _ in 0..PLACEMENT_ATTEMPTS {
        let orient = Orientation::random(rng);
        let (max_r, max_c) = match orient {
            Orientation::Horizontal => (size, span),
            Orientation::Vertical => (span, size),
        };
        let candidate = Placement::new(
            rng.random_range(0..max_r),
            rng.random_range(0..max_c),
            length,
            orient,
        );
        if can_place(grid, &candidate) {
            return Ok(candidate);
        }
    }
    Err(EngineError::PlacementExhausted { length })
}

/// Places every ship of `fleet` in order at random positions.
///
/// Fails with `PlacementExhausted` as soon as one ship runs out of attempts.
/// Ships placed before the failure stay on the grid; callers discard the
/// grid and retry the entire fleet.
pub fn auto_place_fleet<R: Rng + ?Sized>(
    grid: &mut Grid,
    fleet: &FleetSpec,
    rng: &mut R,
) -> Result<(), EngineError> {
    for &length in fleet.lengths() {
        let placement = random_placement(grid, length, rng)?;
        place(grid, &placement)?;
    }
    Ok(())
}
