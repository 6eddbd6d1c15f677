// Target selection for the computer side.
// Uses no_std and avoids heap allocations.

use crate::{
    common::EngineError,
    config::{MAX_BOARD_SIZE, SEARCH_ATTEMPTS},
    grid::{CellState, Coord, Grid},
    ship::{Orientation, Placement},
};
use rand::{rngs::SmallRng, seq::IteratorRandom, Rng};

/// Probability matrix over the board. Only the `size`×`size` block is used.
pub type Pdf = [[f64; MAX_BOARD_SIZE]; MAX_BOARD_SIZE];

/// Interface implemented by the opponent's shot selection strategies.
pub trait Targeting {
    /// Choose the next cell to fire at. `view` holds only what the shooter has
    /// learned (`Empty`/`Hit`/`Miss`); `remaining` lists lengths of enemy ships
    /// not yet sunk. Must return an in-bounds `Empty` cell of `view`.
    fn choose_shot(
        &mut self,
        view: &Grid,
        remaining: &[usize],
        rng: &mut SmallRng,
    ) -> Result<Coord, EngineError>;
}

/// Hunt the neighbours of known hits, otherwise search at random.
///
/// Keeps no state between calls: every shot rescans the view, so after a hit
/// the probing direction may change from one turn to the next.
#[derive(Debug, Clone, Copy, Default)]
pub struct HuntTargeting;

impl HuntTargeting {
    pub fn new() -> Self {
        Self
    }
}

impl Targeting for HuntTargeting {
    fn choose_shot(
        &mut self,
        view: &Grid,
        _remaining: &[usize],
        rng: &mut SmallRng,
    ) -> Result<Coord, EngineError> {
        if let Some(target) = hunt_target(view) {
            return Ok(target);
        }
        random_search(view, rng)
    }
}

/// Row-major scan for a `Hit` with an `Empty` orthogonal neighbour, probed
/// right, down, left, up. Returns the first such neighbour.
pub fn hunt_target(view: &Grid) -> Option<Coord> {
    view.cells()
        .filter(|&(_, s)| s == CellState::Hit)
        .find_map(|((r, c), _)| {
            view.orthogonal_neighbors(r, c)
                .find(|&(nr, nc)| view.get(nr, nc) == Ok(CellState::Empty))
        })
}

/// Uniformly random `Empty` cell. Draws up to [`SEARCH_ATTEMPTS`] samples,
/// then picks among all remaining `Empty` cells.
pub fn random_search<R: Rng + ?Sized>(view: &Grid, rng: &mut R) -> Result<Coord, EngineError> {
    let size = view.size();
    for _ in 0..SEARCH_ATTEMPTS {
        let (r, c) = (rng.random_range(0..size), rng.random_range(0..size));
        if view.get(r, c)? == CellState::Empty {
            return Ok((r, c));
        }
    }
    view.cells()
        .filter(|&(_, s)| s == CellState::Empty)
        .map(|(coord, _)| coord)
        .choose(rng)
        .ok_or(EngineError::NoTargetsLeft)
}

/// Probability-density guesser. Counts every way the remaining ships could
/// lie across unexplored cells, weighting layouts that cover known hits.
#[derive(Debug, Clone, Copy)]
pub struct DensityTargeting {
    temperature: f64,
}

impl DensityTargeting {
    pub fn new() -> Self {
        // Lower temperature biases the sampling towards higher probability
        // cells so guesses hone in on likely ship locations.
        Self { temperature: 0.5 }
    }

    pub fn with_temperature(temperature: f64) -> Self {
        Self { temperature }
    }
}

impl Default for DensityTargeting {
    fn default() -> Self {
        Self::new()
    }
}

impl Targeting for DensityTargeting {
    fn choose_shot(
        &mut self,
        view: &Grid,
        remaining: &[usize],
        rng: &mut SmallRng,
    ) -> Result<Coord, EngineError> {
        let pdf = calc_pdf(view, remaining);
        match sample_pdf(view, &pdf, self.temperature, rng) {
            Some(target) => Ok(target),
            None => random_search(view, rng),
        }
    }
}

/// Compute a probability density over all unexplored cells given the known
/// hits and misses in `view` and the lengths of the remaining enemy ships.
pub fn calc_pdf(view: &Grid, remaining: &[usize]) -> Pdf {
    let size = view.size();
    let mut matrix = [[0.0f64; MAX_BOARD_SIZE]; MAX_BOARD_SIZE];

    // Placements covering more observed hits receive far more weight so that
    // cells next to confirmed hits stand out.
    const HIT_BIAS: f64 = 10.0;

    for &len in remaining.iter() {
        if len == 0 || len > size {
            continue;
        }
        for orient in [Orientation::Horizontal, Orientation::Vertical] {
            for r in 0..size {
                for c in 0..size {
                    let candidate = Placement::new(r, c, len, orient);
                    if !candidate.fits(size) {
                        continue;
                    }
                    let mut valid = true;
                    let mut n_hits = 0usize;
                    for (rr, cc) in candidate.cells() {
                        match view.get(rr, cc) {
                            Ok(CellState::Miss) | Err(_) => {
                                valid = false;
                                break;
                            }
                            Ok(CellState::Hit) => n_hits += 1,
                            Ok(_) => {}
                        }
                    }
                    if !valid {
                        continue;
                    }
                    let weight = libm::pow(HIT_BIAS, n_hits as f64);
                    for (rr, cc) in candidate.cells() {
                        if view.get(rr, cc) == Ok(CellState::Empty) {
                            matrix[rr][cc] += weight;
                        }
                    }
                }
            }
        }
    }

    normalize(size, matrix)
}

fn normalize(size: usize, mut matrix: Pdf) -> Pdf {
    let total: f64 = matrix[..size].iter().map(|row| row[..size].iter().sum::<f64>()).sum();
    if total == 0.0 {
        return matrix;
    }
    for row in matrix[..size].iter_mut() {
        for v in row[..size].iter_mut() {
            *v /= total;
        }
    }
    matrix
}

/// Sample an `Empty` cell from a probability matrix using a temperature
/// parameter. Returns `None` when the matrix carries no weight.
pub fn sample_pdf<R: Rng + ?Sized>(
    view: &Grid,
    pdf: &Pdf,
    temperature: f64,
    rng: &mut R,
) -> Option<Coord> {
    let size = view.size();
    let mut adjusted = [[0.0f64; MAX_BOARD_SIZE]; MAX_BOARD_SIZE];
    let mut total = 0.0;
    for ((r, c), state) in view.cells() {
        if state == CellState::Empty && pdf[r][c] > 0.0 {
            let v = libm::pow(pdf[r][c], 1.0 / temperature);
            adjusted[r][c] = v;
            total += v;
        }
    }
    if total <= 0.0 {
        return None;
    }
    let threshold: f64 = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    let mut last = None;
    for r in 0..size {
        for c in 0..size {
            if adjusted[r][c] > 0.0 {
                cumulative += adjusted[r][c];
                last = Some((r, c));
                if threshold < cumulative {
                    return last;
                }
            }
        }
    }
    last
}
