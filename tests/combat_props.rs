use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use seabattle::combat::{fire, is_fleet_destroyed};
use seabattle::placement::auto_place_fleet;
use seabattle::{CellState, EngineError, FleetSpec, Grid, ShotResult};

fn random_fleet_grid(seed: u64) -> Grid {
    let fleet = FleetSpec::standard();
    let mut attempt = seed;
    loop {
        let mut grid = Grid::new(10).unwrap();
        if auto_place_fleet(&mut grid, &fleet, &mut SmallRng::seed_from_u64(attempt)).is_ok() {
            return grid;
        }
        attempt = attempt.wrapping_add(1);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn struck_cells_are_terminal(seed in any::<u64>(), row in 0usize..10, col in 0usize..10) {
        let mut grid = random_fleet_grid(seed);
        let first = fire(&mut grid, row, col).unwrap();
        let after = grid.get(row, col).unwrap();
        prop_assert_eq!(after, if first.is_hit() { CellState::Hit } else { CellState::Miss });

        let snapshot = grid;
        prop_assert_eq!(
            fire(&mut grid, row, col).unwrap_err(),
            EngineError::AlreadyTargeted { row, col }
        );
        prop_assert_eq!(grid, snapshot);
    }

    #[test]
    fn fleet_destroyed_after_every_ship_cell_hit(seed in any::<u64>()) {
        let mut grid = random_fleet_grid(seed);
        let mut ship_cells: Vec<_> = grid
            .cells()
            .filter(|&(_, s)| s == CellState::Ship)
            .map(|(coord, _)| coord)
            .collect();
        prop_assert_eq!(ship_cells.len(), FleetSpec::standard().total_cells());

        // fire in a shuffled order with some misses mixed in
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut sunk = Vec::new();
        while !ship_cells.is_empty() {
            prop_assert!(!is_fleet_destroyed(&grid));
            let idx = rng.random_range(0..ship_cells.len());
            let (r, c) = ship_cells.swap_remove(idx);
            match fire(&mut grid, r, c).unwrap() {
                ShotResult::Sunk(len) => sunk.push(len),
                ShotResult::Hit => {}
                ShotResult::Miss => prop_assert!(false, "ship cell reported as miss"),
            }
            let (wr, wc) = (rng.random_range(0..10), rng.random_range(0..10));
            if grid.get(wr, wc).unwrap() == CellState::Empty {
                prop_assert_eq!(fire(&mut grid, wr, wc).unwrap(), ShotResult::Miss);
            }
        }
        prop_assert!(is_fleet_destroyed(&grid));
        sunk.sort_unstable();
        let mut expected = FleetSpec::standard().lengths().to_vec();
        expected.sort_unstable();
        prop_assert_eq!(sunk, expected);
    }
}
