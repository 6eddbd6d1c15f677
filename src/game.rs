use alloc::vec::Vec;

use log::{debug, info};
use rand::rngs::SmallRng;

use crate::{
    ai::{HuntTargeting, Targeting},
    combat,
    common::{EngineError, ShotResult},
    config::{FleetSpec, FLEET_PLACEMENT_ROUNDS},
    grid::{CellState, Grid},
    placement,
    ship::{Orientation, Placement},
};

/// One of the two sides of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Player,
    Opponent,
}

impl Side {
    pub fn other(self) -> Self {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }
}

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// The player is placing ships; the opponent fleet is already down.
    Placement,
    PlayerTurn,
    OpponentTurn,
    /// Terminal. Carries the side that destroyed the other fleet.
    GameOver { winner: Side },
}

/// A resolved shot as reported to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShotReport {
    pub shooter: Side,
    pub row: usize,
    pub col: usize,
    pub result: ShotResult,
    pub fleet_destroyed: bool,
}

/// Serializable snapshot of a session, without the RNG and targeting.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionState {
    pub fleet: FleetSpec,
    pub player_fleet: Grid,
    pub opponent_fleet: Grid,
    pub player_view: Grid,
    pub opponent_view: Grid,
    pub phase: Phase,
    pub ships_placed: usize,
    pub pending_orientation: Orientation,
    pub player_ships_afloat: FleetSpec,
    pub opponent_ships_afloat: FleetSpec,
    pub player_shots: usize,
    pub opponent_shots: usize,
}

/// One game between the human player and the computer opponent.
///
/// Holds both fleet grids and both target views. Every state change goes
/// through the methods below, which only allow the transitions
/// `Placement -> PlayerTurn <-> OpponentTurn -> GameOver`.
pub struct GameSession<T: Targeting = HuntTargeting> {
    fleet: FleetSpec,
    player_fleet: Grid,
    opponent_fleet: Grid,
    /// What the player has learned about the opponent fleet.
    player_view: Grid,
    /// What the opponent has learned about the player fleet.
    opponent_view: Grid,
    phase: Phase,
    ships_placed: usize,
    pending_orientation: Orientation,
    /// Player ships the opponent has not sunk yet.
    player_ships_afloat: FleetSpec,
    /// Opponent ships the player has not sunk yet.
    opponent_ships_afloat: FleetSpec,
    player_shots: usize,
    opponent_shots: usize,
    targeting: T,
    rng: SmallRng,
}

impl GameSession<HuntTargeting> {
    /// Start a new game against the hunting opponent. The opponent fleet is
    /// auto-placed immediately; the player starts in `Placement`.
    pub fn new_game(
        board_size: usize,
        fleet: FleetSpec,
        rng: SmallRng,
    ) -> Result<Self, EngineError> {
        Self::with_targeting(board_size, fleet, HuntTargeting::new(), rng)
    }
}

impl<T: Targeting> GameSession<T> {
    /// Start a new game with a custom opponent targeting strategy.
    pub fn with_targeting(
        board_size: usize,
        fleet: FleetSpec,
        targeting: T,
        mut rng: SmallRng,
    ) -> Result<Self, EngineError> {
        if fleet.is_empty() {
            return Err(EngineError::InvalidFleet);
        }
        let empty = Grid::new(board_size)?;
        let mut opponent_fleet = empty;
        place_fleet_with_retries(&mut opponent_fleet, &fleet, &mut rng)?;
        info!(
            "new game on {0}x{0} board with {1} ships",
            board_size,
            fleet.len()
        );
        Ok(Self {
            fleet,
            player_fleet: empty,
            opponent_fleet,
            player_view: empty,
            opponent_view: empty,
            phase: Phase::Placement,
            ships_placed: 0,
            pending_orientation: Orientation::Horizontal,
            player_ships_afloat: fleet,
            opponent_ships_afloat: fleet,
            player_shots: 0,
            opponent_shots: 0,
            targeting,
            rng,
        })
    }

    pub fn board_size(&self) -> usize {
        self.player_fleet.size()
    }

    pub fn fleet(&self) -> &FleetSpec {
        &self.fleet
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The player's own fleet with the opponent's strikes on it.
    pub fn player_fleet(&self) -> &Grid {
        &self.player_fleet
    }

    /// The opponent fleet. Presentation should only reveal it once the game
    /// is over; use [`GameSession::player_view`] during play.
    pub fn opponent_fleet(&self) -> &Grid {
        &self.opponent_fleet
    }

    /// The player's knowledge of the opponent fleet.
    pub fn player_view(&self) -> &Grid {
        &self.player_view
    }

    /// The opponent's knowledge of the player fleet.
    pub fn opponent_view(&self) -> &Grid {
        &self.opponent_view
    }

    pub fn player_shots(&self) -> usize {
        self.player_shots
    }

    pub fn opponent_shots(&self) -> usize {
        self.opponent_shots
    }

    /// Lengths of `side`'s ships that are still afloat.
    pub fn ships_afloat(&self, side: Side) -> &[usize] {
        match side {
            Side::Player => self.player_ships_afloat.lengths(),
            Side::Opponent => self.opponent_ships_afloat.lengths(),
        }
    }

    /// Number of player ships placed so far.
    pub fn ships_placed(&self) -> usize {
        self.ships_placed
    }

    /// Length of the next ship to place manually, if placement is ongoing.
    pub fn next_ship_length(&self) -> Option<usize> {
        match self.phase {
            Phase::Placement => self.fleet.lengths().get(self.ships_placed).copied(),
            _ => None,
        }
    }

    pub fn pending_orientation(&self) -> Orientation {
        self.pending_orientation
    }

    /// Toggle the orientation used for the next manual placement.
    pub fn rotate_pending(&mut self) -> Orientation {
        self.pending_orientation = self.pending_orientation.rotated();
        self.pending_orientation
    }

    /// Would the next ship fit at (`row`, `col`) in `orientation`?
    pub fn can_place_next(&self, row: usize, col: usize, orientation: Orientation) -> bool {
        self.next_ship_length().is_some_and(|length| {
            placement::can_place(&self.player_fleet, &Placement::new(row, col, length, orientation))
        })
    }

    /// Place the next ship of the fleet at (`row`, `col`).
    pub fn place_ship(
        &mut self,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<Placement, EngineError> {
        let length = self.next_ship_length().ok_or(self.phase_error())?;
        let ship = Placement::new(row, col, length, orientation);
        placement::place(&mut self.player_fleet, &ship)?;
        self.ships_placed += 1;
        if self.ships_placed == self.fleet.len() {
            self.enter(Phase::PlayerTurn);
        }
        Ok(ship)
    }

    /// Throw away any manual placements and place the whole player fleet at
    /// random.
    pub fn auto_place_fleet(&mut self) -> Result<(), EngineError> {
        if self.phase != Phase::Placement {
            return Err(self.phase_error());
        }
        if let Err(err) =
            place_fleet_with_retries(&mut self.player_fleet, &self.fleet, &mut self.rng)
        {
            self.ships_placed = 0;
            return Err(err);
        }
        self.ships_placed = self.fleet.len();
        self.enter(Phase::PlayerTurn);
        Ok(())
    }

    /// Player fires at the opponent fleet. A hit keeps the turn, a miss
    /// hands it to the opponent.
    pub fn fire_at_opponent(&mut self, row: usize, col: usize) -> Result<ShotReport, EngineError> {
        if self.phase != Phase::PlayerTurn {
            return Err(self.phase_error());
        }
        self.resolve_shot(Side::Player, row, col)
    }

    /// Let the opponent take a single shot. Used by drivers that pace the
    /// opponent's turn.
    pub fn opponent_fire(&mut self) -> Result<ShotReport, EngineError> {
        if self.phase != Phase::OpponentTurn {
            return Err(self.phase_error());
        }
        let (row, col) = self.targeting.choose_shot(
            &self.opponent_view,
            self.player_ships_afloat.lengths(),
            &mut self.rng,
        )?;
        self.resolve_shot(Side::Opponent, row, col)
    }

    /// Run the opponent's whole turn: keep firing while hitting, stop on the
    /// first miss or when the player fleet is gone.
    pub fn process_opponent_turn(&mut self) -> Result<Vec<ShotReport>, EngineError> {
        if self.phase != Phase::OpponentTurn {
            return Err(self.phase_error());
        }
        let mut reports = Vec::new();
        while self.phase == Phase::OpponentTurn {
            reports.push(self.opponent_fire()?);
        }
        Ok(reports)
    }

    /// Returns whether the game has ended, with the winner if so.
    pub fn is_game_over(&self) -> (bool, Option<Side>) {
        match self.winner() {
            Some(side) => (true, Some(side)),
            None => (false, None),
        }
    }

    pub fn winner(&self) -> Option<Side> {
        match self.phase {
            Phase::GameOver { winner } => Some(winner),
            _ => None,
        }
    }

    /// Generate a serializable snapshot of the current state.
    pub fn state(&self) -> SessionState {
        SessionState {
            fleet: self.fleet,
            player_fleet: self.player_fleet,
            opponent_fleet: self.opponent_fleet,
            player_view: self.player_view,
            opponent_view: self.opponent_view,
            phase: self.phase,
            ships_placed: self.ships_placed,
            pending_orientation: self.pending_orientation,
            player_ships_afloat: self.player_ships_afloat,
            opponent_ships_afloat: self.opponent_ships_afloat,
            player_shots: self.player_shots,
            opponent_shots: self.opponent_shots,
        }
    }

    /// Restore a session from a previously saved state.
    pub fn from_state(state: SessionState, targeting: T, rng: SmallRng) -> Self {
        Self {
            fleet: state.fleet,
            player_fleet: state.player_fleet,
            opponent_fleet: state.opponent_fleet,
            player_view: state.player_view,
            opponent_view: state.opponent_view,
            phase: state.phase,
            ships_placed: state.ships_placed,
            pending_orientation: state.pending_orientation,
            player_ships_afloat: state.player_ships_afloat,
            opponent_ships_afloat: state.opponent_ships_afloat,
            player_shots: state.player_shots,
            opponent_shots: state.opponent_shots,
            targeting,
            rng,
        }
    }

    fn phase_error(&self) -> EngineError {
        match self.phase {
            Phase::GameOver { .. } => EngineError::GameAlreadyOver,
            _ => EngineError::WrongPhase,
        }
    }

    fn enter(&mut self, phase: Phase) {
        if self.phase != phase {
            info!("{:?} -> {:?}", self.phase, phase);
            self.phase = phase;
        }
    }

    fn resolve_shot(
        &mut self,
        shooter: Side,
        row: usize,
        col: usize,
    ) -> Result<ShotReport, EngineError> {
        let (fleet, view, afloat) = match shooter {
            Side::Player => (
                &mut self.opponent_fleet,
                &mut self.player_view,
                &mut self.opponent_ships_afloat,
            ),
            Side::Opponent => (
                &mut self.player_fleet,
                &mut self.opponent_view,
                &mut self.player_ships_afloat,
            ),
        };
        if view.get(row, col)? != CellState::Empty {
            return Err(EngineError::AlreadyTargeted { row, col });
        }
        let result = combat::fire(fleet, row, col)?;
        let mark = if result.is_hit() {
            CellState::Hit
        } else {
            CellState::Miss
        };
        view.set(row, col, mark)?;
        if let ShotResult::Sunk(length) = result {
            afloat.remove_one(length);
        }
        let fleet_destroyed = combat::is_fleet_destroyed(fleet);
        match shooter {
            Side::Player => self.player_shots += 1,
            Side::Opponent => self.opponent_shots += 1,
        }
        debug!("{:?} fires at ({}, {}): {:?}", shooter, row, col, result);

        if fleet_destroyed {
            info!("{:?} destroyed the enemy fleet", shooter);
            self.enter(Phase::GameOver { winner: shooter });
        } else if !result.is_hit() {
            self.enter(match shooter {
                Side::Player => Phase::OpponentTurn,
                Side::Opponent => Phase::PlayerTurn,
            });
        }
        Ok(ShotReport {
            shooter,
            row,
            col,
            result,
            fleet_destroyed,
        })
    }
}

/// Auto-place `fleet`, starting over on a cleared grid whenever a ship runs
/// out of attempts.
fn place_fleet_with_retries(
    grid: &mut Grid,
    fleet: &FleetSpec,
    rng: &mut SmallRng,
) -> Result<(), EngineError> {
    let mut last_err = EngineError::InvalidFleet;
    for round in 1..=FLEET_PLACEMENT_ROUNDS {
        grid.clear();
        match placement::auto_place_fleet(grid, fleet, rng) {
            Ok(()) => return Ok(()),
            Err(err @ EngineError::PlacementExhausted { .. }) => {
                debug!("auto placement round {} failed: {}", round, err);
                last_err = err;
            }
            Err(err) => return Err(err),
        }
    }
    grid.clear();
    Err(last_err)
}
