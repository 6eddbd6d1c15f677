//! Common types for the engine: errors and shot results.

/// Outcome of a single shot against a fleet grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotResult {
    /// Shot landed on open water.
    Miss,
    /// Shot struck a ship that still has intact cells.
    Hit,
    /// Shot struck the last intact cell of a ship, carrying its length.
    Sunk(usize),
}

impl ShotResult {
    /// `true` for both `Hit` and `Sunk`.
    pub fn is_hit(&self) -> bool {
        !matches!(self, ShotResult::Miss)
    }
}

/// Errors returned by engine operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// Coordinate lies outside the grid.
    OutOfBounds { row: usize, col: usize },
    /// Ship run leaves the grid or touches another ship.
    InvalidPlacement,
    /// The cell has already been fired upon.
    AlreadyTargeted { row: usize, col: usize },
    /// Random placement ran out of attempts for a ship of this length.
    PlacementExhausted { length: usize },
    /// The game has a winner; no further shots are accepted.
    GameAlreadyOver,
    /// Board size outside the supported range.
    InvalidBoardSize(usize),
    /// Fleet is empty, too large, or has a ship that cannot fit any board.
    InvalidFleet,
    /// Operation not allowed in the current phase of the session.
    WrongPhase,
    /// Every cell of the target view has already been resolved.
    NoTargetsLeft,
}

impl core::fmt::Display for EngineError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            EngineError::OutOfBounds { row, col } => {
                write!(f, "Coordinate ({}, {}) is outside the grid", row, col)
            }
            EngineError::InvalidPlacement => {
                write!(f, "Ship must fit on the board and may not touch another ship")
            }
            EngineError::AlreadyTargeted { row, col } => {
                write!(f, "Cell ({}, {}) was already fired upon", row, col)
            }
            EngineError::PlacementExhausted { length } => {
                write!(f, "Unable to place ship of length {} within the attempt budget", length)
            }
            EngineError::GameAlreadyOver => write!(f, "Game is already over"),
            EngineError::InvalidBoardSize(n) => write!(f, "Board size {} is not supported", n),
            EngineError::InvalidFleet => write!(f, "Fleet specification is invalid"),
            EngineError::WrongPhase => write!(f, "Operation not allowed at this point of the game"),
            EngineError::NoTargetsLeft => write!(f, "No unexplored cells left to target"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EngineError {}
