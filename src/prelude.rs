//! Commonly used types and utilities for ease of import.

pub use crate::{
    CellState, DensityTargeting, EngineError, FleetSpec, GameSession, Grid, HuntTargeting,
    Orientation, Phase, ShotReport, ShotResult, Side, Targeting,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, CliDriver, Settings};
