//! Persisted user settings: the board size, stored as a small JSON file.

use std::fs;
use std::path::Path;

use anyhow::Context;
use log::warn;
use serde::{Deserialize, Serialize};

use crate::config::{is_valid_board_size, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};

/// Default location of the settings file, relative to the working directory.
pub const SETTINGS_FILE: &str = "seabattle_settings.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_board_size")]
    pub board_size: usize,
}

fn default_board_size() -> usize {
    DEFAULT_BOARD_SIZE
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
        }
    }
}

impl Settings {
    /// Load settings from `path`. A missing or malformed file, or a board size
    /// out of range, yields the defaults.
    pub fn load(path: &Path) -> Self {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(_) => return Self::default(),
        };
        match serde_json::from_str::<Settings>(&text) {
            Ok(settings) if is_valid_board_size(settings.board_size) => settings,
            Ok(settings) => {
                warn!(
                    "board size {} in {} is outside {}..={}, using {}",
                    settings.board_size,
                    path.display(),
                    MIN_BOARD_SIZE,
                    MAX_BOARD_SIZE,
                    DEFAULT_BOARD_SIZE
                );
                Self::default()
            }
            Err(e) => {
                warn!("ignoring unreadable settings {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Write the settings to `path` as JSON.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let text = serde_json::to_string(self)?;
        fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    /// Change the board size, rejecting values outside the supported range.
    pub fn set_board_size(&mut self, size: usize) -> anyhow::Result<()> {
        if !is_valid_board_size(size) {
            anyhow::bail!(
                "board size must be between {} and {}, got {}",
                MIN_BOARD_SIZE,
                MAX_BOARD_SIZE,
                size
            );
        }
        self.board_size = size;
        Ok(())
    }
}
