//! Configuration settings for the toroidal Game of Life

use crate::game_of_life::MAX_CELLS;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub grid: GridConfig,
    pub simulation: SimulationConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub width: usize,
    pub height: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Pause between frames; 0 runs as fast as possible
    pub interval_ms: u64,
    /// Fixed rng seed for reproducible runs
    pub seed: Option<u64>,
    /// Stop after this many frames instead of running until interrupted
    pub max_generations: Option<u64>,
    pub halt_when_stable: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub alive_symbol: char,
    pub dead_symbol: char,
    pub clear_screen: bool,
    pub show_status: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("grid of {width}x{height} exceeds the limit of {max} cells")]
    GridTooLarge {
        width: usize,
        height: usize,
        max: usize,
    },

    #[error("alive and dead cells need distinct symbols, both are {0:?}")]
    IdenticalSymbols(char),

    #[error("display symbol {0:?} is a control character")]
    ControlSymbol(char),

    #[error("max_generations must be positive")]
    ZeroGenerations,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: 80,
            height: 30,
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            interval_ms: 100,
            seed: None,
            max_generations: None,
            halt_when_stable: false,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            alive_symbol: '#',
            dead_symbol: ' ',
            clear_screen: true,
            show_status: false,
        }
    }
}

impl Settings {
    /// Load and validate settings from a YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let settings = Self::read_file(path)?;
        settings
            .validate()
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        Ok(settings)
    }

    /// Parse a YAML file without validating it, so CLI overrides can still
    /// repair it before [`Settings::validate`] runs
    pub fn read_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<(), SettingsError> {
        let GridConfig { width, height } = self.grid;
        if width == 0 || height == 0 {
            return Err(SettingsError::InvalidDimensions { width, height });
        }
        if width.checked_mul(height).map_or(true, |cells| cells > MAX_CELLS) {
            return Err(SettingsError::GridTooLarge {
                width,
                height,
                max: MAX_CELLS,
            });
        }

        let DisplayConfig {
            alive_symbol,
            dead_symbol,
            ..
        } = self.display;
        if alive_symbol == dead_symbol {
            return Err(SettingsError::IdenticalSymbols(alive_symbol));
        }
        if let Some(symbol) = [alive_symbol, dead_symbol].into_iter().find(|c| c.is_control()) {
            return Err(SettingsError::ControlSymbol(symbol));
        }

        if self.simulation.max_generations == Some(0) {
            return Err(SettingsError::ZeroGenerations);
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(width) = cli_overrides.width {
            self.grid.width = width;
        }
        if let Some(height) = cli_overrides.height {
            self.grid.height = height;
        }
        if let Some(interval_ms) = cli_overrides.interval_ms {
            self.simulation.interval_ms = interval_ms;
        }
        if cli_overrides.seed.is_some() {
            self.simulation.seed = cli_overrides.seed;
        }
        if cli_overrides.max_generations.is_some() {
            self.simulation.max_generations = cli_overrides.max_generations;
        }
        if cli_overrides.halt_when_stable {
            self.simulation.halt_when_stable = true;
        }
        if let Some(alive) = cli_overrides.alive_symbol {
            self.display.alive_symbol = alive;
        }
        if let Some(dead) = cli_overrides.dead_symbol {
            self.display.dead_symbol = dead;
        }
        if cli_overrides.no_clear {
            self.display.clear_screen = false;
        }
        if cli_overrides.show_status {
            self.display.show_status = true;
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub width: Option<usize>,
    pub height: Option<usize>,
    pub interval_ms: Option<u64>,
    pub seed: Option<u64>,
    pub max_generations: Option<u64>,
    pub halt_when_stable: bool,
    pub alive_symbol: Option<char>,
    pub dead_symbol: Option<char>,
    pub no_clear: bool,
    pub show_status: bool,
}
