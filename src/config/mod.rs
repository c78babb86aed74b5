//! Configuration management for the simulation

pub mod settings;

pub use settings::{
    CliOverrides, DisplayConfig, GridConfig, Settings, SettingsError, SimulationConfig,
};
