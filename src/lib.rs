//! Conway's Game of Life on a torus
//!
//! This library provides a double-buffered Game of Life engine with
//! wrap-around edges, random seeding, and a terminal driver that redraws
//! one text frame per generation.

pub mod config;
pub mod game_of_life;
pub mod simulation;
pub mod utils;

pub use config::Settings;
pub use game_of_life::{Automaton, Cell, GameOfLifeRules, Grid};
pub use simulation::{Driver, RunSummary};

use anyhow::Result;

/// Main entry point: animate on stdout with the given settings
pub fn run_simulation(settings: &Settings) -> Result<RunSummary> {
    let stdout = std::io::stdout();
    let mut driver = Driver::new(settings, stdout.lock())?;
    driver.run()
}
