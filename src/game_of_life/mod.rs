//! Game of Life core functionality

pub mod automaton;
pub mod cell;
pub mod error;
pub mod grid;
pub mod rules;
pub mod seed;
pub mod stability;

pub use automaton::Automaton;
pub use cell::Cell;
pub use error::GridError;
pub use grid::{Grid, MAX_CELLS};
pub use rules::GameOfLifeRules;
pub use seed::{seed, seeded_rng};
pub use stability::{Stability, StabilityTracker};
