//! Double-buffered automaton state

use super::{seed, GameOfLifeRules, Grid, GridError};
use rand::Rng;

/// Owns the current generation plus a scratch buffer of the same size.
///
/// Each step writes the whole next generation into the scratch buffer and
/// only then swaps the two, so no cell is ever read after being overwritten.
#[derive(Debug, Clone)]
pub struct Automaton {
    current: Grid,
    scratch: Grid,
    generation: u64,
}

impl Automaton {
    pub fn new(initial: Grid) -> Self {
        Self {
            scratch: initial.clone(),
            current: initial,
            generation: 0,
        }
    }

    /// Start from a random generation 0
    pub fn seeded<R: Rng + ?Sized>(width: usize, height: usize, rng: &mut R) -> Result<Self, GridError> {
        Ok(Self::new(seed(width, height, rng)?))
    }

    pub fn current(&self) -> &Grid {
        &self.current
    }

    /// Number of steps taken since generation 0
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn step(&mut self) {
        GameOfLifeRules::fill_next(&self.current, &mut self.scratch);
        std::mem::swap(&mut self.current, &mut self.scratch);
        self.generation += 1;
    }

    pub fn into_grid(self) -> Grid {
        self.current
    }
}
