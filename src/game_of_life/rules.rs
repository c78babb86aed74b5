//! Conway's B3/S23 transition rule on a toroidal grid

use super::{Cell, Grid, GridError};
use rayon::prelude::*;

/// Game of Life rules engine
pub struct GameOfLifeRules;

impl GameOfLifeRules {
    /// Compute the next generation into a freshly allocated grid.
    /// `current` is never modified.
    pub fn step(current: &Grid) -> Grid {
        let mut next = current.clone();
        Self::fill_next(current, &mut next);
        next
    }

    /// Compute the next generation of `current` into `next`, overwriting every cell.
    pub fn step_into(current: &Grid, next: &mut Grid) -> Result<(), GridError> {
        if !current.same_dimensions(next) {
            return Err(GridError::DimensionMismatch {
                expected: current.dimensions(),
                found: next.dimensions(),
            });
        }
        Self::fill_next(current, next);
        Ok(())
    }

    /// Rows are written in parallel; every read goes to `current`.
    pub(crate) fn fill_next(current: &Grid, next: &mut Grid) {
        debug_assert!(current.same_dimensions(next));
        let width = current.width();

        next.cells_mut()
            .par_chunks_mut(width)
            .enumerate()
            .for_each(|(y, row)| {
                for (x, slot) in row.iter_mut().enumerate() {
                    let cell = current.cells()[y * width + x];
                    *slot = Self::next_state(cell, current.count_neighbors(x, y));
                }
            });
    }

    /// Evolve the grid for multiple generations
    pub fn evolve_generations(grid: &Grid, generations: usize) -> Grid {
        let mut current = grid.clone();
        let mut next = grid.clone();
        for _ in 0..generations {
            Self::fill_next(&current, &mut next);
            std::mem::swap(&mut current, &mut next);
        }
        current
    }

    /// Check if a cell should be alive in the next generation given its current state and neighbor count
    pub fn should_be_alive(cell: Cell, neighbor_count: u8) -> bool {
        matches!((cell, neighbor_count), (Cell::Alive, 2 | 3) | (Cell::Dead, 3))
    }

    #[inline]
    pub fn next_state(cell: Cell, neighbor_count: u8) -> Cell {
        Cell::from(Self::should_be_alive(cell, neighbor_count))
    }
}
