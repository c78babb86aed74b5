//! Random generation-0 grids

use super::{Cell, Grid, GridError};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Produce a random grid. Each cell draws one bit independently:
/// 0 maps to [`Cell::Alive`], 1 to [`Cell::Dead`].
pub fn seed<R: Rng + ?Sized>(width: usize, height: usize, rng: &mut R) -> Result<Grid, GridError> {
    Grid::from_fn(width, height, |_, _| Cell::from_bit(u8::from(rng.gen::<bool>())))
}

/// Deterministic generator when a seed is given, entropy-seeded otherwise
pub fn seeded_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}
