//! Errors raised while constructing or addressing grids

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("grid of {width}x{height} exceeds the limit of {max} cells")]
    TooLarge {
        width: usize,
        height: usize,
        max: usize,
    },

    #[error("coordinates ({x}, {y}) out of bounds for {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("grid dimension mismatch: expected {expected:?}, found {found:?}")]
    DimensionMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },

    #[error("row {row} has length {len}, expected {expected} (all rows must have the same length)")]
    RaggedRows { row: usize, len: usize, expected: usize },

    #[error("invalid character '{symbol}' at ({x}, {y})")]
    InvalidSymbol { symbol: char, x: usize, y: usize },
}
