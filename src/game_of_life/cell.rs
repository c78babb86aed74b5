//! Two-state cell value

use serde::{Deserialize, Serialize};

/// State of a single cell. Position is the only identity a cell has.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cell {
    Alive,
    #[default]
    Dead,
}

impl Cell {
    #[inline]
    pub fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// Map one random bit to a cell: 0 is alive, anything else is dead.
    #[inline]
    pub fn from_bit(bit: u8) -> Self {
        if bit == 0 {
            Cell::Alive
        } else {
            Cell::Dead
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive {
            Cell::Alive
        } else {
            Cell::Dead
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_mapping() {
        assert_eq!(Cell::from_bit(0), Cell::Alive);
        assert_eq!(Cell::from_bit(1), Cell::Dead);
    }

    #[test]
    fn test_default_is_dead() {
        assert_eq!(Cell::default(), Cell::Dead);
        assert!(!Cell::default().is_alive());
        assert!(Cell::from(true).is_alive());
    }
}
