//! Detecting when a run has settled

use super::Grid;
use serde::Serialize;
use std::collections::VecDeque;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Stability {
    Evolving,
    Extinct,
    StillLife,
    Oscillator { period: usize },
}

impl Stability {
    pub fn is_settled(self) -> bool {
        !matches!(self, Stability::Evolving)
    }
}

impl fmt::Display for Stability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stability::Evolving => write!(f, "evolving"),
            Stability::Extinct => write!(f, "extinct"),
            Stability::StillLife => write!(f, "still life"),
            Stability::Oscillator { period } => write!(f, "oscillator (period {period})"),
        }
    }
}

/// Remembers the last few generations and reports when the newest one
/// repeats an earlier one.
#[derive(Debug, Clone)]
pub struct StabilityTracker {
    history: VecDeque<Grid>,
    max_period: usize,
}

impl StabilityTracker {
    /// `max_period` of 1 only catches still lifes, 2 also catches blinkers.
    pub fn new(max_period: usize) -> Self {
        let max_period = max_period.max(1);
        Self {
            history: VecDeque::with_capacity(max_period),
            max_period,
        }
    }

    pub fn observe(&mut self, grid: &Grid) -> Stability {
        let stability = if grid.is_extinct() {
            Stability::Extinct
        } else {
            self.history
                .iter()
                .rev()
                .position(|seen| seen == grid)
                .map(|offset| match offset + 1 {
                    1 => Stability::StillLife,
                    period => Stability::Oscillator { period },
                })
                .unwrap_or(Stability::Evolving)
        };

        if self.history.len() == self.max_period {
            self.history.pop_front();
        }
        self.history.push_back(grid.clone());
        stability
    }
}

impl Default for StabilityTracker {
    fn default() -> Self {
        Self::new(2)
    }
}
