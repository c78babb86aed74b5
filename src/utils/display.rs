//! Display and output formatting utilities

use crate::config::DisplayConfig;
use crate::game_of_life::{Cell, Grid};

/// Turns grids into text frames. The only place cell states meet symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridRenderer {
    alive: char,
    dead: char,
}

impl GridRenderer {
    pub fn new(alive: char, dead: char) -> Self {
        Self { alive, dead }
    }

    pub fn from_config(config: &DisplayConfig) -> Self {
        Self::new(config.alive_symbol, config.dead_symbol)
    }

    #[inline]
    pub fn symbol(&self, cell: Cell) -> char {
        match cell {
            Cell::Alive => self.alive,
            Cell::Dead => self.dead,
        }
    }

    /// H lines of W symbols, top row first, each line ending in `\n`
    pub fn render(&self, grid: &Grid) -> String {
        let mut output = String::with_capacity(grid.height() * (grid.width() + 1));
        for row in grid.rows() {
            output.extend(row.iter().map(|&cell| self.symbol(cell)));
            output.push('\n');
        }
        output
    }

    /// One-line summary shown under a frame
    pub fn status_line(grid: &Grid, generation: u64) -> String {
        format!(
            "generation {} | population {} | {}x{}",
            generation,
            grid.living_count(),
            grid.width(),
            grid.height()
        )
    }
}

impl Default for GridRenderer {
    fn default() -> Self {
        Self::from_config(&DisplayConfig::default())
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    /// Check if terminal supports color
    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err() && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}
