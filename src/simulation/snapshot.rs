//! Headless runs that report a single generation

use crate::config::Settings;
use crate::game_of_life::{seeded_rng, Automaton};
use crate::utils::GridRenderer;
use anyhow::{Context, Result};
use serde::Serialize;

/// One generation, rendered with the configured symbols
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub generation: u64,
    pub width: usize,
    pub height: usize,
    pub population: usize,
    pub density: f64,
    pub rows: Vec<String>,
    /// `(x, y)` of every living cell, row by row
    pub living_cells: Vec<(usize, usize)>,
}

impl Snapshot {
    pub fn capture(automaton: &Automaton, renderer: &GridRenderer) -> Self {
        let grid = automaton.current();
        let living_cells = grid.living_cells();
        Self {
            generation: automaton.generation(),
            width: grid.width(),
            height: grid.height(),
            population: living_cells.len(),
            density: grid.density(),
            rows: renderer.render(grid).lines().map(str::to_owned).collect(),
            living_cells,
        }
    }

    /// Seed from the settings and advance `generations` steps without pacing
    pub fn after(settings: &Settings, generations: u64) -> Result<Self> {
        settings.validate().context("Configuration validation failed")?;

        let mut rng = seeded_rng(settings.simulation.seed);
        let mut automaton = Automaton::seeded(settings.grid.width, settings.grid.height, &mut rng)
            .context("Failed to seed initial grid")?;
        for _ in 0..generations {
            automaton.step();
        }

        Ok(Self::capture(&automaton, &GridRenderer::from_config(&settings.display)))
    }

    pub fn to_text(&self) -> String {
        let mut output = self.rows.join("\n");
        output.push('\n');
        output
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> Settings {
        let mut settings = Settings::default();
        settings.grid.width = 12;
        settings.grid.height = 7;
        settings.simulation.seed = Some(5);
        settings
    }

    #[test]
    fn test_snapshot_shape() {
        let snapshot = Snapshot::after(&settings(), 3).unwrap();
        assert_eq!(snapshot.generation, 3);
        assert_eq!((snapshot.width, snapshot.height), (12, 7));
        assert_eq!(snapshot.rows.len(), 7);
        assert!(snapshot.rows.iter().all(|row| row.chars().count() == 12));
        let alive = snapshot
            .rows
            .iter()
            .flat_map(|row| row.chars())
            .filter(|&c| c == '#')
            .count();
        assert_eq!(alive, snapshot.population);
    }

    #[test]
    fn test_living_cells_match_rows() {
        let snapshot = Snapshot::after(&settings(), 2).unwrap();
        let from_rows: Vec<(usize, usize)> = snapshot
            .rows
            .iter()
            .enumerate()
            .flat_map(|(y, row)| {
                row.chars()
                    .enumerate()
                    .filter(|&(_, c)| c == '#')
                    .map(move |(x, _)| (x, y))
            })
            .collect();
        assert_eq!(snapshot.living_cells, from_rows);
        assert_eq!(snapshot.living_cells.len(), snapshot.population);
    }

    #[test]
    fn test_snapshot_is_deterministic_with_seed() {
        assert_eq!(
            Snapshot::after(&settings(), 10).unwrap(),
            Snapshot::after(&settings(), 10).unwrap()
        );
    }

    #[test]
    fn test_snapshot_json() {
        let snapshot = Snapshot::after(&settings(), 0).unwrap();
        let json: serde_json::Value = serde_json::from_str(&snapshot.to_json().unwrap()).unwrap();
        assert_eq!(json["generation"], 0);
        assert_eq!(json["width"], 12);
        assert_eq!(json["rows"].as_array().unwrap().len(), 7);
        assert_eq!(
            json["living_cells"].as_array().unwrap().len(),
            snapshot.population
        );
    }

    #[test]
    fn test_snapshot_rejects_bad_config() {
        let mut settings = settings();
        settings.grid.width = 0;
        assert!(Snapshot::after(&settings, 1).is_err());
    }
}
