//! Render / step / pace loop

use crate::config::{DisplayConfig, Settings, SimulationConfig};
use crate::game_of_life::{seeded_rng, Automaton, Grid, Stability, StabilityTracker};
use crate::utils::GridRenderer;
use anyhow::{Context, Result};
use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};
use serde::Serialize;
use std::io::Write;
use std::time::{Duration, Instant};

/// Drives an [`Automaton`] and writes one frame per generation to `out`.
pub struct Driver<W: Write> {
    automaton: Automaton,
    renderer: GridRenderer,
    simulation: SimulationConfig,
    display: DisplayConfig,
    tracker: Option<StabilityTracker>,
    out: W,
}

/// What a finished run looked like
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub frames_rendered: u64,
    pub final_generation: u64,
    pub final_population: usize,
    pub stability: Option<Stability>,
    #[serde(skip)]
    pub elapsed: Duration,
}

impl<W: Write> Driver<W> {
    /// Validate the settings and seed generation 0
    pub fn new(settings: &Settings, out: W) -> Result<Self> {
        settings.validate().context("Configuration validation failed")?;

        let mut rng = seeded_rng(settings.simulation.seed);
        let automaton = Automaton::seeded(settings.grid.width, settings.grid.height, &mut rng)
            .context("Failed to seed initial grid")?;

        tracing::info!(
            width = settings.grid.width,
            height = settings.grid.height,
            seed = ?settings.simulation.seed,
            population = automaton.current().living_count(),
            "seeded generation 0"
        );

        Ok(Self::with_automaton(settings, automaton, out))
    }

    /// Start from a known grid; the grid's own dimensions win over the config
    pub fn with_grid(settings: &Settings, grid: Grid, out: W) -> Self {
        Self::with_automaton(settings, Automaton::new(grid), out)
    }

    fn with_automaton(settings: &Settings, automaton: Automaton, out: W) -> Self {
        let tracker = settings
            .simulation
            .halt_when_stable
            .then(StabilityTracker::default);

        Self {
            automaton,
            renderer: GridRenderer::from_config(&settings.display),
            simulation: settings.simulation.clone(),
            display: settings.display.clone(),
            tracker,
            out,
        }
    }

    pub fn automaton(&self) -> &Automaton {
        &self.automaton
    }

    /// Loop until interrupted, until `max_generations` frames are out,
    /// or until the grid settles when `halt_when_stable` is set.
    pub fn run(&mut self) -> Result<RunSummary> {
        let start = Instant::now();
        let mut frames_rendered = 0u64;
        let mut stability = None;

        loop {
            self.render_frame().context("Failed to write frame")?;
            frames_rendered += 1;

            if let Some(tracker) = self.tracker.as_mut() {
                let observed = tracker.observe(self.automaton.current());
                if observed.is_settled() {
                    tracing::info!(
                        generation = self.automaton.generation(),
                        "grid settled: {}",
                        observed
                    );
                    stability = Some(observed);
                    break;
                }
            }

            if self
                .simulation
                .max_generations
                .is_some_and(|max| frames_rendered >= max)
            {
                break;
            }

            self.automaton.step();
            self.pace();
        }

        let summary = RunSummary {
            frames_rendered,
            final_generation: self.automaton.generation(),
            final_population: self.automaton.current().living_count(),
            stability,
            elapsed: start.elapsed(),
        };
        tracing::info!(?summary, "run finished");
        Ok(summary)
    }

    /// Clear the display, then write the current generation
    pub fn render_frame(&mut self) -> std::io::Result<()> {
        let grid = self.automaton.current();

        if self.display.clear_screen {
            queue!(self.out, MoveTo(0, 0), Clear(ClearType::All))?;
        }
        self.out.write_all(self.renderer.render(grid).as_bytes())?;
        if self.display.show_status {
            writeln!(
                self.out,
                "{}",
                GridRenderer::status_line(grid, self.automaton.generation())
            )?;
        }
        self.out.flush()?;

        tracing::debug!(
            generation = self.automaton.generation(),
            population = grid.living_count(),
            "frame rendered"
        );
        Ok(())
    }

    fn pace(&self) {
        if self.simulation.interval_ms > 0 {
            std::thread::sleep(Duration::from_millis(self.simulation.interval_ms));
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
