//! Main CLI application for the toroidal Game of Life

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use game_of_life_torus::{
    config::{CliOverrides, Settings},
    run_simulation,
    simulation::Snapshot,
    utils::{init_logging, ColorOutput},
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "game_of_life_torus")]
#[command(about = "Conway's Game of Life on a wrap-around grid")]
#[command(version = "0.1.0")]
struct Cli {
    /// Verbose logging on stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Animate the simulation in the terminal until interrupted
    Run {
        #[command(flatten)]
        options: SimulationArgs,

        /// Pause between generations in milliseconds (overrides config)
        #[arg(short, long)]
        interval_ms: Option<u64>,

        /// Stop after this many generations (overrides config)
        #[arg(short = 'n', long)]
        max_generations: Option<u64>,

        /// Stop once the grid dies out, freezes or blinks
        #[arg(long)]
        halt_when_stable: bool,

        /// Do not clear the screen between frames
        #[arg(long)]
        no_clear: bool,

        /// Print generation and population under each frame
        #[arg(long)]
        status: bool,
    },

    /// Advance a seeded grid headlessly and print one generation
    Snapshot {
        #[command(flatten)]
        options: SimulationArgs,

        /// Generations to advance before printing
        #[arg(short, long, default_value_t = 0)]
        generations: u64,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: SnapshotFormat,
    },

    /// Write a default configuration file
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Args)]
struct SimulationArgs {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.yaml")]
    config: PathBuf,

    /// Grid width (overrides config)
    #[arg(long)]
    width: Option<usize>,

    /// Grid height (overrides config)
    #[arg(long)]
    height: Option<usize>,

    /// Random seed for a reproducible generation 0 (overrides config)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Symbol for living cells (overrides config)
    #[arg(long)]
    alive: Option<char>,

    /// Symbol for dead cells (overrides config)
    #[arg(long)]
    dead: Option<char>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum SnapshotFormat {
    Text,
    Json,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(error) = dispatch(cli.command) {
        eprintln!("{}", ColorOutput::error(&format!("Error: {error:#}")));
        std::process::exit(1);
    }
}

fn dispatch(command: Commands) -> Result<()> {
    match command {
        Commands::Run {
            options,
            interval_ms,
            max_generations,
            halt_when_stable,
            no_clear,
            status,
        } => {
            let overrides = CliOverrides {
                interval_ms,
                max_generations,
                halt_when_stable,
                no_clear,
                show_status: status,
                ..options.overrides()
            };
            run_command(&options.config, &overrides)
        }
        Commands::Snapshot {
            options,
            generations,
            format,
        } => snapshot_command(&options.config, &options.overrides(), generations, format),
        Commands::Setup { directory, force } => setup_command(directory, force),
    }
}

impl SimulationArgs {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            width: self.width,
            height: self.height,
            seed: self.seed,
            alive_symbol: self.alive,
            dead_symbol: self.dead,
            ..Default::default()
        }
    }
}

/// Load configuration, falling back to defaults, then apply CLI overrides
fn load_settings(config_path: &Path, overrides: &CliOverrides) -> Result<Settings> {
    let mut settings = if config_path.exists() {
        Settings::read_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?
    } else {
        tracing::info!("config file {} not found, using defaults", config_path.display());
        Settings::default()
    };

    settings.merge_with_cli(overrides);
    settings.validate().context("Configuration validation failed")?;
    Ok(settings)
}

fn run_command(config_path: &Path, overrides: &CliOverrides) -> Result<()> {
    let settings = load_settings(config_path, overrides)?;
    let summary = run_simulation(&settings).context("Simulation failed")?;

    let mut message = format!(
        "Stopped after {} generation(s), population {}",
        summary.final_generation, summary.final_population
    );
    if let Some(stability) = summary.stability {
        message.push_str(&format!(" ({stability})"));
    }
    println!("{}", ColorOutput::success(&message));
    Ok(())
}

fn snapshot_command(
    config_path: &Path,
    overrides: &CliOverrides,
    generations: u64,
    format: SnapshotFormat,
) -> Result<()> {
    let settings = load_settings(config_path, overrides)?;
    let snapshot = Snapshot::after(&settings, generations)?;

    match format {
        SnapshotFormat::Text => print!("{}", snapshot.to_text()),
        SnapshotFormat::Json => println!(
            "{}",
            snapshot.to_json().context("Failed to serialize snapshot")?
        ),
    }
    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    let config_path = directory.join("config/default.yaml");
    if config_path.exists() && !force {
        println!(
            "{}",
            ColorOutput::warning(&format!("Skipped: {} (already exists)", config_path.display()))
        );
        return Ok(());
    }

    Settings::default()
        .to_file(&config_path)
        .context("Failed to create default configuration")?;
    println!("{}", ColorOutput::success(&format!("Created: {}", config_path.display())));
    println!(
        "{}",
        ColorOutput::info(&format!("Run: cargo run -- run --config {}", config_path.display()))
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from([
            "game_of_life_torus",
            "run",
            "--width",
            "60",
            "--height",
            "20",
            "--seed",
            "4",
            "-n",
            "10",
            "--dead",
            ".",
        ])
        .unwrap();

        match cli.command {
            Commands::Run {
                options,
                max_generations,
                ..
            } => {
                let overrides = options.overrides();
                assert_eq!(overrides.width, Some(60));
                assert_eq!(overrides.height, Some(20));
                assert_eq!(overrides.seed, Some(4));
                assert_eq!(overrides.dead_symbol, Some('.'));
                assert_eq!(max_generations, Some(10));
            }
            _ => panic!("expected run command"),
        }
    }

    #[test]
    fn test_snapshot_format_parsing() {
        let cli = Cli::try_parse_from(["game_of_life_torus", "snapshot", "-g", "5", "-f", "json"]);
        assert!(cli.is_ok());
        assert!(Cli::try_parse_from(["game_of_life_torus", "snapshot", "-f", "yaml"]).is_err());
    }

    #[test]
    fn test_load_settings_rejects_zero_width() {
        let overrides = CliOverrides {
            width: Some(0),
            ..Default::default()
        };
        assert!(load_settings(Path::new("does/not/exist.yaml"), &overrides).is_err());
    }

    #[test]
    fn test_load_settings_rejects_oversized_grid() {
        let overrides = CliOverrides {
            width: Some(5_000_000),
            height: Some(5_000_000),
            ..Default::default()
        };
        let error = load_settings(Path::new("does/not/exist.yaml"), &overrides).unwrap_err();
        assert!(format!("{error:#}").contains("exceeds the limit"));
    }

    #[test]
    fn test_cli_overrides_repair_config_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("broken.yaml");
        std::fs::write(
            &config_path,
            "grid:\n  width: 0\n  height: 12\nsimulation:\n  max_generations: 0\n",
        )
        .unwrap();

        assert!(load_settings(&config_path, &CliOverrides::default()).is_err());

        let overrides = CliOverrides {
            width: Some(10),
            max_generations: Some(5),
            ..Default::default()
        };
        let settings = load_settings(&config_path, &overrides).unwrap();
        assert_eq!((settings.grid.width, settings.grid.height), (10, 12));
        assert_eq!(settings.simulation.max_generations, Some(5));
    }

    #[test]
    fn test_setup_command() {
        let temp_dir = tempdir().unwrap();
        let result = setup_command(temp_dir.path().to_path_buf(), false);

        assert!(result.is_ok());
        let config_path = temp_dir.path().join("config/default.yaml");
        assert!(config_path.exists());
        assert_eq!(Settings::from_file(&config_path).unwrap(), Settings::default());
    }
}
