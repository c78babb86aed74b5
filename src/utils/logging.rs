//! Tracing subscriber setup

use tracing_subscriber::EnvFilter;

/// Install a stderr subscriber so log lines never mix with frames on stdout.
/// `RUST_LOG` wins over the verbosity flag. Safe to call more than once.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .ok();
}
