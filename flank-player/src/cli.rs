//! Command-line options and logging setup for the `flank` binary.

use clap::Parser;
use std::io;
use tracing_subscriber::EnvFilter;

/// Play Othello in the terminal, against people or the computer.
#[derive(Parser, Debug, Clone)]
#[command(name = "flank")]
#[command(version)]
pub struct Options {
    /// Seed for computer players, for reproducible games
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log filter directive, e.g. "info" or "flank_othello=debug" (RUST_LOG takes precedence)
    #[arg(long, default_value = "warn")]
    pub log: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            seed: None,
            log: "warn".to_owned(),
        }
    }
}

/// Install the global `tracing` subscriber. Logs go to stderr so they never
/// interleave with the board on stdout. Later calls are no-ops.
pub fn init_logging(default_filter: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(io::stderr)
        .try_init();
}
