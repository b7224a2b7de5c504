//! Tic-tac-toe - terminal entry point.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use std::io;
use tictactoe::{Cli, Console, GameState, Settings};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::load_or_default(&cli.config)?;
    initialize_tracing(cli.log_filter.as_deref(), &settings);

    run()
}

/// Plays one game on stdin/stdout.
#[instrument]
fn run() -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());

    let outcome = console.play(GameState::new())?;
    info!(%outcome, "Exiting");
    Ok(())
}

/// Sends diagnostics to stderr so stdout carries only the game transcript.
///
/// Filter precedence: `--log-filter`, then `RUST_LOG`, then the settings file.
fn initialize_tracing(flag: Option<&str>, settings: &Settings) {
    let filter = match flag {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(settings.log_filter())),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
