//! Command-line interface for the terminal game.

use clap::Parser;
use std::path::PathBuf;

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe on a 3x3 grid", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML settings file (ignored if missing)
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Tracing filter, overriding RUST_LOG and the settings file
    #[arg(long)]
    pub log_filter: Option<String>,
}
