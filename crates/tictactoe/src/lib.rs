//! Two-player tic-tac-toe over a line-oriented terminal.
//!
//! The game rules live in [`tictactoe_engine`]; this crate supplies the
//! console loop that drives them, plus settings and command-line parsing
//! for the `tictactoe` binary.
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use tictactoe::{Console, GameState, Outcome, Player};
//!
//! let moves = "0 0\n0 1\n1 0\n1 1\n2 0\n";
//! let mut console = Console::new(Cursor::new(moves), Vec::new());
//! let outcome = console.play(GameState::new())?;
//! assert_eq!(outcome, Outcome::Winner(Player::X));
//! # Ok::<(), tictactoe::PlayError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod console;
mod input;
mod settings;

pub use cli::Cli;
pub use console::{Console, PlayError, INVALID_INPUT};
pub use input::{parse_move, InputError};
pub use settings::{Settings, SettingsError};

pub use tictactoe_engine::{Board, Cell, GameState, GameStatus, MoveError, Outcome, Player};
