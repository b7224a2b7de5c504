//! Tic-tac-toe game engine.
//!
//! Owns the 3x3 board and whose turn it is, validates moves, and reports
//! whether the game has been won or drawn. Input and output live elsewhere;
//! the only presentation here is the board's `Display` rendering.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameState, GameStatus, Player};
//!
//! let mut game = GameState::new();
//! game.attempt_move(1, 1)?;
//! assert_eq!(game.conclude_turn(), GameStatus::InProgress);
//! assert_eq!(game.current_player(), Player::O);
//! # Ok::<(), tictactoe_engine::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
pub mod invariants;
mod phases;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use game::GameState;
pub use phases::{GameStatus, Outcome};
pub use types::{Board, Cell, Coord, Player, SIZE};
