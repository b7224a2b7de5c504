//! First-class action types for tic-tac-toe.
//!
//! An accepted move is recorded as a [`Move`] in the game history, so the
//! sequence of play can be checked against the board and replayed.

use super::types::{Coord, Player};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// Where the mark was placed.
    pub coord: Coord,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.coord)
    }
}

/// Error that can occur when applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The target cell already holds a mark.
    #[display("Cell ({row}, {col}) is already occupied")]
    OccupiedCell {
        /// Row of the rejected move.
        row: usize,
        /// Column of the rejected move.
        col: usize,
    },

    /// The coordinate lies outside the 3x3 grid.
    #[display("Cell ({row}, {col}) is off the board")]
    OutOfBounds {
        /// Row of the rejected move.
        row: usize,
        /// Column of the rejected move.
        col: usize,
    },

    /// The player to move has already marked a cell this turn.
    #[display("Player {_0} has already moved this turn")]
    TurnNotConcluded(#[error(not(source))] Player),

    /// The game has already been won or drawn.
    #[display("Game is already over")]
    GameOver,
}
