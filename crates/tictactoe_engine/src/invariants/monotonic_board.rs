//! Monotonic board invariant: cells never change once marked.

use super::super::{Board, Cell, GameState};
use super::Invariant;

/// Invariant: Board cells are monotonic (never overwritten).
///
/// Replaying the move history onto an empty board must hit only empty cells
/// and must reproduce the current board exactly.
pub struct MonotonicBoardInvariant;

impl Invariant<GameState> for MonotonicBoardInvariant {
    fn holds(game: &GameState) -> bool {
        let mut reconstructed = Board::new();

        for mov in game.history() {
            if reconstructed.cell(mov.coord) != Cell::Empty {
                return false;
            }
            reconstructed.put(mov.coord, Cell::Mark(mov.player));
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Coord, Move, Player};

    #[test]
    fn test_new_game_holds() {
        assert!(MonotonicBoardInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_moves_hold() {
        let game = GameState::replay(&[(1, 1), (0, 0), (2, 2)]).unwrap();
        assert!(MonotonicBoardInvariant::holds(&game));
    }

    #[test]
    fn test_overwritten_cell_violates() {
        let mut game = GameState::replay(&[(1, 1)]).unwrap();
        game.board.put(Coord::at(1, 1), Cell::Mark(Player::O));
        assert!(!MonotonicBoardInvariant::holds(&game));
    }

    #[test]
    fn test_duplicate_history_entry_violates() {
        let mut game = GameState::replay(&[(1, 1), (0, 0)]).unwrap();
        game.history.push(Move::new(Player::X, Coord::at(1, 1)));
        assert!(!MonotonicBoardInvariant::holds(&game));
    }
}
