//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Cell};
use tracing::instrument;

/// Checks if the board is full (no empty cells).
///
/// A full board with no winner indicates a draw.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|cell| *cell != Cell::Empty)
}

#[cfg(test)]
mod tests {
    use super::super::super::Player;
    use super::super::win::has_line;
    use super::*;

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_one_gap_not_full() {
        let x = Cell::Mark(Player::X);
        let o = Cell::Mark(Player::O);
        let board = Board::from_rows([[x, o, x], [o, x, o], [o, x, Cell::Empty]]);
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board() {
        let x = Cell::Mark(Player::X);
        let o = Cell::Mark(Player::O);
        let board = Board::from_rows([[x, o, x], [o, x, o], [o, x, x]]);
        assert!(is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X O / O X O
        let x = Cell::Mark(Player::X);
        let o = Cell::Mark(Player::O);
        let board = Board::from_rows([[x, o, x], [o, x, o], [o, x, o]]);
        assert!(is_full(&board));
        assert!(!has_line(&board, Player::X));
        assert!(!has_line(&board, Player::O));
    }
}
