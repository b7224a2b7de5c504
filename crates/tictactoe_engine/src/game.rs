//! The game state: board contents, turn order and terminal detection.

use super::action::{Move, MoveError};
use super::invariants::{GameInvariants, InvariantSet, InvariantViolation};
use super::phases::{GameStatus, Outcome};
use super::rules;
use super::types::{Board, Cell, Coord, Player};
use serde::Serialize;
use tracing::{debug, instrument, warn};

/// Complete state of one game.
///
/// Moving and switching turns are separate steps: [`attempt_move`] marks a
/// cell for the current player, and [`conclude_turn`] decides whether that
/// move ended the game or hands the turn over.
///
/// [`attempt_move`]: GameState::attempt_move
/// [`conclude_turn`]: GameState::conclude_turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    pub(crate) board: Board,
    current_player: Player,
    status: GameStatus,
    pub(crate) history: Vec<Move>,
}

impl GameState {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the accepted moves in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the outcome once the game has ended.
    pub fn outcome(&self) -> Option<Outcome> {
        self.status.outcome()
    }

    /// Marks (row, col) for the current player.
    ///
    /// The turn is not switched; call [`conclude_turn`](Self::conclude_turn)
    /// afterwards. A rejected move leaves the state untouched.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the game has already ended.
    /// - [`MoveError::OutOfBounds`] if row or col is 3 or more.
    /// - [`MoveError::OccupiedCell`] if the cell already holds a mark.
    /// - [`MoveError::TurnNotConcluded`] if the current player has already
    ///   marked a cell this turn.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn attempt_move(&mut self, row: usize, col: usize) -> Result<(), MoveError> {
        if self.status.is_terminal() {
            warn!("Move rejected: game is over");
            return Err(MoveError::GameOver);
        }

        let coord = Coord::new(row, col).inspect_err(|e| warn!(%e, "Move rejected"))?;

        if self.board.cell(coord) != Cell::Empty {
            let e = MoveError::OccupiedCell { row, col };
            warn!(%e, "Move rejected");
            return Err(e);
        }

        if self.has_unconcluded_move() {
            warn!("Move rejected: turn not concluded");
            return Err(MoveError::TurnNotConcluded(self.current_player));
        }

        self.board.put(coord, Cell::Mark(self.current_player));
        self.history.push(Move::new(self.current_player, coord));
        debug!(%coord, "Move accepted");
        Ok(())
    }

    /// True when the last recorded mark belongs to the player still to move.
    fn has_unconcluded_move(&self) -> bool {
        self.history
            .last()
            .is_some_and(|last| last.player == self.current_player)
    }

    /// Checks whether the current player holds a full line.
    ///
    /// Only the current player's marks are inspected, so this must be asked
    /// right after their move and before the turn is switched.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn has_current_player_won(&self) -> bool {
        rules::has_line(&self.board, self.current_player)
    }

    /// Checks if every cell holds a mark.
    #[instrument(skip(self))]
    pub fn is_board_full(&self) -> bool {
        rules::is_full(&self.board)
    }

    /// Hands the turn to the other player.
    #[instrument(skip(self), fields(from = %self.current_player))]
    pub fn switch_turn(&mut self) {
        self.current_player = self.current_player.opponent();
    }

    /// Advances the state machine after an accepted move.
    ///
    /// A win for the mover ends the game, then a full board ends it as a
    /// draw; otherwise the turn passes to the opponent.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn conclude_turn(&mut self) -> GameStatus {
        if self.status.is_terminal() {
            return self.status;
        }

        if self.has_current_player_won() {
            self.status = GameStatus::Won(self.current_player);
        } else if self.is_board_full() {
            self.status = GameStatus::Draw;
        } else {
            self.switch_turn();
        }
        debug!(status = ?self.status, "Turn concluded");

        if let Err(violations) = self.check_invariants() {
            for violation in &violations {
                warn!(%violation, "Invariant violated");
            }
        }

        self.status
    }

    /// Checks the game invariants against the current state.
    ///
    /// Driving the game with manual [`switch_turn`](Self::switch_turn) calls
    /// can leave it out of step with the X-first alternation; this reports
    /// such states instead of rejecting them.
    ///
    /// # Errors
    ///
    /// Returns every violated invariant.
    pub fn check_invariants(&self) -> Result<(), Vec<InvariantViolation>> {
        GameInvariants::check_all(self)
    }

    /// Plays a sequence of (row, col) moves from a fresh game.
    ///
    /// # Errors
    ///
    /// Returns the first rejected move's error, including
    /// [`MoveError::GameOver`] for moves after the game has ended.
    #[instrument]
    pub fn replay(moves: &[(usize, usize)]) -> Result<Self, MoveError> {
        let mut game = Self::new();
        for &(row, col) in moves {
            game.attempt_move(row, col)?;
            game.conclude_turn();
        }
        Ok(game)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const X: Cell = Cell::Mark(Player::X);
    const O: Cell = Cell::Mark(Player::O);
    const E: Cell = Cell::Empty;

    #[test]
    fn test_new_game() {
        let game = GameState::new();
        assert_eq!(game.current_player(), Player::X);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.board(), &Board::new());
        assert!(game.history().is_empty());
        assert_eq!(game.outcome(), None);
    }

    #[test]
    fn test_attempt_move_marks_cell_without_switching() {
        let mut game = GameState::new();
        game.attempt_move(0, 0).unwrap();
        assert_eq!(game.board().get(0, 0), Some(X));
        assert_eq!(game.current_player(), Player::X);
        assert_eq!(game.history(), &[Move::new(Player::X, Coord::at(0, 0))]);
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let mut game = GameState::new();
        game.attempt_move(0, 0).unwrap();
        let before = game.clone();

        assert_eq!(
            game.attempt_move(0, 0),
            Err(MoveError::OccupiedCell { row: 0, col: 0 })
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let mut game = GameState::new();
        assert_eq!(
            game.attempt_move(3, 0),
            Err(MoveError::OutOfBounds { row: 3, col: 0 })
        );
        assert_eq!(
            game.attempt_move(1, 42),
            Err(MoveError::OutOfBounds { row: 1, col: 42 })
        );
        assert_eq!(game, GameState::new());
    }

    #[test]
    fn test_second_mark_in_one_turn_rejected() {
        let mut game = GameState::new();
        game.attempt_move(0, 0).unwrap();
        let before = game.clone();

        assert_eq!(
            game.attempt_move(1, 1),
            Err(MoveError::TurnNotConcluded(Player::X))
        );
        assert_eq!(game, before);
        assert_eq!(game.conclude_turn(), GameStatus::InProgress);
        assert_eq!(game.current_player(), Player::O);
        assert!(game.check_invariants().is_ok());
    }

    #[test]
    fn test_manual_switch_then_mark_is_not_treated_as_unconcluded() {
        let mut game = GameState::new();
        game.attempt_move(0, 0).unwrap();
        game.switch_turn();
        game.attempt_move(1, 1).unwrap();
        assert_eq!(game.board().get(1, 1), Some(O));
    }

    #[test]
    fn test_o_first_game_reports_violation_without_failing() {
        let mut game = GameState::new();
        game.switch_turn();
        game.attempt_move(1, 1).unwrap();

        assert_eq!(game.conclude_turn(), GameStatus::InProgress);
        assert_eq!(game.current_player(), Player::X);
        let violations = game.check_invariants().unwrap_err();
        assert_eq!(violations.len(), 1);
    }

    #[test]
    fn test_switch_turn_alternates() {
        let mut game = GameState::new();
        game.switch_turn();
        assert_eq!(game.current_player(), Player::O);
        game.switch_turn();
        assert_eq!(game.current_player(), Player::X);
    }

    #[test]
    fn test_has_current_player_won_checks_only_mover() {
        let mut game = GameState::new();
        game.board = Board::from_rows([[O, O, O], [X, X, E], [X, E, E]]);
        assert!(!game.has_current_player_won());
        game.switch_turn();
        assert!(game.has_current_player_won());
    }

    #[test]
    fn test_winning_boards() {
        // Boards where X holds a row, a diagonal and a column.
        let boards = [
            Board::from_rows([[X, X, X], [E, E, O], [O, E, E]]),
            Board::from_rows([[X, O, O], [E, X, O], [O, E, X]]),
            Board::from_rows([[X, O, O], [X, E, E], [X, E, O]]),
        ];
        for board in boards {
            let mut game = GameState::new();
            game.board = board;
            assert!(game.has_current_player_won(), "{}", game.board());
        }
    }

    #[test]
    fn test_is_board_full() {
        let mut game = GameState::new();
        game.board = Board::from_rows([[X, O, X], [O, X, O], [O, X, X]]);
        assert!(game.is_board_full());
        game.board = Board::from_rows([[X, O, X], [O, X, O], [O, X, E]]);
        assert!(!game.is_board_full());
    }

    #[test]
    fn test_left_column_win() {
        let game = GameState::replay(&[(0, 0), (0, 1), (1, 0), (1, 1), (2, 0)]).unwrap();
        assert_eq!(game.status(), GameStatus::Won(Player::X));
        assert_eq!(game.outcome(), Some(Outcome::Winner(Player::X)));
        assert_eq!(game.current_player(), Player::X);
    }

    #[test]
    fn test_draw() {
        let game = GameState::replay(&[
            (0, 0),
            (1, 1),
            (0, 2),
            (0, 1),
            (1, 0),
            (1, 2),
            (2, 1),
            (2, 0),
            (2, 2),
        ])
        .unwrap();
        assert_eq!(game.status(), GameStatus::Draw);
        assert!(game.is_board_full());
        assert!(!game.has_current_player_won());
    }

    #[test]
    fn test_finished_game_rejects_moves() {
        let mut game = GameState::replay(&[(0, 0), (0, 1), (1, 0), (1, 1), (2, 0)]).unwrap();
        let before = game.clone();
        assert_eq!(game.attempt_move(2, 2), Err(MoveError::GameOver));
        assert_eq!(game.conclude_turn(), GameStatus::Won(Player::X));
        assert_eq!(game, before);
    }

    #[test]
    fn test_replay_stops_at_first_error() {
        assert_eq!(
            GameState::replay(&[(0, 0), (0, 0)]),
            Err(MoveError::OccupiedCell { row: 0, col: 0 })
        );
        assert_eq!(
            GameState::replay(&[(0, 0), (0, 1), (1, 0), (1, 1), (2, 0), (2, 2)]),
            Err(MoveError::GameOver)
        );
    }
}
