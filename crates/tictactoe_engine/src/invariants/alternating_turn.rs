//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{GameState, Player};
use super::Invariant;

/// Invariant: Players alternate turns.
///
/// Move history must show X, O, X, O, ... and, while the game is still in
/// progress, the player to move is the one after the last mover.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(game: &GameState) -> bool {
        let history = game.history();

        let Some(first) = history.first() else {
            return game.current_player() == Player::X;
        };
        if first.player != Player::X {
            return false;
        }

        if history
            .windows(2)
            .any(|pair| pair[0].player == pair[1].player)
        {
            return false;
        }

        // A finished game keeps the last mover as current player.
        let last = history[history.len() - 1].player;
        if game.status().is_terminal() {
            game.current_player() == last
        } else {
            game.current_player() == last.opponent()
        }
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
