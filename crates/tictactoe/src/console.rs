//! Line-oriented game loop.
//!
//! The console renders the board, prompts the current player, reads one line
//! per move and feeds it to the [`GameState`]. Bad input and illegal moves are
//! reported and the same player is asked again; the loop only returns once
//! the game is won or drawn.

use crate::input::{parse_move, InputError};
use derive_more::{Display, Error, From};
use std::io::{BufRead, Write};
use tictactoe_engine::{GameState, GameStatus, MoveError, Outcome};
use tracing::{debug, info, instrument, warn};

/// Message shown for any rejected line.
pub const INVALID_INPUT: &str = "Invalid input. Try again.";

/// Errors that end a game before it reaches a terminal state.
#[derive(Debug, Display, Error, From)]
pub enum PlayError {
    /// Reading input or writing output failed.
    #[display("Console I/O failed: {_0}")]
    #[from]
    Io(std::io::Error),

    /// Input ended while the game was still in progress.
    #[display("Input closed before the game finished")]
    InputClosed,
}

/// Why a line was refused; the same player is asked again.
#[derive(Debug, Display, From)]
enum Rejection {
    /// The line could not be read as a move.
    Input(InputError),
    /// The game refused the move.
    Move(MoveError),
}

/// Reads `line` as a move and applies it to `game`.
fn apply_line(game: &mut GameState, line: &[u8]) -> Result<(), Rejection> {
    let text = std::str::from_utf8(line).map_err(|_| InputError::NotUtf8)?;
    let (row, col) = parse_move(text)?;
    game.attempt_move(row, col)?;
    Ok(())
}

/// A console bound to an input source and an output sink.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console reading moves from `input` and writing to `output`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the console, returning the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Plays `game` to completion.
    ///
    /// # Errors
    ///
    /// Returns [`PlayError::InputClosed`] if input runs out mid-game and
    /// [`PlayError::Io`] if the console cannot be read or written.
    #[instrument(skip_all)]
    pub fn play(&mut self, mut game: GameState) -> Result<Outcome, PlayError> {
        info!("Game started");
        loop {
            if let Some(outcome) = game.outcome() {
                return self.finish(&game, outcome);
            }

            write!(self.output, "{}", game.board())?;
            write!(
                self.output,
                "Player {}, enter your move (row and column): ",
                game.current_player()
            )?;
            self.output.flush()?;

            let line = self.read_line()?;
            if let Err(rejection) = apply_line(&mut game, &line) {
                let input = String::from_utf8_lossy(&line);
                match &rejection {
                    Rejection::Input(e) => warn!(%e, input = input.trim_end(), "Malformed input"),
                    Rejection::Move(e) => warn!(%e, input = input.trim_end(), "Illegal move"),
                }
                writeln!(self.output, "{INVALID_INPUT}")?;
                continue;
            }

            match game.conclude_turn() {
                GameStatus::InProgress => debug!(next = %game.current_player(), "Turn passed"),
                status => debug!(?status, "Game reached a terminal state"),
            }
        }
    }

    /// Reads one raw line; decoding is left to [`apply_line`] so bad bytes
    /// are rejected like any other malformed input.
    fn read_line(&mut self) -> Result<Vec<u8>, PlayError> {
        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            warn!("Input closed mid-game");
            return Err(PlayError::InputClosed);
        }
        Ok(line)
    }

    fn finish(&mut self, game: &GameState, outcome: Outcome) -> Result<Outcome, PlayError> {
        write!(self.output, "{}", game.board())?;
        writeln!(self.output, "{outcome}")?;
        self.output.flush()?;
        info!(%outcome, moves = game.history().len(), "Game finished");
        Ok(outcome)
    }
}
