//! Parsing a move typed at the prompt.

use derive_more::{Display, Error};
use tracing::instrument;

/// Why a line of input could not be read as a move.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum InputError {
    /// The line did not contain exactly two tokens.
    #[display("Expected two numbers, got {_0} token(s)")]
    WrongTokenCount(#[error(not(source))] usize),

    /// The line was not valid UTF-8.
    #[display("Input is not valid UTF-8")]
    NotUtf8,

    /// A token was not a non-negative integer.
    #[display("Not a valid number: {_0:?}")]
    NotANumber(#[error(not(source))] String),
}

/// Parses `"<row> <col>"` into 0-indexed coordinates.
///
/// Tokens are separated by any whitespace. Range checking is left to the
/// game, so `"7 1"` parses successfully.
///
/// # Errors
///
/// Returns [`InputError`] for the wrong number of tokens or a token that is
/// not a non-negative integer.
#[instrument]
pub fn parse_move(line: &str) -> Result<(usize, usize), InputError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [row, col] = tokens.as_slice() else {
        return Err(InputError::WrongTokenCount(tokens.len()));
    };
    Ok((parse_index(row)?, parse_index(col)?))
}

fn parse_index(token: &str) -> Result<usize, InputError> {
    token
        .parse::<usize>()
        .map_err(|_| InputError::NotANumber(token.to_string()))
}
