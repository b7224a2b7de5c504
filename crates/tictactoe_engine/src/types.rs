//! Core domain types for tic-tac-toe.

use crate::action::MoveError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of rows and columns on the board.
pub const SIZE: usize = 3;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// Cell holds a player's mark.
    Mark(Player),
}

impl Cell {
    /// Single-character symbol used when rendering the board.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Mark(Player::X) => 'X',
            Cell::Mark(Player::O) => 'O',
        }
    }
}

/// A board coordinate known to lie inside the 3x3 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "(usize, usize)", into = "(usize, usize)")]
pub struct Coord {
    row: usize,
    col: usize,
}

impl Coord {
    /// Validates a (row, col) pair.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] if either component is 3 or more.
    pub fn new(row: usize, col: usize) -> Result<Self, MoveError> {
        if row >= SIZE || col >= SIZE {
            return Err(MoveError::OutOfBounds { row, col });
        }
        Ok(Self { row, col })
    }

    /// Builds a coordinate from constant indices already known to be in range.
    pub(crate) const fn at(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row index (0-2).
    pub fn row(self) -> usize {
        self.row
    }

    /// Column index (0-2).
    pub fn col(self) -> usize {
        self.col
    }

    /// Row-major index into the board storage (0-8).
    pub fn to_index(self) -> usize {
        self.row * SIZE + self.col
    }
}

impl TryFrom<(usize, usize)> for Coord {
    type Error = MoveError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        Self::new(row, col)
    }
}

impl From<Coord> for (usize, usize) {
    fn from(coord: Coord) -> Self {
        (coord.row, coord.col)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; SIZE * SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; SIZE * SIZE],
        }
    }

    /// Builds a board from three rows of cells.
    pub fn from_rows(rows: [[Cell; SIZE]; SIZE]) -> Self {
        let mut board = Self::new();
        for (row, cells) in rows.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                board.cells[Coord::at(row, col).to_index()] = *cell;
            }
        }
        board
    }

    /// Gets the cell at (row, col), or `None` if out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        Coord::new(row, col).ok().map(|coord| self.cell(coord))
    }

    /// Gets the cell at a validated coordinate.
    pub fn cell(&self, coord: Coord) -> Cell {
        self.cells[coord.to_index()]
    }

    /// Sets the cell at (row, col).
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] if the coordinate is off the board.
    #[instrument(skip(self))]
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), MoveError> {
        let coord = Coord::new(row, col)?;
        self.put(coord, cell);
        Ok(())
    }

    pub(crate) fn put(&mut self, coord: Coord, cell: Cell) {
        self.cells[coord.to_index()] = cell;
    }

    /// Checks if the cell at (row, col) is on the board and empty.
    pub fn is_empty_at(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(Cell::Empty))
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; SIZE * SIZE] {
        &self.cells
    }

    /// Iterates over the three rows.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(SIZE)
    }
}

/// Renders each row as its cells joined by `" | "`, followed by a line of
/// nine dashes. Empty cells render as a single space.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            let line = row
                .iter()
                .map(|cell| cell.symbol().to_string())
                .collect::<Vec<_>>()
                .join(" | ");
            writeln!(f, "{line}")?;
            writeln!(f, "{}", "-".repeat(9))?;
        }
        Ok(())
    }
}
