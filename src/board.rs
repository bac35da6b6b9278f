//! # Board Representation and Move Validation
//!
//! A board is a fixed-size grid of cells stored as a flat, row-major vector.
//! Boards are never mutated in place: applying a move clones the board and
//! returns a new value, so every snapshot held in the move history stays
//! valid forever.
//!
//! ## Rules
//! - A move targets exactly one empty cell and claims it for a player
//! - Out-of-range or occupied targets are rejected with a typed error
//! - The occupied-cell count always equals the number of applied moves

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A player marker. `One` always moves first.
///
/// The engine treats markers as opaque; whether `One` renders as "X" or as a
/// red disc is a display concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Returns the other player.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Default display symbol for this player.
    pub fn symbol(self) -> char {
        match self {
            Player::One => 'X',
            Player::Two => 'O',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A single board cell: empty or claimed by a player.
pub type Cell = Option<Player>;

/// Reasons a move request can be rejected.
///
/// All of these are expected, recoverable conditions arising from invalid
/// input; the engine guarantees state is left unchanged when one is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    /// The target position lies outside the grid.
    #[error("position is outside the board")]
    OutOfBounds,
    /// The target cell already holds a piece.
    #[error("cell is already occupied")]
    CellOccupied,
    /// The game has a winner; no further moves are accepted.
    #[error("the game is already decided")]
    GameAlreadyDecided,
    /// Every row of the chosen column is occupied (Connect Four).
    #[error("column is full")]
    ColumnFull,
}

/// A fixed-size grid of cells, indexed row-major.
///
/// Row 0 is the top of the board; for gravity games pieces settle toward
/// row `rows - 1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Cell contents as a flat vector (row-major)
    cells: Vec<Cell>,
    /// Number of rows
    rows: usize,
    /// Number of columns
    cols: usize,
}

impl Board {
    /// Creates an empty board with the given dimensions.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            cells: vec![None; rows * cols],
            rows,
            cols,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Converts (row, col) coordinates to a flat index.
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Cell contents at a flat position. Panics if out of range; callers
    /// validate positions before reading.
    pub fn cell(&self, position: usize) -> Cell {
        self.cells[position]
    }

    /// All cells as a flat row-major slice.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// True when no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| c.is_some())
    }

    /// Number of occupied cells. Equals the number of moves applied so far.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Applies a move, returning a new board with `position` claimed by
    /// `player`. The receiver is never modified.
    ///
    /// # Errors
    /// - `MoveError::OutOfBounds` if `position` lies outside the grid
    /// - `MoveError::CellOccupied` if the target cell is not empty
    pub fn apply(&self, position: usize, player: Player) -> Result<Board, MoveError> {
        if position >= self.cells.len() {
            return Err(MoveError::OutOfBounds);
        }
        if self.cells[position].is_some() {
            return Err(MoveError::CellOccupied);
        }
        let mut next = self.clone();
        next.cells[position] = Some(player);
        Ok(next)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            for c in 0..self.cols {
                let symbol = match self.cells[self.index(r, c)] {
                    Some(p) => p.symbol(),
                    None => '.',
                };
                write!(f, "{} ", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(3, 3);
        assert_eq!(board.cells().len(), 9);
        assert!(!board.is_full());
        assert_eq!(board.occupied_count(), 0);
    }

    #[test]
    fn test_apply_returns_new_board() {
        let board = Board::new(3, 3);
        let next = board.apply(4, Player::One).unwrap();
        assert_eq!(next.cell(4), Some(Player::One));
        // Original is untouched
        assert_eq!(board.cell(4), None);
        assert_eq!(board.occupied_count(), 0);
        assert_eq!(next.occupied_count(), 1);
    }

    #[test]
    fn test_apply_out_of_bounds() {
        let board = Board::new(3, 3);
        assert_eq!(board.apply(9, Player::One), Err(MoveError::OutOfBounds));
    }

    #[test]
    fn test_apply_occupied_leaves_board_unchanged() {
        let board = Board::new(3, 3).apply(0, Player::One).unwrap();
        let result = board.apply(0, Player::Two);
        assert_eq!(result, Err(MoveError::CellOccupied));
        assert_eq!(board.cell(0), Some(Player::One));
        assert_eq!(board.occupied_count(), 1);
    }

    #[test]
    fn test_occupied_count_tracks_moves() {
        let mut board = Board::new(6, 7);
        for (i, pos) in [0usize, 8, 16, 24].iter().enumerate() {
            let player = if i % 2 == 0 { Player::One } else { Player::Two };
            board = board.apply(*pos, player).unwrap();
            assert_eq!(board.occupied_count(), i + 1);
        }
    }

    #[test]
    fn test_opponent_alternates() {
        assert_eq!(Player::One.opponent(), Player::Two);
        assert_eq!(Player::Two.opponent(), Player::One);
    }
}
