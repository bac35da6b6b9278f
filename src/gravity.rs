//! # Gravity Resolution
//!
//! Maps a Connect Four column choice to the cell a dropped piece settles
//! into: the lowest empty row of that column. Split out from move
//! application so the board validator only ever sees final coordinates.

use crate::board::{Board, MoveError};

/// Resolves a column choice to the flat index of the lowest empty cell.
///
/// # Errors
/// - `MoveError::OutOfBounds` if `column` is not a valid column index
/// - `MoveError::ColumnFull` if every row of the column is occupied
pub fn resolve_column(board: &Board, column: usize) -> Result<usize, MoveError> {
    if column >= board.cols() {
        return Err(MoveError::OutOfBounds);
    }
    for row in (0..board.rows()).rev() {
        let idx = board.index(row, column);
        if board.cell(idx).is_none() {
            return Ok(idx);
        }
    }
    Err(MoveError::ColumnFull)
}
