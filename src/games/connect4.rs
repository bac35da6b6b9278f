//! # Connect Four Rules
//!
//! Players take turns dropping pieces into columns of a 6x7 grid; pieces
//! fall to the lowest available row due to gravity. First player to line up
//! four pieces horizontally, vertically, or diagonally wins.
//!
//! Input is a column index (0-6); gravity resolves it to the landing cell
//! before the board validator runs. Win detection scans only the four axes
//! through the just-placed piece.

use crate::board::{Board, MoveError, Player};
use crate::games::Rules;
use crate::gravity::resolve_column;
use crate::win::{DirectionalScan, WinDetector, WinResult};

pub const ROWS: usize = 6;
pub const COLS: usize = 7;
pub const LINE_SIZE: usize = 4;

/// Rule set for Connect Four.
#[derive(Debug, Clone)]
pub struct ConnectFour {
    detector: DirectionalScan,
}

impl ConnectFour {
    pub fn new() -> Self {
        Self {
            detector: DirectionalScan::new(LINE_SIZE),
        }
    }
}

impl Default for ConnectFour {
    fn default() -> Self {
        Self::new()
    }
}

impl Rules for ConnectFour {
    fn rows(&self) -> usize {
        ROWS
    }

    fn cols(&self) -> usize {
        COLS
    }

    fn resolve_input(&self, board: &Board, input: usize) -> Result<usize, MoveError> {
        resolve_column(board, input)
    }

    fn evaluate(&self, board: &Board, last_move: usize, player: Player) -> WinResult {
        self.detector.evaluate(board, last_move, player)
    }

    fn legal_inputs(&self, board: &Board) -> Vec<usize> {
        // A column is open while its top cell is empty
        (0..board.cols())
            .filter(|&c| board.cell(c).is_none())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_lands_on_bottom() {
        let rules = ConnectFour::new();
        let board = Board::new(ROWS, COLS);
        assert_eq!(rules.resolve_input(&board, 3), Ok(5 * COLS + 3));
        assert_eq!(rules.resolve_input(&board, 7), Err(MoveError::OutOfBounds));
    }

    #[test]
    fn test_legal_inputs_exclude_full_columns() {
        let rules = ConnectFour::new();
        let mut board = Board::new(ROWS, COLS);
        for row in 0..ROWS {
            let player = if row % 2 == 0 { Player::One } else { Player::Two };
            board = board.apply(board.index(row, 0), player).unwrap();
        }
        let legal = rules.legal_inputs(&board);
        assert_eq!(legal.len(), 6);
        assert!(!legal.contains(&0));
    }
}
