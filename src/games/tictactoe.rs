//! # Tic-Tac-Toe Rules
//!
//! Classic 3x3 game. Input is the flat cell index (0-8, row-major); win
//! detection pre-enumerates all 8 winning lines and matches them
//! exhaustively, which is cheap at this board size.

use crate::board::{Board, MoveError, Player};
use crate::games::Rules;
use crate::win::{ExhaustiveLines, WinDetector, WinResult};

pub const ROWS: usize = 3;
pub const COLS: usize = 3;

/// Rule set for tic-tac-toe.
#[derive(Debug, Clone)]
pub struct TicTacToe {
    detector: ExhaustiveLines,
}

impl TicTacToe {
    pub fn new() -> Self {
        Self {
            detector: ExhaustiveLines::new(ROWS, COLS),
        }
    }
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self::new()
    }
}

impl Rules for TicTacToe {
    fn rows(&self) -> usize {
        ROWS
    }

    fn cols(&self) -> usize {
        COLS
    }

    fn resolve_input(&self, _board: &Board, input: usize) -> Result<usize, MoveError> {
        // Input already names the target cell; occupancy is the board's job
        if input >= ROWS * COLS {
            return Err(MoveError::OutOfBounds);
        }
        Ok(input)
    }

    fn evaluate(&self, board: &Board, last_move: usize, player: Player) -> WinResult {
        self.detector.evaluate(board, last_move, player)
    }

    fn legal_inputs(&self, board: &Board) -> Vec<usize> {
        (0..board.cells().len())
            .filter(|&i| board.cell(i).is_none())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_is_identity_within_bounds() {
        let rules = TicTacToe::new();
        let board = Board::new(ROWS, COLS);
        assert_eq!(rules.resolve_input(&board, 4), Ok(4));
        assert_eq!(rules.resolve_input(&board, 9), Err(MoveError::OutOfBounds));
    }

    #[test]
    fn test_legal_inputs_shrink_as_cells_fill() {
        let rules = TicTacToe::new();
        let board = Board::new(ROWS, COLS);
        assert_eq!(rules.legal_inputs(&board).len(), 9);

        let board = board.apply(4, Player::One).unwrap();
        let legal = rules.legal_inputs(&board);
        assert_eq!(legal.len(), 8);
        assert!(!legal.contains(&4));
    }
}
