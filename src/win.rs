//! # Win Detection
//!
//! Two detector strategies behind one trait:
//!
//! - [`ExhaustiveLines`]: pre-enumerates every full-length winning line for a
//!   small fixed board (rows, columns, diagonals) and checks them all. Used
//!   by tic-tac-toe, where the whole table is 8 lines of 3.
//! - [`DirectionalScan`]: walks outward along the four axes through the
//!   just-placed piece, counting consecutive same-player cells. Used by
//!   Connect Four, where only lines through the last move can have just
//!   become winning.
//!
//! Both are pure functions of the board; the engine runs one exactly once
//! per committed move and stores the result in the history entry.

use crate::board::{Board, Player};
use serde::{Deserialize, Serialize};

/// Outcome of evaluating a board for a win.
///
/// `winning_cells` holds the flat positions of every piece in the winning
/// run, sorted ascending; empty when there is no winner. A draw is not part
/// of this type — it is derived from "no winner and no empty cell".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinResult {
    pub winner: Option<Player>,
    pub winning_cells: Vec<usize>,
}

impl WinResult {
    /// The "nobody has won" result.
    pub fn none() -> Self {
        Self {
            winner: None,
            winning_cells: Vec::new(),
        }
    }

    pub fn is_win(&self) -> bool {
        self.winner.is_some()
    }
}

/// Strategy interface for win detection.
///
/// `last_move` and `player` describe the placement that just happened; the
/// exhaustive variant ignores them and rescans its line table, the
/// directional variant scans only through that cell.
pub trait WinDetector {
    fn evaluate(&self, board: &Board, last_move: usize, player: Player) -> WinResult;
}

/// Exhaustive line-matching detector for small fixed boards.
///
/// The winning lines are enumerated once at construction: all rows, then all
/// columns, then (for square boards) the two full diagonals. Evaluation
/// reports the first fully-matching line in that order, which fixes a
/// deterministic tie-break if several lines ever completed at once.
#[derive(Debug, Clone)]
pub struct ExhaustiveLines {
    lines: Vec<Vec<usize>>,
}

impl ExhaustiveLines {
    pub fn new(rows: usize, cols: usize) -> Self {
        let mut lines = Vec::with_capacity(rows + cols + 2);
        for r in 0..rows {
            lines.push((0..cols).map(|c| r * cols + c).collect());
        }
        for c in 0..cols {
            lines.push((0..rows).map(|r| r * cols + c).collect());
        }
        if rows == cols {
            // Down-right diagonal, then down-left
            lines.push((0..rows).map(|i| i * cols + i).collect());
            lines.push((0..rows).map(|i| i * cols + (cols - 1 - i)).collect());
        }
        Self { lines }
    }

    /// Number of enumerated winning lines (8 for a 3x3 board).
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

impl WinDetector for ExhaustiveLines {
    fn evaluate(&self, board: &Board, _last_move: usize, _player: Player) -> WinResult {
        for line in &self.lines {
            if let Some(p) = board.cell(line[0]) {
                if line.iter().all(|&i| board.cell(i) == Some(p)) {
                    return WinResult {
                        winner: Some(p),
                        winning_cells: line.clone(),
                    };
                }
            }
        }
        WinResult::none()
    }
}

/// Incremental detector that scans only through the last-placed piece.
///
/// For each axis (horizontal, vertical, both diagonals) it walks outward in
/// both directions from the placed cell while cells belong to `player`. The
/// accumulated run always includes the placed cell; a run of `line_size` or
/// more wins, and every cell of the run is reported (five in a row reports
/// all five).
#[derive(Debug, Clone)]
pub struct DirectionalScan {
    line_size: usize,
}

impl DirectionalScan {
    pub fn new(line_size: usize) -> Self {
        Self { line_size }
    }

    pub fn line_size(&self) -> usize {
        self.line_size
    }
}

/// Axis step vectors: horizontal, vertical, down-right, down-left.
const AXES: [(i64, i64); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

impl WinDetector for DirectionalScan {
    fn evaluate(&self, board: &Board, last_move: usize, player: Player) -> WinResult {
        let rows = board.rows() as i64;
        let cols = board.cols() as i64;
        let row = (last_move / board.cols()) as i64;
        let col = (last_move % board.cols()) as i64;

        for (dr, dc) in AXES {
            let mut run = vec![last_move];
            for sign in [1i64, -1] {
                let mut r = row + dr * sign;
                let mut c = col + dc * sign;
                while r >= 0 && r < rows && c >= 0 && c < cols {
                    let idx = (r * cols + c) as usize;
                    if board.cell(idx) != Some(player) {
                        break;
                    }
                    run.push(idx);
                    r += dr * sign;
                    c += dc * sign;
                }
            }
            if run.len() >= self.line_size {
                run.sort_unstable();
                return WinResult {
                    winner: Some(player),
                    winning_cells: run,
                };
            }
        }
        WinResult::none()
    }
}
