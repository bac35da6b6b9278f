//! # Move History and Time Travel
//!
//! The history is a sequence of board snapshots with a movable cursor.
//! Entry 0 is always the initial empty board; each committed move appends a
//! snapshot together with the position played and the win evaluation for
//! that board, computed once at commit time.
//!
//! Time travel moves only the cursor. Committing a move while the cursor is
//! not at the end truncates everything past it first: the model is a single
//! linear timeline with destructive rewrite, not a branching tree.

use crate::board::{Board, Player};
use crate::win::WinResult;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from history navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HistoryError {
    #[error("history index {index} is out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

/// One snapshot in the game history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Board state after the move
    board: Board,
    /// Flat position played, or `None` for the initial empty board
    position: Option<usize>,
    /// Win evaluation for this board, computed when the move was committed
    outcome: WinResult,
}

impl HistoryEntry {
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn position(&self) -> Option<usize> {
        self.position
    }

    pub fn outcome(&self) -> &WinResult {
        &self.outcome
    }

    /// Player who made this move, derived from the entry's index.
    /// Index 0 is the initial state and has no mover.
    pub fn mover(index: usize) -> Option<Player> {
        match index {
            0 => None,
            i if i % 2 == 1 => Some(Player::One),
            _ => Some(Player::Two),
        }
    }
}

/// Append-until-branch snapshot sequence with a movable cursor.
///
/// Invariant: `cursor < entries.len()` at all times; `entries` is never
/// empty. Only `commit` and `jump_to` mutate the structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct History {
    entries: Vec<HistoryEntry>,
    cursor: usize,
}

impl History {
    /// Creates a history whose only entry is the given initial board.
    pub fn new(initial: Board) -> Self {
        Self {
            entries: vec![HistoryEntry {
                board: initial,
                position: None,
                outcome: WinResult::none(),
            }],
            cursor: 0,
        }
    }

    /// Appends a committed move, discarding any future past the cursor.
    ///
    /// After a time travel, this permanently replaces the abandoned branch:
    /// `entries` is truncated to `[0..=cursor]` before the append, and the
    /// cursor lands on the new last entry.
    pub fn commit(&mut self, board: Board, position: usize, outcome: WinResult) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(HistoryEntry {
            board,
            position: Some(position),
            outcome,
        });
        self.cursor = self.entries.len() - 1;
    }

    /// Moves the cursor to `index` without touching the entries.
    pub fn jump_to(&mut self, index: usize) -> Result<(), HistoryError> {
        if index >= self.entries.len() {
            return Err(HistoryError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        self.cursor = index;
        Ok(())
    }

    /// The entry the cursor points at.
    pub fn current(&self) -> &HistoryEntry {
        &self.entries[self.cursor]
    }

    /// Player to move at the cursor position.
    ///
    /// The cursor counts moves already made, and `One` always starts, so
    /// parity alone determines the turn. There is no separately tracked
    /// turn flag to fall out of sync.
    pub fn current_player(&self) -> Player {
        if self.cursor % 2 == 0 {
            Player::One
        } else {
            Player::Two
        }
    }

    /// True when the current board is full and nobody has won.
    pub fn is_draw(&self) -> bool {
        let entry = self.current();
        entry.outcome.winner.is_none() && entry.board.is_full()
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }
}
