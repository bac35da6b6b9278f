//! # Game Session - Central Game State Management
//!
//! This module provides `GameSession`, the single source of truth for one
//! game: it owns the authoritative history and the rule set, validates
//! every move before application, and exposes read-only projections for a
//! UI layer to render.
//!
//! A move flows through the pipeline: raw input → rule-specific resolution
//! (gravity for Connect Four) → board validation → win evaluation → history
//! commit. Any failure along the way leaves the session untouched.

use crate::board::{Board, MoveError, Player};
use crate::games::{GameVariant, Rules, RulesWrapper};
use crate::history::{History, HistoryEntry, HistoryError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Current game status, derived from the history entry under the cursor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// Game is still in progress
    InProgress { next_player: Player },
    /// Game ended with a winner; `winning_cells` are the flat positions of
    /// every piece in the winning run
    Won {
        player: Player,
        winning_cells: Vec<usize>,
    },
    /// Board is full with no winner
    Draw,
}

impl Status {
    /// Check if the game is over.
    pub fn is_game_over(&self) -> bool {
        !matches!(self, Status::InProgress { .. })
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::InProgress { next_player } => write!(f, "{} to move", next_player),
            Status::Won { player, .. } => write!(f, "{} wins", player),
            Status::Draw => write!(f, "draw"),
        }
    }
}

/// A single game from start to finish, including its time-travel history.
///
/// All moves must go through the session, which validates them before
/// application. Reading never mutates: `status()` and `board()` are cheap
/// projections of the stored history entry, not recomputations.
#[derive(Debug, Clone)]
pub struct GameSession {
    /// Rule set selected by the game variant
    rules: RulesWrapper,
    /// The authoritative snapshot history
    history: History,
}

impl GameSession {
    /// Starts a new game of the given variant with an empty board.
    pub fn new(variant: GameVariant) -> Self {
        let rules = RulesWrapper::for_variant(variant);
        let board = Board::new(rules.rows(), rules.cols());
        Self {
            rules,
            history: History::new(board),
        }
    }

    pub fn variant(&self) -> GameVariant {
        self.rules.variant()
    }

    /// Attempts a move for the player whose turn it is.
    ///
    /// `input` is a cell index for tic-tac-toe or a column index for
    /// Connect Four. On success the move is committed to the history,
    /// discarding any future beyond the cursor; on error nothing changes.
    ///
    /// # Errors
    /// - `MoveError::GameAlreadyDecided` if the current board has a winner
    /// - `MoveError::OutOfBounds`, `MoveError::ColumnFull`,
    ///   `MoveError::CellOccupied` from resolution and validation
    pub fn make_move(&mut self, input: usize) -> Result<(), MoveError> {
        if self.history.current().outcome().is_win() {
            return Err(MoveError::GameAlreadyDecided);
        }
        let player = self.history.current_player();
        let target = self
            .rules
            .resolve_input(self.history.current().board(), input)?;
        let board = self.history.current().board().apply(target, player)?;
        let outcome = self.rules.evaluate(&board, target, player);
        self.history.commit(board, target, outcome);
        Ok(())
    }

    /// Moves the cursor to a past (or future) history entry.
    ///
    /// Entries are untouched; a subsequent `make_move` permanently discards
    /// everything past the new cursor.
    pub fn time_travel(&mut self, index: usize) -> Result<(), HistoryError> {
        self.history.jump_to(index)
    }

    /// The board under the cursor.
    pub fn board(&self) -> &Board {
        self.history.current().board()
    }

    /// Derived status of the current position.
    pub fn status(&self) -> Status {
        let entry = self.history.current();
        match entry.outcome().winner {
            Some(player) => Status::Won {
                player,
                winning_cells: entry.outcome().winning_cells.clone(),
            },
            None if self.history.is_draw() => Status::Draw,
            None => Status::InProgress {
                next_player: self.history.current_player(),
            },
        }
    }

    /// Player to move at the current position.
    pub fn current_player(&self) -> Player {
        self.history.current_player()
    }

    /// Inputs that would currently be accepted; empty once the game is over.
    pub fn legal_inputs(&self) -> Vec<usize> {
        if self.status().is_game_over() {
            return Vec::new();
        }
        self.rules.legal_inputs(self.board())
    }

    /// The full snapshot history, for move-list rendering.
    pub fn entries(&self) -> &[HistoryEntry] {
        self.history.entries()
    }

    /// Index of the entry currently displayed.
    pub fn cursor(&self) -> usize {
        self.history.cursor()
    }
}
