//! # Game Implementations Module
//!
//! This module contains the rule sets for the supported games. Each game
//! implements the `Rules` trait, which fixes the board dimensions, resolves
//! raw user input (a cell index or a column index) to the final target
//! cell, and selects the win detector.
//!
//! ## Supported Games
//! - **Tic-tac-toe**: 3x3 grid, three in a row, exhaustive line matching
//! - **Connect Four**: 6x7 grid with gravity, four in a row, directional
//!   scan through the last-placed piece
//!
//! ## Adding New Games
//! To add a new game, create a new module and implement:
//! 1. A rule-set type with the `Rules` trait
//! 2. A `RulesWrapper` variant and its dispatch arms
//! 3. A `GameVariant` value so sessions and the CLI can select it

use crate::board::{Board, MoveError, Player};
use crate::win::WinResult;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod connect4;
pub mod tictactoe;

pub use connect4::ConnectFour;
pub use tictactoe::TicTacToe;

/// Selects which game a session plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameVariant {
    TicTacToe,
    ConnectFour,
}

impl fmt::Display for GameVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameVariant::TicTacToe => write!(f, "tictactoe"),
            GameVariant::ConnectFour => write!(f, "connect4"),
        }
    }
}

impl FromStr for GameVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tictactoe" | "ttt" => Ok(GameVariant::TicTacToe),
            "connect4" | "c4" | "connectfour" => Ok(GameVariant::ConnectFour),
            other => Err(format!("unknown game: {}", other)),
        }
    }
}

/// Per-game rule hooks consumed by the session layer.
///
/// Implementations are stateless with respect to any particular game: they
/// hold only fixed configuration (dimensions, detector), so one value can
/// serve any number of boards.
pub trait Rules {
    fn rows(&self) -> usize;

    fn cols(&self) -> usize;

    /// Resolves a raw input to the flat cell the piece lands on.
    ///
    /// For tic-tac-toe the input already is the target cell; for Connect
    /// Four it is a column index resolved through gravity.
    fn resolve_input(&self, board: &Board, input: usize) -> Result<usize, MoveError>;

    /// Evaluates the board immediately after `player` placed at `last_move`.
    fn evaluate(&self, board: &Board, last_move: usize, player: Player) -> WinResult;

    /// Inputs that would currently be accepted on this board.
    fn legal_inputs(&self, board: &Board) -> Vec<usize>;
}

/// Enum dispatch over the supported rule sets.
///
/// An enum rather than a trait object keeps the session type plain data:
/// clonable, serializable-adjacent, and with no dynamic dispatch in the
/// per-move path.
#[derive(Debug, Clone)]
pub enum RulesWrapper {
    TicTacToe(TicTacToe),
    ConnectFour(ConnectFour),
}

impl RulesWrapper {
    /// Builds the rule set for a variant.
    pub fn for_variant(variant: GameVariant) -> Self {
        match variant {
            GameVariant::TicTacToe => RulesWrapper::TicTacToe(TicTacToe::new()),
            GameVariant::ConnectFour => RulesWrapper::ConnectFour(ConnectFour::new()),
        }
    }

    pub fn variant(&self) -> GameVariant {
        match self {
            RulesWrapper::TicTacToe(_) => GameVariant::TicTacToe,
            RulesWrapper::ConnectFour(_) => GameVariant::ConnectFour,
        }
    }
}

macro_rules! impl_rules_dispatch {
    ($($variant:ident),*) => {
        impl Rules for RulesWrapper {
            fn rows(&self) -> usize {
                match self {
                    $(RulesWrapper::$variant(g) => g.rows(),)*
                }
            }

            fn cols(&self) -> usize {
                match self {
                    $(RulesWrapper::$variant(g) => g.cols(),)*
                }
            }

            fn resolve_input(&self, board: &Board, input: usize) -> Result<usize, MoveError> {
                match self {
                    $(RulesWrapper::$variant(g) => g.resolve_input(board, input),)*
                }
            }

            fn evaluate(&self, board: &Board, last_move: usize, player: Player) -> WinResult {
                match self {
                    $(RulesWrapper::$variant(g) => g.evaluate(board, last_move, player),)*
                }
            }

            fn legal_inputs(&self, board: &Board) -> Vec<usize> {
                match self {
                    $(RulesWrapper::$variant(g) => g.legal_inputs(board),)*
                }
            }
        }
    };
}

impl_rules_dispatch!(TicTacToe, ConnectFour);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_parsing() {
        assert_eq!("tictactoe".parse(), Ok(GameVariant::TicTacToe));
        assert_eq!("ttt".parse(), Ok(GameVariant::TicTacToe));
        assert_eq!("Connect4".parse(), Ok(GameVariant::ConnectFour));
        assert!("chess".parse::<GameVariant>().is_err());
    }

    #[test]
    fn test_wrapper_dimensions() {
        let ttt = RulesWrapper::for_variant(GameVariant::TicTacToe);
        assert_eq!((ttt.rows(), ttt.cols()), (3, 3));
        assert_eq!(ttt.variant(), GameVariant::TicTacToe);

        let c4 = RulesWrapper::for_variant(GameVariant::ConnectFour);
        assert_eq!((c4.rows(), c4.cols()), (6, 7));
        assert_eq!(c4.variant(), GameVariant::ConnectFour);
    }
}
