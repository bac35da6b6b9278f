//! # Grid Arena Engine
//!
//! A pure, UI-agnostic state engine for two classic grid games: tic-tac-toe
//! and Connect Four. The engine computes the next board state from a move,
//! detects terminal conditions (win or draw), and maintains a navigable
//! history of snapshots with time travel.
//!
//! ## Architecture
//! - [`board`]: flat row-major grid with immutable-copy move application
//! - [`win`]: two win-detection strategies behind one trait (exhaustive
//!   line matching and directional scanning through the last move)
//! - [`gravity`]: column-to-landing-cell resolution for Connect Four
//! - [`history`]: snapshot sequence with a cursor; committing after a time
//!   travel truncates the abandoned future (single linear timeline)
//! - [`games`]: per-variant rule sets behind enum dispatch
//! - [`session`]: the orchestrating surface a UI consumes
//!
//! Everything is synchronous and allocation-light; operations either
//! succeed or fail fast with a typed error, and a failed operation never
//! changes state. The engine performs no I/O and emits no log output.
//!
//! ## Usage
//! ```
//! use engine::{GameSession, GameVariant, Status};
//!
//! let mut game = GameSession::new(GameVariant::ConnectFour);
//! game.make_move(3)?; // drop a piece into column 3
//! match game.status() {
//!     Status::InProgress { next_player } => println!("{} to move", next_player),
//!     Status::Won { player, .. } => println!("{} wins", player),
//!     Status::Draw => println!("draw"),
//! }
//! # Ok::<(), engine::MoveError>(())
//! ```

pub mod board;
pub mod games;
pub mod gravity;
pub mod history;
pub mod session;
pub mod win;

pub use board::{Board, Cell, MoveError, Player};
pub use games::{GameVariant, Rules, RulesWrapper};
pub use history::{History, HistoryEntry, HistoryError};
pub use session::{GameSession, Status};
pub use win::{DirectionalScan, ExhaustiveLines, WinDetector, WinResult};
