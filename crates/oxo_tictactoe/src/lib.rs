//! Pure tic-tac-toe game logic with a perfect-play solver.
//!
//! # Architecture
//!
//! - **Board**: value type for one configuration, with move generation,
//!   move application and terminal scoring
//! - **Rules**: win and draw detection over the fixed winning lines
//! - **MinimaxBot**: exhaustive minimax with a per-player transposition cache
//!
//! # Example
//!
//! ```
//! use oxo_tictactoe::{Board, GameStatus, MinimaxBot, Player};
//!
//! let mut bot = MinimaxBot::new();
//! let mut board = Board::new();
//! let mut turn = Player::X;
//! while let Some(position) = bot.best_move(&board, turn) {
//!     board.apply_move(turn, position)?;
//!     turn = turn.opponent();
//! }
//! assert_eq!(board.status(), GameStatus::Draw);
//! # Ok::<(), oxo_tictactoe::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod cache;
mod engine;
mod error;
mod position;
pub mod rules;
mod types;

pub use board::{Board, BoardKey};
pub use cache::{Evaluation, TranspositionCache};
pub use engine::{MinimaxBot, SearchStats};
pub use error::MoveError;
pub use position::Position;
pub use types::{GameStatus, Player, Score, Square};

/// The board is the entire game state.
pub type GameState = Board;
