//! Errors raised while validating moves and markers.

use crate::position::Position;

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Illegal move: {} is already occupied", _0)]
    IllegalMove(Position),

    /// The marker is not one of the two players.
    #[display("Illegal player {:?}: expected X or O", _0)]
    IllegalPlayer(String),

    /// A slot number outside 1-9.
    #[display("Slot {} is off the board (expected 1-9)", _0)]
    OutOfRange(usize),

    /// Board text that does not describe nine cells.
    #[display("Malformed board: {}", _0)]
    MalformedBoard(String),
}

impl std::error::Error for MoveError {}
