//! Position enum naming the nine cells of the board.

use crate::error::MoveError;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// A position on the tic-tac-toe board.
///
/// Positions are the move identifiers of the game. They order by board
/// index, so sorting a set of moves yields ascending positional order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
pub enum Position {
    /// Top-left (index 0, slot 1)
    TopLeft,
    /// Top-center (index 1, slot 2)
    TopCenter,
    /// Top-right (index 2, slot 3)
    TopRight,
    /// Middle-left (index 3, slot 4)
    MiddleLeft,
    /// Center (index 4, slot 5)
    Center,
    /// Middle-right (index 5, slot 6)
    MiddleRight,
    /// Bottom-left (index 6, slot 7)
    BottomLeft,
    /// Bottom-center (index 7, slot 8)
    BottomCenter,
    /// Bottom-right (index 8, slot 9)
    BottomRight,
}

impl Position {
    /// All 9 positions in board order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// One-based slot number as typed by a player (1-9).
    pub fn slot(self) -> usize {
        self.to_index() + 1
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates position from a one-based slot number.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfRange`] unless `slot` is in 1-9.
    #[instrument]
    pub fn from_slot(slot: usize) -> Result<Self, MoveError> {
        slot.checked_sub(1)
            .and_then(Self::from_index)
            .ok_or(MoveError::OutOfRange(slot))
    }

    /// Parse from a slot number (1-9) or a label (case-insensitive).
    #[instrument]
    pub fn from_label_or_number(s: &str) -> Option<Position> {
        let s = s.trim();
        if let Ok(num) = s.parse::<usize>() {
            return Self::from_slot(num).ok();
        }

        Position::iter().find(|pos| pos.label().eq_ignore_ascii_case(s))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
