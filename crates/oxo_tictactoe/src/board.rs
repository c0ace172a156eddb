//! The 3x3 board: one complete game configuration.
//!
//! A [`Board`] carries nothing but its nine squares. Two boards reached by
//! different move orders compare equal and produce the same [`BoardKey`],
//! which is what lets the solver share results between transpositions.

use crate::error::MoveError;
use crate::position::Position;
use crate::rules;
use crate::types::{GameStatus, Player, Score, Square};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{instrument, trace};

/// Compact key derived from every square of a board.
///
/// Squares are read as base-3 digits (`Empty = 0`, `X = 1`, `O = 2`),
/// index 0 most significant. The encoding is injective, so keys are equal
/// exactly when boards are equal.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
    derive_more::Display,
)]
pub struct BoardKey(u16);

impl BoardKey {
    /// Raw encoded value (below 3^9).
    pub fn value(self) -> u16 {
        self.0
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position, bypassing move legality.
    pub(crate) fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of occupied squares.
    pub fn occupied_count(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Every empty position, in ascending board order.
    pub fn legal_moves(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_empty(*pos))
            .collect()
    }

    /// Places `player`'s mark at `position`.
    ///
    /// Only the target square changes. Clone first to keep the original.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::IllegalMove`] if the square is occupied.
    #[instrument(level = "trace", skip(self))]
    pub fn apply_move(&mut self, player: Player, position: Position) -> Result<(), MoveError> {
        if !self.is_empty(position) {
            return Err(MoveError::IllegalMove(position));
        }
        self.set(position, Square::Occupied(player));
        trace!(key = %self.key(), "Move applied");
        Ok(())
    }

    /// Returns a copy of this board with the move applied.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::IllegalMove`] if the square is occupied.
    pub fn with_move(&self, player: Player, position: Position) -> Result<Board, MoveError> {
        let mut child = self.clone();
        child.apply_move(player, position)?;
        Ok(child)
    }

    /// Winner of the first completed line, if any.
    pub fn winner(&self) -> Option<Player> {
        rules::check_winner(self)
    }

    /// Whether the game on this board is over.
    pub fn is_terminal(&self) -> bool {
        rules::is_full(self) || self.winner().is_some()
    }

    /// Won, drawn, or still in progress.
    pub fn status(&self) -> GameStatus {
        match self.winner() {
            Some(player) => GameStatus::Won(player),
            None if rules::is_draw(self) => GameStatus::Draw,
            None => GameStatus::InProgress,
        }
    }

    /// Scores the board relative to `player`.
    ///
    /// A board still in progress scores [`Score::Draw`], which says nothing
    /// about the game. Use [`Board::terminal_score`] when that matters.
    pub fn score(&self, player: Player) -> Score {
        match self.winner() {
            Some(winner) if winner == player => Score::Win,
            Some(_) => Score::Loss,
            None => Score::Draw,
        }
    }

    /// Scores the board relative to `player` only if the game is over.
    pub fn terminal_score(&self, player: Player) -> Option<Score> {
        self.is_terminal().then(|| self.score(player))
    }

    /// Stable key for this exact configuration.
    pub fn key(&self) -> BoardKey {
        let value = self.squares.iter().fold(0u16, |acc, square| {
            let digit = match square {
                Square::Empty => 0,
                Square::Occupied(Player::X) => 1,
                Square::Occupied(Player::O) => 2,
            };
            acc * 3 + digit
        });
        BoardKey(value)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    /// Draws the grid with empty squares shown as their slot number.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => char::from(b'1' + pos as u8),
                    Square::Occupied(player) => player.symbol(),
                };
                write!(f, " {} ", symbol)?;
                if col < 2 {
                    f.write_str("|")?;
                }
            }
            if row < 2 {
                f.write_str("\n---+---+---\n")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = MoveError;

    /// Reads nine cells: `X`/`O` in either case for marks, and `_`, `.`,
    /// `-`, space or a digit for empty. `/` and `|` separate rows and are
    /// skipped.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Board::new();
        let mut count = 0;
        for c in s.chars().filter(|c| !matches!(c, '/' | '|' | '\n' | '\r')) {
            let square = match c.to_ascii_uppercase() {
                'X' => Square::Occupied(Player::X),
                'O' => Square::Occupied(Player::O),
                '_' | '.' | '-' | ' ' => Square::Empty,
                d if d.is_ascii_digit() => Square::Empty,
                other => {
                    return Err(MoveError::MalformedBoard(format!(
                        "unexpected character {:?}",
                        other
                    )));
                }
            };
            let Some(pos) = Position::from_index(count) else {
                return Err(MoveError::MalformedBoard(format!(
                    "more than 9 cells in {:?}",
                    s
                )));
            };
            board.set(pos, square);
            count += 1;
        }

        if count != 9 {
            return Err(MoveError::MalformedBoard(format!(
                "expected 9 cells, found {}",
                count
            )));
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.legal_moves(), Position::ALL.to_vec());
        assert_eq!(board.status(), GameStatus::InProgress);
        assert!(!board.is_terminal());
        assert_eq!(board.key().value(), 0);
    }

    #[test]
    fn test_status_agrees_with_rules() {
        for text in ["XOX/OXO/OXO", "XXX/OOX/XOO", "XX_/OO_/___", "_________"] {
            let board: Board = text.parse().unwrap();
            assert_eq!(board.status() == GameStatus::Draw, rules::is_draw(&board), "{}", text);
        }
    }

    #[test]
    fn test_apply_move_sets_only_target() {
        let mut board = Board::new();
        board.apply_move(Player::X, Position::Center).unwrap();
        for pos in Position::ALL {
            let expected = if pos == Position::Center {
                Square::Occupied(Player::X)
            } else {
                Square::Empty
            };
            assert_eq!(board.get(pos), expected);
        }
    }

    #[test]
    fn test_occupied_square_rejected() {
        let mut board = Board::new();
        board.apply_move(Player::X, Position::Center).unwrap();
        let before = board.clone();
        assert_eq!(
            board.apply_move(Player::O, Position::Center),
            Err(MoveError::IllegalMove(Position::Center))
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_with_move_leaves_original() {
        let board = Board::new();
        let child = board.with_move(Player::O, Position::TopLeft).unwrap();
        assert!(board.is_empty(Position::TopLeft));
        assert_eq!(child.get(Position::TopLeft), Square::Occupied(Player::O));
    }

    #[test]
    fn test_key_distinguishes_players() {
        let x = Board::new().with_move(Player::X, Position::BottomRight).unwrap();
        let o = Board::new().with_move(Player::O, Position::BottomRight).unwrap();
        assert_eq!(x.key().value(), 1);
        assert_eq!(o.key().value(), 2);

        let corner = Board::new().with_move(Player::X, Position::TopLeft).unwrap();
        assert_eq!(corner.key().value(), 3u16.pow(8));
    }

    #[test]
    fn test_full_board_key_in_range() {
        let board: Board = "OOO/OOO/OOO".parse().unwrap();
        assert_eq!(board.key().value(), 3u16.pow(9) - 1);
    }

    #[test]
    fn test_display_shows_slots() {
        let board: Board = "X__/_O_/___".parse().unwrap();
        let text = board.to_string();
        assert_eq!(
            text,
            " X | 2 | 3 \n---+---+---\n 4 | O | 6 \n---+---+---\n 7 | 8 | 9 "
        );
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(matches!(
            "XX".parse::<Board>(),
            Err(MoveError::MalformedBoard(_))
        ));
        assert!(matches!(
            "XXOOXXOOXX".parse::<Board>(),
            Err(MoveError::MalformedBoard(_))
        ));
        assert!(matches!(
            "XXO/OZX/___".parse::<Board>(),
            Err(MoveError::MalformedBoard(_))
        ));
    }

    #[test]
    fn test_parse_accepts_digits_as_empty() {
        let board: Board = "123456789".parse().unwrap();
        assert_eq!(board, Board::new());
        let board: Board = "x.o|...|..X".parse().unwrap();
        assert_eq!(board.get(Position::TopLeft), Square::Occupied(Player::X));
        assert_eq!(board.get(Position::TopRight), Square::Occupied(Player::O));
        assert_eq!(board.get(Position::BottomRight), Square::Occupied(Player::X));
    }
}
