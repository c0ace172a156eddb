//! Contestant trait and implementations.

mod human;
mod minimax;

pub use human::{HELP_TEXT, HumanContestant};
pub use minimax::MinimaxContestant;

use anyhow::Result;
use oxo_tictactoe::{Board, Player, Position};

/// What a contestant decided to do on its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// Place a mark.
    Play(Position),
    /// Abandon the game.
    Quit,
}

/// Anything that can take turns in a game.
pub trait Contestant {
    /// Picks the next move for `mark` on `board`.
    ///
    /// A returned [`Choice::Play`] must name an empty square.
    fn choose_move(&mut self, board: &Board, mark: Player) -> Result<Choice>;

    /// Returns the contestant's display name.
    fn name(&self) -> &str;
}
