//! Bot contestant backed by the minimax solver.

use super::{Choice, Contestant};
use anyhow::Result;
use oxo_tictactoe::{Board, MinimaxBot, Player};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::debug;

/// Plays perfect moves. Several contestants may share one bot and its cache.
pub struct MinimaxContestant {
    name: String,
    bot: Rc<RefCell<MinimaxBot>>,
}

impl MinimaxContestant {
    /// Creates a contestant using `bot`.
    pub fn new(name: impl Into<String>, bot: Rc<RefCell<MinimaxBot>>) -> Self {
        Self {
            name: name.into(),
            bot,
        }
    }
}

impl Contestant for MinimaxContestant {
    fn choose_move(&mut self, board: &Board, mark: Player) -> Result<Choice> {
        let position = self
            .bot
            .borrow_mut()
            .best_move(board, mark)
            .ok_or_else(|| anyhow::anyhow!("No valid moves available"))?;
        debug!(bot = %self.name, %position, "Bot chose position");
        Ok(Choice::Play(position))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
