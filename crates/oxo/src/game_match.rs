//! Game orchestration between two contestants.

use crate::contestants::{Choice, Contestant};
use anyhow::Result;
use oxo_tictactoe::{Board, GameStatus, Player};
use tracing::{debug, info, instrument};

/// How a match ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    /// Played to a win or a draw.
    Finished {
        /// Final status, never [`GameStatus::InProgress`].
        status: GameStatus,
        /// Final board.
        board: Board,
    },
    /// A contestant quit before the end.
    Abandoned {
        /// Who quit.
        by: Player,
        /// Board at the time.
        board: Board,
    },
}

/// Runs a game between contestants playing X and O.
pub struct Match<'a> {
    board: Board,
    to_move: Player,
    player_x: Box<dyn Contestant + 'a>,
    player_o: Box<dyn Contestant + 'a>,
}

impl<'a> Match<'a> {
    /// Creates a match on an empty board with X to move.
    pub fn new(player_x: Box<dyn Contestant + 'a>, player_o: Box<dyn Contestant + 'a>) -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            player_x,
            player_o,
        }
    }

    /// Starts from `board` with `to_move` next instead of the empty board.
    pub fn starting_from(mut self, board: Board, to_move: Player) -> Self {
        self.board = board;
        self.to_move = to_move;
        self
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Runs the game loop until someone wins, the board fills, or a
    /// contestant quits.
    ///
    /// # Errors
    ///
    /// Fails if a contestant errors or picks an occupied square.
    #[instrument(skip(self), fields(x = self.player_x.name(), o = self.player_o.name()))]
    pub fn run(&mut self) -> Result<MatchOutcome> {
        info!("Starting match");

        while !self.board.is_terminal() {
            let mark = self.to_move;
            let contestant = match mark {
                Player::X => &mut self.player_x,
                Player::O => &mut self.player_o,
            };

            debug!(player = contestant.name(), ?mark, "Waiting for move");
            match contestant.choose_move(&self.board, mark)? {
                Choice::Quit => {
                    info!(?mark, "Contestant quit");
                    return Ok(MatchOutcome::Abandoned {
                        by: mark,
                        board: self.board.clone(),
                    });
                }
                Choice::Play(position) => {
                    self.board
                        .apply_move(mark, position)
                        .map_err(|e| anyhow::anyhow!("{} played illegally: {}", contestant.name(), e))?;
                    debug!(?mark, %position, "Move made");
                }
            }
            self.to_move = mark.opponent();
        }

        let status = self.board.status();
        info!(?status, "Match finished");
        Ok(MatchOutcome::Finished {
            status,
            board: self.board.clone(),
        })
    }
}
