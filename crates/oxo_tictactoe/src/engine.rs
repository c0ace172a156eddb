//! Full-depth minimax search with a per-player transposition cache.
//!
//! Scores are always relative to the player to move, so a child's score is
//! negated on the way up. The search has no depth limit and no pruning: leaf
//! scores come only from finished games.

use crate::board::Board;
use crate::cache::{Evaluation, TranspositionCache};
use crate::position::Position;
use crate::types::{Player, Score};
use derive_getters::Getters;
use serde::Serialize;
use tracing::{debug, error, info, instrument, trace};

/// Counters accumulated across every search made by one bot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize)]
pub struct SearchStats {
    /// Non-terminal boards whose children were explored.
    nodes_expanded: u64,
    /// Terminal boards scored.
    leaves_scored: u64,
    /// Lookups answered from the cache.
    cache_hits: u64,
}

/// Perfect-play tic-tac-toe opponent.
///
/// The cache lives as long as the bot, so repeated queries over one game
/// (or many games) reuse earlier work.
#[derive(Debug, Clone, Default)]
pub struct MinimaxBot {
    cache: TranspositionCache,
    stats: SearchStats,
}

impl MinimaxBot {
    /// Creates a bot with an empty cache.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Chooses the move for `player`, or `None` if the game is over.
    #[instrument(skip(self, board), fields(key = %board.key()))]
    pub fn best_move(&mut self, board: &Board, player: Player) -> Option<Position> {
        let evaluation = self.evaluate(board, player);
        info!(
            best_move = ?evaluation.best_move(),
            score = %evaluation.score(),
            cached = self.cache.len(),
            "Move chosen"
        );
        *evaluation.best_move()
    }

    /// Best move and score for `player` to move on `board`.
    ///
    /// Ties go to the lowest position, since only a strictly better score
    /// replaces the current best.
    #[instrument(level = "debug", skip(self, board), fields(key = %board.key()))]
    pub fn evaluate(&mut self, board: &Board, player: Player) -> Evaluation {
        let key = board.key();
        if let Some(hit) = self.cache.get(player, key) {
            self.stats.cache_hits += 1;
            trace!(?hit, "Cache hit");
            return hit;
        }

        if let Some(score) = board.terminal_score(player) {
            self.stats.leaves_scored += 1;
            return self.cache.insert(player, key, Evaluation::leaf(score));
        }

        self.stats.nodes_expanded += 1;
        let opponent = player.opponent();
        let moves = board.legal_moves();
        // A board that is not terminal always has an empty square.
        debug_assert!(!moves.is_empty(), "non-terminal board without moves: {:?}", board);
        let mut best: Option<Evaluation> = None;

        for position in moves {
            let child = match board.with_move(player, position) {
                Ok(child) => child,
                Err(e) => {
                    error!(%e, "Generated move rejected by board");
                    continue;
                }
            };
            let value = -*self.evaluate(&child, opponent).score();
            if best.is_none_or(|b| value > *b.score()) {
                best = Some(Evaluation::with_move(position, value));
            }
        }

        self.settle(board, player, best)
    }

    /// Caches the best move found for a non-terminal board.
    ///
    /// With no move found the board is broken: the Draw fallback is returned
    /// but never cached.
    fn settle(&mut self, board: &Board, player: Player, best: Option<Evaluation>) -> Evaluation {
        match best {
            Some(evaluation) => {
                debug!(?evaluation, "Board evaluated");
                self.cache.insert(player, board.key(), evaluation)
            }
            None => {
                error!(?board, "Non-terminal board produced no moves");
                Evaluation::leaf(Score::Draw)
            }
        }
    }

    /// The cache of every evaluation made so far.
    pub fn cache(&self) -> &TranspositionCache {
        &self.cache
    }

    /// Search counters since creation or the last [`MinimaxBot::clear`].
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Forgets all cached evaluations and resets the counters.
    #[instrument(skip(self))]
    pub fn clear(&mut self) {
        self.cache.clear();
        self.stats = SearchStats::default();
    }
}
