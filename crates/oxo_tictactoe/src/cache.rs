//! Transposition cache for the minimax solver.
//!
//! Results are partitioned by the player they were computed for. The same
//! board evaluated for X and for O lives in two separate entries because the
//! score is relative to that player.

use crate::board::BoardKey;
use crate::position::Position;
use crate::types::{Player, Score};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{instrument, warn};

/// Best move and its score for one (player, board) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Evaluation {
    /// Move to play, `None` when the board is terminal.
    best_move: Option<Position>,
    /// Value of the board for the player to move.
    score: Score,
}

impl Evaluation {
    /// Result for a finished game: no move, only a score.
    pub fn leaf(score: Score) -> Self {
        Self {
            best_move: None,
            score,
        }
    }

    /// Result for a board where `best_move` achieves `score`.
    pub fn with_move(best_move: Position, score: Score) -> Self {
        Self {
            best_move: Some(best_move),
            score,
        }
    }
}

/// Memoized evaluations keyed by `(player, board)`.
#[derive(Debug, Clone, Default)]
pub struct TranspositionCache {
    by_player: HashMap<Player, HashMap<BoardKey, Evaluation>>,
}

impl TranspositionCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a stored evaluation.
    pub fn get(&self, player: Player, key: BoardKey) -> Option<Evaluation> {
        self.by_player
            .get(&player)
            .and_then(|entries| entries.get(&key))
            .copied()
    }

    /// Stores an evaluation unless one already exists.
    ///
    /// Entries are never replaced. Returns the evaluation now in the cache,
    /// which is the earlier one if the key was already present.
    #[instrument(level = "trace", skip(self))]
    pub fn insert(&mut self, player: Player, key: BoardKey, evaluation: Evaluation) -> Evaluation {
        let stored = *self
            .by_player
            .entry(player)
            .or_default()
            .entry(key)
            .or_insert(evaluation);
        if stored != evaluation {
            warn!(?player, %key, ?stored, ?evaluation, "Conflicting evaluation ignored");
        }
        stored
    }

    /// Whether an entry exists for `(player, key)`.
    pub fn contains(&self, player: Player, key: BoardKey) -> bool {
        self.get(player, key).is_some()
    }

    /// Number of entries stored for one player.
    pub fn len_for(&self, player: Player) -> usize {
        self.by_player.get(&player).map_or(0, HashMap::len)
    }

    /// Total number of entries.
    pub fn len(&self) -> usize {
        self.by_player.values().map(HashMap::len).sum()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every entry.
    pub fn clear(&mut self) {
        self.by_player.clear();
    }
}
