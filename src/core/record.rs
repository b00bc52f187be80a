//! One round's outcome.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::PlayerId;

/// Outcome of a single round.
///
/// `score` is the number of guesses left when the round ended: higher is
/// better, and 0 means the budget ran out without a win. Records are never
/// mutated once created.
///
/// Equality compares both fields. Ranking uses `compare_score`, which looks
/// at the score alone; there is no `Ord` impl.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoreRecord {
    score: u32,
    player_id: PlayerId,
}

impl ScoreRecord {
    /// Create a new record.
    pub fn new(score: u32, player_id: impl Into<PlayerId>) -> Self {
        Self {
            score,
            player_id: player_id.into(),
        }
    }

    /// Guesses remaining at round end.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Who played the round.
    #[must_use]
    pub fn player_id(&self) -> &PlayerId {
        &self.player_id
    }

    /// Order two records by score only.
    #[must_use]
    pub fn compare_score(&self, other: &Self) -> Ordering {
        self.score.cmp(&other.score)
    }
}

impl std::fmt::Display for ScoreRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.player_id, self.score)
    }
}
