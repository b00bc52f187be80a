//! Append-only record of a session's rounds.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::stats::LedgerSummary;
use crate::core::{PlayerId, ScoreRecord};
use crate::error::{GameError, GameResult};

/// Collects the score records of a session.
///
/// Insertion order is significant: it breaks ranking ties and defines
/// report order. Records are never removed or changed.
///
/// Backed by an `im::Vector`, so ranking queries work on an O(1) copy.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionLedger {
    records: Vector<ScoreRecord>,
}

impl SessionLedger {
    /// Create an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record.
    pub fn add(&mut self, record: ScoreRecord) {
        self.records.push_back(record);
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ScoreRecord> {
        self.records.iter()
    }

    /// Distinct players in order of first appearance.
    #[must_use]
    pub fn players(&self) -> Vec<PlayerId> {
        let mut seen = Vec::new();
        for record in &self.records {
            if !seen.contains(record.player_id()) {
                seen.push(record.player_id().clone());
            }
        }
        seen
    }

    /// Mean score over every record.
    ///
    /// # Errors
    ///
    /// `GameError::EmptyInput` if the ledger is empty.
    pub fn average_all(&self) -> GameResult<f64> {
        mean(self.records.iter()).ok_or(GameError::EmptyInput { player: None })
    }

    /// Mean score over one player's records.
    ///
    /// # Errors
    ///
    /// `GameError::EmptyInput` if the player has no records.
    pub fn average_for(&self, player: &PlayerId) -> GameResult<f64> {
        mean(self.records.iter().filter(|r| r.player_id() == player)).ok_or_else(|| {
            GameError::EmptyInput {
                player: Some(player.clone()),
            }
        })
    }

    /// Up to `n` records, highest score first.
    ///
    /// Equal scores keep insertion order. `n == 0` gives an empty list and
    /// `n` past the record count gives every record.
    #[must_use]
    pub fn top_n(&self, n: usize) -> Vec<ScoreRecord> {
        rank(self.records.clone(), n)
    }

    /// Like `top_n`, restricted to one player's records.
    #[must_use]
    pub fn top_n_for(&self, player: &PlayerId, n: usize) -> Vec<ScoreRecord> {
        let mine: Vector<ScoreRecord> = self
            .records
            .iter()
            .filter(|r| r.player_id() == player)
            .cloned()
            .collect();
        rank(mine, n)
    }

    /// Aggregate statistics over the whole ledger.
    ///
    /// # Errors
    ///
    /// `GameError::EmptyInput` if the ledger is empty.
    pub fn summary(&self) -> GameResult<LedgerSummary> {
        let mean = self.average_all()?;
        let (best, worst) = self
            .records
            .iter()
            .map(ScoreRecord::score)
            .fold((u32::MIN, u32::MAX), |(best, worst), s| (best.max(s), worst.min(s)));
        Ok(LedgerSummary {
            rounds: self.records.len(),
            mean,
            best,
            worst,
        })
    }
}

impl Extend<ScoreRecord> for SessionLedger {
    fn extend<I: IntoIterator<Item = ScoreRecord>>(&mut self, iter: I) {
        for record in iter {
            self.add(record);
        }
    }
}

impl FromIterator<ScoreRecord> for SessionLedger {
    fn from_iter<I: IntoIterator<Item = ScoreRecord>>(iter: I) -> Self {
        let mut ledger = Self::new();
        ledger.extend(iter);
        ledger
    }
}

fn mean<'a>(records: impl Iterator<Item = &'a ScoreRecord>) -> Option<f64> {
    let (sum, count) = records.fold((0u64, 0u64), |(sum, count), r| {
        (sum + u64::from(r.score()), count + 1)
    });
    (count > 0).then(|| sum as f64 / count as f64)
}

// Stable sort: equal scores stay in insertion order.
fn rank(records: Vector<ScoreRecord>, n: usize) -> Vec<ScoreRecord> {
    let mut ranked: Vec<ScoreRecord> = records.into_iter().collect();
    ranked.sort_by(|a, b| b.compare_score(a));
    ranked.truncate(n);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger(entries: &[(u32, &str)]) -> SessionLedger {
        entries
            .iter()
            .map(|&(score, player)| ScoreRecord::new(score, player))
            .collect()
    }

    #[test]
    fn test_empty_ledger_average_fails() {
        let ledger = SessionLedger::new();
        assert!(matches!(
            ledger.average_all(),
            Err(GameError::EmptyInput { player: None })
        ));
        assert!(ledger.summary().is_err());
    }

    #[test]
    fn test_average_all() {
        let ledger = ledger(&[(5, "a"), (0, "b"), (2, "a")]);
        let avg = ledger.average_all().unwrap();
        assert!((avg - 7.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_average_for_player() {
        let ledger = ledger(&[(5, "a"), (0, "b"), (2, "a")]);
        assert_eq!(ledger.average_for(&PlayerId::new("a")).unwrap(), 3.5);
        assert_eq!(ledger.average_for(&PlayerId::new("b")).unwrap(), 0.0);

        let missing = ledger.average_for(&PlayerId::new("c"));
        match missing {
            Err(GameError::EmptyInput { player }) => assert_eq!(player, Some(PlayerId::new("c"))),
            other => panic!("expected EmptyInput, got {:?}", other),
        }
    }

    #[test]
    fn test_top_n_is_stable() {
        let ledger = ledger(&[(3, "first"), (5, "a"), (3, "second"), (3, "third"), (1, "b")]);
        let top: Vec<_> = ledger
            .top_n(4)
            .iter()
            .map(|r| r.player_id().to_string())
            .collect();
        assert_eq!(top, vec!["a", "first", "second", "third"]);
    }

    #[test]
    fn test_top_n_bounds() {
        let ledger = ledger(&[(1, "a"), (2, "a")]);
        assert!(ledger.top_n(0).is_empty());
        assert_eq!(ledger.top_n(10).len(), 2);
        assert_eq!(ledger.top_n(10)[0].score(), 2);
    }

    #[test]
    fn test_top_n_does_not_mutate() {
        let ledger = ledger(&[(1, "a"), (4, "b"), (2, "c")]);
        let before = ledger.clone();
        let _ = ledger.top_n(2);
        assert_eq!(ledger, before);
        assert_eq!(ledger.iter().next().unwrap().score(), 1);
    }

    #[test]
    fn test_top_n_for_player() {
        let ledger = ledger(&[(1, "a"), (4, "b"), (2, "a"), (5, "b"), (2, "a")]);
        let top = ledger.top_n_for(&PlayerId::new("a"), 2);
        assert_eq!(top, vec![ScoreRecord::new(2, "a"), ScoreRecord::new(2, "a")]);
        assert!(ledger.top_n_for(&PlayerId::new("z"), 3).is_empty());
    }

    #[test]
    fn test_players_first_seen_order() {
        let ledger = ledger(&[(1, "b"), (4, "a"), (2, "b")]);
        assert_eq!(ledger.players(), vec![PlayerId::new("b"), PlayerId::new("a")]);
    }

    #[test]
    fn test_summary() {
        let ledger = ledger(&[(1, "a"), (4, "b"), (1, "c")]);
        let summary = ledger.summary().unwrap();
        assert_eq!(summary.rounds, 3);
        assert_eq!(summary.best, 4);
        assert_eq!(summary.worst, 1);
        assert_eq!(summary.mean, 2.0);
    }

    #[test]
    fn test_ledger_serde() {
        let ledger = ledger(&[(3, "a"), (1, "b")]);
        let json = serde_json::to_string(&ledger).unwrap();
        let back: SessionLedger = serde_json::from_str(&json).unwrap();
        assert_eq!(ledger, back);
    }
}
