//! Session summary statistics.

use serde::{Deserialize, Serialize};

/// Aggregate statistics over a non-empty ledger.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LedgerSummary {
    /// Rounds recorded.
    pub rounds: usize,

    /// Arithmetic mean of all scores.
    pub mean: f64,

    /// Highest score.
    pub best: u32,

    /// Lowest score.
    pub worst: u32,
}

impl std::fmt::Display for LedgerSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} rounds, average {:.2}, best {}, worst {}",
            self.rounds, self.mean, self.best, self.worst
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_display() {
        let summary = LedgerSummary {
            rounds: 3,
            mean: 2.5,
            best: 5,
            worst: 0,
        };
        assert_eq!(summary.to_string(), "3 rounds, average 2.50, best 5, worst 0");
    }

    #[test]
    fn test_summary_serialization() {
        let summary = LedgerSummary {
            rounds: 1,
            mean: 4.0,
            best: 4,
            worst: 4,
        };

        let json = serde_json::to_string(&summary).unwrap();
        let deserialized: LedgerSummary = serde_json::from_str(&json).unwrap();

        assert_eq!(summary, deserialized);
    }
}
