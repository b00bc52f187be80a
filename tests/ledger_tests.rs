//! Session ledger integration tests: averages and rankings.

use proptest::prelude::*;

use rust_guess::{GameError, PlayerId, ScoreRecord, SessionLedger};

fn ledger_of(scores: &[u32]) -> SessionLedger {
    scores
        .iter()
        .enumerate()
        .map(|(i, &s)| ScoreRecord::new(s, format!("p{}", i)))
        .collect()
}

// =============================================================================
// Averages
// =============================================================================

#[test]
fn test_average_of_session() {
    let ledger = ledger_of(&[5, 0, 3, 4]);
    assert_eq!(ledger.average_all().unwrap(), 3.0);
}

#[test]
fn test_average_of_empty_ledger() {
    let result = SessionLedger::new().average_all();
    assert!(matches!(result, Err(GameError::EmptyInput { player: None })));
}

#[test]
fn test_average_per_player() {
    let mut ledger = SessionLedger::new();
    ledger.add(ScoreRecord::new(4, "ada"));
    ledger.add(ScoreRecord::new(1, "bob"));
    ledger.add(ScoreRecord::new(2, "ada"));

    assert_eq!(ledger.average_for(&PlayerId::new("ada")).unwrap(), 3.0);
    assert_eq!(ledger.average_for(&PlayerId::new("bob")).unwrap(), 1.0);
    assert_eq!(ledger.players(), vec![PlayerId::new("ada"), PlayerId::new("bob")]);
}

// =============================================================================
// Rankings
// =============================================================================

#[test]
fn test_top_two() {
    let ledger = ledger_of(&[2, 5, 0, 4]);
    let top: Vec<u32> = ledger.top_n(2).iter().map(ScoreRecord::score).collect();
    assert_eq!(top, vec![5, 4]);
}

#[test]
fn test_top_n_ties_keep_insertion_order() {
    let mut ledger = SessionLedger::new();
    ledger.add(ScoreRecord::new(3, "first"));
    ledger.add(ScoreRecord::new(3, "second"));
    ledger.add(ScoreRecord::new(4, "best"));

    let names: Vec<String> = ledger
        .top_n(3)
        .iter()
        .map(|r| r.player_id().to_string())
        .collect();
    assert_eq!(names, vec!["best", "first", "second"]);
}

#[test]
fn test_top_n_edge_sizes() {
    let ledger = ledger_of(&[1, 2]);
    assert!(ledger.top_n(0).is_empty());
    assert_eq!(ledger.top_n(10).len(), 2);
    assert!(SessionLedger::new().top_n(3).is_empty());
}

#[test]
fn test_summary_display() {
    let ledger = ledger_of(&[5, 0, 2, 3]);
    let summary = ledger.summary().unwrap();
    assert_eq!(summary.best, 5);
    assert_eq!(summary.worst, 0);
    assert_eq!(summary.to_string(), "4 rounds, average 2.50, best 5, worst 0");
}

#[test]
fn test_ledger_serializes() {
    let ledger = ledger_of(&[4]);
    let json = serde_json::to_string(&ledger).unwrap();
    assert_eq!(json, r#"{"records":[{"score":4,"player_id":"p0"}]}"#);

    let back: SessionLedger = serde_json::from_str(&json).unwrap();
    assert_eq!(back, ledger);
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_average_is_arithmetic_mean(scores in prop::collection::vec(0u32..=10, 1..50)) {
        let ledger = ledger_of(&scores);
        let expected = scores.iter().map(|&s| f64::from(s)).sum::<f64>() / scores.len() as f64;
        let avg = ledger.average_all().unwrap();
        prop_assert!((avg - expected).abs() < 1e-9);

        let min = f64::from(*scores.iter().min().unwrap());
        let max = f64::from(*scores.iter().max().unwrap());
        prop_assert!(min <= avg && avg <= max);
    }

    #[test]
    fn prop_top_n_is_sorted_prefix(scores in prop::collection::vec(0u32..=5, 0..40), n in 0usize..50) {
        let ledger = ledger_of(&scores);
        let top = ledger.top_n(n);

        prop_assert_eq!(top.len(), n.min(scores.len()));
        for pair in top.windows(2) {
            prop_assert!(pair[0].score() >= pair[1].score());
        }

        let mut sorted = scores.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        let top_scores: Vec<u32> = top.iter().map(ScoreRecord::score).collect();
        prop_assert_eq!(&top_scores[..], &sorted[..top.len()]);
    }

    #[test]
    fn prop_top_n_is_stable(scores in prop::collection::vec(0u32..=3, 0..40)) {
        let ledger = ledger_of(&scores);
        let top = ledger.top_n(scores.len());

        // Player names encode insertion index; equal scores must keep it ascending.
        let index = |r: &ScoreRecord| -> usize {
            r.player_id().as_str()[1..].parse().unwrap()
        };
        for pair in top.windows(2) {
            if pair[0].score() == pair[1].score() {
                prop_assert!(index(&pair[0]) < index(&pair[1]));
            }
        }
    }
}
