//! Colour-sequence game integration tests.

use rust_guess::console::Console;
use rust_guess::games::sequence::{evaluate, Code, MatchCount, SequenceMatch};
use rust_guess::round::{play_session, NullObserver, RoundEngine, RoundPhase, ScriptedInput, SessionEnd};
use rust_guess::{GameVariant, RoundConfig, SequenceConfig};

fn code(s: &str) -> Code {
    s.parse().unwrap()
}

/// The secret an engine built from `SequenceMatch::with_seed(seed)` will draw.
fn probe_secret(seed: u64) -> Code {
    let mut probe = SequenceMatch::with_seed(seed);
    probe.new_secret().unwrap();
    probe.secret().clone()
}

/// A code with the same colours as `secret`, shifted one place.
fn rotated(secret: &Code) -> Code {
    Code::new(secret.colors().iter().cycle().skip(1).take(secret.len()).copied())
}

// =============================================================================
// Evaluation
// =============================================================================

#[test]
fn test_evaluate_examples() {
    let secret = code("RGBY");
    assert_eq!(evaluate(&secret, &code("RGBY")), MatchCount { exacts: 4, partials: 0 });
    assert_eq!(evaluate(&secret, &code("RGYB")), MatchCount { exacts: 2, partials: 2 });
    assert_eq!(evaluate(&secret, &code("YBGR")), MatchCount { exacts: 0, partials: 4 });
    assert_eq!(evaluate(&secret, &code("OPOP")), MatchCount { exacts: 0, partials: 0 });
}

#[test]
fn test_evaluate_totals_never_exceed_length() {
    let secret = code("RGBY");
    for guess in ["RRRR", "GGGG", "RGOP", "PYBG", "BYRG"] {
        let m = evaluate(&secret, &code(guess));
        assert!(m.exacts + m.partials <= 4, "{} scored {:?}", guess, m);
    }
}

#[test]
fn test_seeded_secrets_match_probe() {
    for seed in 0..20 {
        let engine = RoundEngine::new(SequenceMatch::with_seed(seed), RoundConfig::default()).unwrap();
        assert_eq!(engine.variant().secret(), &probe_secret(seed));
    }
}

#[test]
fn test_shorter_codes() {
    let config = SequenceConfig::new().with_code_length(2);
    let mut game = SequenceMatch::new(config, rust_guess::GameRng::new(3));
    game.new_secret().unwrap();
    assert_eq!(game.secret().len(), 2);
    assert!(!game.secret().has_repeats());
}

// =============================================================================
// Rounds
// =============================================================================

#[test]
fn test_win_on_second_guess_scores_three() {
    let secret = probe_secret(42);
    let mut engine = RoundEngine::new(SequenceMatch::with_seed(42), RoundConfig::default()).unwrap();
    let mut input = ScriptedInput::new([rotated(&secret), secret.clone()]);

    let record = engine.play_round(&mut input, &mut NullObserver).unwrap();
    assert_eq!(record.score(), 3);
    assert_eq!(engine.phase(), RoundPhase::Summarized);
}

#[test]
fn test_first_guess_win_costs_one() {
    let secret = probe_secret(9);
    let mut engine = RoundEngine::new(SequenceMatch::with_seed(9), RoundConfig::default()).unwrap();
    let mut input = ScriptedInput::new([secret]);

    let record = engine.play_round(&mut input, &mut NullObserver).unwrap();
    assert_eq!(record.score(), 4);
}

#[test]
fn test_exhausted_round_scores_zero() {
    let secret = probe_secret(1);
    let wrong = rotated(&secret);
    let mut engine = RoundEngine::new(SequenceMatch::with_seed(1), RoundConfig::default()).unwrap();
    let mut input = ScriptedInput::new(vec![wrong; 6]);

    let record = engine.play_round(&mut input, &mut NullObserver).unwrap();
    assert_eq!(record.score(), 0);
    assert_eq!(input.remaining(), 1);
    assert_eq!(engine.state().round_counter(), 5);
}

#[test]
fn test_step_api() {
    let secret = probe_secret(4);
    let mut engine = RoundEngine::new(SequenceMatch::with_seed(4), RoundConfig::default()).unwrap();

    assert_eq!(engine.phase(), RoundPhase::NotStarted);
    assert_eq!(engine.begin(), RoundPhase::AwaitingGuess);
    assert_eq!(engine.submit(&rotated(&secret)), RoundPhase::AwaitingGuess);
    assert_eq!(engine.state().guesses_remaining(), 4);
    assert!(engine.finish().is_none());

    assert_eq!(engine.submit(&secret), RoundPhase::Won);
    let summary = engine.finish().unwrap();
    assert!(summary.won);
    assert_eq!(summary.record.score(), 3);
    assert_eq!(summary.secret, secret.to_string());
    assert_eq!(summary.guesses_taken, 2);
    assert!(engine.finish().is_none());
}

// =============================================================================
// Console Sessions
// =============================================================================

#[test]
fn test_console_session() {
    let first = probe_secret(77);
    let wrong = rotated(&first);

    // Round 1 wins on the second guess, round 2 is abandoned to exhaustion.
    let mut second_probe = SequenceMatch::with_seed(77);
    second_probe.new_secret().unwrap();
    second_probe.new_secret().unwrap();
    let second_wrong = rotated(second_probe.secret());

    let mut script = format!("{}\n{}\ny\n", wrong, first);
    for _ in 0..5 {
        script.push_str(&format!("{}\n", second_wrong));
    }
    script.push_str("n\n");

    let mut engine = RoundEngine::new(
        SequenceMatch::with_seed(77),
        RoundConfig::new().with_player("mira"),
    )
    .unwrap();
    let mut input = Console::new(script.as_bytes(), Vec::new());
    let mut output = Console::new(std::io::empty(), Vec::new());

    let report = play_session(&mut engine, &mut input, &mut output).unwrap();
    assert_eq!(report.end, SessionEnd::Declined);

    let scores: Vec<u32> = report.ledger.iter().map(|r| r.score()).collect();
    assert_eq!(scores, vec![3, 0]);
    assert_eq!(report.ledger.average_all().unwrap(), 1.5);
    assert!(report.ledger.iter().all(|r| r.player_id().as_str() == "mira"));

    let printed = String::from_utf8(output.into_output()).unwrap();
    assert!(printed.contains("Welcome to Mastermind!"));
    assert!(printed.contains("<---ROUND 0--->"));
    assert!(printed.contains("Guesses remaining: 5"));
    assert!(printed.contains(&format!("Secret: {}", first)));
    assert!(printed.contains("Thanks for playing."));
    assert!(!printed.contains("out of game phrases"));
}

#[test]
fn test_console_session_recovers_from_typos() {
    let secret = probe_secret(5);
    let script = format!("RGB\nhello\n{}\nn\n", secret);

    let mut engine = RoundEngine::new(SequenceMatch::with_seed(5), RoundConfig::default()).unwrap();
    let mut input = Console::new(script.as_bytes(), Vec::new());

    let report = play_session(&mut engine, &mut input, &mut NullObserver).unwrap();
    assert_eq!(report.ledger.top_n(1)[0].score(), 4);

    let prompts = String::from_utf8(input.into_output()).unwrap();
    assert!(prompts.contains("expected 4 colours, got 3"));
}
