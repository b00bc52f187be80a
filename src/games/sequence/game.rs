//! Colour-sequence game implementation.

use serde::{Deserialize, Serialize};

use super::code::{Code, Color};
use crate::core::{GameRng, SequenceConfig};
use crate::error::GameResult;
use crate::rules::{GameVariant, GuessOutcome};

/// Feedback for one guess.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchCount {
    /// Right colour in the right position.
    pub exacts: u32,
    /// Right colour in a different position.
    pub partials: u32,
}

/// Score `guess` against `secret`.
///
/// `partials` counts every pair of distinct positions `(i, j)` with
/// `secret[i] == guess[j]`. This equals the usual Mastermind partial count
/// only because a secret never repeats a colour; a secret with repeats would
/// need counts capped by colour multiplicity.
#[must_use]
pub fn evaluate(secret: &Code, guess: &Code) -> MatchCount {
    let secret = secret.colors();
    let guess = guess.colors();

    let exacts = secret
        .iter()
        .zip(guess)
        .filter(|(s, g)| s == g)
        .count() as u32;

    let mut partials = 0;
    for (i, s) in secret.iter().enumerate() {
        for (j, g) in guess.iter().enumerate() {
            if i != j && s == g {
                partials += 1;
            }
        }
    }

    MatchCount { exacts, partials }
}

/// What the player sees: every guess so far with its feedback.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceView {
    /// Colours expected in each guess.
    pub code_length: usize,
    pub history: Vec<(Code, MatchCount)>,
}

impl SequenceView {
    /// Feedback for the most recent guess.
    #[must_use]
    pub fn last(&self) -> Option<&(Code, MatchCount)> {
        self.history.last()
    }
}

impl std::fmt::Display for SequenceView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let last = self.last().map(|(_, m)| *m).unwrap_or_default();
        writeln!(f, "Exact matches: {}", last.exacts)?;
        writeln!(f, "Partial matches: {}", last.partials)?;
        let previous: Vec<String> = self.history.iter().map(|(c, _)| c.to_string()).collect();
        write!(f, "Previous guesses: {}", previous.join(" "))
    }
}

/// Mastermind-style variant: find a hidden sequence of distinct colours.
///
/// Every evaluated guess costs one guess, including the winning one.
#[derive(Clone, Debug)]
pub struct SequenceMatch {
    config: SequenceConfig,
    rng: GameRng,
    secret: Code,
    current_guess: Option<Code>,
    history: Vec<(Code, MatchCount)>,
}

impl SequenceMatch {
    /// Create the variant. The first secret is drawn by the round engine.
    pub fn new(config: SequenceConfig, rng: GameRng) -> Self {
        Self {
            config,
            rng,
            secret: Code::default(),
            current_guess: None,
            history: Vec::new(),
        }
    }

    /// Standard 4-colour game seeded with `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self::new(SequenceConfig::default(), GameRng::new(seed))
    }

    /// Use a known secret instead of a random one.
    ///
    /// # Panics
    ///
    /// Panics if the code has the wrong length or repeats a colour.
    #[must_use]
    pub fn with_secret(mut self, secret: Code) -> Self {
        assert_eq!(secret.len(), self.config.code_length, "Secret has the wrong length");
        assert!(!secret.has_repeats(), "Secret must not repeat a colour");
        self.secret = secret;
        self.current_guess = None;
        self.history.clear();
        self
    }

    #[must_use]
    pub fn config(&self) -> &SequenceConfig {
        &self.config
    }

    #[must_use]
    pub fn code_length(&self) -> usize {
        self.config.code_length
    }

    #[must_use]
    pub fn secret(&self) -> &Code {
        &self.secret
    }

    /// Draw distinct colours, order significant, uniformly at random.
    pub fn generate_secret(&mut self) -> Code {
        let picks = self.rng.sample_distinct(Color::ALL.len(), self.config.code_length);
        Code::new(picks.into_iter().map(|i| Color::ALL[i]))
    }
}

impl GameVariant for SequenceMatch {
    type Guess = Code;
    type View = SequenceView;

    fn name(&self) -> &'static str {
        "Mastermind"
    }

    fn instructions(&self, guess_budget: u32) -> String {
        let palette: Vec<String> = Color::ALL
            .iter()
            .map(|c| format!("'{}' - {}", c.letter(), c))
            .collect();
        format!(
            "=================== Welcome to Mastermind! ===================\n\
             Objective: guess the hidden sequence of {len} colours (no colour repeats).\n\
             1. Enter {len} letters, one per colour: {palette}.\n\
             2. After each guess you are told how many colours are exact and partial matches.\n\
             3. You have {budget} guesses; every guess counts.\n\
             4. Unused guesses become your score.",
            len = self.config.code_length,
            palette = palette.join(", "),
            budget = guess_budget,
        )
    }

    fn new_secret(&mut self) -> GameResult<()> {
        self.secret = self.generate_secret();
        self.current_guess = None;
        self.history.clear();
        Ok(())
    }

    fn process_guess(&mut self, guess: &Code) -> GuessOutcome {
        let count = evaluate(&self.secret, guess);
        self.history.push((guess.clone(), count));
        self.current_guess = Some(guess.clone());
        GuessOutcome::Scored
    }

    fn check_win(&self) -> bool {
        self.current_guess.as_ref() == Some(&self.secret)
    }

    fn describe_state(&self) -> SequenceView {
        SequenceView {
            code_length: self.config.code_length,
            history: self.history.clone(),
        }
    }

    fn reveal(&self) -> String {
        self.secret.to_string()
    }
}
