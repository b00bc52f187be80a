//! Phrase-reveal game implementation.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::pool::PhrasePool;
use crate::core::GameRng;
use crate::error::GameResult;
use crate::rules::{GameVariant, GuessOutcome};

/// Placeholder shown for an unrevealed letter.
pub const MASK_GLYPH: char = '*';

/// Mask every letter; punctuation and spaces stay visible.
#[must_use]
pub fn initial_mask(phrase: &str) -> String {
    mask_phrase(phrase, &FxHashSet::default())
}

/// Reveal letters present in `guessed`. The set holds both cases of
/// every guessed letter.
fn mask_phrase(phrase: &str, guessed: &FxHashSet<char>) -> String {
    phrase
        .chars()
        .map(|c| {
            if c.is_alphabetic() && !guessed.contains(&c) {
                MASK_GLYPH
            } else {
                c
            }
        })
        .collect()
}

fn same_letter(a: char, b: char) -> bool {
    a.to_lowercase().eq(b.to_lowercase())
}

/// What the player sees: the mask and the letters already tried.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhraseView {
    pub mask: String,
    /// Letters tried so far, lower-cased, in guess order.
    pub guessed: Vec<char>,
}

impl PhraseView {
    /// Has this letter been tried, in either case?
    #[must_use]
    pub fn already_guessed(&self, letter: char) -> bool {
        self.guessed.iter().any(|&g| same_letter(g, letter))
    }
}

impl std::fmt::Display for PhraseView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Phrase:\t{}", self.mask)?;
        let previous: String = self.guessed.iter().collect();
        write!(f, "Previous guesses: {}", previous)
    }
}

/// Wheel-of-Fortune-style variant: reveal a hidden phrase letter by letter.
///
/// Correct letters are free; a letter absent from the phrase costs one
/// guess. Each phrase is played at most once per session.
#[derive(Clone, Debug)]
pub struct PhraseReveal {
    pool: PhrasePool,
    rng: GameRng,
    phrase: String,
    guessed: FxHashSet<char>,
    guess_order: Vec<char>,
    mask: String,
}

impl PhraseReveal {
    /// Create the variant. The first phrase is drawn by the round engine.
    pub fn new(pool: PhrasePool, rng: GameRng) -> Self {
        Self {
            pool,
            rng,
            phrase: String::new(),
            guessed: FxHashSet::default(),
            guess_order: Vec::new(),
            mask: String::new(),
        }
    }

    /// Phrases still available.
    #[must_use]
    pub fn pool(&self) -> &PhrasePool {
        &self.pool
    }

    /// The phrase being played.
    #[must_use]
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    /// The revealed mask, same length in characters as the phrase.
    #[must_use]
    pub fn mask(&self) -> &str {
        &self.mask
    }

    /// Remove one phrase from the pool at random.
    ///
    /// # Errors
    ///
    /// `GameError::PoolExhausted` if the pool is empty.
    pub fn select_phrase(&mut self) -> GameResult<String> {
        self.pool.select(&mut self.rng)
    }

    fn record(&mut self, letter: char) {
        self.guessed.extend(letter.to_lowercase());
        self.guessed.extend(letter.to_uppercase());
        self.guess_order.extend(letter.to_lowercase());
    }
}

impl GameVariant for PhraseReveal {
    type Guess = char;
    type View = PhraseView;

    fn name(&self) -> &'static str {
        "Wheel of Fortune"
    }

    fn instructions(&self, guess_budget: u32) -> String {
        format!(
            "=================== Welcome to Wheel of Fortune! ===================\n\
             Objective: guess the hidden phrase one letter at a time.\n\
             1. Enter a single letter (e.g. \"a\" or \"B\").\n\
             2. Every occurrence of a correct letter is revealed.\n\
             3. You can make up to {} incorrect guesses.\n\
             4. Unused guesses become your score.",
            guess_budget
        )
    }

    fn new_secret(&mut self) -> GameResult<()> {
        self.phrase = self.select_phrase()?;
        self.guessed.clear();
        self.guess_order.clear();
        self.mask = initial_mask(&self.phrase);
        Ok(())
    }

    fn process_guess(&mut self, letter: &char) -> GuessOutcome {
        let letter = *letter;
        if self.guessed.contains(&letter) {
            return GuessOutcome::Repeated;
        }
        self.record(letter);

        let found = self
            .phrase
            .chars()
            .any(|c| c.is_alphabetic() && same_letter(c, letter));
        if found {
            self.mask = mask_phrase(&self.phrase, &self.guessed);
            GuessOutcome::Hit
        } else {
            GuessOutcome::Miss
        }
    }

    fn check_win(&self) -> bool {
        !self.mask.contains(MASK_GLYPH)
    }

    fn describe_state(&self) -> PhraseView {
        PhraseView {
            mask: self.mask.clone(),
            guessed: self.guess_order.clone(),
        }
    }

    fn reveal(&self) -> String {
        self.phrase.clone()
    }

    fn has_next_secret(&self) -> bool {
        !self.pool.is_empty()
    }
}
