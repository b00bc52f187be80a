//! Round engine: the lifecycle of a single round.
//!
//! ```text
//! NotStarted -> Instructing -> AwaitingGuess <-> Evaluating -> Won | Exhausted -> Summarized
//! ```
//!
//! The engine owns the guess budget and round counter; everything that
//! depends on the kind of game is delegated to the wrapped `GameVariant`.

use log::{debug, info, trace};
use serde::{Deserialize, Serialize};

use super::collaborators::{GuessSource, RoundObserver};
use crate::core::{RoundConfig, ScoreRecord};
use crate::error::GameResult;
use crate::rules::GameVariant;

/// Lifecycle phase of a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Fresh secret loaded, nothing shown yet.
    NotStarted,
    /// Instructions are being shown.
    Instructing,
    /// Waiting for the next guess.
    AwaitingGuess,
    /// A guess is being evaluated.
    Evaluating,
    /// The secret was found.
    Won,
    /// The budget ran out.
    Exhausted,
    /// The round's record has been produced.
    Summarized,
}

impl RoundPhase {
    /// Has the round reached a terminal phase?
    #[must_use]
    pub fn is_finished(self) -> bool {
        matches!(self, RoundPhase::Won | RoundPhase::Exhausted | RoundPhase::Summarized)
    }
}

/// Per-round counters, reset before every round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    guesses_remaining: u32,
    round_counter: u32,
    phase: RoundPhase,
    won: bool,
}

impl RoundState {
    fn new(guess_budget: u32) -> Self {
        Self {
            guesses_remaining: guess_budget,
            round_counter: 0,
            phase: RoundPhase::NotStarted,
            won: false,
        }
    }

    /// Guesses left in this round. Never exceeds the configured budget.
    #[must_use]
    pub fn guesses_remaining(&self) -> u32 {
        self.guesses_remaining
    }

    /// Guesses processed so far in this round.
    #[must_use]
    pub fn round_counter(&self) -> u32 {
        self.round_counter
    }

    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }
}

/// Player-facing snapshot taken before each guess.
#[derive(Clone, Debug)]
pub struct RoundStatus<W> {
    /// Guesses processed so far.
    pub round: u32,
    pub guesses_remaining: u32,
    /// Variant-specific view (match counts, revealed mask, ...).
    pub view: W,
}

impl<W: std::fmt::Display> std::fmt::Display for RoundStatus<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "<---ROUND {}--->", self.round)?;
        writeln!(f, "{}", self.view)?;
        write!(f, "Guesses remaining: {}", self.guesses_remaining)
    }
}

/// End-of-round report handed to the output collaborator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub record: ScoreRecord,
    pub won: bool,
    /// The secret, as the variant displays it.
    pub secret: String,
    /// Guesses processed during the round.
    pub guesses_taken: u32,
}

impl std::fmt::Display for RoundSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "<----GAME SUMMARY---->")?;
        writeln!(f, "Secret: {}", self.secret)?;
        writeln!(f, "Result: {}", if self.won { "solved" } else { "out of guesses" })?;
        write!(f, "Score: {} (guesses remaining)", self.record.score())
    }
}

/// Drives one round at a time over a `GameVariant`.
///
/// Use `play_round` with collaborators, or the step API (`begin`,
/// `submit`, `finish`) to drive a round directly.
pub struct RoundEngine<V: GameVariant> {
    variant: V,
    config: RoundConfig,
    state: RoundState,
}

impl<V: GameVariant> RoundEngine<V> {
    /// Create an engine and load the first secret.
    ///
    /// # Errors
    ///
    /// Propagates the variant's failure to produce a secret
    /// (`GameError::PoolExhausted` for an empty phrase pool).
    pub fn new(variant: V, config: RoundConfig) -> GameResult<Self> {
        let mut engine = Self {
            variant,
            state: RoundState::new(config.guess_budget),
            config,
        };
        engine.reset()?;
        Ok(engine)
    }

    /// Load a fresh secret and reset the budget and round counter.
    ///
    /// # Errors
    ///
    /// Propagates the variant's failure to produce a secret.
    pub fn reset(&mut self) -> GameResult<()> {
        self.variant.new_secret()?;
        self.state = RoundState::new(self.config.guess_budget);
        debug!("{} round reset, budget {}", self.variant.name(), self.config.guess_budget);
        Ok(())
    }

    #[must_use]
    pub fn variant(&self) -> &V {
        &self.variant
    }

    #[must_use]
    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &RoundState {
        &self.state
    }

    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        self.state.phase
    }

    /// Instruction text for the current budget.
    #[must_use]
    pub fn instructions(&self) -> String {
        self.variant.instructions(self.state.guesses_remaining)
    }

    /// Snapshot of the round for display.
    #[must_use]
    pub fn status(&self) -> RoundStatus<V::View> {
        RoundStatus {
            round: self.state.round_counter,
            guesses_remaining: self.state.guesses_remaining,
            view: self.variant.describe_state(),
        }
    }

    /// Start the round: `NotStarted -> Instructing`, then settle into
    /// `AwaitingGuess`, or straight to `Won`/`Exhausted`.
    ///
    /// A round with no guesses left ends as `Exhausted` without looping.
    /// Has no effect outside `NotStarted`.
    pub fn begin(&mut self) -> RoundPhase {
        if self.state.phase != RoundPhase::NotStarted {
            return self.state.phase;
        }
        self.transition(RoundPhase::Instructing);
        self.settle()
    }

    /// Hand one guess to the variant: `AwaitingGuess -> Evaluating`, then
    /// settle. Has no effect outside `AwaitingGuess`.
    pub fn submit(&mut self, guess: &V::Guess) -> RoundPhase {
        if self.state.phase != RoundPhase::AwaitingGuess {
            return self.state.phase;
        }
        self.transition(RoundPhase::Evaluating);

        let outcome = self.variant.process_guess(guess);
        if outcome.consumes_guess() {
            self.state.guesses_remaining = self.state.guesses_remaining.saturating_sub(1);
        }
        self.state.round_counter += 1;
        trace!(
            "guess {:?} -> {:?}, {} remaining",
            guess,
            outcome,
            self.state.guesses_remaining
        );

        self.settle()
    }

    /// Produce the round's summary: `Won | Exhausted -> Summarized`.
    ///
    /// Returns `None` if the round has not reached a terminal phase, or was
    /// already summarized.
    pub fn finish(&mut self) -> Option<RoundSummary> {
        match self.state.phase {
            RoundPhase::Won | RoundPhase::Exhausted => Some(self.summarize()),
            _ => None,
        }
    }

    /// Play one full round against the collaborators.
    ///
    /// A round that was already summarized is reset first.
    ///
    /// # Errors
    ///
    /// Errors from the collaborators, or from the reset of a finished round.
    pub fn play_round<I, O>(&mut self, input: &mut I, observer: &mut O) -> GameResult<ScoreRecord>
    where
        I: GuessSource<V> + ?Sized,
        O: RoundObserver<V> + ?Sized,
    {
        if self.state.phase == RoundPhase::Summarized {
            self.reset()?;
        }
        info!("starting {} round for {}", self.variant.name(), self.config.player);

        if self.state.phase == RoundPhase::NotStarted {
            observer.instructions(&self.instructions())?;
        }

        let mut phase = self.begin();
        while phase == RoundPhase::AwaitingGuess {
            let status = self.status();
            observer.status(&status)?;
            let guess = input.next_guess(&status)?;
            phase = self.submit(&guess);
        }

        let summary = self.summarize();
        observer.round_finished(&summary)?;
        info!(
            "{} round over: {} with score {}",
            self.variant.name(),
            if summary.won { "won" } else { "exhausted" },
            summary.record.score()
        );
        Ok(summary.record)
    }

    fn settle(&mut self) -> RoundPhase {
        let next = if self.variant.check_win() {
            self.state.won = true;
            RoundPhase::Won
        } else if self.state.guesses_remaining == 0 {
            RoundPhase::Exhausted
        } else {
            RoundPhase::AwaitingGuess
        };
        self.transition(next)
    }

    fn summarize(&mut self) -> RoundSummary {
        let score = if self.state.won {
            self.state.guesses_remaining
        } else {
            0
        };
        self.transition(RoundPhase::Summarized);
        RoundSummary {
            record: ScoreRecord::new(score, self.config.player.clone()),
            won: self.state.won,
            secret: self.variant.reveal(),
            guesses_taken: self.state.round_counter,
        }
    }

    fn transition(&mut self, next: RoundPhase) -> RoundPhase {
        if self.state.phase != next {
            debug!("{:?} -> {:?}", self.state.phase, next);
            self.state.phase = next;
        }
        next
    }
}
