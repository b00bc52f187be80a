//! Variant trait for guessing-game implementations.
//!
//! Variants implement `GameVariant` to define their rules:
//! - How a fresh secret is produced
//! - How a guess is evaluated and whether it costs a guess
//! - When the round is won
//! - What the player sees between guesses

use std::fmt;

use crate::error::GameResult;

/// How a processed guess affects the remaining budget.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The guess was evaluated and costs one guess, whatever it matched.
    Scored,
    /// The guess revealed something; no guess is spent.
    Hit,
    /// The guess revealed nothing; one guess is spent.
    Miss,
    /// The guess was already made earlier; nothing changes.
    Repeated,
}

impl GuessOutcome {
    /// Does this outcome spend one guess from the budget?
    #[must_use]
    pub fn consumes_guess(self) -> bool {
        matches!(self, GuessOutcome::Scored | GuessOutcome::Miss)
    }
}

/// Game variant trait.
///
/// The round engine calls these methods and holds no variant-specific
/// logic of its own.
///
/// ## Implementation Notes
///
/// - `new_secret`: Called before every round, including the first
/// - `process_guess`: May assume the guess is well-formed
/// - `check_win`: Checked before each guess and after each evaluation
/// - `has_next_secret`: Return false once no further round is possible
pub trait GameVariant {
    /// A single guess as supplied by the input collaborator.
    type Guess: fmt::Debug;

    /// What the player sees between guesses.
    type View: fmt::Display;

    /// Short human-readable name.
    fn name(&self) -> &'static str;

    /// Instruction text shown before a round starts.
    fn instructions(&self, guess_budget: u32) -> String;

    /// Replace the current secret with a fresh one and clear per-round state.
    ///
    /// # Errors
    ///
    /// `GameError::PoolExhausted` when the variant has no secret left.
    fn new_secret(&mut self) -> GameResult<()>;

    /// Evaluate a guess against the current secret.
    fn process_guess(&mut self, guess: &Self::Guess) -> GuessOutcome;

    /// Has the current secret been fully found?
    fn check_win(&self) -> bool;

    /// Snapshot of the player-visible state.
    fn describe_state(&self) -> Self::View;

    /// The secret in displayable form, for the end-of-round summary.
    fn reveal(&self) -> String;

    /// Can another round be started after the current one?
    fn has_next_secret(&self) -> bool {
        true
    }
}
