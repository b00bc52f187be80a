//! Seams to the outside world: where guesses come from and where
//! progress is reported.
//!
//! Input validation (format, repeats) belongs to the `GuessSource`
//! implementation; the engine only ever sees well-formed guesses.

use std::collections::VecDeque;

use super::engine::{RoundStatus, RoundSummary};
use super::session::SessionReport;
use crate::error::{GameError, GameResult};
use crate::rules::GameVariant;

/// Supplies guesses and between-round decisions.
pub trait GuessSource<V: GameVariant> {
    /// Produce the next well-formed guess for the round described by `status`.
    fn next_guess(&mut self, status: &RoundStatus<V::View>) -> GameResult<V::Guess>;

    /// Should another round be played?
    fn play_again(&mut self) -> GameResult<bool>;
}

/// Receives instructions, progress and summaries. Every method defaults to
/// doing nothing.
pub trait RoundObserver<V: GameVariant> {
    fn instructions(&mut self, _text: &str) -> GameResult<()> {
        Ok(())
    }

    fn status(&mut self, _status: &RoundStatus<V::View>) -> GameResult<()> {
        Ok(())
    }

    fn round_finished(&mut self, _summary: &RoundSummary) -> GameResult<()> {
        Ok(())
    }

    fn session_finished(&mut self, _report: &SessionReport) -> GameResult<()> {
        Ok(())
    }
}

/// Observer that discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl<V: GameVariant> RoundObserver<V> for NullObserver {}

/// Replays a fixed list of guesses and continuation decisions.
///
/// Runs out as `GameError::InputClosed` for guesses, and as "stop" for
/// decisions.
#[derive(Clone, Debug)]
pub struct ScriptedInput<G> {
    guesses: VecDeque<G>,
    decisions: VecDeque<bool>,
}

impl<G> ScriptedInput<G> {
    /// Script the guesses; every play-again question is answered "no".
    pub fn new(guesses: impl IntoIterator<Item = G>) -> Self {
        Self {
            guesses: guesses.into_iter().collect(),
            decisions: VecDeque::new(),
        }
    }

    /// Script the play-again answers, in order.
    #[must_use]
    pub fn with_decisions(mut self, decisions: impl IntoIterator<Item = bool>) -> Self {
        self.decisions = decisions.into_iter().collect();
        self
    }

    /// Guesses not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.guesses.len()
    }
}

impl<V: GameVariant> GuessSource<V> for ScriptedInput<V::Guess> {
    fn next_guess(&mut self, _status: &RoundStatus<V::View>) -> GameResult<V::Guess> {
        self.guesses.pop_front().ok_or(GameError::InputClosed)
    }

    fn play_again(&mut self) -> GameResult<bool> {
        Ok(self.decisions.pop_front().unwrap_or(false))
    }
}
