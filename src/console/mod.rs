//! Terminal collaborators: prompts for guesses and prints progress.
//!
//! `Console` is generic over its reader and writer so sessions can be
//! scripted in tests with byte slices and `Vec<u8>`.
//!
//! Malformed input is re-prompted up to `max_attempts` times before the
//! console gives up with `GameError::InvalidGuess`.

use std::io::{BufRead, Stdout, StdinLock, Write};

use crate::error::{GameError, GameResult};
use crate::games::phrase::PhraseReveal;
use crate::games::sequence::{Code, SequenceMatch};
use crate::round::{GuessSource, RoundObserver, RoundStatus, RoundSummary, SessionEnd, SessionReport};
use crate::rules::GameVariant;

/// Prompts allowed per guess before giving up.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Line-oriented console over any reader and writer.
pub struct Console<R, W> {
    input: R,
    output: W,
    max_attempts: u32,
}

impl Console<StdinLock<'static>, Stdout> {
    /// Console over the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Set how many prompts a single answer may take.
    #[must_use]
    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        assert!(attempts > 0, "Must allow at least 1 attempt");
        self.max_attempts = attempts;
        self
    }

    /// Consume the console and return its writer.
    pub fn into_output(self) -> W {
        self.output
    }

    fn read_answer(&mut self, prompt: &str) -> GameResult<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(GameError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    /// Prompt until `parse` accepts the answer, up to `max_attempts` times.
    fn ask<T>(&mut self, prompt: &str, parse: impl Fn(&str) -> Result<T, String>) -> GameResult<T> {
        let mut reason = String::new();
        for _ in 0..self.max_attempts {
            let answer = self.read_answer(prompt)?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(why) => {
                    writeln!(self.output, "{}", why)?;
                    reason = why;
                }
            }
        }
        Err(GameError::InvalidGuess {
            attempts: self.max_attempts,
            reason,
        })
    }

    fn ask_play_again(&mut self) -> GameResult<bool> {
        self.ask("\nPlay another game? Enter 'y' or 'n': ", |answer| {
            match answer.to_ascii_lowercase().as_str() {
                "y" | "yes" => Ok(true),
                "n" | "no" => Ok(false),
                _ => Err(String::from("Please enter 'y' or 'n'.")),
            }
        })
    }
}

impl<R: BufRead, W: Write> GuessSource<SequenceMatch> for Console<R, W> {
    fn next_guess(&mut self, status: &RoundStatus<<SequenceMatch as GameVariant>::View>) -> GameResult<Code> {
        let length = status.view.code_length;
        let prompt = format!("\nGuess a sequence of {} colours, e.g. GBOY: ", length);
        self.ask(&prompt, |answer| {
            Code::parse_with_length(answer, length).map_err(|e| e.to_string())
        })
    }

    fn play_again(&mut self) -> GameResult<bool> {
        self.ask_play_again()
    }
}

impl<R: BufRead, W: Write> GuessSource<PhraseReveal> for Console<R, W> {
    fn next_guess(&mut self, status: &RoundStatus<<PhraseReveal as GameVariant>::View>) -> GameResult<char> {
        self.ask("\nGuess a letter: ", |answer| {
            let mut chars = answer.chars();
            match (chars.next(), chars.next()) {
                (Some(letter), None) if letter.is_alphabetic() => {
                    if status.view.already_guessed(letter) {
                        Err(format!("You have already guessed '{}'.", letter))
                    } else {
                        Ok(letter)
                    }
                }
                _ => Err(String::from("Please enter a single letter as your guess.")),
            }
        })
    }

    fn play_again(&mut self) -> GameResult<bool> {
        self.ask_play_again()
    }
}

impl<R: BufRead, W: Write, V: GameVariant> RoundObserver<V> for Console<R, W> {
    fn instructions(&mut self, text: &str) -> GameResult<()> {
        writeln!(self.output, "\n{}", text)?;
        Ok(())
    }

    fn status(&mut self, status: &RoundStatus<V::View>) -> GameResult<()> {
        writeln!(self.output, "\n{}", status)?;
        Ok(())
    }

    fn round_finished(&mut self, summary: &RoundSummary) -> GameResult<()> {
        writeln!(self.output, "\n{}", summary)?;
        Ok(())
    }

    fn session_finished(&mut self, report: &SessionReport) -> GameResult<()> {
        if report.end == SessionEnd::PoolExhausted {
            writeln!(self.output, "\nSorry, we are all out of game phrases.")?;
        }
        writeln!(self.output, "\nThanks for playing.")?;
        Ok(())
    }
}
