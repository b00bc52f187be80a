//! Phrase pool: the secrets a session can still draw from.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::GameRng;
use crate::error::{GameError, GameResult};

/// Phrases not yet played this session. Shrinks by one per round.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhrasePool {
    phrases: Vec<String>,
}

impl PhrasePool {
    /// Build a pool from an in-memory list, kept as given.
    pub fn new<S: Into<String>>(phrases: impl IntoIterator<Item = S>) -> Self {
        Self {
            phrases: phrases.into_iter().map(Into::into).collect(),
        }
    }

    /// Read one phrase per line. Trailing whitespace is trimmed and blank
    /// lines are skipped.
    ///
    /// # Errors
    ///
    /// `GameError::PhraseSource` on a read failure, `GameError::EmptyPhraseSource`
    /// if no phrase remains.
    pub fn from_reader<R: BufRead>(reader: R) -> GameResult<Self> {
        let mut phrases = Vec::new();
        for line in reader.lines() {
            let line = line.map_err(GameError::PhraseSource)?;
            let phrase = line.trim_end();
            if !phrase.trim_start().is_empty() {
                phrases.push(phrase.to_string());
            }
        }

        if phrases.is_empty() {
            return Err(GameError::EmptyPhraseSource);
        }
        debug!("loaded {} phrases", phrases.len());
        Ok(Self { phrases })
    }

    /// Read phrases from a file, as `from_reader`.
    ///
    /// # Errors
    ///
    /// `GameError::PhraseSource` if the file cannot be opened or read.
    pub fn from_path(path: impl AsRef<Path>) -> GameResult<Self> {
        let file = File::open(path.as_ref()).map_err(GameError::PhraseSource)?;
        Self::from_reader(BufReader::new(file))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// Remove and return one phrase, uniformly at random.
    ///
    /// # Errors
    ///
    /// `GameError::PoolExhausted` if every phrase has been used.
    pub fn select(&mut self, rng: &mut GameRng) -> GameResult<String> {
        if self.phrases.is_empty() {
            return Err(GameError::PoolExhausted);
        }
        let index = rng.gen_range_usize(0..self.phrases.len());
        Ok(self.phrases.swap_remove(index))
    }
}
