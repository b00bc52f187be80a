//! Error types for the guessing engine.
//!
//! Core operations report failure through `GameError`; nothing in the
//! engine swallows an error or substitutes a placeholder value.

use thiserror::Error;

use crate::core::PlayerId;

/// Errors produced by the engine and its collaborators.
#[derive(Debug, Error)]
pub enum GameError {
    /// A statistic was requested over zero eligible records.
    ///
    /// `player` is `Some` when the query was filtered to one player.
    #[error("no score records{}", player.as_ref().map(|p| format!(" for {p}")).unwrap_or_default())]
    EmptyInput { player: Option<PlayerId> },

    /// Every phrase in the pool has already been played.
    #[error("phrase pool exhausted")]
    PoolExhausted,

    /// The phrase file could not be read.
    #[error("failed to read phrases: {0}")]
    PhraseSource(#[source] std::io::Error),

    /// The phrase resource held no usable phrase.
    #[error("phrase source contained no phrases")]
    EmptyPhraseSource,

    /// The input stream ended while a guess or decision was pending.
    #[error("input closed")]
    InputClosed,

    /// The console collaborator gave up after repeated malformed input.
    #[error("invalid guess after {attempts} attempts: {reason}")]
    InvalidGuess { attempts: u32, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl GameError {
    /// Whether this error ends a session normally rather than aborting it.
    #[must_use]
    pub fn is_pool_exhausted(&self) -> bool {
        matches!(self, GameError::PoolExhausted)
    }
}

/// Result alias used throughout the crate.
pub type GameResult<T> = Result<T, GameError>;
