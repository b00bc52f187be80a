//! Core engine types: players, score records, RNG, configuration.
//!
//! These building blocks are variant-agnostic. Variants and the round
//! engine are configured through `RoundConfig` rather than by changing them.

pub mod player;
pub mod rng;
pub mod config;
pub mod record;

pub use player::PlayerId;
pub use rng::{GameRng, GameRngState};
pub use config::{RoundConfig, SequenceConfig, DEFAULT_GUESS_BUDGET};
pub use record::ScoreRecord;
