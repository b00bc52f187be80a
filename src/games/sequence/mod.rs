//! Mastermind-style colour-sequence game.
//!
//! - The secret is 4 distinct colours drawn from 6 (R, G, B, Y, O, P)
//! - Each guess is scored as exact and partial matches
//! - Every guess costs one from the budget, win or lose

mod code;
mod game;

pub use code::{Code, CodeParseError, Color};
pub use game::{evaluate, MatchCount, SequenceMatch, SequenceView};
