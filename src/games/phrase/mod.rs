//! Wheel-of-Fortune-style phrase game.
//!
//! - A phrase is drawn from a pool, never repeating within a session
//! - Letters are masked; punctuation and spaces are always shown
//! - Guess letters one at a time; only misses cost a guess

mod game;
mod pool;

pub use game::{initial_mask, PhraseReveal, PhraseView, MASK_GLYPH};
pub use pool::PhrasePool;
