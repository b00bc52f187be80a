//! Variant trait for game implementations.
//!
//! Variants implement `GameVariant` to define:
//! - Secret generation or selection
//! - Guess evaluation
//! - Win conditions
//!
//! The round engine calls into `GameVariant` but never interprets
//! variant-specific concepts directly.

pub mod variant;

pub use variant::{GameVariant, GuessOutcome};
