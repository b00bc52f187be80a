//! Concrete game variants.
//!
//! - `sequence`: Mastermind-style colour code
//! - `phrase`: Wheel-of-Fortune-style phrase reveal

pub mod phrase;
pub mod sequence;
