//! Round and variant configuration.
//!
//! Callers configure the engine at startup:
//! - `RoundConfig`: guess budget and player identity, shared by every variant
//! - `SequenceConfig`: code length for the colour-sequence variant

use serde::{Deserialize, Serialize};

use super::PlayerId;

/// Default number of guesses a round starts with.
pub const DEFAULT_GUESS_BUDGET: u32 = 5;

/// Configuration shared by every round of a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundConfig {
    /// Guesses available at the start of each round.
    ///
    /// A budget of 0 is accepted; such rounds end immediately with score 0.
    pub guess_budget: u32,

    /// Identity written into every score record.
    pub player: PlayerId,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            guess_budget: DEFAULT_GUESS_BUDGET,
            player: PlayerId::default(),
        }
    }
}

impl RoundConfig {
    /// Create a config with default budget and placeholder player.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the guess budget.
    #[must_use]
    pub fn with_guess_budget(mut self, budget: u32) -> Self {
        self.guess_budget = budget;
        self
    }

    /// Set the player identity.
    #[must_use]
    pub fn with_player(mut self, player: impl Into<PlayerId>) -> Self {
        self.player = player.into();
        self
    }
}

/// Configuration for the colour-sequence variant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceConfig {
    /// Number of colours in a secret code (1 to the alphabet size).
    pub code_length: usize,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self { code_length: 4 }
    }
}

impl SequenceConfig {
    /// Create the standard 4-colour configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the code length.
    ///
    /// Secrets never repeat a colour, so the length cannot exceed the
    /// alphabet. Partial-match counting depends on that.
    #[must_use]
    pub fn with_code_length(mut self, length: usize) -> Self {
        assert!(length > 0, "Code length must be at least 1");
        assert!(
            length <= crate::games::sequence::Color::ALL.len(),
            "Code length cannot exceed the alphabet size"
        );
        self.code_length = length;
        self
    }
}
