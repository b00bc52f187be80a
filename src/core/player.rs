//! Player identification.
//!
//! Rounds are played by a single player whose identity is supplied by the
//! caller. When no identity is given, every record is attributed to
//! `PlayerId::DEFAULT_NAME`.

use serde::{Deserialize, Serialize};

/// Caller-supplied player identity attached to every score record.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    /// Placeholder identity used when the caller names no player.
    pub const DEFAULT_NAME: &'static str = "user";

    /// Create a new player ID.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the player's name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for PlayerId {
    fn default() -> Self {
        Self::new(Self::DEFAULT_NAME)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for PlayerId {
    fn from(name: String) -> Self {
        Self(name)
    }
}
