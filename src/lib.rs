//! # rust-guess
//!
//! A turn-based guessing game engine: single-player rounds, scored and
//! aggregated across a session.
//!
//! ## Design Principles
//!
//! 1. **Variant-Agnostic Engine**: The round engine knows nothing about
//!    colours or phrases. Variants plug in through `GameVariant`.
//!
//! 2. **Score = Guesses Left**: A round's score is the budget still unused
//!    when it ends, so early answers score higher and exhaustion scores 0.
//!
//! 3. **Collaborators at the Edges**: Where guesses come from and where
//!    progress goes are traits (`GuessSource`, `RoundObserver`), so the
//!    core runs the same under a terminal, a script, or a test.
//!
//! ## Modules
//!
//! - `core`: Players, score records, RNG, configuration
//! - `rules`: `GameVariant` trait for game implementations
//! - `round`: Round state machine, session driver, collaborator traits
//! - `ledger`: Session ledger with averages and stable top-N rankings
//! - `games`: Mastermind (`sequence`) and Wheel of Fortune (`phrase`)
//! - `console`: Terminal collaborators
//!
//! ## Example
//!
//! ```
//! use rust_guess::games::phrase::{PhrasePool, PhraseReveal};
//! use rust_guess::round::{play_session, NullObserver, RoundEngine, ScriptedInput, SessionEnd};
//! use rust_guess::{GameRng, RoundConfig};
//!
//! let variant = PhraseReveal::new(PhrasePool::new(["hi"]), GameRng::new(1));
//! let mut engine = RoundEngine::new(variant, RoundConfig::default()).unwrap();
//! let mut input = ScriptedInput::new(['z', 'h', 'i']);
//!
//! let report = play_session(&mut engine, &mut input, &mut NullObserver).unwrap();
//! assert_eq!(report.end, SessionEnd::PoolExhausted);
//! assert_eq!(report.ledger.average_all().unwrap(), 4.0);
//! ```

pub mod console;
pub mod core;
pub mod error;
pub mod games;
pub mod ledger;
pub mod round;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    GameRng, GameRngState,
    PlayerId, ScoreRecord,
    RoundConfig, SequenceConfig, DEFAULT_GUESS_BUDGET,
};

pub use crate::error::{GameError, GameResult};

pub use crate::ledger::{LedgerSummary, SessionLedger};

pub use crate::rules::{GameVariant, GuessOutcome};

pub use crate::round::{
    play_session, GuessSource, NullObserver, RoundEngine, RoundObserver, RoundPhase,
    RoundStatus, RoundSummary, ScriptedInput, SessionEnd, SessionReport,
};

pub use crate::games::phrase::{PhrasePool, PhraseReveal, PhraseView};
pub use crate::games::sequence::{evaluate, Code, Color, MatchCount, SequenceMatch, SequenceView};
