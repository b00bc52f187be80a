//! Round lifecycle and session driving.
//!
//! - `RoundEngine`: template state machine for one round over any `GameVariant`
//! - `play_session`: repeats rounds and collects a `SessionLedger`
//! - `GuessSource` / `RoundObserver`: input and output collaborators

mod collaborators;
mod engine;
mod session;

pub use collaborators::{GuessSource, NullObserver, RoundObserver, ScriptedInput};
pub use engine::{RoundEngine, RoundPhase, RoundState, RoundStatus, RoundSummary};
pub use session::{play_session, SessionEnd, SessionReport};
