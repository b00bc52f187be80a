//! Session driver: rounds back to back until the player stops or the
//! variant runs out of secrets.

use log::{info, warn};
use serde::{Deserialize, Serialize};

use super::collaborators::{GuessSource, RoundObserver};
use super::engine::RoundEngine;
use crate::error::GameResult;
use crate::ledger::SessionLedger;
use crate::rules::GameVariant;

/// Why a session stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEnd {
    /// The player chose not to continue.
    Declined,
    /// No further secret was available.
    PoolExhausted,
}

/// Result of a finished session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionReport {
    pub ledger: SessionLedger,
    pub end: SessionEnd,
}

/// Play rounds until the player declines or the variant runs dry.
///
/// Each round's record is appended to a fresh ledger. Pool exhaustion
/// ends the session without asking the player.
///
/// # Errors
///
/// Collaborator errors, and any reset failure other than pool exhaustion.
pub fn play_session<V, I, O>(
    engine: &mut RoundEngine<V>,
    input: &mut I,
    observer: &mut O,
) -> GameResult<SessionReport>
where
    V: GameVariant,
    I: GuessSource<V> + ?Sized,
    O: RoundObserver<V> + ?Sized,
{
    info!("session started: {} for {}", engine.variant().name(), engine.config().player);
    let mut ledger = SessionLedger::new();

    let end = loop {
        match engine.play_round(input, observer) {
            Ok(record) => ledger.add(record),
            Err(e) if e.is_pool_exhausted() => break SessionEnd::PoolExhausted,
            Err(e) => return Err(e),
        }

        if !engine.variant().has_next_secret() {
            break SessionEnd::PoolExhausted;
        }
        if !input.play_again()? {
            break SessionEnd::Declined;
        }
        match engine.reset() {
            Ok(()) => {}
            Err(e) if e.is_pool_exhausted() => break SessionEnd::PoolExhausted,
            Err(e) => return Err(e),
        }
    };

    if end == SessionEnd::PoolExhausted {
        warn!("no secrets left, ending session after {} rounds", ledger.len());
    }
    info!("session over after {} rounds ({:?})", ledger.len(), end);

    let report = SessionReport { ledger, end };
    observer.session_finished(&report)?;
    Ok(report)
}
