//! Session results: an append-only ledger of score records with
//! averages and stable top-N rankings.

mod records;
mod stats;

pub use records::SessionLedger;
pub use stats::LedgerSummary;
