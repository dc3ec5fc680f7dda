use thiserror::Error;

/// Failures of the proof-of-work search.
///
/// Chain validation never produces one of these: a broken chain is
/// reported through the boolean result of `Ledger::is_chain_valid`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("no proof found for previous proof {previous_proof} within {attempts} attempts")]
    PuzzleUnsolved { previous_proof: u64, attempts: u64 },
}
