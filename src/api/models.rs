use crate::blockchain::{Block, Ledger};
use serde::Serialize;
use std::sync::Mutex;

/// Shared application state. The mutex serializes mining: a request holds
/// it from reading the tip until the new block is appended.
pub struct AppState {
    pub ledger: Mutex<Ledger>,
    pub max_puzzle_attempts: Option<u64>,
}

impl AppState {
    pub fn new(max_puzzle_attempts: Option<u64>) -> Self {
        Self {
            ledger: Mutex::new(Ledger::new()),
            max_puzzle_attempts,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(None)
    }
}

/* ---------- Chain API Models ---------- */

#[derive(Serialize)]
pub struct MineResponse {
    pub message: &'static str,
    pub index: u64,
    pub timestamp: String,
    pub proof: u64,
    pub previous_hash: String,
}

#[derive(Serialize)]
pub struct ChainResponse<'a> {
    pub chain: &'a [Block],
    pub length: usize,
}

#[derive(Serialize)]
pub struct ValidateResponse {
    pub valid: bool,
    pub message: &'static str,
}
