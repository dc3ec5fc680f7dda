use chrono::{Local, NaiveDateTime, Timelike};
use serde::Serialize;
use sha2::{Digest, Sha256};

use super::canonical;

/// Creation instant with microseconds, e.g. `2024-01-01 12:30:00.123456`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Used when the microsecond part is zero: `2024-01-01 12:30:00`.
pub const TIMESTAMP_FORMAT_WHOLE_SECONDS: &str = "%Y-%m-%d %H:%M:%S";

/// Render a creation instant. The fraction is omitted entirely when it
/// has no microseconds.
pub fn render_timestamp(at: NaiveDateTime) -> String {
    let micros = at.nanosecond() % 1_000_000_000 / 1_000;
    let format = if micros == 0 {
        TIMESTAMP_FORMAT_WHOLE_SECONDS
    } else {
        TIMESTAMP_FORMAT
    };
    at.format(format).to_string()
}

/// A single ledger entry. Carries no payload, only linkage metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Block {
    pub index: u64, // 1-based position in the chain
    pub timestamp: String,
    pub proof: u64,
    pub previous_hash: String,
}

impl Block {
    /// Create a block stamped with the current local time.
    pub fn new(index: u64, proof: u64, previous_hash: String) -> Self {
        Self {
            index,
            timestamp: render_timestamp(Local::now().naive_local()),
            proof,
            previous_hash,
        }
    }

    /// SHA-256 over the canonical encoding, as lowercase hex (64 chars).
    pub fn digest(&self) -> String {
        let encoded = canonical::encode_block(self);
        let mut hasher = Sha256::new();
        hasher.update(encoded.as_bytes());
        hex::encode(hasher.finalize())
    }
}
