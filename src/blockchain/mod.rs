pub mod block;
pub mod canonical;
pub mod model;
pub mod pow;

pub use block::Block;
pub use model::Ledger;

/// Proof stored in the genesis block.
pub const GENESIS_PROOF: u64 = 1;

/// Sentinel `previous_hash` of the genesis block. Never a real digest.
pub const GENESIS_PREVIOUS_HASH: &str = "0";

/// Required hex prefix of a puzzle hash (1 in 65536 candidates).
pub const PUZZLE_PREFIX: &str = "0000";
