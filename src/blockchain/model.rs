use log::{info, warn};

use super::{Block, GENESIS_PREVIOUS_HASH, GENESIS_PROOF, pow};
use crate::error::LedgerError;

/// Append-only in-memory ledger secured by a proof-of-work puzzle.
#[derive(Debug)]
pub struct Ledger {
    chain: Vec<Block>,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    /// Initialize a new ledger holding only the genesis block.
    pub fn new() -> Self {
        let mut ledger = Self { chain: Vec::new() };
        ledger.append(GENESIS_PROOF, GENESIS_PREVIOUS_HASH.to_string());
        ledger
    }

    /// Return the last block in the chain.
    pub fn latest_block(&self) -> &Block {
        self.chain
            .last()
            .expect("Ledger should always have at least the genesis block")
    }

    /// Append a block built from an already-solved proof.
    ///
    /// Nothing is checked here: the caller supplies a proof solving the
    /// puzzle and the digest of the current tip.
    pub fn append(&mut self, proof: u64, previous_hash: String) -> &Block {
        let index = self.chain.len() as u64 + 1;
        self.chain.push(Block::new(index, proof, previous_hash));
        self.latest_block()
    }

    pub fn digest(block: &Block) -> String {
        block.digest()
    }

    pub fn solve_puzzle(previous_proof: u64) -> u64 {
        pow::solve_puzzle(previous_proof)
    }

    /// Read the tip, solve the puzzle against it and append the result.
    /// `max_attempts = None` searches without bound.
    pub fn mine_block(&mut self, max_attempts: Option<u64>) -> Result<&Block, LedgerError> {
        let previous = self.latest_block();
        let previous_proof = previous.proof;
        let previous_hash = Self::digest(previous);

        let proof = match max_attempts {
            Some(limit) => pow::solve_puzzle_bounded(previous_proof, limit)?,
            None => Self::solve_puzzle(previous_proof),
        };

        let block = self.append(proof, previous_hash);
        info!(
            "MINER - sealed block #{} (proof={}, previous_hash={})",
            block.index, block.proof, block.previous_hash
        );
        Ok(block)
    }

    /// Check linkage and proofs of every block after the genesis block.
    /// The genesis block itself has no predecessor and is not checked.
    pub fn is_chain_valid(chain: &[Block]) -> bool {
        for (i, pair) in chain.windows(2).enumerate() {
            let (prev, current) = (&pair[0], &pair[1]);

            if current.previous_hash != prev.digest() {
                warn!("VALIDATE - block at position {} has a broken link", i + 1);
                return false;
            }

            if !pow::satisfies_puzzle(current.proof, prev.proof) {
                warn!("VALIDATE - block at position {} has an invalid proof", i + 1);
                return false;
            }
        }

        true
    }

    /// Validate this ledger's own chain.
    pub fn is_valid(&self) -> bool {
        Self::is_chain_valid(&self.chain)
    }

    /// Every block, oldest first.
    pub fn full_chain(&self) -> &[Block] {
        &self.chain
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }
}
