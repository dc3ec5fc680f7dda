use log::{debug, warn};
use sha2::{Digest, Sha256};

use super::PUZZLE_PREFIX;
use crate::error::LedgerError;

/// Signed decimal text of `proof^2 - previous_proof^2`.
/// Both squares fit in a u128; a negative result keeps its leading `-`.
pub fn puzzle_operand(proof: u64, previous_proof: u64) -> String {
    let p = u128::from(proof) * u128::from(proof);
    let q = u128::from(previous_proof) * u128::from(previous_proof);
    if p >= q {
        (p - q).to_string()
    } else {
        format!("-{}", q - p)
    }
}

/// Hex SHA-256 of the puzzle operand.
pub fn puzzle_hash(proof: u64, previous_proof: u64) -> String {
    let mut hasher = Sha256::new();
    hasher.update(puzzle_operand(proof, previous_proof).as_bytes());
    hex::encode(hasher.finalize())
}

/// Whether `proof` solves the puzzle relative to `previous_proof`.
pub fn satisfies_puzzle(proof: u64, previous_proof: u64) -> bool {
    puzzle_hash(proof, previous_proof).starts_with(PUZZLE_PREFIX)
}

/// Brute-force search for the smallest positive proof. Unbounded.
pub fn solve_puzzle(previous_proof: u64) -> u64 {
    let mut candidate = 1u64;
    loop {
        let hash = puzzle_hash(candidate, previous_proof);
        if hash.starts_with(PUZZLE_PREFIX) {
            debug!(
                "POW - previous_proof={} solved with proof={} (hash={})",
                previous_proof, candidate, hash
            );
            return candidate;
        }
        candidate = candidate.wrapping_add(1);
    }
}

/// Like `solve_puzzle`, but gives up after `max_attempts` candidates.
pub fn solve_puzzle_bounded(previous_proof: u64, max_attempts: u64) -> Result<u64, LedgerError> {
    match (1..=max_attempts).find(|&candidate| satisfies_puzzle(candidate, previous_proof)) {
        Some(proof) => {
            debug!(
                "POW - previous_proof={} solved with proof={} (bound={})",
                previous_proof, proof, max_attempts
            );
            Ok(proof)
        }
        None => {
            warn!(
                "POW - gave up after {} attempts (previous_proof={})",
                max_attempts, previous_proof
            );
            Err(LedgerError::PuzzleUnsolved {
                previous_proof,
                attempts: max_attempts,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn solves_reference_sequence() {
        assert_eq!(solve_puzzle(1), 533);
        assert_eq!(solve_puzzle(533), 45293);
        // 21391^2 - 45293^2 is negative; the sign is part of the hashed text
        assert_eq!(solve_puzzle(45293), 21391);
    }

    #[test]
    fn solution_is_minimal() {
        let p = solve_puzzle(1);
        assert!(satisfies_puzzle(p, 1));
        assert!((1..p).all(|c| !satisfies_puzzle(c, 1)));
    }

    #[test]
    fn hash_of_known_solution() {
        assert_eq!(
            puzzle_hash(533, 1),
            "0000c00870f23a23ae80377298491b091db400d575be0efbde5b310f2f763ed1"
        );
    }

    #[test]
    fn negative_operand_keeps_sign() {
        assert_eq!(puzzle_operand(1, 2), "-3");
        let mut hasher = Sha256::new();
        hasher.update(b"-3");
        assert_eq!(puzzle_hash(1, 2), hex::encode(hasher.finalize()));
    }

    #[test]
    fn bounded_search_reports_exhaustion() {
        assert_eq!(
            solve_puzzle_bounded(1, 532),
            Err(LedgerError::PuzzleUnsolved {
                previous_proof: 1,
                attempts: 532
            })
        );
        assert_eq!(solve_puzzle_bounded(1, 533), Ok(533));
    }

    #[test]
    fn zero_attempts_fails_immediately() {
        assert!(matches!(
            solve_puzzle_bounded(1, 0),
            Err(LedgerError::PuzzleUnsolved { attempts: 0, .. })
        ));
    }

    #[test]
    fn operand_covers_full_u64_range() {
        assert_eq!(
            puzzle_operand(u64::MAX, 1),
            "340282366920938463426481119284349108224"
        );
        assert_eq!(
            puzzle_operand(1, u64::MAX),
            "-340282366920938463426481119284349108224"
        );
        assert_eq!(puzzle_operand(u64::MAX, u64::MAX), "0");
        assert_eq!(
            puzzle_hash(u64::MAX, 1),
            "26fa80e005f1deb1819c5c66edf1ccf2ebe8d711791cc818d6889cb3803aa208"
        );
    }

    #[test]
    fn huge_previous_proof_is_still_searchable() {
        // every candidate hashes a negative operand here
        assert_eq!(solve_puzzle(u64::MAX), 59391);
    }

    proptest! {
        #[test]
        fn satisfies_agrees_with_hash_prefix(proof in 1u64..1_000_000, prev in 1u64..1_000_000) {
            let hash = puzzle_hash(proof, prev);
            prop_assert_eq!(satisfies_puzzle(proof, prev), hash.starts_with("0000"));
            prop_assert_eq!(hash.len(), 64);
        }

        #[test]
        fn operand_matches_signed_arithmetic(proof in any::<u32>(), prev in any::<u32>()) {
            let expected = i128::from(proof).pow(2) - i128::from(prev).pow(2);
            prop_assert_eq!(puzzle_operand(u64::from(proof), u64::from(prev)), expected.to_string());
        }
    }
}
