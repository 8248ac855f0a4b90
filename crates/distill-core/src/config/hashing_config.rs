use serde::{Deserialize, Serialize};

use super::defaults;

/// Near-duplicate fingerprinting configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HashingConfig {
    /// SimHash width in bits (multiple of 4, at most 128).
    pub simhash_bits: usize,
    /// Number of MinHash permutations.
    pub minhash_num_perm: usize,
    /// Maximum Hamming distance for two SimHashes to count as near-duplicates.
    pub near_duplicate_threshold: u32,
}

impl Default for HashingConfig {
    fn default() -> Self {
        Self {
            simhash_bits: defaults::DEFAULT_SIMHASH_BITS,
            minhash_num_perm: defaults::DEFAULT_MINHASH_NUM_PERM,
            near_duplicate_threshold: defaults::DEFAULT_NEAR_DUPLICATE_THRESHOLD,
        }
    }
}
