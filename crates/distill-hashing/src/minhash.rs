//! MinHash signatures over 2-word shingles.
//!
//! Each permutation is an xxh3 hash seeded with the permutation index.

use std::collections::HashSet;

use distill_core::config::defaults::DEFAULT_MINHASH_NUM_PERM;
use distill_core::errors::HashingError;
use xxhash_rust::xxh3::xxh3_64_with_seed;

/// MinHash signer with a fixed number of permutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinHasher {
    num_perm: usize,
}

impl MinHasher {
    pub fn new(num_perm: usize) -> Result<Self, HashingError> {
        if num_perm == 0 {
            return Err(HashingError::InvalidPermutations { num_perm });
        }
        Ok(Self { num_perm })
    }

    pub fn num_perm(&self) -> usize {
        self.num_perm
    }

    /// Signature of `num_perm` minimum hashes. Text with fewer than two
    /// tokens has no shingles and yields a zero-filled signature.
    pub fn signature(&self, text: &str) -> Vec<u64> {
        let shingles = shingles(text);
        if shingles.is_empty() {
            return vec![0; self.num_perm];
        }
        (0..self.num_perm as u64)
            .map(|seed| {
                shingles
                    .iter()
                    .map(|s| xxh3_64_with_seed(s.as_bytes(), seed))
                    .min()
                    .unwrap_or(0)
            })
            .collect()
    }
}

impl Default for MinHasher {
    fn default() -> Self {
        Self {
            num_perm: DEFAULT_MINHASH_NUM_PERM,
        }
    }
}

/// 128-permutation MinHash signature.
pub fn minhash(text: &str) -> Vec<u64> {
    MinHasher::default().signature(text)
}

/// Set of adjacent word pairs ("w1 w2") over whitespace tokens.
pub fn shingles(text: &str) -> HashSet<String> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    tokens
        .windows(2)
        .map(|pair| format!("{} {}", pair[0], pair[1]))
        .collect()
}

/// Estimate Jaccard similarity of the underlying shingle sets as the share
/// of matching signature slots.
///
/// Returns 0.0 for mismatched lengths or when either signature is the
/// zero-filled "no shingles" signature.
pub fn estimate_jaccard(a: &[u64], b: &[u64]) -> f64 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }
    let is_blank = |sig: &[u64]| sig.iter().all(|&v| v == 0);
    if is_blank(a) || is_blank(b) {
        return 0.0;
    }
    let matching = a.iter().zip(b.iter()).filter(|(x, y)| x == y).count();
    matching as f64 / a.len() as f64
}
