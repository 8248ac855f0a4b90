//! SimHash: locality-sensitive fingerprint over whitespace tokens.

use distill_core::config::defaults::DEFAULT_SIMHASH_BITS;
use distill_core::constants::{MAX_SIMHASH_BITS, MIN_SIMHASH_BITS};
use distill_core::errors::HashingError;
use xxhash_rust::xxh3::xxh3_128;

/// SimHash fingerprinter of a fixed width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimHasher {
    bits: usize,
}

impl SimHasher {
    /// Width must be a multiple of 4 in 4..=128 so the hex form is exact.
    pub fn new(bits: usize) -> Result<Self, HashingError> {
        if !(MIN_SIMHASH_BITS..=MAX_SIMHASH_BITS).contains(&bits) || bits % 4 != 0 {
            return Err(HashingError::InvalidWidth { bits });
        }
        Ok(Self { bits })
    }

    pub fn bits(&self) -> usize {
        self.bits
    }

    /// Length of the hex string produced by [`SimHasher::hash`].
    pub fn hex_len(&self) -> usize {
        self.bits / 4
    }

    /// Raw fingerprint. Only the low `bits` bits can be set.
    pub fn fingerprint(&self, text: &str) -> u128 {
        let mut acc = [0i64; MAX_SIMHASH_BITS];
        let acc = &mut acc[..self.bits];
        for token in text.split_whitespace() {
            let h = xxh3_128(token.as_bytes());
            for (i, slot) in acc.iter_mut().enumerate() {
                if (h >> i) & 1 == 1 {
                    *slot += 1;
                } else {
                    *slot -= 1;
                }
            }
        }
        acc.iter()
            .enumerate()
            .filter(|&(_, &v)| v > 0)
            .fold(0u128, |fp, (i, _)| fp | (1u128 << i))
    }

    /// Fixed-width lowercase hex fingerprint. Empty text hashes to all zeros.
    pub fn hash(&self, text: &str) -> String {
        format!("{:0width$x}", self.fingerprint(text), width = self.hex_len())
    }

    /// Absent text hashes like empty text.
    pub fn hash_opt(&self, text: Option<&str>) -> String {
        self.hash(text.unwrap_or_default())
    }
}

impl Default for SimHasher {
    fn default() -> Self {
        Self {
            bits: DEFAULT_SIMHASH_BITS,
        }
    }
}

/// 64-bit SimHash as 16 hex characters.
pub fn simhash(text: &str) -> String {
    SimHasher::default().hash(text)
}
