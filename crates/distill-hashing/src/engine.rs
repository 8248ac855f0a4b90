//! HashingEngine: configured fingerprinting and batch deduplication.

use distill_core::config::HashingConfig;
use distill_core::errors::DistillResult;
use distill_core::models::{Chunk, SyntheticExample};
use rayon::prelude::*;
use serde::Serialize;
use tracing::info;

use crate::dedup::{DuplicateIndex, DuplicateMatch};
use crate::hamming::is_near_duplicate;
use crate::minhash::MinHasher;
use crate::simhash::SimHasher;

/// Fingerprints of one chunk or example.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fingerprint {
    pub id: String,
    /// SimHash, hex encoded.
    pub simhash: String,
    /// MinHash signature, when enabled.
    pub minhash: Option<Vec<u64>>,
    /// blake3 hex digest for exact duplicates.
    pub content_hash: String,
}

/// Result of deduplicating a batch against itself.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DedupOutcome {
    /// Ids kept, in input order.
    pub kept: Vec<String>,
    /// Rejected ids with the kept item they duplicate.
    pub duplicates: Vec<(String, DuplicateMatch)>,
}

/// Fingerprinting bound to a hashing configuration.
#[derive(Debug, Clone)]
pub struct HashingEngine {
    simhasher: SimHasher,
    minhasher: Option<MinHasher>,
    threshold: u32,
}

impl HashingEngine {
    /// Build from config. MinHash signatures are computed alongside SimHash.
    pub fn new(config: &HashingConfig) -> DistillResult<Self> {
        Ok(Self {
            simhasher: SimHasher::new(config.simhash_bits)?,
            minhasher: Some(MinHasher::new(config.minhash_num_perm)?),
            threshold: config.near_duplicate_threshold,
        })
    }

    /// Skip MinHash signatures when only the SimHash decision is needed.
    pub fn without_minhash(mut self) -> Self {
        self.minhasher = None;
        self
    }

    pub fn simhasher(&self) -> &SimHasher {
        &self.simhasher
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    pub fn fingerprint(&self, id: &str, text: &str) -> Fingerprint {
        Fingerprint {
            id: id.to_string(),
            simhash: self.simhasher.hash(text),
            minhash: self.minhasher.map(|m| m.signature(text)),
            content_hash: Chunk::compute_content_hash(text),
        }
    }

    /// Fingerprint chunk texts in parallel, preserving input order.
    pub fn fingerprint_chunks(&self, chunks: &[Chunk]) -> Vec<Fingerprint> {
        let _span = distill_observability::hashing_span!(chunks.len()).entered();
        chunks
            .par_iter()
            .map(|c| self.fingerprint(&c.id, &c.text))
            .collect()
    }

    /// Fingerprint example prompt texts in parallel, preserving input order.
    pub fn fingerprint_examples(&self, examples: &[SyntheticExample]) -> Vec<Fingerprint> {
        let _span = distill_observability::hashing_span!(examples.len()).entered();
        examples
            .par_iter()
            .map(|e| self.fingerprint(&e.id, &e.prompt_text()))
            .collect()
    }

    pub fn is_near_duplicate(&self, a: Option<&str>, b: Option<&str>) -> bool {
        is_near_duplicate(a, b, self.threshold)
    }

    /// Keep the first of each near-duplicate group, in input order.
    pub fn deduplicate(&self, fingerprints: &[Fingerprint]) -> DedupOutcome {
        let mut index = DuplicateIndex::new(self.threshold);
        let mut outcome = DedupOutcome::default();
        for fp in fingerprints {
            match index.check_and_insert(fp.id.clone(), Some(&fp.simhash)) {
                Some(found) => outcome.duplicates.push((fp.id.clone(), found)),
                None => outcome.kept.push(fp.id.clone()),
            }
        }
        info!(
            total = fingerprints.len(),
            kept = outcome.kept.len(),
            duplicates = outcome.duplicates.len(),
            "deduplication complete"
        );
        outcome
    }
}

impl Default for HashingEngine {
    fn default() -> Self {
        Self {
            simhasher: SimHasher::default(),
            minhasher: Some(MinHasher::default()),
            threshold: distill_core::config::defaults::DEFAULT_NEAR_DUPLICATE_THRESHOLD,
        }
    }
}
