//! # distill-hashing
//!
//! Near-duplicate fingerprints and concept-drift detection.
//!
//! - **SimHash**: whitespace tokens, 128-bit xxh3 token hashes, fixed-width hex output.
//! - **MinHash**: 2-word shingles, seeded xxh3 permutations, Jaccard estimation.
//! - **Hamming**: nibble-wise XOR popcount with a sentinel for width mismatches.
//! - **Drift**: element-wise embedding centroids compared by cosine distance.

pub mod dedup;
pub mod drift;
pub mod engine;
pub mod hamming;
pub mod minhash;
pub mod simhash;

pub use dedup::{find_near_duplicates, DuplicateIndex, DuplicateMatch, NearDuplicatePair};
pub use drift::{
    centroid_of_chunks, compute_centroid, detect_concept_drift, severity_for, DriftDetector,
};
pub use engine::{DedupOutcome, Fingerprint, HashingEngine};
pub use hamming::{hamming_distance, is_near_duplicate};
pub use minhash::{estimate_jaccard, minhash, MinHasher};
pub use simhash::{simhash, SimHasher};
