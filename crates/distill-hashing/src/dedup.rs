//! Near-duplicate lookup over SimHash fingerprints.

use serde::Serialize;
use tracing::debug;

use crate::engine::Fingerprint;
use crate::hamming::{hamming_distance, is_near_duplicate};
use crate::minhash::estimate_jaccard;

/// An accepted item that a new fingerprint collides with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateMatch {
    pub id: String,
    pub distance: u32,
}

/// A pair of near-duplicate items found within one batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NearDuplicatePair {
    pub first: String,
    pub second: String,
    pub distance: u32,
    /// MinHash Jaccard estimate, when both sides carry a signature.
    pub jaccard: Option<f64>,
}

/// In-memory set of accepted SimHash fingerprints.
///
/// Ingestion checks each new fingerprint against it before committing content.
#[derive(Debug, Clone)]
pub struct DuplicateIndex {
    threshold: u32,
    entries: Vec<(String, String)>,
}

impl DuplicateIndex {
    pub fn new(threshold: u32) -> Self {
        Self {
            threshold,
            entries: Vec::new(),
        }
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    pub fn insert(&mut self, id: impl Into<String>, simhash: impl Into<String>) {
        self.entries.push((id.into(), simhash.into()));
    }

    /// Closest accepted fingerprint within the threshold. Ties go to the
    /// earliest inserted entry. A missing fingerprint never matches.
    pub fn find_match(&self, simhash: Option<&str>) -> Option<DuplicateMatch> {
        let mut best: Option<DuplicateMatch> = None;
        for (id, existing) in &self.entries {
            if !is_near_duplicate(simhash, Some(existing), self.threshold) {
                continue;
            }
            let distance = hamming_distance(simhash.unwrap_or_default(), existing);
            if best.as_ref().map_or(true, |b| distance < b.distance) {
                best = Some(DuplicateMatch {
                    id: id.clone(),
                    distance,
                });
            }
        }
        best
    }

    /// Accept the fingerprint unless it duplicates an accepted one.
    ///
    /// Returns the match when rejected. Items without a fingerprint are
    /// accepted but not indexed.
    pub fn check_and_insert(
        &mut self,
        id: impl Into<String>,
        simhash: Option<&str>,
    ) -> Option<DuplicateMatch> {
        let id = id.into();
        if let Some(found) = self.find_match(simhash) {
            debug!(id = %id, duplicate_of = %found.id, distance = found.distance, "near-duplicate rejected");
            return Some(found);
        }
        if let Some(hash) = simhash.filter(|h| !h.is_empty()) {
            self.entries.push((id, hash.to_string()));
        }
        None
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// All near-duplicate pairs within a batch of fingerprints.
///
/// O(n²) pairwise comparison, in input order.
pub fn find_near_duplicates(fingerprints: &[Fingerprint], threshold: u32) -> Vec<NearDuplicatePair> {
    let mut pairs = Vec::new();
    for (i, a) in fingerprints.iter().enumerate() {
        for b in &fingerprints[i + 1..] {
            if !is_near_duplicate(Some(&a.simhash), Some(&b.simhash), threshold) {
                continue;
            }
            let jaccard = match (&a.minhash, &b.minhash) {
                (Some(sa), Some(sb)) => Some(estimate_jaccard(sa, sb)),
                _ => None,
            };
            pairs.push(NearDuplicatePair {
                first: a.id.clone(),
                second: b.id.clone(),
                distance: hamming_distance(&a.simhash, &b.simhash),
                jaccard,
            });
        }
    }
    pairs
}
