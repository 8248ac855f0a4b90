//! Embedding-centroid concept drift.
//!
//! Severity bands are multiples of the threshold: below 1x is `none`,
//! below 1.5x `low`, below 2x `medium`, otherwise `high`.

use distill_core::config::DriftConfig;
use distill_core::constants::UNASSESSED_DRIFT_DISTANCE;
use distill_core::models::{Chunk, DriftReport, DriftSeverity};
use distill_core::similarity::cosine_distance;
use tracing::{debug, warn};

/// Element-wise mean of the present, non-empty embeddings.
///
/// Embeddings whose dimension differs from the first accepted one are skipped.
/// Returns `None` when nothing usable remains.
pub fn compute_centroid<'a, I>(embeddings: I) -> Option<Vec<f32>>
where
    I: IntoIterator<Item = Option<&'a [f32]>>,
{
    let mut sum: Vec<f64> = Vec::new();
    let mut count = 0usize;

    for embedding in embeddings.into_iter().flatten() {
        if embedding.is_empty() {
            continue;
        }
        if sum.is_empty() {
            sum = vec![0.0; embedding.len()];
        }
        if embedding.len() != sum.len() {
            warn!(
                expected = sum.len(),
                actual = embedding.len(),
                "skipping embedding with mismatched dimension"
            );
            continue;
        }
        for (acc, value) in sum.iter_mut().zip(embedding) {
            *acc += *value as f64;
        }
        count += 1;
    }

    if count == 0 {
        return None;
    }
    Some(sum.into_iter().map(|s| (s / count as f64) as f32).collect())
}

/// Centroid of the embeddings attached to a set of chunks.
pub fn centroid_of_chunks(chunks: &[Chunk]) -> Option<Vec<f32>> {
    compute_centroid(chunks.iter().map(|c| c.embedding.as_deref()))
}

/// Severity band for a cosine distance.
pub fn severity_for(distance: f64, threshold: f64) -> DriftSeverity {
    if distance < threshold {
        DriftSeverity::None
    } else if distance < 1.5 * threshold {
        DriftSeverity::Low
    } else if distance < 2.0 * threshold {
        DriftSeverity::Medium
    } else {
        DriftSeverity::High
    }
}

/// Compare two centroids.
///
/// A centroid that is missing, empty, all zero, or of a different dimension
/// than the other side cannot be assessed: the report says no drift,
/// distance 1.0, severity `none`, and `assessed = false`.
pub fn detect_concept_drift(
    old_centroid: Option<&[f32]>,
    new_centroid: Option<&[f32]>,
    threshold: f64,
) -> DriftReport {
    let (Some(old), Some(new)) = (old_centroid, new_centroid) else {
        debug!("centroid missing, drift not assessed");
        return unassessed(threshold);
    };
    if old.is_empty() || new.is_empty() {
        debug!("centroid empty, drift not assessed");
        return unassessed(threshold);
    }
    if old.len() != new.len() {
        warn!(
            old_dim = old.len(),
            new_dim = new.len(),
            "centroid dimensions differ, drift not assessed"
        );
        return unassessed(threshold);
    }
    if is_zero(old) || is_zero(new) {
        debug!("zero centroid, drift not assessed");
        return unassessed(threshold);
    }

    let distance = cosine_distance(old, new);
    let severity = severity_for(distance, threshold);
    DriftReport {
        has_drift: severity != DriftSeverity::None,
        distance,
        severity,
        threshold,
        assessed: true,
    }
}

fn unassessed(threshold: f64) -> DriftReport {
    DriftReport {
        has_drift: false,
        distance: UNASSESSED_DRIFT_DISTANCE,
        severity: DriftSeverity::None,
        threshold,
        assessed: false,
    }
}

fn is_zero(v: &[f32]) -> bool {
    v.iter().all(|x| *x == 0.0)
}

/// Drift detection bound to a configured threshold.
#[derive(Debug, Clone)]
pub struct DriftDetector {
    threshold: f64,
}

impl DriftDetector {
    pub fn new(config: &DriftConfig) -> Self {
        Self {
            threshold: config.threshold,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn detect(&self, old_centroid: Option<&[f32]>, new_centroid: Option<&[f32]>) -> DriftReport {
        detect_concept_drift(old_centroid, new_centroid, self.threshold)
    }

    /// Compare the centroid of an accepted chunk set against incoming chunks.
    pub fn compare_chunks(&self, accepted: &[Chunk], incoming: &[Chunk]) -> DriftReport {
        let _span = distill_observability::drift_span!(self.threshold).entered();
        let old = centroid_of_chunks(accepted);
        let new = centroid_of_chunks(incoming);
        let report = self.detect(old.as_deref(), new.as_deref());
        if report.has_drift {
            warn!(
                distance = report.distance,
                severity = %report.severity,
                accepted = accepted.len(),
                incoming = incoming.len(),
                "concept drift detected"
            );
        }
        report
    }
}

impl Default for DriftDetector {
    fn default() -> Self {
        Self::new(&DriftConfig::default())
    }
}
