use serde::{Deserialize, Serialize};

use super::defaults;

/// Embedding-centroid drift configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DriftConfig {
    /// Cosine distance at or above which centroids are considered drifted.
    pub threshold: f64,
}

impl Default for DriftConfig {
    fn default() -> Self {
        Self {
            threshold: defaults::DEFAULT_DRIFT_THRESHOLD,
        }
    }
}
