use std::fmt;

use serde::{Deserialize, Serialize};

/// How far a centroid has moved relative to the drift threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DriftSeverity {
    None,
    Low,
    Medium,
    High,
}

impl DriftSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for DriftSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of comparing two embedding centroids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriftReport {
    pub has_drift: bool,
    /// Cosine distance between the centroids (1.0 when either is missing).
    pub distance: f64,
    pub severity: DriftSeverity,
    pub threshold: f64,
    /// False when a centroid was missing and no comparison was made.
    pub assessed: bool,
}
