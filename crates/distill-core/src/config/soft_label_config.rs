use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::SoftLabelMethod;

/// Soft-label aggregation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SoftLabelConfig {
    /// Cross-run aggregation method.
    pub method: SoftLabelMethod,
    /// A distribution whose mass differs from 1.0 by more than this is renormalized.
    pub normalization_tolerance: f64,
}

impl Default for SoftLabelConfig {
    fn default() -> Self {
        Self {
            method: SoftLabelMethod::WeightedMean,
            normalization_tolerance: defaults::DEFAULT_NORMALIZATION_TOLERANCE,
        }
    }
}
