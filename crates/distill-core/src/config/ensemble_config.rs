use serde::{Deserialize, Serialize};

use super::defaults;

/// Ensemble aggregation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EnsembleConfig {
    /// Aggregation method name: "majority_vote", "borda_count", or "condorcet".
    /// Kept as a string so an unknown name surfaces as an aggregation error signal.
    pub method: String,
    /// Output field read from each run.
    pub output_key: String,
}

impl Default for EnsembleConfig {
    fn default() -> Self {
        Self {
            method: defaults::DEFAULT_ENSEMBLE_METHOD.to_string(),
            output_key: defaults::DEFAULT_OUTPUT_KEY.to_string(),
        }
    }
}
