use serde::{Deserialize, Serialize};

use super::defaults;

/// Context retrieval configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Number of chunks to select.
    pub top_k: usize,
    /// Diversity weight in [0, 1]. 0 ranks by relevance only.
    pub mmr_lambda: f64,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            top_k: defaults::DEFAULT_TOP_K,
            mmr_lambda: defaults::DEFAULT_MMR_LAMBDA,
        }
    }
}
