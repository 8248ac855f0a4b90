//! Audit metadata attached to every aggregation result.

use serde::{Deserialize, Serialize};

use crate::normalize::NormalizedRun;

/// Score of one distinct output under the method that produced the result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionScore {
    pub output: String,
    pub score: f64,
}

/// Per-run diagnostics, for every input run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunDetail {
    pub id: Option<String>,
    /// Output field as read, before trimming.
    pub output: Option<String>,
    pub confidence: f64,
    pub model: Option<String>,
    pub provider: Option<String>,
    pub seed: Option<u64>,
    pub temperature: Option<f64>,
    /// Whether the run had output text and took part in the vote.
    pub usable: bool,
}

impl From<&NormalizedRun> for RunDetail {
    fn from(run: &NormalizedRun) -> Self {
        Self {
            id: run.id.clone(),
            output: run.raw_output.clone(),
            confidence: run.confidence,
            model: run.model.clone(),
            provider: run.provider.clone(),
            seed: run.seed,
            temperature: run.temperature,
            usable: run.is_usable(),
        }
    }
}

/// Result metadata. Failures are reported in `error`, never raised.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregationMetadata {
    /// Method name as requested.
    pub method: String,
    pub num_runs: usize,
    pub num_valid_runs: usize,
    #[serde(default)]
    pub scores: Vec<OptionScore>,
    #[serde(default)]
    pub run_details: Vec<RunDetail>,
    /// Condorcet found no winner and Borda count decided instead.
    #[serde(default)]
    pub condorcet_fallback: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AggregationMetadata {
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}
