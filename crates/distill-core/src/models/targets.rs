use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::provenance::Provenance;
use super::quality::QualityScores;
use crate::errors::SoftLabelError;

/// A probability distribution keyed by token or label text.
pub type TokenDistribution = BTreeMap<String, f64>;

/// How per-run distributions are combined across an ensemble.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoftLabelMethod {
    /// Simple average.
    Mean,
    /// Confidence-weighted average.
    #[default]
    WeightedMean,
    /// Pointwise maximum, renormalized.
    Max,
}

impl SoftLabelMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mean => "mean",
            Self::WeightedMean => "weighted_mean",
            Self::Max => "max",
        }
    }
}

impl fmt::Display for SoftLabelMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SoftLabelMethod {
    type Err = SoftLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mean" => Ok(Self::Mean),
            "weighted_mean" | "weighted" => Ok(Self::WeightedMean),
            "max" => Ok(Self::Max),
            other => Err(SoftLabelError::UnknownMethod {
                name: other.to_string(),
            }),
        }
    }
}

/// Aggregated soft-label payload (`y_probs`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoftLabels {
    /// Position-aligned token distributions.
    pub token_probs: Vec<TokenDistribution>,
    /// Distribution over candidate answer labels.
    pub class_probs: TokenDistribution,
    /// Runs supplied, including those without log-probabilities.
    pub num_runs: usize,
    /// Runs that contributed a distribution.
    pub runs_with_logprobs: usize,
    pub aggregation_method: SoftLabelMethod,
}

impl SoftLabels {
    /// Payload with no signal, for ensembles without usable log-probabilities.
    pub fn empty(num_runs: usize, aggregation_method: SoftLabelMethod) -> Self {
        Self {
            token_probs: Vec::new(),
            class_probs: TokenDistribution::new(),
            num_runs,
            runs_with_logprobs: 0,
            aggregation_method,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.token_probs.is_empty() && self.class_probs.is_empty()
    }
}

/// Ensemble vote taken over the same runs as a target, kept for audit.
///
/// `winner` may differ from `Targets::y_text`, which always comes from the
/// most recent run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnsembleVote {
    pub method: String,
    pub winner: Option<String>,
    pub num_valid_runs: usize,
    /// Whether `winner` equals `y_text`.
    pub agrees_with_y_text: bool,
}

/// The distilled training label for one synthetic example.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Targets {
    pub id: String,
    pub example_id: String,
    /// Canonical answer text.
    pub y_text: String,
    pub y_probs: SoftLabels,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub justification: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faithfulness_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provenance: Option<Provenance>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality: Option<QualityScores>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ensemble_vote: Option<EnsembleVote>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn soft_label_method_parses_known_names() {
        assert_eq!("mean".parse::<SoftLabelMethod>().unwrap(), SoftLabelMethod::Mean);
        assert_eq!(
            "Weighted_Mean".parse::<SoftLabelMethod>().unwrap(),
            SoftLabelMethod::WeightedMean
        );
        assert_eq!("max".parse::<SoftLabelMethod>().unwrap(), SoftLabelMethod::Max);
    }

    #[test]
    fn soft_label_method_rejects_unknown_name() {
        let err = "median".parse::<SoftLabelMethod>().unwrap_err();
        assert!(err.to_string().contains("median"));
    }

    #[test]
    fn empty_soft_labels_keep_run_count() {
        let labels = SoftLabels::empty(4, SoftLabelMethod::Mean);
        assert!(labels.is_empty());
        assert_eq!(labels.num_runs, 4);
    }
}
