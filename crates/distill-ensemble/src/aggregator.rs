//! Entry points: `aggregate_ensemble` and the configured `EnsembleAggregator`.

use distill_core::config::EnsembleConfig;
use distill_core::errors::EnsembleError;
use distill_core::traits::ITeacherOutput;
use distill_observability::aggregation_span;
use tracing::{debug, warn};

use crate::metadata::{AggregationMetadata, OptionScore, RunDetail};
use crate::method::AggregationMethod;
use crate::methods::{borda_count, condorcet, majority_vote, Tally};
use crate::normalize::{normalize_runs, NormalizedRun};

/// Aggregation bound to a parsed method and output field.
#[derive(Debug, Clone)]
pub struct EnsembleAggregator {
    method: AggregationMethod,
    output_key: String,
}

impl EnsembleAggregator {
    pub fn new(config: &EnsembleConfig) -> Result<Self, EnsembleError> {
        Ok(Self {
            method: config.method.parse()?,
            output_key: config.output_key.clone(),
        })
    }

    pub fn with_method(method: AggregationMethod, output_key: impl Into<String>) -> Self {
        Self {
            method,
            output_key: output_key.into(),
        }
    }

    pub fn method(&self) -> AggregationMethod {
        self.method
    }

    pub fn output_key(&self) -> &str {
        &self.output_key
    }

    pub fn aggregate<R: ITeacherOutput>(&self, runs: &[R]) -> (Option<String>, AggregationMetadata) {
        let normalized = normalize_runs(runs, &self.output_key);
        run_method(
            Ok(self.method),
            self.method.as_str(),
            &normalized,
            &self.output_key,
        )
    }
}

impl Default for EnsembleAggregator {
    fn default() -> Self {
        let config = EnsembleConfig::default();
        Self::with_method(AggregationMethod::MajorityVote, config.output_key)
    }
}

/// Aggregate runs with the named method.
///
/// Never fails: an empty run list, runs without output, or an unknown method
/// yield `None` with the reason in `metadata.error`.
pub fn aggregate_ensemble<R: ITeacherOutput>(
    runs: &[R],
    method: &str,
    output_key: &str,
) -> (Option<String>, AggregationMetadata) {
    let normalized = normalize_runs(runs, output_key);
    run_method(method.parse(), method, &normalized, output_key)
}

fn run_method(
    parsed: Result<AggregationMethod, EnsembleError>,
    requested: &str,
    runs: &[NormalizedRun],
    output_key: &str,
) -> (Option<String>, AggregationMetadata) {
    let span = aggregation_span!(requested, runs.len());
    let _guard = span.enter();

    let usable: Vec<NormalizedRun> = runs.iter().filter(|r| r.is_usable()).cloned().collect();
    let mut metadata = AggregationMetadata {
        method: requested.to_string(),
        num_runs: runs.len(),
        num_valid_runs: usable.len(),
        run_details: runs.iter().map(RunDetail::from).collect(),
        ..Default::default()
    };

    if runs.is_empty() {
        metadata.error = Some(EnsembleError::NoRuns.to_string());
        return (None, metadata);
    }
    let method = match parsed {
        Ok(method) => method,
        Err(err) => {
            warn!(method = requested, "unknown aggregation method");
            metadata.error = Some(err.to_string());
            return (None, metadata);
        }
    };
    if usable.is_empty() {
        metadata.error = Some(
            EnsembleError::NoUsableOutput {
                num_runs: runs.len(),
                output_key: output_key.to_string(),
            }
            .to_string(),
        );
        return (None, metadata);
    }

    let tally = match method {
        AggregationMethod::MajorityVote => majority_vote(&usable),
        AggregationMethod::BordaCount => borda_count(&usable),
        AggregationMethod::Condorcet => {
            let pairwise = condorcet(&usable);
            if pairwise.winner.is_some() {
                pairwise
            } else {
                debug!("no condorcet winner, falling back to borda count");
                metadata.condorcet_fallback = true;
                borda_count(&usable)
            }
        }
    };
    let Tally { winner, scores } = tally;
    metadata.scores = scores
        .into_iter()
        .map(|(output, score)| OptionScore { output, score })
        .collect();
    debug!(
        winner = winner.as_deref().unwrap_or_default(),
        valid_runs = usable.len(),
        "ensemble aggregated"
    );
    (winner, metadata)
}

/// Share of usable runs whose trimmed output equals `answer`.
///
/// 0.0 when no run is usable.
pub fn agreement_ratio<R: ITeacherOutput>(runs: &[R], answer: &str, output_key: &str) -> f64 {
    let answer = answer.trim();
    let normalized = normalize_runs(runs, output_key);
    let usable: Vec<&NormalizedRun> = normalized.iter().filter(|r| r.is_usable()).collect();
    if usable.is_empty() {
        return 0.0;
    }
    let agreeing = usable
        .iter()
        .filter(|r| r.output.as_deref() == Some(answer))
        .count();
    agreeing as f64 / usable.len() as f64
}
