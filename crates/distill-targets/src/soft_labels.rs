//! Cross-run soft-label aggregation.

use distill_core::config::{defaults, SoftLabelConfig};
use distill_core::constants::DEFAULT_RUN_CONFIDENCE;
use distill_core::models::{SoftLabelMethod, SoftLabels, TokenDistribution, TokenLogprob};
use distill_core::traits::ITeacherOutput;
use tracing::debug;

use crate::logprobs::{normalize_distribution, probability, token_distribution};

/// `{label: p}` for one run's chosen label.
///
/// The label takes the probability of its whole token sequence. The
/// alternatives offered at the first position become competing labels. Empty
/// when the label is blank or there are no log-probabilities.
pub fn extract_class_probabilities(
    label: &str,
    logprobs: &[TokenLogprob],
    tolerance: f64,
) -> TokenDistribution {
    let label = label.trim();
    let Some(first) = logprobs.first() else {
        return TokenDistribution::new();
    };
    if label.is_empty() {
        return TokenDistribution::new();
    }
    let Some(p_label) = probability(logprobs.iter().map(|t| t.logprob).sum()) else {
        return TokenDistribution::new();
    };

    let mut dist = TokenDistribution::from([(label.to_string(), p_label)]);
    let sampled = first.token.trim();
    for alt in &first.top_logprobs {
        let candidate = alt.token.trim();
        if candidate.is_empty() || candidate == sampled || candidate == label {
            continue;
        }
        if let Some(p) = probability(alt.logprob) {
            *dist.entry(candidate.to_string()).or_insert(0.0) += p;
        }
    }
    normalize_distribution(&mut dist, tolerance);
    dist
}

/// Distributions one run contributes.
struct RunSignal {
    weight: f64,
    tokens: Vec<TokenDistribution>,
    classes: TokenDistribution,
}

/// Combine weighted distributions with `method`.
fn combine<'a>(
    inputs: impl IntoIterator<Item = (f64, &'a TokenDistribution)>,
    method: SoftLabelMethod,
    tolerance: f64,
) -> TokenDistribution {
    let inputs: Vec<(f64, &TokenDistribution)> = inputs.into_iter().collect();
    let mut out = TokenDistribution::new();
    if inputs.is_empty() {
        return out;
    }

    if method == SoftLabelMethod::Max {
        for (_, dist) in &inputs {
            for (key, &p) in dist.iter() {
                let slot = out.entry(key.clone()).or_insert(0.0);
                *slot = slot.max(p);
            }
        }
        normalize_distribution(&mut out, tolerance);
        return out;
    }

    let total_weight: f64 = inputs.iter().map(|(w, _)| w).sum();
    let uniform = method == SoftLabelMethod::Mean || total_weight <= 0.0;
    let denominator = if uniform {
        inputs.len() as f64
    } else {
        total_weight
    };
    for (weight, dist) in &inputs {
        let w = if uniform { 1.0 } else { *weight };
        for (key, &p) in dist.iter() {
            *out.entry(key.clone()).or_insert(0.0) += w * p / denominator;
        }
    }
    normalize_distribution(&mut out, tolerance);
    out
}

/// Soft-label aggregation bound to a method, tolerance, and output field.
#[derive(Debug, Clone)]
pub struct SoftLabelAggregator {
    method: SoftLabelMethod,
    tolerance: f64,
    output_key: String,
}

impl SoftLabelAggregator {
    pub fn new(config: &SoftLabelConfig, output_key: impl Into<String>) -> Self {
        Self {
            method: config.method,
            tolerance: config.normalization_tolerance,
            output_key: output_key.into(),
        }
    }

    pub fn with_method(mut self, method: SoftLabelMethod) -> Self {
        self.method = method;
        self
    }

    pub fn method(&self) -> SoftLabelMethod {
        self.method
    }

    /// Aggregate token and class distributions across runs.
    ///
    /// Runs without log-probabilities add nothing. Token distributions are
    /// aligned by position; a position averages only the runs that reach it.
    pub fn aggregate<R: ITeacherOutput>(&self, runs: &[R]) -> SoftLabels {
        let signals: Vec<RunSignal> = runs
            .iter()
            .filter_map(|run| {
                let logprobs = run.logprobs().filter(|l| !l.is_empty())?;
                let label = run.output_field(&self.output_key).unwrap_or_default();
                Some(RunSignal {
                    weight: run
                        .confidence()
                        .filter(|c| c.is_finite())
                        .unwrap_or(DEFAULT_RUN_CONFIDENCE)
                        .max(0.0),
                    tokens: logprobs
                        .iter()
                        .map(|pos| token_distribution(pos, self.tolerance))
                        .collect(),
                    classes: extract_class_probabilities(&label, &logprobs, self.tolerance),
                })
            })
            .collect();

        if signals.is_empty() {
            debug!(num_runs = runs.len(), "no run carries log-probabilities");
            return SoftLabels::empty(runs.len(), self.method);
        }

        let positions = signals.iter().map(|s| s.tokens.len()).max().unwrap_or(0);
        let token_probs = (0..positions)
            .map(|i| {
                combine(
                    signals
                        .iter()
                        .filter_map(|s| s.tokens.get(i).map(|d| (s.weight, d))),
                    self.method,
                    self.tolerance,
                )
            })
            .collect();
        let class_probs = combine(
            signals
                .iter()
                .filter(|s| !s.classes.is_empty())
                .map(|s| (s.weight, &s.classes)),
            self.method,
            self.tolerance,
        );

        debug!(
            num_runs = runs.len(),
            runs_with_logprobs = signals.len(),
            positions,
            method = %self.method,
            "soft labels aggregated"
        );
        SoftLabels {
            token_probs,
            class_probs,
            num_runs: runs.len(),
            runs_with_logprobs: signals.len(),
            aggregation_method: self.method,
        }
    }
}

impl Default for SoftLabelAggregator {
    fn default() -> Self {
        Self::new(&SoftLabelConfig::default(), defaults::DEFAULT_OUTPUT_KEY)
    }
}

/// Aggregate with the given method, reading labels from the `text` field.
pub fn aggregate_soft_labels<R: ITeacherOutput>(runs: &[R], method: SoftLabelMethod) -> SoftLabels {
    SoftLabelAggregator::default().with_method(method).aggregate(runs)
}
