//! # distill-targets
//!
//! Turns a teacher ensemble into one `Targets` record.
//!
//! - **logprobs**: per-token log-probabilities to normalized distributions.
//! - **soft_labels**: cross-run aggregation (`mean`, `weighted_mean`, `max`).
//! - **builder**: canonical text, soft labels, justification, faithfulness.
//! - **batch**: parallel construction where one bad example never aborts the rest.

pub mod batch;
pub mod builder;
pub mod logprobs;
pub mod soft_labels;

pub use batch::{build_targets_batch, BatchFailure, BatchReport, ExampleRuns};
pub use builder::{create_target_with_soft_labels, Grounding, TargetBuilder};
pub use logprobs::{normalize_distribution, probability, token_distribution};
pub use soft_labels::{aggregate_soft_labels, extract_class_probabilities, SoftLabelAggregator};
