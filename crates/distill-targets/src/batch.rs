//! Parallel target construction over many examples.

use distill_core::models::{SyntheticExample, Targets};
use distill_core::traits::ITeacherOutput;
use rayon::prelude::*;
use serde::Serialize;
use tracing::{info, warn};

use crate::builder::{Grounding, TargetBuilder};

/// One example with its run set and grounding.
#[derive(Debug, Clone)]
pub struct ExampleRuns<R> {
    pub example: SyntheticExample,
    pub runs: Vec<R>,
    pub grounding: Grounding,
}

impl<R> ExampleRuns<R> {
    pub fn new(example: SyntheticExample, runs: Vec<R>) -> Self {
        Self {
            example,
            runs,
            grounding: Grounding::default(),
        }
    }

    pub fn with_grounding(mut self, grounding: Grounding) -> Self {
        self.grounding = grounding;
        self
    }
}

/// An example that produced no target.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchFailure {
    pub example_id: String,
    pub error: String,
}

/// Outcome of a batch, each list in input order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    pub targets: Vec<Targets>,
    pub failures: Vec<BatchFailure>,
}

/// Build targets in parallel. Failures are collected, never propagated.
pub fn build_targets_batch<R>(builder: &TargetBuilder, items: &[ExampleRuns<R>]) -> BatchReport
where
    R: ITeacherOutput + Sync,
{
    let results: Vec<Result<Targets, BatchFailure>> = items
        .par_iter()
        .map(|item| {
            builder
                .build(&item.example, &item.runs, &item.grounding)
                .map_err(|e| BatchFailure {
                    example_id: item.example.id.clone(),
                    error: e.to_string(),
                })
        })
        .collect();

    let mut report = BatchReport::default();
    for result in results {
        match result {
            Ok(target) => report.targets.push(target),
            Err(failure) => {
                warn!(example_id = %failure.example_id, error = %failure.error, "target skipped");
                report.failures.push(failure);
            }
        }
    }
    info!(
        built = report.targets.len(),
        failed = report.failures.len(),
        "target batch complete"
    );
    report
}
