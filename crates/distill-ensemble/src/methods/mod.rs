//! Voting methods. Each takes only usable runs, in caller order.

mod borda;
mod condorcet;
mod majority;

pub use borda::borda_count;
pub use condorcet::{condorcet, preference_matrix};
pub use majority::majority_vote;

use crate::normalize::NormalizedRun;

/// Winner plus per-option scores in first-seen order.
#[derive(Debug, Clone, PartialEq)]
pub struct Tally {
    pub winner: Option<String>,
    pub scores: Vec<(String, f64)>,
}

/// Accumulate `points(run)` per distinct output, in first-seen order.
pub(crate) fn accumulate<'a>(
    runs: impl IntoIterator<Item = &'a NormalizedRun>,
    mut points: impl FnMut(&NormalizedRun) -> f64,
) -> Vec<(String, f64)> {
    let mut scores: Vec<(String, f64)> = Vec::new();
    for run in runs {
        let Some(output) = run.output.as_deref() else {
            continue;
        };
        let p = points(run);
        match scores.iter_mut().find(|(o, _)| o == output) {
            Some((_, total)) => *total += p,
            None => scores.push((output.to_string(), p)),
        }
    }
    scores
}

/// Highest score; the earliest option wins ties.
pub(crate) fn leader(scores: &[(String, f64)]) -> Option<String> {
    let mut best: Option<&(String, f64)> = None;
    for entry in scores {
        if best.map_or(true, |b| entry.1 > b.1) {
            best = Some(entry);
        }
    }
    best.map(|(o, _)| o.clone())
}
