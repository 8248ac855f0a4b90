use super::{accumulate, leader, Tally};
use crate::normalize::NormalizedRun;

/// Borda count over runs pre-ordered best first.
///
/// The run at rank r (1-based, among usable runs) earns `(N - r + 1) · confidence`
/// for its output.
pub fn borda_count(runs: &[NormalizedRun]) -> Tally {
    let n = runs.len() as f64;
    let mut rank = 0.0;
    let scores = accumulate(runs, |run| {
        rank += 1.0;
        (n - rank + 1.0) * run.confidence
    });
    Tally {
        winner: leader(&scores),
        scores,
    }
}
