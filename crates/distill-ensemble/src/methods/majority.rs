use super::{accumulate, leader, Tally};
use crate::normalize::NormalizedRun;

/// Mode of the trimmed outputs.
pub fn majority_vote(runs: &[NormalizedRun]) -> Tally {
    let scores = accumulate(runs, |_| 1.0);
    Tally {
        winner: leader(&scores),
        scores,
    }
}
