use super::{accumulate, Tally};
use crate::normalize::NormalizedRun;

/// Pairwise preference matrix over distinct outputs, in first-seen order.
///
/// Each run adds its confidence to `pref[own][other]` for every other distinct
/// output.
pub fn preference_matrix(runs: &[NormalizedRun]) -> (Vec<String>, Vec<Vec<f64>>) {
    let options: Vec<String> = accumulate(runs, |_| 0.0)
        .into_iter()
        .map(|(o, _)| o)
        .collect();
    let mut pref = vec![vec![0.0; options.len()]; options.len()];
    for run in runs {
        let Some(output) = run.output.as_deref() else {
            continue;
        };
        let Some(own) = options.iter().position(|o| o == output) else {
            continue;
        };
        for (other, cell) in pref[own].iter_mut().enumerate() {
            if other != own {
                *cell += run.confidence;
            }
        }
    }
    (options, pref)
}

/// Condorcet winner: the output that strictly beats every other head to head.
///
/// Scores are pairwise win counts. `winner` is `None` when no output beats all
/// others; the caller decides the fallback.
pub fn condorcet(runs: &[NormalizedRun]) -> Tally {
    let (options, pref) = preference_matrix(runs);
    let wins: Vec<usize> = (0..options.len())
        .map(|i| {
            (0..options.len())
                .filter(|&j| j != i && pref[i][j] > pref[j][i])
                .count()
        })
        .collect();
    let needed = options.len().saturating_sub(1);
    let winner = if options.is_empty() {
        None
    } else {
        wins.iter()
            .position(|&w| w == needed)
            .map(|i| options[i].clone())
    };
    Tally {
        winner,
        scores: options
            .into_iter()
            .zip(wins)
            .map(|(o, w)| (o, w as f64))
            .collect(),
    }
}
