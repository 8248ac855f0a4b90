//! Property tests: unanimous ensembles and vote invariants.

use proptest::prelude::*;
use serde_json::{json, Value};

use distill_ensemble::{aggregate_ensemble, agreement_ratio};

const METHODS: [&str; 3] = ["majority_vote", "borda_count", "condorcet"];

fn runs() -> impl Strategy<Value = Vec<Value>> {
    prop::collection::vec(("[ABC]", 0.05f64..1.0), 1..10).prop_map(|rs| {
        rs.into_iter()
            .map(|(o, c)| json!({"output": o, "confidence": c}))
            .collect()
    })
}

proptest! {
    #[test]
    fn prop_unanimous_runs_win_everywhere(answer in "[a-z]{1,8}", n in 1usize..8) {
        let runs: Vec<Value> = (0..n).map(|_| json!({"output": answer.clone()})).collect();
        for method in METHODS {
            let (winner, _) = aggregate_ensemble(&runs, method, "text");
            prop_assert_eq!(winner.as_deref(), Some(answer.as_str()));
        }
    }

    #[test]
    fn prop_winner_is_some_input(rs in runs()) {
        for method in METHODS {
            let (winner, meta) = aggregate_ensemble(&rs, method, "text");
            let winner = winner.unwrap();
            prop_assert!(rs.iter().any(|r| r["output"] == winner.as_str()));
            prop_assert_eq!(meta.num_runs, rs.len());
            prop_assert!(agreement_ratio(&rs, &winner, "text") > 0.0);
        }
    }

    #[test]
    fn prop_majority_winner_has_max_count(rs in runs()) {
        let (winner, meta) = aggregate_ensemble(&rs, "majority_vote", "text");
        let winner = winner.unwrap();
        let top = meta.scores.iter().map(|s| s.score).fold(0.0, f64::max);
        let own = meta.scores.iter().find(|s| s.output == winner).map(|s| s.score);
        prop_assert_eq!(own, Some(top));
    }
}
