//! Property tests: aggregated distributions are normalized.

use proptest::prelude::*;

use distill_core::models::{SoftLabelMethod, TeacherRun, TokenLogprob, TopLogprob};
use distill_targets::aggregate_soft_labels;

fn run() -> impl Strategy<Value = TeacherRun> {
    (
        "[ab]",
        0.05f64..0.95,
        0.0f64..1.0,
        prop::bool::ANY,
    )
        .prop_map(|(label, p, confidence, with_logprobs)| {
            let other = if label == "a" { "b" } else { "a" };
            let run = TeacherRun::new("r", "ex", label.clone()).with_confidence(confidence);
            if !with_logprobs {
                return run;
            }
            run.with_logprobs(vec![TokenLogprob {
                token: label.clone(),
                logprob: p.ln(),
                top_logprobs: vec![
                    TopLogprob { token: label, logprob: p.ln() },
                    TopLogprob { token: other.to_string(), logprob: (1.0 - p).ln() },
                ],
            }])
        })
}

fn method() -> impl Strategy<Value = SoftLabelMethod> {
    prop_oneof![
        Just(SoftLabelMethod::Mean),
        Just(SoftLabelMethod::WeightedMean),
        Just(SoftLabelMethod::Max),
    ]
}

proptest! {
    #[test]
    fn prop_class_probs_sum_to_one(runs in prop::collection::vec(run(), 0..8), method in method()) {
        let labels = aggregate_soft_labels(&runs, method);
        prop_assert_eq!(labels.num_runs, runs.len());
        if !labels.class_probs.is_empty() {
            let total: f64 = labels.class_probs.values().sum();
            prop_assert!((total - 1.0).abs() < 1e-2);
            prop_assert!(labels.class_probs.values().all(|p| (0.0..=1.0 + 1e-9).contains(p)));
        }
        for dist in &labels.token_probs {
            let total: f64 = dist.values().sum();
            prop_assert!((total - 1.0).abs() < 1e-2);
        }
    }
}
