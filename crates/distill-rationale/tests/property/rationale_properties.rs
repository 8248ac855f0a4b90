//! Property tests: scores stay in range, bounds hold.

use proptest::prelude::*;

use distill_rationale::{critique_faithfulness, distill_justification, extract_rationale};

proptest! {
    #[test]
    fn prop_score_in_unit_interval(text in ".{0,300}", source in proptest::option::of("[a-z ]{0,100}")) {
        let c = critique_faithfulness(&text, source.as_deref(), &["doc1".to_string()]);
        prop_assert!((0.0..=1.0).contains(&c.score));
    }

    #[test]
    fn prop_steps_exceed_min_length(text in "[A-Za-z ,.]{0,400}") {
        let r = extract_rationale(&text);
        for step in &r.steps {
            prop_assert!(step.chars().count() > 10);
        }
    }

    #[test]
    fn prop_justification_bounded(texts in prop::collection::vec("[A-Za-z ,.]{0,200}", 0..6), max in 0usize..250) {
        let rationales: Vec<_> = texts.iter().map(|t| extract_rationale(t)).collect();
        prop_assert!(distill_justification(&rationales, max).chars().count() <= max);
    }
}
