//! Property tests for MMR ordering guarantees.

use proptest::prelude::*;

use distill_core::cosine_similarity;
use distill_retrieval::{mmr_retrieval, mmr_select, simple_retrieval, MmrCandidate};

fn candidates() -> impl Strategy<Value = Vec<MmrCandidate>> {
    prop::collection::vec(prop::collection::vec(-1.0f32..1.0, 4), 0..12).prop_map(|vs| {
        vs.into_iter()
            .enumerate()
            .map(|(i, v)| MmrCandidate::new(format!("c{i}"), Some(v)))
            .collect()
    })
}

fn query() -> impl Strategy<Value = Vec<f32>> {
    prop::collection::vec(-1.0f32..1.0, 4)
}

proptest! {
    #[test]
    fn prop_lambda_zero_equals_simple(q in query(), cs in candidates(), k in 0usize..15) {
        prop_assert_eq!(mmr_retrieval(&q, &cs, k, 0.0), simple_retrieval(&q, &cs, k));
    }

    #[test]
    fn prop_first_pick_is_most_relevant(q in query(), cs in candidates(), lambda in 0.0f64..=1.0) {
        let mmr = mmr_retrieval(&q, &cs, 3, lambda);
        let simple = simple_retrieval(&q, &cs, 1);
        prop_assert_eq!(mmr.first(), simple.first());
    }

    #[test]
    fn prop_no_repeats_and_bounded(q in query(), cs in candidates(), k in 0usize..15, lambda in 0.0f64..=1.0) {
        let ids = mmr_retrieval(&q, &cs, k, lambda);
        prop_assert!(ids.len() <= k.min(cs.len()));
        let mut unique = ids.clone();
        unique.sort();
        unique.dedup();
        prop_assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn prop_full_diversity_minimizes_redundancy(q in query(), cs in candidates(), k in 1usize..15) {
        let picks = mmr_select(&q, &cs, k, 1.0);
        let embedding = |id: &str| {
            cs.iter()
                .find(|c| c.id == id)
                .and_then(|c| c.embedding.clone())
                .unwrap_or_default()
        };
        for i in 1..picks.len() {
            let earlier: Vec<Vec<f32>> = picks[..i].iter().map(|p| embedding(&p.id)).collect();
            for other in cs.iter().filter(|c| picks[..=i].iter().all(|p| p.id != c.id)) {
                let other_embedding = other.embedding.clone().unwrap_or_default();
                let redundancy = earlier
                    .iter()
                    .map(|e| cosine_similarity(&other_embedding, e))
                    .fold(f64::NEG_INFINITY, f64::max);
                prop_assert!(picks[i].redundancy <= redundancy + 1e-9);
            }
        }
    }
}
