//! Property tests for the cosine similarity primitives.

use proptest::prelude::*;

use distill_core::similarity::{cosine_distance, cosine_similarity};

fn vector(dim: usize) -> impl Strategy<Value = Vec<f32>> {
    prop::collection::vec(-100.0f32..100.0, dim)
}

proptest! {
    #[test]
    fn prop_similarity_is_bounded(a in vector(8), b in vector(8)) {
        let sim = cosine_similarity(&a, &b);
        prop_assert!((-1.0..=1.0).contains(&sim));
    }

    #[test]
    fn prop_similarity_is_symmetric(a in vector(6), b in vector(6)) {
        let ab = cosine_similarity(&a, &b);
        let ba = cosine_similarity(&b, &a);
        prop_assert!((ab - ba).abs() < 1e-9);
    }

    #[test]
    fn prop_self_similarity_is_one_for_nonzero(a in vector(5)) {
        prop_assume!(a.iter().any(|x| x.abs() > 1e-3));
        prop_assert!((cosine_similarity(&a, &a) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn prop_distance_complements_similarity(a in vector(4), b in vector(4)) {
        let total = cosine_similarity(&a, &b) + cosine_distance(&a, &b);
        prop_assert!((total - 1.0).abs() < 1e-12);
    }
}
