//! Property tests for fingerprint width, Hamming symmetry, and drift.

use proptest::prelude::*;

use distill_hashing::{detect_concept_drift, hamming_distance, simhash, SimHasher};

fn width() -> impl Strategy<Value = usize> {
    (1usize..=32).prop_map(|n| n * 4)
}

proptest! {
    #[test]
    fn prop_simhash_is_fixed_width_hex(text in ".{0,200}", bits in width()) {
        let hasher = SimHasher::new(bits).unwrap();
        let hash = hasher.hash(&text);
        prop_assert_eq!(hash.len(), bits / 4);
        prop_assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn prop_self_distance_is_zero(text in "[a-z ]{0,120}") {
        let h = simhash(&text);
        prop_assert_eq!(hamming_distance(&h, &h), 0);
    }

    #[test]
    fn prop_distance_is_symmetric_and_bounded(a in "[a-z ]{0,80}", b in "[a-z ]{0,80}") {
        let (ha, hb) = (simhash(&a), simhash(&b));
        let d = hamming_distance(&ha, &hb);
        prop_assert_eq!(d, hamming_distance(&hb, &ha));
        prop_assert!(d <= 64);
    }

    #[test]
    fn prop_identical_centroids_never_drift(v in prop::collection::vec(0.01f32..10.0, 1..16)) {
        let report = detect_concept_drift(Some(&v), Some(&v), 0.2);
        prop_assert!(!report.has_drift);
    }
}
