//! Hamming distance over hex fingerprints and the near-duplicate test.

/// Bit-level Hamming distance between two hex strings of equal length.
///
/// Width mismatches and non-hex input yield the sentinel
/// `4 * max(len_a, len_b)` instead of an error.
pub fn hamming_distance(a: &str, b: &str) -> u32 {
    let sentinel = 4 * a.len().max(b.len()) as u32;
    if a.len() != b.len() {
        return sentinel;
    }
    let mut distance = 0;
    for (x, y) in a.chars().zip(b.chars()) {
        match (x.to_digit(16), y.to_digit(16)) {
            (Some(x), Some(y)) => distance += (x ^ y).count_ones(),
            _ => return sentinel,
        }
    }
    distance
}

/// Two fingerprints are near-duplicates when their distance is within `threshold`.
/// A missing or empty fingerprint on either side is never a duplicate.
pub fn is_near_duplicate(a: Option<&str>, b: Option<&str>, threshold: u32) -> bool {
    match (a, b) {
        (Some(a), Some(b)) if !a.is_empty() && !b.is_empty() => {
            hamming_distance(a, b) <= threshold
        }
        _ => false,
    }
}
