/// Fingerprinting errors. Only raised when constructing a hasher.
#[derive(Debug, thiserror::Error)]
pub enum HashingError {
    #[error("invalid SimHash width: {bits} bits (must be a multiple of 4 in 4..=128)")]
    InvalidWidth { bits: usize },

    #[error("invalid MinHash permutation count: {num_perm}")]
    InvalidPermutations { num_perm: usize },
}
