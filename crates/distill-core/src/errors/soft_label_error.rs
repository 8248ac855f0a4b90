/// Soft-label aggregation errors.
#[derive(Debug, thiserror::Error)]
pub enum SoftLabelError {
    #[error("unknown soft-label aggregation method: {name}")]
    UnknownMethod { name: String },
}
