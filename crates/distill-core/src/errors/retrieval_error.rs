/// Context retrieval errors.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error("MMR lambda {lambda} outside [0, 1]")]
    InvalidLambda { lambda: f64 },
}
