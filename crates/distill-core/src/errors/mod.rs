mod config_error;
mod ensemble_error;
mod hashing_error;
mod retrieval_error;
mod soft_label_error;
mod target_error;

pub use config_error::ConfigError;
pub use ensemble_error::EnsembleError;
pub use hashing_error::HashingError;
pub use retrieval_error::RetrievalError;
pub use soft_label_error::SoftLabelError;
pub use target_error::TargetError;

/// Convenience alias used throughout the workspace.
pub type DistillResult<T> = Result<T, DistillError>;

/// Top-level error for the curation pipeline.
#[derive(Debug, thiserror::Error)]
pub enum DistillError {
    #[error("configuration error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("hashing error: {0}")]
    HashingError(#[from] HashingError),

    #[error("retrieval error: {0}")]
    RetrievalError(#[from] RetrievalError),

    #[error("ensemble error: {0}")]
    EnsembleError(#[from] EnsembleError),

    #[error("soft-label error: {0}")]
    SoftLabelError(#[from] SoftLabelError),

    #[error("target error: {0}")]
    TargetError(#[from] TargetError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
