/// Configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{field} = {value} is out of range, expected {expected}")]
    OutOfRange {
        field: String,
        value: String,
        expected: String,
    },

    #[error("{field} is invalid: {reason}")]
    InvalidValue { field: String, reason: String },
}
