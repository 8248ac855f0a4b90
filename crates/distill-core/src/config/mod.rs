//! Layered configuration: every section falls back to `defaults.rs`.

pub mod defaults;
mod drift_config;
mod ensemble_config;
mod hashing_config;
mod observability_config;
mod rationale_config;
mod retrieval_config;
mod soft_label_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use drift_config::DriftConfig;
pub use ensemble_config::EnsembleConfig;
pub use hashing_config::HashingConfig;
pub use observability_config::ObservabilityConfig;
pub use rationale_config::RationaleConfig;
pub use retrieval_config::RetrievalConfig;
pub use soft_label_config::SoftLabelConfig;

use crate::constants::{MAX_SIMHASH_BITS, MIN_SIMHASH_BITS};
use crate::errors::{ConfigError, DistillResult};

/// Top-level configuration for the curation pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DistillConfig {
    pub hashing: HashingConfig,
    pub drift: DriftConfig,
    pub retrieval: RetrievalConfig,
    pub ensemble: EnsembleConfig,
    pub rationale: RationaleConfig,
    pub soft_labels: SoftLabelConfig,
    pub observability: ObservabilityConfig,
}

impl DistillConfig {
    /// Parse a TOML document. Missing sections and fields keep their defaults.
    pub fn from_toml(toml_str: &str) -> DistillResult<Self> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> DistillResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Check value ranges that serde alone cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let bits = self.hashing.simhash_bits;
        if !(MIN_SIMHASH_BITS..=MAX_SIMHASH_BITS).contains(&bits) || bits % 4 != 0 {
            return Err(ConfigError::OutOfRange {
                field: "hashing.simhash_bits".to_string(),
                value: bits.to_string(),
                expected: format!("a multiple of 4 in {MIN_SIMHASH_BITS}..={MAX_SIMHASH_BITS}"),
            });
        }
        if self.hashing.minhash_num_perm == 0 {
            return Err(ConfigError::OutOfRange {
                field: "hashing.minhash_num_perm".to_string(),
                value: "0".to_string(),
                expected: "at least 1".to_string(),
            });
        }
        check_unit_interval("retrieval.mmr_lambda", self.retrieval.mmr_lambda)?;
        check_unit_interval(
            "rationale.recurrence_overlap",
            self.rationale.recurrence_overlap,
        )?;
        if !(self.drift.threshold > 0.0 && self.drift.threshold <= 2.0) {
            return Err(ConfigError::OutOfRange {
                field: "drift.threshold".to_string(),
                value: self.drift.threshold.to_string(),
                expected: "(0, 2]".to_string(),
            });
        }
        if self.ensemble.output_key.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "ensemble.output_key".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

fn check_unit_interval(field: &str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field: field.to_string(),
            value: value.to_string(),
            expected: "[0, 1]".to_string(),
        })
    }
}
