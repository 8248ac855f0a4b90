//! # distill-core
//!
//! Foundation crate for the Distill curation pipeline.
//! Defines the data model, traits, errors, config, constants, and the
//! similarity primitives shared by hashing, drift, and retrieval.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod similarity;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::DistillConfig;
pub use errors::{DistillError, DistillResult};
pub use models::{
    Chunk, DriftReport, DriftSeverity, SoftLabelMethod, SoftLabels, SyntheticExample, Targets,
    TeacherRun,
};
pub use similarity::{cosine_distance, cosine_similarity};
pub use traits::ITeacherOutput;
