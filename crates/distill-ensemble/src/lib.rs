//! # distill-ensemble
//!
//! Picks one canonical output from several teacher runs of the same example.
//!
//! Runs arrive as anything implementing `ITeacherOutput` and are normalized
//! once at the boundary; the voting methods only ever see `NormalizedRun`s.

pub mod aggregator;
pub mod metadata;
pub mod method;
pub mod methods;
pub mod normalize;

pub use aggregator::{aggregate_ensemble, agreement_ratio, EnsembleAggregator};
pub use metadata::{AggregationMetadata, OptionScore, RunDetail};
pub use method::AggregationMethod;
pub use normalize::{normalize_runs, NormalizedRun};
