/// Distill system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Confidence assumed for a teacher run that reports none.
pub const DEFAULT_RUN_CONFIDENCE: f64 = 1.0;

/// Widest SimHash fingerprint supported (one 128-bit token hash per token).
pub const MAX_SIMHASH_BITS: usize = 128;

/// Narrowest SimHash fingerprint supported (one hex digit).
pub const MIN_SIMHASH_BITS: usize = 4;

/// Distance reported by concept-drift detection when a centroid is missing.
pub const UNASSESSED_DRIFT_DISTANCE: f64 = 1.0;
