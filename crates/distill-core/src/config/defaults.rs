// Single source of truth for all default values.

// --- Hashing ---
pub const DEFAULT_SIMHASH_BITS: usize = 64;
pub const DEFAULT_MINHASH_NUM_PERM: usize = 128;
pub const DEFAULT_NEAR_DUPLICATE_THRESHOLD: u32 = 3;

// --- Drift ---
pub const DEFAULT_DRIFT_THRESHOLD: f64 = 0.2;

// --- Retrieval ---
pub const DEFAULT_TOP_K: usize = 5;
pub const DEFAULT_MMR_LAMBDA: f64 = 0.5;

// --- Ensemble ---
pub const DEFAULT_ENSEMBLE_METHOD: &str = "majority_vote";
pub const DEFAULT_OUTPUT_KEY: &str = "text";

// --- Rationale ---
pub const DEFAULT_MIN_STEP_CHARS: usize = 10;
pub const DEFAULT_MAX_JUSTIFICATION_CHARS: usize = 200;
pub const DEFAULT_RECURRENCE_OVERLAP: f64 = 0.6;

pub const DEFAULT_STEP_MARKERS: &[&str] = &[
    r"step\s*\d*",
    "reasoning",
    "first",
    "second",
    "then",
    "next",
    "because",
    "since",
    "therefore",
    "thus",
];

pub const DEFAULT_CONCLUSION_MARKERS: &[&str] = &[
    "in conclusion",
    "conclusion",
    "therefore",
    "so the answer is",
    "the answer is",
    "final answer",
];

pub const DEFAULT_ABSOLUTE_MARKERS: &[&str] = &[
    "always",
    "never",
    "definitely",
    "certainly",
    "undoubtedly",
    "guaranteed",
    "without exception",
    "in all cases",
    "all cases",
    "everyone knows",
];

pub const DEFAULT_HEDGE_MARKERS: &[&str] = &[
    "may",
    "might",
    "could",
    "likely",
    "possibly",
    "perhaps",
    "suggests",
    "appears",
    "approximately",
    "according to",
];

// --- Soft labels ---
pub const DEFAULT_NORMALIZATION_TOLERANCE: f64 = 1e-3;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
