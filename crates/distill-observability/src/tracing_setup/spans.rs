//! Span definitions per operation: hashing, drift, retrieval, aggregation,
//! critique, soft labels, and target construction.

/// Create a fingerprinting span.
#[macro_export]
macro_rules! hashing_span {
    ($item_count:expr) => {
        tracing::info_span!($crate::tracing_setup::spans::names::HASHING, item_count = $item_count)
    };
}

/// Create a drift-detection span.
#[macro_export]
macro_rules! drift_span {
    ($threshold:expr) => {
        tracing::info_span!($crate::tracing_setup::spans::names::DRIFT, threshold = $threshold)
    };
}

/// Create a retrieval span.
#[macro_export]
macro_rules! retrieval_span {
    ($candidate_count:expr, $top_k:expr) => {
        tracing::info_span!(
            $crate::tracing_setup::spans::names::RETRIEVAL,
            candidate_count = $candidate_count,
            top_k = $top_k
        )
    };
}

/// Create an ensemble aggregation span.
#[macro_export]
macro_rules! aggregation_span {
    ($method:expr, $run_count:expr) => {
        tracing::info_span!($crate::tracing_setup::spans::names::AGGREGATION, method = %$method, run_count = $run_count)
    };
}

/// Create a faithfulness critique span.
#[macro_export]
macro_rules! critique_span {
    ($run_count:expr) => {
        tracing::info_span!($crate::tracing_setup::spans::names::CRITIQUE, run_count = $run_count)
    };
}

/// Create a target construction span.
#[macro_export]
macro_rules! target_span {
    ($example_id:expr) => {
        tracing::info_span!($crate::tracing_setup::spans::names::TARGET, example_id = %$example_id)
    };
}

/// Span names shared by the macros above and by subscribers filtering on them.
pub mod names {
    pub const HASHING: &str = "distill.hashing";
    pub const DRIFT: &str = "distill.drift";
    pub const RETRIEVAL: &str = "distill.retrieval";
    pub const AGGREGATION: &str = "distill.aggregation";
    pub const CRITIQUE: &str = "distill.critique";
    pub const TARGET: &str = "distill.target";
}

#[cfg(test)]
mod tests {
    use super::names;

    #[test]
    fn span_macros_produce_named_spans() {
        let _guard = tracing::subscriber::set_default(tracing_subscriber::registry());
        let spans = [
            (crate::hashing_span!(3usize), names::HASHING),
            (crate::drift_span!(0.2), names::DRIFT),
            (crate::retrieval_span!(10usize, 5usize), names::RETRIEVAL),
            (crate::aggregation_span!("majority_vote", 4usize), names::AGGREGATION),
            (crate::critique_span!(4usize), names::CRITIQUE),
            (crate::target_span!("ex-1"), names::TARGET),
        ];
        for (span, name) in spans {
            let meta = span.metadata().expect("span enabled under a registry");
            assert_eq!(meta.name(), name);
        }
    }
}
