/// Ensemble aggregation errors.
///
/// Aggregation itself reports these as a message in its metadata rather than
/// returning them, so batch callers can skip and log.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EnsembleError {
    #[error("unknown aggregation method: {name}")]
    UnknownMethod { name: String },

    #[error("no runs to aggregate")]
    NoRuns,

    #[error("none of the {num_runs} runs has output in field '{output_key}'")]
    NoUsableOutput { num_runs: usize, output_key: String },
}
