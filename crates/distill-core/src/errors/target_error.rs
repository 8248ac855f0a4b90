/// Target construction errors.
#[derive(Debug, thiserror::Error)]
pub enum TargetError {
    #[error("example {example_id} has no teacher run with usable output text")]
    NoUsableRuns { example_id: String },
}
