mod chunk;
mod drift_report;
mod example;
mod provenance;
mod quality;
mod targets;
mod teacher_run;

pub use chunk::{Chunk, ChunkStructure};
pub use drift_report::{DriftReport, DriftSeverity};
pub use example::{ExampleType, SyntheticExample};
pub use provenance::Provenance;
pub use quality::QualityScores;
pub use targets::{EnsembleVote, SoftLabelMethod, SoftLabels, TokenDistribution, Targets};
pub use teacher_run::{DecodingParams, RunOutput, TeacherRun, TokenLogprob, TopLogprob, Usage};
