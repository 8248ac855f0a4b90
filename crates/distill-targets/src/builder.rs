//! Target construction from one example's teacher runs.

use chrono::Utc;
use distill_core::errors::{DistillResult, TargetError};
use distill_core::models::{Chunk, EnsembleVote, QualityScores, SyntheticExample, Targets};
use distill_core::traits::ITeacherOutput;
use distill_core::DistillConfig;
use distill_ensemble::{agreement_ratio, normalize_runs, EnsembleAggregator};
use distill_observability::target_span;
use distill_rationale::{FaithfulnessCritic, Rationale, RationaleExtractor};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::soft_labels::SoftLabelAggregator;

/// External evidence the faithfulness critique is checked against.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Grounding {
    #[serde(default)]
    pub source_text: Option<String>,
    #[serde(default)]
    pub citations: Vec<String>,
}

impl Grounding {
    pub fn new(source_text: Option<String>, citations: Vec<String>) -> Self {
        Self {
            source_text,
            citations,
        }
    }
}

/// Builds `Targets` records. Holds compiled config and is shared across a batch.
#[derive(Debug, Clone)]
pub struct TargetBuilder {
    output_key: String,
    ensemble: EnsembleAggregator,
    soft_labels: SoftLabelAggregator,
    extractor: RationaleExtractor,
    critic: FaithfulnessCritic,
}

impl TargetBuilder {
    pub fn new(config: &DistillConfig) -> DistillResult<Self> {
        let output_key = config.ensemble.output_key.clone();
        Ok(Self {
            ensemble: EnsembleAggregator::new(&config.ensemble)?,
            soft_labels: SoftLabelAggregator::new(&config.soft_labels, output_key.clone()),
            extractor: RationaleExtractor::new(&config.rationale)?,
            critic: FaithfulnessCritic::new(&config.rationale)?,
            output_key,
        })
    }

    /// Build the target for `example`.
    ///
    /// `y_text` is the most recent run with output text, i.e. the last one in
    /// the supplied order. The ensemble winner is not substituted for it. Soft
    /// labels, justification, and faithfulness cover every run.
    pub fn build<R: ITeacherOutput>(
        &self,
        example: &SyntheticExample,
        runs: &[R],
        grounding: &Grounding,
    ) -> Result<Targets, TargetError> {
        let span = target_span!(example.id);
        let _guard = span.enter();

        let normalized = normalize_runs(runs, &self.output_key);
        let Some(y_text) = normalized.iter().rev().find_map(|r| r.output.clone()) else {
            return Err(TargetError::NoUsableRuns {
                example_id: example.id.clone(),
            });
        };

        let (winner, metadata) = self.ensemble.aggregate(runs);
        let agrees_with_y_text = winner.as_deref() == Some(y_text.as_str());
        if !agrees_with_y_text {
            debug!(
                example_id = %example.id,
                winner = winner.as_deref().unwrap_or_default(),
                "ensemble winner differs from most recent run"
            );
        }
        let ensemble_vote = EnsembleVote {
            method: metadata.method,
            winner,
            num_valid_runs: metadata.num_valid_runs,
            agrees_with_y_text,
        };

        let y_probs = self.soft_labels.aggregate(runs);

        let rationales: Vec<Rationale> = normalized
            .iter()
            .filter_map(|r| r.output.as_deref())
            .map(|text| self.extractor.extract(text))
            .collect();
        let justification = Some(self.extractor.distill(&rationales)).filter(|j| !j.is_empty());

        let critique = self.critic.critique_ensemble(
            runs,
            grounding.source_text.as_deref(),
            &grounding.citations,
            &self.output_key,
        );

        let mut provenance = example.provenance.clone().unwrap_or_default();
        if !grounding.citations.is_empty() {
            provenance.citation_ids = grounding.citations.clone();
        }
        provenance.content_hash = Some(Chunk::compute_content_hash(&y_text));

        let quality = QualityScores {
            faithfulness: critique.average_faithfulness,
            confidence: Some(agreement_ratio(runs, &y_text, &self.output_key)),
            ..QualityScores::default()
        };

        debug!(
            num_runs = runs.len(),
            runs_with_logprobs = y_probs.runs_with_logprobs,
            "target built"
        );
        Ok(Targets {
            id: Uuid::new_v4().to_string(),
            example_id: example.id.clone(),
            y_text,
            y_probs,
            justification,
            faithfulness_score: critique.average_faithfulness,
            provenance: Some(provenance),
            quality: Some(quality),
            ensemble_vote: Some(ensemble_vote),
            created_at: Utc::now(),
        })
    }
}

/// Build one target with default configuration.
pub fn create_target_with_soft_labels<R: ITeacherOutput>(
    example: &SyntheticExample,
    runs: &[R],
    grounding: &Grounding,
) -> DistillResult<Targets> {
    let builder = TargetBuilder::new(&DistillConfig::default())?;
    Ok(builder.build(example, runs, grounding)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use distill_core::models::{ExampleType, TeacherRun};
    use serde_json::json;

    fn example() -> SyntheticExample {
        SyntheticExample::new("ex-1", "v1", ExampleType::Qa, json!({"question": "Capital of France?"}))
    }

    #[test]
    fn y_text_is_most_recent_run_not_winner() {
        let runs = vec![
            TeacherRun::new("r1", "ex-1", "Paris"),
            TeacherRun::new("r2", "ex-1", "Paris"),
            TeacherRun::new("r3", "ex-1", "Lyon"),
        ];
        let target = create_target_with_soft_labels(&example(), &runs, &Grounding::default()).unwrap();
        assert_eq!(target.y_text, "Lyon");
        let quality = target.quality.unwrap();
        assert!((quality.confidence.unwrap() - 1.0 / 3.0).abs() < 1e-12);
        let vote = target.ensemble_vote.unwrap();
        assert_eq!(vote.winner.as_deref(), Some("Paris"));
        assert!(!vote.agrees_with_y_text);
    }

    #[test]
    fn vote_agrees_when_last_run_matches_winner() {
        let runs = vec![
            TeacherRun::new("r1", "ex-1", "Lyon"),
            TeacherRun::new("r2", "ex-1", "Paris"),
            TeacherRun::new("r3", "ex-1", "Paris"),
        ];
        let target = create_target_with_soft_labels(&example(), &runs, &Grounding::default()).unwrap();
        let vote = target.ensemble_vote.unwrap();
        assert_eq!(vote.method, "majority_vote");
        assert_eq!(vote.num_valid_runs, 3);
        assert!(vote.agrees_with_y_text);
    }

    #[test]
    fn trailing_run_without_text_is_skipped() {
        let runs = vec![
            json!({"id": "r1", "output": "Paris"}),
            json!({"id": "r2", "output": "  "}),
        ];
        let target = create_target_with_soft_labels(&example(), &runs, &Grounding::default()).unwrap();
        assert_eq!(target.y_text, "Paris");
    }

    #[test]
    fn no_usable_runs_is_an_error() {
        let runs: Vec<TeacherRun> = Vec::new();
        let err = TargetBuilder::new(&DistillConfig::default())
            .unwrap()
            .build(&example(), &runs, &Grounding::default())
            .unwrap_err();
        assert!(matches!(err, TargetError::NoUsableRuns { ref example_id } if example_id == "ex-1"));
    }

    #[test]
    fn grounding_citations_reach_provenance() {
        let runs = vec![TeacherRun::new("r1", "ex-1", "Paris is the capital [doc1].")];
        let grounding = Grounding::new(None, vec!["doc1".to_string()]);
        let target = create_target_with_soft_labels(&example(), &runs, &grounding).unwrap();
        let provenance = target.provenance.unwrap();
        assert_eq!(provenance.citation_ids, vec!["doc1"]);
        assert_eq!(
            provenance.content_hash.as_deref(),
            Some(Chunk::compute_content_hash("Paris is the capital [doc1].").as_str())
        );
        assert!(target.faithfulness_score.unwrap() >= 0.9);
    }

    #[test]
    fn unknown_ensemble_method_fails_builder_construction() {
        let mut config = DistillConfig::default();
        config.ensemble.method = "nope".to_string();
        assert!(TargetBuilder::new(&config).is_err());
    }
}
