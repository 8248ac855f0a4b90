//! ContextRetriever: MMR bound to a retrieval configuration.

use distill_core::config::RetrievalConfig;
use distill_core::errors::{DistillResult, RetrievalError};
use distill_core::models::Chunk;
use distill_observability::retrieval_span;
use tracing::debug;

use crate::mmr::{mmr_select, MmrCandidate, MmrSelection};

/// Selects prompt context from chunk records.
#[derive(Debug, Clone, Copy)]
pub struct ContextRetriever {
    top_k: usize,
    lambda: f64,
}

impl ContextRetriever {
    pub fn new(config: &RetrievalConfig) -> Result<Self, RetrievalError> {
        if !(0.0..=1.0).contains(&config.mmr_lambda) {
            return Err(RetrievalError::InvalidLambda {
                lambda: config.mmr_lambda,
            });
        }
        Ok(Self {
            top_k: config.top_k,
            lambda: config.mmr_lambda,
        })
    }

    pub fn top_k(&self) -> usize {
        self.top_k
    }

    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    /// Rank candidates and return the audit trail.
    pub fn retrieve(&self, query: &[f32], candidates: &[MmrCandidate]) -> Vec<MmrSelection> {
        let span = retrieval_span!(candidates.len(), self.top_k);
        let _guard = span.enter();

        let picks = mmr_select(query, candidates, self.top_k, self.lambda);
        debug!(
            selected = picks.len(),
            lambda = self.lambda,
            "context selected"
        );
        picks
    }

    /// Ordered chunk ids, ready for `SyntheticExample::retrieval_context`.
    pub fn select_chunks(&self, query: &[f32], chunks: &[Chunk]) -> Vec<String> {
        let candidates: Vec<MmrCandidate> = chunks
            .iter()
            .map(|c| MmrCandidate::new(c.id.clone(), c.embedding.clone()))
            .collect();
        self.retrieve(query, &candidates)
            .into_iter()
            .map(|s| s.id)
            .collect()
    }
}

impl Default for ContextRetriever {
    fn default() -> Self {
        let config = RetrievalConfig::default();
        Self {
            top_k: config.top_k,
            lambda: config.mmr_lambda,
        }
    }
}

/// One-shot context selection over chunks.
pub fn select_context(
    query: &[f32],
    chunks: &[Chunk],
    config: &RetrievalConfig,
) -> DistillResult<Vec<String>> {
    let retriever = ContextRetriever::new(config)?;
    Ok(retriever.select_chunks(query, chunks))
}
