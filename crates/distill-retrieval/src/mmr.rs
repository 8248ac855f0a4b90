//! Maximal marginal relevance.
//!
//! `score = (1 - λ) · relevance - λ · redundancy`, where redundancy is the
//! highest cosine similarity to anything already selected. λ = 0 ranks by
//! relevance alone; λ = 1 only penalizes redundancy. The first pick is always
//! the most relevant candidate.

use std::cmp::Ordering;

use distill_core::cosine_similarity;
use serde::{Deserialize, Serialize};

/// One retrievable item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MmrCandidate {
    pub id: String,
    pub embedding: Option<Vec<f32>>,
}

impl MmrCandidate {
    pub fn new(id: impl Into<String>, embedding: Option<Vec<f32>>) -> Self {
        Self {
            id: id.into(),
            embedding,
        }
    }
}

/// Audit record for one selected candidate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MmrSelection {
    pub id: String,
    /// 1-based pick order.
    pub rank: usize,
    /// Cosine similarity to the query.
    pub relevance: f64,
    /// Max cosine similarity to earlier picks (0 for the first pick).
    pub redundancy: f64,
    /// MMR score at the time of the pick. The first pick reports its relevance.
    pub score: f64,
}

struct Scored<'a> {
    id: &'a str,
    embedding: &'a [f32],
    relevance: f64,
    redundancy: Option<f64>,
}

impl Scored<'_> {
    fn mmr_score(&self, lambda: f64) -> f64 {
        (1.0 - lambda) * self.relevance - lambda * self.redundancy.unwrap_or(0.0)
    }
}

fn score_candidates<'a>(query: &[f32], candidates: &'a [MmrCandidate]) -> Vec<Scored<'a>> {
    candidates
        .iter()
        .filter_map(|c| {
            let embedding = c.embedding.as_deref().filter(|e| !e.is_empty())?;
            Some(Scored {
                id: &c.id,
                embedding,
                relevance: cosine_similarity(query, embedding),
                redundancy: None,
            })
        })
        .collect()
}

/// Index of the maximum by `key`, earliest wins ties.
fn argmax<T>(items: &[T], key: impl Fn(&T) -> f64) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, item) in items.iter().enumerate() {
        let value = key(item);
        if best.map_or(true, |(_, b)| value > b) {
            best = Some((i, value));
        }
    }
    best.map(|(i, _)| i)
}

/// Run MMR and keep the per-pick scores.
///
/// Candidates without an embedding are dropped. `lambda` is clamped to [0, 1].
pub fn mmr_select(
    query: &[f32],
    candidates: &[MmrCandidate],
    top_k: usize,
    lambda: f64,
) -> Vec<MmrSelection> {
    let lambda = lambda.clamp(0.0, 1.0);
    let mut remaining = score_candidates(query, candidates);
    let mut selected: Vec<MmrSelection> = Vec::with_capacity(top_k.min(remaining.len()));

    while selected.len() < top_k && !remaining.is_empty() {
        let pick = if selected.is_empty() {
            argmax(&remaining, |c| c.relevance)
        } else {
            argmax(&remaining, |c| c.mmr_score(lambda))
        };
        let Some(index) = pick else { break };
        let chosen = remaining.remove(index);

        let score = if selected.is_empty() {
            chosen.relevance
        } else {
            chosen.mmr_score(lambda)
        };
        for other in remaining.iter_mut() {
            let sim = cosine_similarity(other.embedding, chosen.embedding);
            other.redundancy = Some(other.redundancy.map_or(sim, |r| r.max(sim)));
        }
        selected.push(MmrSelection {
            id: chosen.id.to_string(),
            rank: selected.len() + 1,
            relevance: chosen.relevance,
            redundancy: chosen.redundancy.unwrap_or(0.0),
            score,
        });
    }
    selected
}

/// Ordered ids picked by MMR.
pub fn mmr_retrieval(
    query: &[f32],
    candidates: &[MmrCandidate],
    top_k: usize,
    lambda: f64,
) -> Vec<String> {
    mmr_select(query, candidates, top_k, lambda)
        .into_iter()
        .map(|s| s.id)
        .collect()
}

/// Top-k ids by relevance only. Ties keep input order.
pub fn simple_retrieval(query: &[f32], candidates: &[MmrCandidate], top_k: usize) -> Vec<String> {
    let mut scored = score_candidates(query, candidates);
    scored.sort_by(|a, b| {
        b.relevance
            .partial_cmp(&a.relevance)
            .unwrap_or(Ordering::Equal)
    });
    scored
        .into_iter()
        .take(top_k)
        .map(|c| c.id.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cand(id: &str, v: &[f32]) -> MmrCandidate {
        MmrCandidate::new(id, Some(v.to_vec()))
    }

    fn corpus() -> Vec<MmrCandidate> {
        vec![
            cand("a", &[1.0, 0.0, 0.0]),
            cand("a_copy", &[0.99, 0.01, 0.0]),
            cand("b", &[0.7, 0.7, 0.0]),
            cand("c", &[0.6, 0.0, 0.8]),
        ]
    }

    #[test]
    fn lambda_zero_matches_relevance_ranking() {
        let q = [1.0, 0.0, 0.0];
        assert_eq!(
            mmr_retrieval(&q, &corpus(), 4, 0.0),
            simple_retrieval(&q, &corpus(), 4)
        );
    }

    #[test]
    fn diversity_skips_near_copy() {
        let q = [1.0, 0.0, 0.0];
        let ids = mmr_retrieval(&q, &corpus(), 2, 0.7);
        assert_eq!(ids, vec!["a", "c"]);
        assert_eq!(simple_retrieval(&q, &corpus(), 2), vec!["a", "a_copy"]);
    }

    #[test]
    fn first_pick_is_most_relevant_at_full_diversity() {
        let q = [0.0, 0.0, 1.0];
        let ids = mmr_retrieval(&q, &corpus(), 3, 1.0);
        assert_eq!(ids[0], "c");
    }

    #[test]
    fn full_diversity_takes_least_similar_after_seed() {
        let q = [1.0, 0.0, 0.0];
        let candidates = vec![
            cand("a", &[1.0, 0.0, 0.0]),
            cand("near", &[0.95, 0.05, 0.0]),
            cand("far", &[0.0, 0.0, 1.0]),
            cand("mid", &[0.5, 0.5, 0.0]),
        ];
        assert_eq!(
            mmr_retrieval(&q, &candidates, 4, 1.0),
            vec!["a", "far", "mid", "near"]
        );
    }

    #[test]
    fn missing_embeddings_are_dropped() {
        let q = [1.0, 0.0];
        let candidates = vec![
            MmrCandidate::new("none", None),
            MmrCandidate::new("empty", Some(vec![])),
            cand("ok", &[0.5, 0.5]),
        ];
        assert_eq!(mmr_retrieval(&q, &candidates, 5, 0.5), vec!["ok"]);
        assert_eq!(simple_retrieval(&q, &candidates, 5), vec!["ok"]);
    }

    #[test]
    fn top_k_zero_and_empty_input() {
        let q = [1.0, 0.0, 0.0];
        assert!(mmr_retrieval(&q, &corpus(), 0, 0.5).is_empty());
        assert!(mmr_retrieval(&q, &[], 3, 0.5).is_empty());
    }

    #[test]
    fn selections_record_redundancy() {
        let q = [1.0, 0.0, 0.0];
        let picks = mmr_select(&q, &corpus(), 3, 0.3);
        assert_eq!(picks[0].rank, 1);
        assert_eq!(picks[0].redundancy, 0.0);
        assert!((picks[0].score - picks[0].relevance).abs() < 1e-12);
        assert!(picks[1].redundancy > 0.0);
        assert_eq!(picks.iter().map(|p| p.rank).collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn ties_keep_input_order() {
        let q = [1.0, 0.0];
        let candidates = vec![cand("x", &[1.0, 0.0]), cand("y", &[1.0, 0.0])];
        assert_eq!(simple_retrieval(&q, &candidates, 2), vec!["x", "y"]);
        assert_eq!(mmr_retrieval(&q, &candidates, 2, 0.0), vec!["x", "y"]);
    }
}
