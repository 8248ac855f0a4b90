//! Faithfulness critique of generated text.
//!
//! Without grounding the score is a hedging heuristic:
//! `0.7 + 0.05 · hedges - 0.15 · absolutes` (each count capped at 4).
//! Source text blends in lexical support; a citation marker matching a
//! provided id lifts the score to at least 0.9.

use std::collections::HashSet;
use std::sync::LazyLock;

use distill_core::config::RationaleConfig;
use distill_core::errors::ConfigError;
use distill_core::traits::ITeacherOutput;
use distill_observability::critique_span;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::markers::MarkerSet;
use crate::text::word_tokens;

static CITATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[(?:(?i:cite|source|ref):)?\s*([A-Za-z0-9_.:\-]+)\s*\]").unwrap()
});

static DEFAULT_CRITIC: LazyLock<FaithfulnessCritic> =
    LazyLock::new(|| FaithfulnessCritic::new(&RationaleConfig::default()).unwrap());

const BASE_SCORE: f64 = 0.7;
const HEDGE_BONUS: f64 = 0.05;
const ABSOLUTE_PENALTY: f64 = 0.15;
const MARKER_CAP: usize = 4;
const CITED_FLOOR: f64 = 0.9;
const UNMATCHED_CITATION_PENALTY: f64 = 0.1;
const UNKNOWN_CITATION_PENALTY: f64 = 0.1;
const MAX_UNKNOWN_PENALTY: f64 = 0.3;
const HEURISTIC_WEIGHT: f64 = 0.4;
const SUPPORT_WEIGHT: f64 = 0.6;
/// Words shorter than this are ignored when measuring source support.
const MIN_CONTENT_WORD_CHARS: usize = 4;

/// Score and the evidence behind it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaithfulnessCritique {
    pub score: f64,
    pub absolute_markers: usize,
    pub hedge_markers: usize,
    /// Cited ids found in the provided citation list.
    pub matched_citations: Vec<String>,
    /// Cited ids absent from a non-empty provided list.
    pub unknown_citations: Vec<String>,
    /// Share of content words present in the source text.
    pub support_ratio: Option<f64>,
}

/// Per-run critique of an ensemble.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnsembleCritique {
    /// Scores for runs with output text, in run order.
    pub scores: Vec<f64>,
    pub run_ids: Vec<Option<String>>,
    /// Mean of `scores`; `None` when no run had output text.
    pub average_faithfulness: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct FaithfulnessCritic {
    absolute: MarkerSet,
    hedge: MarkerSet,
}

impl FaithfulnessCritic {
    pub fn new(config: &RationaleConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            absolute: MarkerSet::compile("rationale.absolute_markers", &config.absolute_markers)?,
            hedge: MarkerSet::compile("rationale.hedge_markers", &config.hedge_markers)?,
        })
    }

    /// Hedging heuristic alone.
    pub fn heuristic(&self, text: &str) -> (f64, usize, usize) {
        let absolutes = self.absolute.count(text);
        let hedges = self.hedge.count(text);
        let score = BASE_SCORE + HEDGE_BONUS * hedges.min(MARKER_CAP) as f64
            - ABSOLUTE_PENALTY * absolutes.min(MARKER_CAP) as f64;
        (score.clamp(0.0, 1.0), absolutes, hedges)
    }

    pub fn critique(
        &self,
        text: &str,
        source_text: Option<&str>,
        citations: &[String],
    ) -> FaithfulnessCritique {
        let (heuristic, absolute_markers, hedge_markers) = self.heuristic(text);

        let support_ratio = source_text
            .filter(|s| !s.trim().is_empty())
            .and_then(|source| support_ratio(text, source));
        let mut score = match support_ratio {
            Some(s) => HEURISTIC_WEIGHT * heuristic + SUPPORT_WEIGHT * s,
            None => heuristic,
        };

        let cited = cited_ids(text);
        let provided: HashSet<&str> = citations.iter().map(String::as_str).collect();
        let (matched_citations, unknown_citations): (Vec<String>, Vec<String>) =
            if provided.is_empty() {
                (Vec::new(), Vec::new())
            } else {
                cited
                    .iter()
                    .cloned()
                    .partition(|id| provided.contains(id.as_str()))
            };

        if !matched_citations.is_empty() {
            let fraction = matched_citations.len() as f64 / cited.len() as f64;
            score = score.max(CITED_FLOOR + (1.0 - CITED_FLOOR) * fraction);
        } else if !provided.is_empty() {
            score -= UNMATCHED_CITATION_PENALTY;
            score -= (UNKNOWN_CITATION_PENALTY * unknown_citations.len() as f64)
                .min(MAX_UNKNOWN_PENALTY);
        }

        FaithfulnessCritique {
            score: score.clamp(0.0, 1.0),
            absolute_markers,
            hedge_markers,
            matched_citations,
            unknown_citations,
            support_ratio,
        }
    }

    /// Critique every run with output text against shared grounding.
    pub fn critique_ensemble<R: ITeacherOutput>(
        &self,
        runs: &[R],
        source_text: Option<&str>,
        citations: &[String],
        output_key: &str,
    ) -> EnsembleCritique {
        let span = critique_span!(runs.len());
        let _guard = span.enter();

        let mut result = EnsembleCritique::default();
        for run in runs {
            let Some(text) = run.output_field(output_key).filter(|t| !t.trim().is_empty()) else {
                continue;
            };
            result
                .scores
                .push(self.critique(&text, source_text, citations).score);
            result.run_ids.push(run.run_id());
        }
        if !result.scores.is_empty() {
            result.average_faithfulness =
                Some(result.scores.iter().sum::<f64>() / result.scores.len() as f64);
        }
        debug!(
            critiqued = result.scores.len(),
            average = result.average_faithfulness.unwrap_or_default(),
            "ensemble critiqued"
        );
        result
    }
}

/// Distinct citation ids in order of appearance: `[doc1]`, `[cite:doc1]`, `[source: doc1]`.
pub fn cited_ids(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    CITATION_RE
        .captures_iter(text)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .filter(|id| seen.insert(id.clone()))
        .collect()
}

/// Share of the text's content words that occur in `source`.
fn support_ratio(text: &str, source: &str) -> Option<f64> {
    let source_words: HashSet<String> = word_tokens(source).into_iter().collect();
    let content: HashSet<String> = word_tokens(text)
        .into_iter()
        .filter(|w| w.chars().count() >= MIN_CONTENT_WORD_CHARS)
        .collect();
    if content.is_empty() {
        return None;
    }
    let supported = content.iter().filter(|w| source_words.contains(*w)).count();
    Some(supported as f64 / content.len() as f64)
}

/// Critique with the default marker vocabularies.
pub fn critique_faithfulness(
    text: &str,
    source_text: Option<&str>,
    citations: &[String],
) -> FaithfulnessCritique {
    DEFAULT_CRITIC.critique(text, source_text, citations)
}

/// Critique an ensemble with the default vocabularies, reading the `text` field.
pub fn critique_ensemble<R: ITeacherOutput>(
    runs: &[R],
    source_text: Option<&str>,
    citations: &[String],
) -> EnsembleCritique {
    DEFAULT_CRITIC.critique_ensemble(runs, source_text, citations, "text")
}
