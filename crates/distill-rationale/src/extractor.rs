//! Rationale extraction and justification distillation.

use std::collections::{BTreeSet, HashSet};
use std::sync::LazyLock;

use distill_core::config::RationaleConfig;
use distill_core::errors::ConfigError;
use serde::{Deserialize, Serialize};

use crate::markers::RationaleMarkers;
use crate::text::{set_jaccard, split_sentences, word_tokens};

static DEFAULT_EXTRACTOR: LazyLock<RationaleExtractor> =
    LazyLock::new(|| RationaleExtractor::new(&RationaleConfig::default()).unwrap());

/// Reasoning steps and conclusion pulled from one output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rationale {
    pub steps: Vec<String>,
    pub conclusion: Option<String>,
}

impl Rationale {
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty() && self.conclusion.is_none()
    }

    /// Steps followed by the conclusion.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.steps
            .iter()
            .map(String::as_str)
            .chain(self.conclusion.as_deref())
    }
}

/// Marker-driven extractor and distiller.
#[derive(Debug, Clone)]
pub struct RationaleExtractor {
    markers: RationaleMarkers,
    min_step_chars: usize,
    max_justification_chars: usize,
    recurrence_overlap: f64,
}

impl RationaleExtractor {
    pub fn new(config: &RationaleConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            markers: RationaleMarkers::from_config(config)?,
            min_step_chars: config.min_step_chars,
            max_justification_chars: config.max_justification_chars,
            recurrence_overlap: config.recurrence_overlap,
        })
    }

    pub fn markers(&self) -> &RationaleMarkers {
        &self.markers
    }

    pub fn max_justification_chars(&self) -> usize {
        self.max_justification_chars
    }

    /// Split `text` into marker-matched steps and a conclusion.
    ///
    /// The conclusion is the last sentence with a conclusion marker, else the
    /// last sentence. Steps are the other sentences with a step marker that are
    /// longer than `min_step_chars`.
    pub fn extract(&self, text: &str) -> Rationale {
        let sentences = split_sentences(text);
        let Some(last) = sentences.len().checked_sub(1) else {
            return Rationale::default();
        };
        let conclusion_idx = sentences
            .iter()
            .rposition(|s| self.markers.conclusion.is_match(s))
            .unwrap_or(last);

        let steps = sentences
            .iter()
            .enumerate()
            .filter(|&(i, s)| {
                i != conclusion_idx
                    && s.chars().count() > self.min_step_chars
                    && self.markers.step.is_match(s)
            })
            .map(|(_, s)| s.clone())
            .collect();

        Rationale {
            steps,
            conclusion: Some(sentences[conclusion_idx].clone()),
        }
    }

    /// One justification of at most `max_justification_chars` characters.
    ///
    /// Segments whose word overlap reaches `recurrence_overlap` are treated as
    /// the same content. Content supported by more rationales comes first, then
    /// earlier content.
    pub fn distill(&self, rationales: &[Rationale]) -> String {
        struct Group {
            text: String,
            tokens: HashSet<String>,
            support: BTreeSet<usize>,
        }

        let mut groups: Vec<Group> = Vec::new();
        for (source, rationale) in rationales.iter().enumerate() {
            for segment in rationale.segments() {
                let tokens: HashSet<String> = word_tokens(segment).into_iter().collect();
                if tokens.is_empty() {
                    continue;
                }
                match groups
                    .iter_mut()
                    .find(|g| set_jaccard(&g.tokens, &tokens) >= self.recurrence_overlap)
                {
                    Some(group) => {
                        group.support.insert(source);
                    }
                    None => groups.push(Group {
                        text: segment.to_string(),
                        tokens,
                        support: BTreeSet::from([source]),
                    }),
                }
            }
        }
        groups.sort_by(|a, b| b.support.len().cmp(&a.support.len()));

        let max = self.max_justification_chars;
        let mut justification = String::new();
        let mut used = 0;
        for group in &groups {
            let len = group.text.chars().count();
            if justification.is_empty() {
                if len > max {
                    return group.text.chars().take(max).collect();
                }
                justification.push_str(&group.text);
                used = len;
            } else if used + 1 + len <= max {
                justification.push(' ');
                justification.push_str(&group.text);
                used += 1 + len;
            } else {
                break;
            }
        }
        justification
    }
}

/// Extract with the default marker vocabularies.
pub fn extract_rationale(text: &str) -> Rationale {
    DEFAULT_EXTRACTOR.extract(text)
}

/// Distill with default settings but an explicit length bound.
pub fn distill_justification(rationales: &[Rationale], max_chars: usize) -> String {
    let mut extractor = DEFAULT_EXTRACTOR.clone();
    extractor.max_justification_chars = max_chars;
    extractor.distill(rationales)
}
