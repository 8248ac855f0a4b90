//! # distill-rationale
//!
//! Heuristics over teacher output text:
//! - **Extraction**: reasoning-step sentences and a concluding sentence.
//! - **Distillation**: one bounded justification from several rationales,
//!   preferring content that recurs across them.
//! - **Critique**: a [0, 1] faithfulness score from hedging and absolute
//!   language, citation markers, and lexical support in source text.

pub mod critic;
pub mod extractor;
pub mod markers;
pub mod text;

pub use critic::{
    cited_ids, critique_ensemble, critique_faithfulness, EnsembleCritique, FaithfulnessCritic,
    FaithfulnessCritique,
};
pub use extractor::{distill_justification, extract_rationale, Rationale, RationaleExtractor};
pub use markers::{MarkerSet, RationaleMarkers};
pub use text::{split_sentences, token_jaccard, word_tokens};
