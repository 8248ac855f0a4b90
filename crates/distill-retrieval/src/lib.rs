//! # distill-retrieval
//!
//! Context selection for prompt construction. Candidates are ranked by cosine
//! relevance to a query embedding, then re-ranked with maximal marginal
//! relevance so that near-identical chunks do not crowd out the context window.

pub mod engine;
pub mod mmr;

pub use engine::{select_context, ContextRetriever};
pub use mmr::{mmr_retrieval, mmr_select, simple_retrieval, MmrCandidate, MmrSelection};
