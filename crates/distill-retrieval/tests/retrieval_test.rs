//! Context selection over chunk records.

use distill_core::config::{DistillConfig, RetrievalConfig};
use distill_core::models::{Chunk, ExampleType, SyntheticExample};
use distill_retrieval::{select_context, ContextRetriever, MmrCandidate};
use serde_json::json;

fn chunk(id: &str, ordinal: u32, embedding: Option<Vec<f32>>) -> Chunk {
    let c = Chunk::new(id, "variant-1", ordinal, format!("text of {id}"));
    match embedding {
        Some(e) => c.with_embedding(e),
        None => c,
    }
}

fn chunks() -> Vec<Chunk> {
    vec![
        chunk("intro", 0, Some(vec![0.9, 0.1, 0.0])),
        chunk("intro-repeat", 1, Some(vec![0.9, 0.1, 0.0])),
        chunk("methods", 2, Some(vec![0.5, 0.5, 0.5])),
        chunk("unembedded", 3, None),
        chunk("appendix", 4, Some(vec![0.0, 0.0, 1.0])),
    ]
}

#[test]
fn selected_ids_populate_retrieval_context() {
    let config = DistillConfig::from_toml("[retrieval]\ntop_k = 2\nmmr_lambda = 0.6\n").unwrap();
    let query = [1.0, 0.0, 0.0];
    let ids = select_context(&query, &chunks(), &config.retrieval).unwrap();

    assert_eq!(ids.len(), 2);
    assert_eq!(ids[0], "intro");
    assert_ne!(ids[1], "intro-repeat");

    let mut example = SyntheticExample::new("ex-1", "variant-1", ExampleType::Qa, json!({"question": "q"}));
    example.retrieval_context = ids.clone();
    assert_eq!(example.retrieval_context, ids);
}

#[test]
fn relevance_only_config_keeps_duplicates() {
    let config = RetrievalConfig {
        top_k: 2,
        mmr_lambda: 0.0,
    };
    let ids = select_context(&[1.0, 0.0, 0.0], &chunks(), &config).unwrap();
    assert_eq!(ids, vec!["intro", "intro-repeat"]);
}

#[test]
fn audit_trail_is_serializable() {
    let retriever = ContextRetriever::default();
    let candidates = vec![
        MmrCandidate::new("a", Some(vec![1.0, 0.0])),
        MmrCandidate::new("b", Some(vec![0.0, 1.0])),
    ];
    let picks = retriever.retrieve(&[1.0, 0.0], &candidates);
    let value = serde_json::to_value(&picks).unwrap();
    assert_eq!(value[0]["id"], "a");
    assert_eq!(value[0]["rank"], 1);
    assert_eq!(value[1]["id"], "b");
}

#[test]
fn unembedded_chunks_never_selected() {
    let config = RetrievalConfig {
        top_k: 10,
        mmr_lambda: 0.5,
    };
    let ids = select_context(&[1.0, 0.0, 0.0], &chunks(), &config).unwrap();
    assert_eq!(ids.len(), 4);
    assert!(!ids.iter().any(|id| id == "unembedded"));
}
