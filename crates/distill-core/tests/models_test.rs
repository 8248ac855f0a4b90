use distill_core::models::*;
use serde_json::json;

#[test]
fn teacher_run_deserializes_from_persisted_shape() {
    let raw = json!({
        "id": "run-1",
        "example_id": "ex-1",
        "provider": "openai",
        "model": "teacher-large",
        "decoding": {"temperature": 0.7, "seed": 7},
        "output": {
            "text": "Answer A",
            "logprobs": [{"token": "Answer", "logprob": -0.05}],
            "label": "a"
        },
        "confidence": 0.9
    });
    let run: TeacherRun = serde_json::from_value(raw).unwrap();
    assert_eq!(run.output.text.as_deref(), Some("Answer A"));
    assert_eq!(run.output.logprobs.as_ref().map(Vec::len), Some(1));
    assert_eq!(run.output.extra.get("label"), Some(&json!("a")));
    assert_eq!(run.decoding.seed, Some(7));
    assert_eq!(run.confidence, Some(0.9));
}

#[test]
fn targets_serialize_y_probs_contract() {
    let mut class_probs = TokenDistribution::new();
    class_probs.insert("moderate".to_string(), 0.7);
    class_probs.insert("low".to_string(), 0.3);
    let targets = Targets {
        id: "t-1".into(),
        example_id: "ex-1".into(),
        y_text: "moderate".into(),
        y_probs: SoftLabels {
            token_probs: vec![],
            class_probs,
            num_runs: 3,
            runs_with_logprobs: 3,
            aggregation_method: SoftLabelMethod::WeightedMean,
        },
        justification: None,
        faithfulness_score: Some(0.8),
        provenance: None,
        quality: None,
        ensemble_vote: None,
        created_at: chrono::Utc::now(),
    };
    let value = serde_json::to_value(&targets).unwrap();
    assert_eq!(value["y_probs"]["num_runs"], 3);
    assert!(value.get("ensemble_vote").is_none());
    assert_eq!(value["y_probs"]["aggregation_method"], "weighted_mean");
    assert_eq!(value["y_probs"]["class_probs"]["moderate"], 0.7);
    assert!(value.get("justification").is_none());
}

#[test]
fn drift_severity_serializes_snake_case() {
    assert_eq!(serde_json::to_value(DriftSeverity::Medium).unwrap(), "medium");
    assert_eq!(DriftSeverity::High.to_string(), "high");
    assert!(DriftSeverity::None < DriftSeverity::Low);
}

#[test]
fn chunk_content_hash_is_stable_blake3_hex() {
    let a = Chunk::compute_content_hash("same text");
    let b = Chunk::compute_content_hash("same text");
    assert_eq!(a, b);
    assert_eq!(a.len(), 64);
    assert_ne!(a, Chunk::compute_content_hash("other text"));
}
