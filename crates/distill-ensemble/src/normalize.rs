//! Boundary normalization of heterogeneous run records.

use distill_core::constants::DEFAULT_RUN_CONFIDENCE;
use distill_core::traits::ITeacherOutput;

/// Canonical shape every voting method works on.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedRun {
    /// Position in the caller's run list.
    pub index: usize,
    pub id: Option<String>,
    /// Raw output field, before trimming.
    pub raw_output: Option<String>,
    /// Trimmed output; `None` when absent or blank.
    pub output: Option<String>,
    pub confidence: f64,
    pub provider: Option<String>,
    pub model: Option<String>,
    pub seed: Option<u64>,
    pub temperature: Option<f64>,
}

impl NormalizedRun {
    pub fn from_run<R: ITeacherOutput + ?Sized>(index: usize, run: &R, output_key: &str) -> Self {
        let raw_output = run.output_field(output_key);
        let output = raw_output
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);
        let confidence = run
            .confidence()
            .filter(|c| c.is_finite())
            .unwrap_or(DEFAULT_RUN_CONFIDENCE);
        Self {
            index,
            id: run.run_id(),
            raw_output,
            output,
            confidence,
            provider: run.provider(),
            model: run.model(),
            seed: run.seed(),
            temperature: run.temperature(),
        }
    }

    pub fn is_usable(&self) -> bool {
        self.output.is_some()
    }
}

/// Normalize every run, usable or not, preserving order.
pub fn normalize_runs<R: ITeacherOutput>(runs: &[R], output_key: &str) -> Vec<NormalizedRun> {
    runs.iter()
        .enumerate()
        .map(|(i, r)| NormalizedRun::from_run(i, r, output_key))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use distill_core::models::TeacherRun;
    use serde_json::json;

    #[test]
    fn trims_and_defaults_confidence() {
        let runs = vec![
            json!({"id": "r1", "output": "  Answer A \n"}),
            json!({"id": "r2", "output": "   ", "confidence": 0.4}),
            json!({"id": "r3"}),
        ];
        let normalized = normalize_runs(&runs, "text");
        assert_eq!(normalized[0].output.as_deref(), Some("Answer A"));
        assert_eq!(normalized[0].raw_output.as_deref(), Some("  Answer A \n"));
        assert_eq!(normalized[0].confidence, 1.0);
        assert!(!normalized[1].is_usable());
        assert_eq!(normalized[1].confidence, 0.4);
        assert!(!normalized[2].is_usable());
        assert_eq!(normalized[2].index, 2);
    }

    #[test]
    fn records_and_json_normalize_alike() {
        let record = TeacherRun::new("r1", "ex1", "Answer A").with_confidence(0.8);
        let value = json!({"id": "r1", "output": {"text": "Answer A"}, "confidence": 0.8});
        let a = NormalizedRun::from_run(0, &record, "text");
        let b = NormalizedRun::from_run(0, &value, "text");
        assert_eq!(a.output, b.output);
        assert_eq!(a.confidence, b.confidence);
        assert_eq!(a.id, b.id);
    }
}
