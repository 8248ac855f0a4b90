use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::provenance::Provenance;
use super::quality::QualityScores;

/// Kind of training prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExampleType {
    Instruction,
    Qa,
    Task,
}

/// Payload fields searched, in order, for the prompt text.
const PROMPT_FIELDS: [&str; 5] = ["prompt", "instruction", "question", "input", "text"];

/// One training prompt derived from a context variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyntheticExample {
    pub id: String,
    /// Context variant this example was generated from.
    pub variant_id: String,
    pub example_type: ExampleType,
    /// Structured input payload.
    pub input: Value,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub constraints: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Chunk ids selected as retrieval context, in selection order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub retrieval_context: Vec<String>,
    /// SimHash fingerprint of the prompt text, hex encoded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provenance: Option<Provenance>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality: Option<QualityScores>,
    pub created_at: DateTime<Utc>,
}

impl SyntheticExample {
    pub fn new(
        id: impl Into<String>,
        variant_id: impl Into<String>,
        example_type: ExampleType,
        input: Value,
    ) -> Self {
        Self {
            id: id.into(),
            variant_id: variant_id.into(),
            example_type,
            input,
            constraints: Vec::new(),
            tags: Vec::new(),
            retrieval_context: Vec::new(),
            text_hash: None,
            provenance: None,
            quality: None,
            created_at: Utc::now(),
        }
    }

    /// Canonical prompt text from the input payload.
    ///
    /// A bare string payload is used as-is; otherwise the first string among
    /// `prompt`, `instruction`, `question`, `input`, `text`; otherwise compact JSON.
    pub fn prompt_text(&self) -> String {
        if let Some(text) = self.input.as_str() {
            return text.to_string();
        }
        for field in PROMPT_FIELDS {
            if let Some(text) = self.input.get(field).and_then(Value::as_str) {
                return text.to_string();
            }
        }
        if self.input.is_null() {
            return String::new();
        }
        self.input.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn prompt_text_prefers_named_fields_in_order() {
        let ex = SyntheticExample::new(
            "ex-1",
            "v-1",
            ExampleType::Qa,
            json!({"question": "What is 2+2?", "text": "ignored"}),
        );
        assert_eq!(ex.prompt_text(), "What is 2+2?");
    }

    #[test]
    fn prompt_text_accepts_bare_string_payload() {
        let ex = SyntheticExample::new("ex-2", "v-1", ExampleType::Task, json!("Summarize."));
        assert_eq!(ex.prompt_text(), "Summarize.");
    }

    #[test]
    fn prompt_text_falls_back_to_json() {
        let ex = SyntheticExample::new("ex-3", "v-1", ExampleType::Task, json!({"k": 1}));
        assert_eq!(ex.prompt_text(), r#"{"k":1}"#);
    }

    #[test]
    fn prompt_text_of_null_payload_is_empty() {
        let ex = SyntheticExample::new("ex-4", "v-1", ExampleType::Task, Value::Null);
        assert!(ex.prompt_text().is_empty());
    }
}
