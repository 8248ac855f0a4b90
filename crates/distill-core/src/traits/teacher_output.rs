use serde_json::Value;

use crate::models::{TeacherRun, TokenLogprob};

/// Read access to a teacher run, whatever its stored representation.
///
/// Aggregators normalize through this trait at their boundary, so the same
/// algorithms accept persisted `TeacherRun` records and plain JSON objects.
pub trait ITeacherOutput {
    fn run_id(&self) -> Option<String>;

    /// Text of the named output field.
    fn output_field(&self, key: &str) -> Option<String>;

    fn confidence(&self) -> Option<f64>;

    fn logprobs(&self) -> Option<Vec<TokenLogprob>>;

    fn provider(&self) -> Option<String>;

    fn model(&self) -> Option<String>;

    fn seed(&self) -> Option<u64>;

    fn temperature(&self) -> Option<f64>;
}

impl<T: ITeacherOutput + ?Sized> ITeacherOutput for &T {
    fn run_id(&self) -> Option<String> {
        (**self).run_id()
    }
    fn output_field(&self, key: &str) -> Option<String> {
        (**self).output_field(key)
    }
    fn confidence(&self) -> Option<f64> {
        (**self).confidence()
    }
    fn logprobs(&self) -> Option<Vec<TokenLogprob>> {
        (**self).logprobs()
    }
    fn provider(&self) -> Option<String> {
        (**self).provider()
    }
    fn model(&self) -> Option<String> {
        (**self).model()
    }
    fn seed(&self) -> Option<u64> {
        (**self).seed()
    }
    fn temperature(&self) -> Option<f64> {
        (**self).temperature()
    }
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

impl ITeacherOutput for TeacherRun {
    fn run_id(&self) -> Option<String> {
        non_empty(&self.id)
    }

    fn output_field(&self, key: &str) -> Option<String> {
        if key == "text" {
            return self.output.text.clone();
        }
        self.output
            .extra
            .get(key)
            .and_then(Value::as_str)
            .map(str::to_string)
    }

    fn confidence(&self) -> Option<f64> {
        self.confidence
            .or_else(|| self.quality.as_ref().and_then(|q| q.confidence))
    }

    fn logprobs(&self) -> Option<Vec<TokenLogprob>> {
        self.output.logprobs.clone()
    }

    fn provider(&self) -> Option<String> {
        non_empty(&self.provider)
    }

    fn model(&self) -> Option<String> {
        non_empty(&self.model)
    }

    fn seed(&self) -> Option<u64> {
        self.decoding.seed
    }

    fn temperature(&self) -> Option<f64> {
        self.decoding.temperature
    }
}

/// First value found at any of the given paths.
fn lookup<'a>(value: &'a Value, paths: &[&[&str]]) -> Option<&'a Value> {
    paths.iter().find_map(|path| {
        path.iter()
            .try_fold(value, |node, key| node.get(key))
            .filter(|v| !v.is_null())
    })
}

impl ITeacherOutput for Value {
    fn run_id(&self) -> Option<String> {
        match self.get("id")? {
            Value::String(s) => non_empty(s),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    fn output_field(&self, key: &str) -> Option<String> {
        let found = lookup(self, &[&[key], &["output", key]]).and_then(Value::as_str);
        if found.is_some() || key != "text" {
            return found.map(str::to_string);
        }
        lookup(self, &[&["output_text"], &["output"]])
            .and_then(Value::as_str)
            .map(str::to_string)
    }

    fn confidence(&self) -> Option<f64> {
        lookup(self, &[&["confidence"], &["quality", "confidence"]]).and_then(Value::as_f64)
    }

    fn logprobs(&self) -> Option<Vec<TokenLogprob>> {
        let raw = lookup(self, &[&["logprobs"], &["output", "logprobs"]])?;
        serde_json::from_value(raw.clone()).ok()
    }

    fn provider(&self) -> Option<String> {
        lookup(self, &[&["provider"]])
            .and_then(Value::as_str)
            .map(str::to_string)
    }

    fn model(&self) -> Option<String> {
        lookup(self, &[&["model"], &["model_name"]])
            .and_then(Value::as_str)
            .map(str::to_string)
    }

    fn seed(&self) -> Option<u64> {
        lookup(
            self,
            &[&["rand_seed"], &["seed"], &["decoding_params", "seed"], &["decoding", "seed"]],
        )
        .and_then(Value::as_u64)
    }

    fn temperature(&self) -> Option<f64> {
        lookup(
            self,
            &[
                &["temperature"],
                &["decoding_params", "temperature"],
                &["decoding", "temperature"],
            ],
        )
        .and_then(Value::as_f64)
    }
}
