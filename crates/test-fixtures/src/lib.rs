//! Golden scenario sets shared by the distill integration tests.
//!
//! Each set is `golden/<component>/<name>.json` inside this crate: a
//! description, optional set-level parameters, and a list of named cases.

use std::fmt;
use std::ops::Index;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::{Map, Value};

static MISSING: Value = Value::Null;

/// Pipeline component a golden set belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    Hashing,
    Ensemble,
    Rationale,
    Targets,
}

impl Component {
    pub fn dir_name(&self) -> &'static str {
        match self {
            Self::Hashing => "hashing",
            Self::Ensemble => "ensemble",
            Self::Rationale => "rationale",
            Self::Targets => "targets",
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// One named scenario. Fields other than `name` are indexed by key and read
/// as `Value::Null` when absent.
#[derive(Debug, Clone, Deserialize)]
pub struct GoldenCase {
    pub name: String,
    #[serde(flatten)]
    fields: Map<String, Value>,
}

impl Index<&str> for GoldenCase {
    type Output = Value;

    fn index(&self, key: &str) -> &Value {
        self.fields.get(key).unwrap_or(&MISSING)
    }
}

/// A golden file: shared parameters plus its cases.
#[derive(Debug, Clone, Deserialize)]
pub struct GoldenSet {
    pub description: String,
    pub cases: Vec<GoldenCase>,
    #[serde(flatten)]
    params: Map<String, Value>,
}

impl GoldenSet {
    /// Set-level parameter such as a shared threshold; `Value::Null` when absent.
    pub fn param(&self, key: &str) -> &Value {
        self.params.get(key).unwrap_or(&MISSING)
    }
}

/// Path of a golden set, whether or not it exists.
pub fn golden_path(component: Component, name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("golden")
        .join(component.dir_name())
        .join(format!("{name}.json"))
}

/// Load a golden set.
///
/// # Panics
/// Panics with the offending path when the file is missing, malformed, or
/// has no cases.
pub fn golden(component: Component, name: &str) -> GoldenSet {
    let path = golden_path(component, name);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("cannot read golden set {}: {e}", path.display()));
    let set: GoldenSet = serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("malformed golden set {}: {e}", path.display()));
    assert!(!set.cases.is_empty(), "golden set {} has no cases", path.display());
    set
}
