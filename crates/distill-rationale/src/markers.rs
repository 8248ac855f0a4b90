//! Configurable marker vocabularies compiled to case-insensitive regexes.

use distill_core::config::RationaleConfig;
use distill_core::errors::ConfigError;
use regex::Regex;

/// One marker vocabulary. An empty list never matches.
#[derive(Debug, Clone)]
pub struct MarkerSet {
    regex: Option<Regex>,
}

impl MarkerSet {
    /// Compile markers into `(?i)\b(?:m1|m2|...)\b`. `field` names the config
    /// entry in the error.
    pub fn compile(field: &str, markers: &[String]) -> Result<Self, ConfigError> {
        let alternatives: Vec<&str> = markers
            .iter()
            .map(|m| m.trim())
            .filter(|m| !m.is_empty())
            .collect();
        if alternatives.is_empty() {
            return Ok(Self { regex: None });
        }
        let pattern = format!(r"(?i)\b(?:{})\b", alternatives.join("|"));
        let regex = Regex::new(&pattern).map_err(|e| ConfigError::InvalidValue {
            field: field.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self { regex: Some(regex) })
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.as_ref().is_some_and(|r| r.is_match(text))
    }

    /// Non-overlapping occurrences.
    pub fn count(&self, text: &str) -> usize {
        self.regex
            .as_ref()
            .map_or(0, |r| r.find_iter(text).count())
    }
}

/// All four vocabularies used by extraction and critique.
#[derive(Debug, Clone)]
pub struct RationaleMarkers {
    pub step: MarkerSet,
    pub conclusion: MarkerSet,
    pub absolute: MarkerSet,
    pub hedge: MarkerSet,
}

impl RationaleMarkers {
    pub fn from_config(config: &RationaleConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            step: MarkerSet::compile("rationale.step_markers", &config.step_markers)?,
            conclusion: MarkerSet::compile(
                "rationale.conclusion_markers",
                &config.conclusion_markers,
            )?,
            absolute: MarkerSet::compile("rationale.absolute_markers", &config.absolute_markers)?,
            hedge: MarkerSet::compile("rationale.hedge_markers", &config.hedge_markers)?,
        })
    }
}
