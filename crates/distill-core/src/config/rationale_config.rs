use serde::{Deserialize, Serialize};

use super::defaults;

fn owned(markers: &[&str]) -> Vec<String> {
    markers.iter().map(|m| m.to_string()).collect()
}

/// Rationale extraction and faithfulness critique configuration.
///
/// Marker lists are regex fragments matched case-insensitively on word boundaries.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RationaleConfig {
    /// Markers identifying a reasoning-step sentence.
    pub step_markers: Vec<String>,
    /// Markers identifying the concluding sentence.
    pub conclusion_markers: Vec<String>,
    /// Over-generalizing language penalized by the faithfulness critic.
    pub absolute_markers: Vec<String>,
    /// Hedging language rewarded by the faithfulness critic.
    pub hedge_markers: Vec<String>,
    /// Sentences at or below this many characters never count as steps.
    pub min_step_chars: usize,
    /// Upper bound on distilled justification length, in characters.
    pub max_justification_chars: usize,
    /// Token-overlap ratio at which two segments count as the same content.
    pub recurrence_overlap: f64,
}

impl Default for RationaleConfig {
    fn default() -> Self {
        Self {
            step_markers: owned(defaults::DEFAULT_STEP_MARKERS),
            conclusion_markers: owned(defaults::DEFAULT_CONCLUSION_MARKERS),
            absolute_markers: owned(defaults::DEFAULT_ABSOLUTE_MARKERS),
            hedge_markers: owned(defaults::DEFAULT_HEDGE_MARKERS),
            min_step_chars: defaults::DEFAULT_MIN_STEP_CHARS,
            max_justification_chars: defaults::DEFAULT_MAX_JUSTIFICATION_CHARS,
            recurrence_overlap: defaults::DEFAULT_RECURRENCE_OVERLAP,
        }
    }
}
