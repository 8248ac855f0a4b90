use serde::{Deserialize, Serialize};

/// Where a piece of content came from and under what terms it may be used.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Provenance {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_uri: Option<String>,
    /// Character offsets of the span within the source document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub span: Option<(usize, usize)>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub citation_ids: Vec<String>,
    /// blake3 hex digest of the exact content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
}

impl Provenance {
    /// Provenance carrying only citation ids.
    pub fn with_citations(citation_ids: Vec<String>) -> Self {
        Self {
            citation_ids,
            ..Self::default()
        }
    }
}
