use serde::{Deserialize, Serialize};

use super::provenance::Provenance;
use super::quality::QualityScores;

/// Structural placement of a chunk within its source document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChunkStructure {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub neighbor_ids: Vec<String>,
    /// Section headings from the document root down to this chunk.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub section_path: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chunk_type: Option<String>,
    /// Character bounds of the overlap window shared with the previous chunk.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overlap: Option<(usize, usize)>,
}

/// A contiguous span of source text belonging to a context variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chunk {
    pub id: String,
    /// Owning context variant.
    pub variant_id: String,
    /// Position within the variant.
    pub ordinal: u32,
    pub text: String,
    /// Precomputed by the embedding collaborator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embedding: Option<Vec<f32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provenance: Option<Provenance>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality: Option<QualityScores>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub structure: Option<ChunkStructure>,
}

impl Chunk {
    pub fn new(
        id: impl Into<String>,
        variant_id: impl Into<String>,
        ordinal: u32,
        text: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            variant_id: variant_id.into(),
            ordinal,
            text: text.into(),
            embedding: None,
            provenance: None,
            quality: None,
            structure: None,
        }
    }

    pub fn with_embedding(mut self, embedding: Vec<f32>) -> Self {
        self.embedding = Some(embedding);
        self
    }

    /// blake3 hex digest of chunk text, used for exact-duplicate provenance.
    pub fn compute_content_hash(text: &str) -> String {
        blake3::hash(text.as_bytes()).to_hex().to_string()
    }
}
