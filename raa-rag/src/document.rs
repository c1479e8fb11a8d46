//! Data types for document chunks and retrieval results.

use serde::{Deserialize, Serialize};

/// A unit of ingested document text.
///
/// Created once at ingestion time and immutable thereafter. Identity is
/// the triple (file name, page number, ordinal).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// Source file name.
    pub file_name: String,
    /// 1-based page number within the source file.
    pub page_number: u32,
    /// 0-based position of this chunk within its page.
    pub ordinal: u32,
    /// Raw text content.
    pub content: String,
}

/// A [`Chunk`] paired with its embedding, ready for insertion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddedChunk {
    /// The chunk being stored.
    pub chunk: Chunk,
    /// The embedding vector for the chunk's content.
    pub embedding: Vec<f32>,
}

/// A [`Chunk`] augmented with a similarity score relative to one query vector.
///
/// Exists only within the scope of one retrieval call; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetrievedChunk {
    /// The retrieved chunk.
    pub chunk: Chunk,
    /// Similarity score — higher is more relevant.
    pub score: f32,
}
