//! Vector store trait.

use async_trait::async_trait;

use raa_core::Result;

use crate::document::{EmbeddedChunk, RetrievedChunk};

/// A storage backend for chunk embeddings with similarity search.
///
/// The corpus is written once by ingestion and read-only from the answer
/// path, so there is no delete or update surface. Searching an empty
/// corpus is a valid call that returns an empty sequence.
#[async_trait]
pub trait VectorStore: Send + Sync {
    /// Insert embedded chunks into the corpus.
    async fn insert(&self, chunks: &[EmbeddedChunk]) -> Result<()>;

    /// Return the `top_k` chunks most similar to the given query vector,
    /// ordered by descending similarity. Ties keep insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StorageUnavailable`](raa_core::Error) if the
    /// backing store cannot be reached; the error is propagated to the
    /// caller, never swallowed here.
    async fn search(&self, embedding: &[f32], top_k: usize) -> Result<Vec<RetrievedChunk>>;
}
