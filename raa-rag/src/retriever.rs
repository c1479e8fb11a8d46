//! Query-time retrieval: embed the query, search the corpus.

use std::sync::Arc;

use tracing::{error, info};

use raa_core::Result;

use crate::document::RetrievedChunk;
use crate::embedding::EmbeddingProvider;
use crate::store::VectorStore;

/// Retrieves the chunks most similar to a natural-language query.
///
/// Composes an [`EmbeddingProvider`] and a [`VectorStore`]; both are
/// injected at construction so tests can substitute fakes without any
/// global state.
pub struct Retriever {
    embedder: Arc<dyn EmbeddingProvider>,
    store: Arc<dyn VectorStore>,
    top_k: usize,
}

impl Retriever {
    /// Create a new retriever returning at most `top_k` chunks per query.
    pub fn new(
        embedder: Arc<dyn EmbeddingProvider>,
        store: Arc<dyn VectorStore>,
        top_k: usize,
    ) -> Self {
        Self { embedder, store, top_k }
    }

    /// Embed `query` and return the most similar stored chunks.
    ///
    /// An empty corpus yields an empty sequence — that is a valid result,
    /// not an error.
    ///
    /// # Errors
    ///
    /// Propagates [`Error::ExternalService`](raa_core::Error) from the
    /// embedding provider and [`Error::StorageUnavailable`](raa_core::Error)
    /// from the vector store.
    pub async fn retrieve(&self, query: &str) -> Result<Vec<RetrievedChunk>> {
        let query_embedding = self.embedder.embed(query).await.map_err(|e| {
            error!(error = %e, "query embedding failed");
            e
        })?;

        let results = self.store.search(&query_embedding, self.top_k).await.map_err(|e| {
            error!(error = %e, "vector search failed");
            e
        })?;

        info!(result_count = results.len(), "retrieval completed");
        Ok(results)
    }
}
