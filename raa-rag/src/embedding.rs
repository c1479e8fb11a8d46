//! Embedding provider trait.

use async_trait::async_trait;

use raa_core::Result;

/// A provider that turns text into fixed-length embedding vectors.
///
/// The vector length is fixed per provider and must match the
/// dimensionality of vectors already stored; that invariant is checked
/// at retrieval time, not here. Calls are single-shot — there is no
/// built-in retry, and a provider failure is surfaced to the caller as
/// [`Error::ExternalService`](raa_core::Error).
///
/// The default [`embed_batch`](EmbeddingProvider::embed_batch) calls
/// [`embed`](EmbeddingProvider::embed) sequentially; backends with native
/// batching should override it.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Generate an embedding vector for a single text input.
    async fn embed(&self, text: &str) -> Result<Vec<f32>>;

    /// Generate embedding vectors for a batch of text inputs.
    async fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>> {
        let mut results = Vec::with_capacity(texts.len());
        for text in texts {
            results.push(self.embed(text).await?);
        }
        Ok(results)
    }

    /// The dimensionality of vectors produced by this provider.
    fn dimensions(&self) -> usize;
}
