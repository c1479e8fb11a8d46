//! In-memory vector store using cosine similarity.
//!
//! [`InMemoryVectorStore`] keeps the corpus in a `Vec` behind a
//! `tokio::sync::RwLock`. It is suitable for tests, development, and
//! small corpora; ordering on ties is the insertion order, so repeated
//! runs return identical results.

use async_trait::async_trait;
use tokio::sync::RwLock;

use raa_core::{Error, Result};

use crate::document::{EmbeddedChunk, RetrievedChunk};
use crate::store::VectorStore;

/// An in-memory [`VectorStore`] using cosine similarity.
#[derive(Debug, Default)]
pub struct InMemoryVectorStore {
    corpus: RwLock<Vec<EmbeddedChunk>>,
}

impl InMemoryVectorStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Compute cosine similarity between two vectors.
///
/// Returns 0.0 if either vector has zero magnitude.
fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

#[async_trait]
impl VectorStore for InMemoryVectorStore {
    async fn insert(&self, chunks: &[EmbeddedChunk]) -> Result<()> {
        let mut corpus = self.corpus.write().await;
        corpus.extend_from_slice(chunks);
        Ok(())
    }

    async fn search(&self, embedding: &[f32], top_k: usize) -> Result<Vec<RetrievedChunk>> {
        let corpus = self.corpus.read().await;

        // Query/corpus dimensionality must agree; checked here, at
        // retrieval time, because the store is the first point where both
        // sides meet.
        if let Some(stored) = corpus.first() {
            if stored.embedding.len() != embedding.len() {
                return Err(Error::Config(format!(
                    "query embedding has {} dimensions, stored vectors have {}",
                    embedding.len(),
                    stored.embedding.len()
                )));
            }
        }

        let mut scored: Vec<RetrievedChunk> = corpus
            .iter()
            .map(|entry| RetrievedChunk {
                chunk: entry.chunk.clone(),
                score: cosine_similarity(&entry.embedding, embedding),
            })
            .collect();

        // Stable sort: equal scores keep insertion order.
        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(top_k);
        Ok(scored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cosine_of_zero_vector_is_zero() {
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 0.0]), 0.0);
    }

    #[test]
    fn cosine_of_identical_vectors_is_one() {
        let v = [0.6, 0.8];
        assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-6);
    }
}
