//! Ingestion glue: extracted pages → chunks → embeddings → store.
//!
//! Text extraction from source files is owned by an upstream step; this
//! module starts from already-extracted page text.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use raa_core::Result;

use crate::chunking::FixedWindowChunker;
use crate::config::RagConfig;
use crate::document::{Chunk, EmbeddedChunk};
use crate::embedding::EmbeddingProvider;
use crate::store::VectorStore;

/// One page of extracted document text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageText {
    /// Source file name.
    pub file: String,
    /// 1-based page number.
    pub page: u32,
    /// The extracted text of the page.
    pub text: String,
}

/// Drives the chunk → embed → insert workflow over extracted pages.
pub struct Ingestor {
    chunker: FixedWindowChunker,
    embedder: Arc<dyn EmbeddingProvider>,
    store: Arc<dyn VectorStore>,
    batch_size: usize,
}

impl Ingestor {
    /// Create a new ingestor from a validated [`RagConfig`].
    pub fn new(
        config: &RagConfig,
        embedder: Arc<dyn EmbeddingProvider>,
        store: Arc<dyn VectorStore>,
    ) -> Result<Self> {
        Ok(Self {
            chunker: FixedWindowChunker::new(config.max_chars, config.overlap)?,
            embedder,
            store,
            batch_size: config.embed_batch_size,
        })
    }

    /// Ingest a set of pages; returns the number of chunks stored.
    ///
    /// Pages that chunk to nothing contribute no records. Embedding runs
    /// in batches to bound provider request sizes.
    ///
    /// # Errors
    ///
    /// Propagates embedding-provider and store failures; ingestion is an
    /// offline job, so unlike the answer path there is no degraded mode.
    pub async fn ingest_pages(&self, pages: &[PageText]) -> Result<usize> {
        let mut chunks = Vec::new();
        for page in pages {
            for (ordinal, content) in self.chunker.chunk(&page.text).into_iter().enumerate() {
                chunks.push(Chunk {
                    file_name: page.file.clone(),
                    page_number: page.page,
                    ordinal: ordinal as u32,
                    content,
                });
            }
        }

        if chunks.is_empty() {
            info!(pages = pages.len(), "no chunks produced from pages");
            return Ok(0);
        }

        let mut stored = 0;
        for batch in chunks.chunks(self.batch_size) {
            let texts: Vec<&str> = batch.iter().map(|c| c.content.as_str()).collect();
            let embeddings = self.embedder.embed_batch(&texts).await?;

            let embedded: Vec<EmbeddedChunk> = batch
                .iter()
                .cloned()
                .zip(embeddings)
                .map(|(chunk, embedding)| EmbeddedChunk { chunk, embedding })
                .collect();

            self.store.insert(&embedded).await?;
            stored += embedded.len();
        }

        info!(pages = pages.len(), chunks = stored, "ingested pages");
        Ok(stored)
    }
}
