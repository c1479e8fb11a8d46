//! Configuration for the retrieval pipeline.

use serde::{Deserialize, Serialize};

use raa_core::{Error, Result};

/// Configuration parameters for chunking, retrieval, and ingestion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RagConfig {
    /// Maximum chunk size in characters.
    pub max_chars: usize,
    /// Number of overlapping characters between consecutive chunks.
    pub overlap: usize,
    /// Number of top results to return from vector search.
    pub top_k: usize,
    /// Number of chunks embedded per provider call during ingestion.
    pub embed_batch_size: usize,
}

impl Default for RagConfig {
    fn default() -> Self {
        Self { max_chars: 800, overlap: 100, top_k: 5, embed_batch_size: 50 }
    }
}

impl RagConfig {
    /// Create a new builder for constructing a [`RagConfig`].
    pub fn builder() -> RagConfigBuilder {
        RagConfigBuilder::default()
    }
}

/// Builder for constructing a validated [`RagConfig`].
#[derive(Debug, Clone, Default)]
pub struct RagConfigBuilder {
    config: RagConfig,
}

impl RagConfigBuilder {
    /// Set the maximum chunk size in characters.
    pub fn max_chars(mut self, max_chars: usize) -> Self {
        self.config.max_chars = max_chars;
        self
    }

    /// Set the overlap between consecutive chunks in characters.
    pub fn overlap(mut self, overlap: usize) -> Self {
        self.config.overlap = overlap;
        self
    }

    /// Set the number of top results to return from vector search.
    pub fn top_k(mut self, k: usize) -> Self {
        self.config.top_k = k;
        self
    }

    /// Set the ingestion embedding batch size.
    pub fn embed_batch_size(mut self, size: usize) -> Self {
        self.config.embed_batch_size = size;
        self
    }

    /// Build the [`RagConfig`], validating that parameters are consistent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if:
    /// - `overlap >= max_chars`
    /// - `top_k == 0`
    /// - `embed_batch_size == 0`
    pub fn build(self) -> Result<RagConfig> {
        if self.config.overlap >= self.config.max_chars {
            return Err(Error::Config(format!(
                "overlap ({}) must be less than max_chars ({})",
                self.config.overlap, self.config.max_chars
            )));
        }
        if self.config.top_k == 0 {
            return Err(Error::Config("top_k must be greater than zero".to_string()));
        }
        if self.config.embed_batch_size == 0 {
            return Err(Error::Config("embed_batch_size must be greater than zero".to_string()));
        }
        Ok(self.config)
    }
}
