//! Retrieval pipeline for the Regulatory Analytics Assistant.
//!
//! This crate owns everything between raw document text and ranked
//! evidence chunks:
//!
//! - [`FixedWindowChunker`] — overlapping character-window chunking
//! - [`EmbeddingProvider`] + [`OpenAiEmbedder`] — text → vector
//! - [`VectorStore`] + [`PgVectorStore`] / [`InMemoryVectorStore`] —
//!   similarity search over the stored corpus
//! - [`Retriever`] — embed a query and fetch its nearest chunks
//! - [`Ingestor`] — offline chunk → embed → insert glue

pub mod chunking;
pub mod config;
pub mod document;
pub mod embedding;
pub mod ingest;
pub mod inmemory;
pub mod openai;
pub mod pgvector;
pub mod retriever;
pub mod store;

pub use chunking::FixedWindowChunker;
pub use config::RagConfig;
pub use document::{Chunk, EmbeddedChunk, RetrievedChunk};
pub use embedding::EmbeddingProvider;
pub use ingest::{Ingestor, PageText};
pub use inmemory::InMemoryVectorStore;
pub use openai::OpenAiEmbedder;
pub use pgvector::PgVectorStore;
pub use retriever::Retriever;
pub use store::VectorStore;
