//! pgvector (PostgreSQL) vector store backend.
//!
//! Implements [`VectorStore`] over the `rag` schema using
//! [sqlx](https://docs.rs/sqlx) and the
//! [pgvector](https://github.com/pgvector/pgvector) extension:
//!
//! - `rag.document_chunks_raw` — chunk identity and content
//!   (`chunk_id`, `file_name`, `page_number`, `chunk_index`, `content`)
//! - `rag.document_embeddings` — one `vector` row per chunk
//!
//! Schema provisioning is owned by the ingestion environment, not this
//! crate; both tables must already exist.

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};
use tracing::debug;

use raa_core::{Error, Result};

use crate::document::{Chunk, EmbeddedChunk, RetrievedChunk};
use crate::store::VectorStore;

/// A [`VectorStore`] backed by PostgreSQL with the pgvector extension.
///
/// Similarity is cosine: pgvector's `<=>` operator returns cosine
/// distance, and the reported score is `1 - distance`, so higher means
/// more relevant and ordering matches the distance ordering exactly.
pub struct PgVectorStore {
    pool: PgPool,
}

impl PgVectorStore {
    /// Connect to the given database URL with a small pool.
    pub async fn connect(database_url: &str) -> std::result::Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new().max_connections(5).connect(database_url).await?;
        Ok(Self { pool })
    }

    /// Wrap an existing connection pool.
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    fn map_err(e: sqlx::Error) -> Error {
        Error::storage("pgvector", e.to_string())
    }

    /// pgvector expects vectors rendered as `[v1,v2,...]` text.
    fn vector_literal(embedding: &[f32]) -> String {
        format!(
            "[{}]",
            embedding.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(",")
        )
    }
}

#[async_trait]
impl VectorStore for PgVectorStore {
    async fn insert(&self, chunks: &[EmbeddedChunk]) -> Result<()> {
        if chunks.is_empty() {
            return Ok(());
        }

        let mut tx = self.pool.begin().await.map_err(Self::map_err)?;

        for embedded in chunks {
            let chunk = &embedded.chunk;
            let chunk_id: i64 = sqlx::query_scalar(
                "INSERT INTO rag.document_chunks_raw \
                     (file_name, page_number, chunk_index, content) \
                 VALUES ($1, $2, $3, $4) \
                 RETURNING chunk_id",
            )
            .bind(&chunk.file_name)
            .bind(chunk.page_number as i32)
            .bind(chunk.ordinal as i32)
            .bind(&chunk.content)
            .fetch_one(&mut *tx)
            .await
            .map_err(Self::map_err)?;

            sqlx::query(
                "INSERT INTO rag.document_embeddings (chunk_id, embedding) \
                 VALUES ($1, $2::vector)",
            )
            .bind(chunk_id)
            .bind(Self::vector_literal(&embedded.embedding))
            .execute(&mut *tx)
            .await
            .map_err(Self::map_err)?;
        }

        tx.commit().await.map_err(Self::map_err)?;

        debug!(count = chunks.len(), "inserted chunks into pgvector");
        Ok(())
    }

    async fn search(&self, embedding: &[f32], top_k: usize) -> Result<Vec<RetrievedChunk>> {
        let rows = sqlx::query(
            "SELECT c.file_name, c.page_number, c.chunk_index, c.content, \
                    1 - (e.embedding <=> $1::vector) AS similarity \
             FROM rag.document_embeddings e \
             JOIN rag.document_chunks_raw c ON c.chunk_id = e.chunk_id \
             ORDER BY e.embedding <=> $1::vector, e.chunk_id \
             LIMIT $2",
        )
        .bind(Self::vector_literal(embedding))
        .bind(top_k as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(Self::map_err)?;

        let results = rows
            .iter()
            .map(|row| {
                let file_name: String = row.get("file_name");
                let page_number: i32 = row.get("page_number");
                let chunk_index: i32 = row.get("chunk_index");
                let content: String = row.get("content");
                let similarity: f64 = row.get("similarity");

                RetrievedChunk {
                    chunk: Chunk {
                        file_name,
                        page_number: page_number as u32,
                        ordinal: chunk_index as u32,
                        content,
                    },
                    score: similarity as f32,
                }
            })
            .collect();

        Ok(results)
    }
}
