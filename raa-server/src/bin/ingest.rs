//! Offline ingestion driver: extracted pages → chunks → embeddings → store.
//!
//! Reads one or more JSON Lines files of already-extracted page text
//! (`{"file": "...", "page": 1, "text": "..."}` per line) and feeds them
//! through the chunk → embed → insert pipeline. Text extraction itself
//! happens upstream.
//!
//! Usage: `raa-ingest <pages.jsonl>...`
//!
//! Environment: `DATABASE_URL`, `OPENAI_API_KEY`.

use std::sync::Arc;

use anyhow::{Context, bail};
use sqlx::postgres::PgPoolOptions;
use tracing::info;
use tracing_subscriber::EnvFilter;

use raa_rag::{Ingestor, OpenAiEmbedder, PageText, PgVectorStore, RagConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let paths: Vec<String> = std::env::args().skip(1).collect();
    if paths.is_empty() {
        bail!("usage: raa-ingest <pages.jsonl>...");
    }

    let database_url =
        std::env::var("DATABASE_URL").context("DATABASE_URL environment variable not set")?;
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .context("failed to connect to PostgreSQL")?;

    let ingestor = Ingestor::new(
        &RagConfig::default(),
        Arc::new(OpenAiEmbedder::from_env()?),
        Arc::new(PgVectorStore::from_pool(pool)),
    )?;

    let mut total = 0;
    for path in &paths {
        let pages = read_pages(path)?;
        info!(path = %path, pages = pages.len(), "ingesting");
        total += ingestor.ingest_pages(&pages).await?;
    }

    info!(chunks = total, "ingestion complete");
    Ok(())
}

/// Parse a JSON Lines file of extracted pages. Blank lines are skipped.
fn read_pages(path: &str) -> anyhow::Result<Vec<PageText>> {
    let raw = std::fs::read_to_string(path).with_context(|| format!("failed to read {path}"))?;

    raw.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(number, line)| {
            serde_json::from_str(line)
                .with_context(|| format!("{path}:{}: malformed page record", number + 1))
        })
        .collect()
}
