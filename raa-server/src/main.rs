//! The Regulatory Analytics Assistant HTTP server.
//!
//! Configuration comes from the environment:
//!
//! - `DATABASE_URL` — PostgreSQL connection string (pgvector + finance schema)
//! - `OPENAI_API_KEY` — embeddings and generation provider key
//! - `RAA_BIND_ADDR` — listen address, defaults to `0.0.0.0:8000`
//! - `RUST_LOG` — tracing filter, defaults to `info`

use std::sync::Arc;

use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use tracing::info;
use tracing_subscriber::EnvFilter;

use raa_analytics::PgSurveyStore;
use raa_assistant::Assistant;
use raa_model::OpenAiChatModel;
use raa_rag::{OpenAiEmbedder, PgVectorStore};
use raa_server::router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let database_url =
        std::env::var("DATABASE_URL").context("DATABASE_URL environment variable not set")?;
    let bind_addr = std::env::var("RAA_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string());

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .context("failed to connect to PostgreSQL")?;

    let assistant = Arc::new(
        Assistant::builder()
            .embedder(Arc::new(OpenAiEmbedder::from_env()?))
            .vector_store(Arc::new(PgVectorStore::from_pool(pool.clone())))
            .survey_store(Arc::new(PgSurveyStore::from_pool(pool)))
            .chat_model(Arc::new(OpenAiChatModel::from_env()?))
            .build()?,
    );

    let app = router(assistant);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;

    info!(%bind_addr, "regulatory analytics assistant listening");
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
