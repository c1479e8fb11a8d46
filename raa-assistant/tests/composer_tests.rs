//! End-to-end tests for the assistant over fake collaborators.

use std::sync::Arc;

use async_trait::async_trait;
use raa_analytics::{Aggregation, AnalyticsRow, SurveyStore};
use raa_assistant::Assistant;
use raa_core::{ChatModel, Error, IntentLabel, Result};
use raa_rag::{Chunk, EmbeddedChunk, EmbeddingProvider, InMemoryVectorStore, VectorStore};

const DIM: usize = 4;

/// Embeds every text as the same unit vector — retrieval then returns the
/// stored corpus ranked by insertion order, which is all these tests need.
struct FixedEmbedder;

#[async_trait]
impl EmbeddingProvider for FixedEmbedder {
    async fn embed(&self, _text: &str) -> Result<Vec<f32>> {
        Ok(vec![1.0, 0.0, 0.0, 0.0])
    }

    fn dimensions(&self) -> usize {
        DIM
    }
}

struct FailingEmbedder;

#[async_trait]
impl EmbeddingProvider for FailingEmbedder {
    async fn embed(&self, _text: &str) -> Result<Vec<f32>> {
        Err(Error::external("openai-embeddings", "timeout"))
    }

    fn dimensions(&self) -> usize {
        DIM
    }
}

struct UnreachableVectorStore;

#[async_trait]
impl VectorStore for UnreachableVectorStore {
    async fn insert(&self, _chunks: &[EmbeddedChunk]) -> Result<()> {
        Err(Error::storage("pgvector", "connection refused"))
    }

    async fn search(&self, _embedding: &[f32], _top_k: usize) -> Result<Vec<raa_rag::RetrievedChunk>> {
        Err(Error::storage("pgvector", "connection refused"))
    }
}

struct FixedSurveyStore(Vec<AnalyticsRow>);

#[async_trait]
impl SurveyStore for FixedSurveyStore {
    async fn run_aggregation(&self, _aggregation: Aggregation) -> Result<Vec<AnalyticsRow>> {
        Ok(self.0.clone())
    }
}

struct UnreachableSurveyStore;

#[async_trait]
impl SurveyStore for UnreachableSurveyStore {
    async fn run_aggregation(&self, _aggregation: Aggregation) -> Result<Vec<AnalyticsRow>> {
        Err(Error::storage("survey-db", "connection refused"))
    }
}

struct CannedChatModel;

#[async_trait]
impl ChatModel for CannedChatModel {
    async fn complete(&self, _system: &str, _user: &str) -> Result<String> {
        Ok("The EBA highlights credit and operational risk. (risk_report.pdf, p.55)".to_string())
    }

    fn name(&self) -> &str {
        "canned"
    }
}

async fn corpus_store() -> Arc<InMemoryVectorStore> {
    let store = Arc::new(InMemoryVectorStore::new());
    let chunks: Vec<EmbeddedChunk> = (0..3)
        .map(|i| EmbeddedChunk {
            chunk: Chunk {
                file_name: "risk_report.pdf".to_string(),
                page_number: 55 + i,
                ordinal: i,
                content: format!("evidence paragraph {i}"),
            },
            embedding: vec![1.0, 0.0, 0.0, 0.0],
        })
        .collect();
    store.insert(&chunks).await.unwrap();
    store
}

fn survey_rows() -> Vec<AnalyticsRow> {
    vec![
        AnalyticsRow { label: "Increase".into(), responses: 40 },
        AnalyticsRow { label: "Stay the same".into(), responses: 25 },
        AnalyticsRow { label: "Decrease".into(), responses: 10 },
    ]
}

fn assistant(
    embedder: Arc<dyn EmbeddingProvider>,
    vector_store: Arc<dyn VectorStore>,
    survey_store: Arc<dyn SurveyStore>,
) -> Assistant {
    Assistant::builder()
        .embedder(embedder)
        .vector_store(vector_store)
        .survey_store(survey_store)
        .chat_model(Arc::new(CannedChatModel))
        .build()
        .unwrap()
}

#[tokio::test]
async fn analytics_queries_return_survey_summary_with_empty_sources() {
    let assistant = assistant(
        Arc::new(FixedEmbedder),
        corpus_store().await,
        Arc::new(FixedSurveyStore(survey_rows())),
    );

    let answer = assistant.answer("profitability of banks").await.unwrap();

    assert_eq!(answer.query_type, IntentLabel::Analytics);
    assert!(answer.text.contains("- Increase: 40 responses"));
    assert!(answer.sources.is_empty());
}

#[tokio::test]
async fn document_queries_cite_retrieved_chunks() {
    let assistant = assistant(
        Arc::new(FixedEmbedder),
        corpus_store().await,
        Arc::new(FixedSurveyStore(survey_rows())),
    );

    let answer = assistant.answer("what are the key risks mentioned by EBA").await.unwrap();

    assert_eq!(answer.query_type, IntentLabel::Document);
    assert_eq!(answer.sources.len(), 3);
    assert_eq!(answer.sources[0].file, "risk_report.pdf");
    assert_eq!(answer.sources[0].page, Some(55));
}

#[tokio::test]
async fn document_query_with_empty_corpus_is_a_valid_no_evidence_answer() {
    let assistant = assistant(
        Arc::new(FixedEmbedder),
        Arc::new(InMemoryVectorStore::new()),
        Arc::new(FixedSurveyStore(survey_rows())),
    );

    let answer = assistant.answer("what are the key risks mentioned by EBA").await.unwrap();

    assert!(answer.text.contains("No relevant information"));
    assert!(answer.sources.is_empty());
}

#[tokio::test]
async fn document_query_with_unreachable_store_propagates_the_error() {
    let assistant = assistant(
        Arc::new(FixedEmbedder),
        Arc::new(UnreachableVectorStore),
        Arc::new(FixedSurveyStore(survey_rows())),
    );

    let result = assistant.answer("what are the key risks mentioned by EBA").await;
    assert!(matches!(result, Err(Error::StorageUnavailable { .. })));
}

#[tokio::test]
async fn hybrid_query_composes_both_sections_with_document_sources() {
    let assistant = assistant(
        Arc::new(FixedEmbedder),
        corpus_store().await,
        Arc::new(FixedSurveyStore(survey_rows())),
    );

    let answer = assistant
        .answer("How many banks expect profitability to increase and what does EBA say about it?")
        .await
        .unwrap();

    assert_eq!(answer.query_type, IntentLabel::Hybrid);
    assert!(answer.text.contains("ANALYTICAL INSIGHTS"));
    assert!(answer.text.contains("REGULATORY CONTEXT"));
    let analytics_at = answer.text.find("ANALYTICAL INSIGHTS").unwrap();
    let context_at = answer.text.find("REGULATORY CONTEXT").unwrap();
    assert!(analytics_at < context_at);
    assert!(!answer.sources.is_empty());
}

#[tokio::test]
async fn hybrid_survives_a_failing_analytics_branch() {
    let assistant = assistant(
        Arc::new(FixedEmbedder),
        corpus_store().await,
        Arc::new(UnreachableSurveyStore),
    );

    let answer = assistant
        .answer("How many banks expect profitability to increase and what does EBA say about it?")
        .await
        .unwrap();

    // The document section is intact; the analytics section degrades to
    // its placeholder sentence instead of failing the whole request.
    assert!(answer.text.contains("REGULATORY CONTEXT"));
    assert!(answer.text.contains("The EBA highlights credit and operational risk"));
    assert!(answer.text.contains("No matching survey analytics"));
    assert!(!answer.sources.is_empty());
}

#[tokio::test]
async fn hybrid_survives_a_failing_document_branch() {
    let assistant = assistant(
        Arc::new(FailingEmbedder),
        corpus_store().await,
        Arc::new(FixedSurveyStore(survey_rows())),
    );

    let answer = assistant
        .answer("How many banks expect profitability to increase and what does EBA say about it?")
        .await
        .unwrap();

    assert!(answer.text.contains("- Increase: 40 responses"));
    assert!(answer.text.contains("temporarily unavailable"));
    assert!(answer.sources.is_empty());
}
