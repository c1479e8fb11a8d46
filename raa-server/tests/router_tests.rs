//! Router tests over fake collaborators.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use raa_analytics::{Aggregation, AnalyticsRow, SurveyStore};
use raa_assistant::Assistant;
use raa_core::{ChatModel, Result};
use raa_rag::{EmbeddingProvider, InMemoryVectorStore};
use raa_server::router;

struct FixedEmbedder;

#[async_trait]
impl EmbeddingProvider for FixedEmbedder {
    async fn embed(&self, _text: &str) -> Result<Vec<f32>> {
        Ok(vec![1.0, 0.0])
    }

    fn dimensions(&self) -> usize {
        2
    }
}

struct FixedSurveyStore;

#[async_trait]
impl SurveyStore for FixedSurveyStore {
    async fn run_aggregation(&self, _aggregation: Aggregation) -> Result<Vec<AnalyticsRow>> {
        Ok(vec![AnalyticsRow { label: "Increase".into(), responses: 40 }])
    }
}

struct CannedChatModel;

#[async_trait]
impl ChatModel for CannedChatModel {
    async fn complete(&self, _system: &str, _user: &str) -> Result<String> {
        Ok("canned".to_string())
    }

    fn name(&self) -> &str {
        "canned"
    }
}

fn test_app() -> axum::Router {
    let assistant = Assistant::builder()
        .embedder(Arc::new(FixedEmbedder))
        .vector_store(Arc::new(InMemoryVectorStore::new()))
        .survey_store(Arc::new(FixedSurveyStore))
        .chat_model(Arc::new(CannedChatModel))
        .build()
        .unwrap();
    router(Arc::new(assistant))
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_reports_ok() {
    let response = test_app()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "status": "ok" }));
}

#[tokio::test]
async fn blank_query_is_rejected_before_the_core() {
    let request = Request::builder()
        .method("POST")
        .uri("/query")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({ "query": "   " }).to_string()))
        .unwrap();

    let response = test_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn analytics_query_returns_the_full_envelope() {
    let request = Request::builder()
        .method("POST")
        .uri("/query")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({ "query": "profitability of banks" }).to_string()))
        .unwrap();

    let response = test_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["query_type"], "analytics");
    assert!(body["answer"].as_str().unwrap().contains("Increase: 40 responses"));
    assert_eq!(body["sources"], json!([]));
}

#[tokio::test]
async fn empty_corpus_document_query_is_still_a_success() {
    let request = Request::builder()
        .method("POST")
        .uri("/query")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({ "query": "what are the key risks mentioned by EBA" }).to_string(),
        ))
        .unwrap();

    let response = test_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["query_type"], "document");
    assert!(body["answer"].as_str().unwrap().contains("No relevant information"));
}
