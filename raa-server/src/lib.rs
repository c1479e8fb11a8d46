//! HTTP transport for the Regulatory Analytics Assistant.
//!
//! A thin wrapper over [`raa_assistant::Assistant`]: request validation,
//! error-to-status mapping, and nothing else. Business logic stays in the
//! assistant crates.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use raa_assistant::Assistant;
use raa_core::{Error, IntentLabel, SourceRef};

/// Request body for `POST /query`.
#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    /// The natural-language question.
    pub query: String,
}

/// Response body for `POST /query`.
#[derive(Debug, Serialize)]
pub struct QueryResponse {
    /// The strategy the query was routed to.
    pub query_type: IntentLabel,
    /// The answer text.
    pub answer: String,
    /// Citations for the answer.
    pub sources: Vec<SourceRef>,
}

/// Build the application router.
pub fn router(assistant: Arc<Assistant>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/query", post(query))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(assistant)
}

/// Healthcheck endpoint.
async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Main query endpoint: classify the query and answer it.
async fn query(
    State(assistant): State<Arc<Assistant>>,
    Json(request): Json<QueryRequest>,
) -> Result<Json<QueryResponse>, (StatusCode, Json<Value>)> {
    let query = request.query.trim();
    if query.is_empty() {
        return Err(reject(StatusCode::BAD_REQUEST, "query must not be empty"));
    }

    let preview: String = query.chars().take(100).collect();
    info!(query = %preview, "processing query");

    match assistant.answer(query).await {
        Ok(answer) => Ok(Json(QueryResponse {
            query_type: answer.query_type,
            answer: answer.text,
            sources: answer.sources,
        })),
        Err(e) => {
            error!(error = %e, "query processing failed");
            Err(map_error(e))
        }
    }
}

/// Map a core error to a status code and a plain-language body.
///
/// Internal error text never reaches the client.
fn map_error(e: Error) -> (StatusCode, Json<Value>) {
    match e {
        Error::StorageUnavailable { .. } | Error::ExternalService { .. } => reject(
            StatusCode::BAD_GATEWAY,
            "a backing service is temporarily unavailable, please retry",
        ),
        Error::Validation(_) => reject(StatusCode::BAD_REQUEST, "invalid query"),
        Error::Config(_) => reject(
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal server error while processing query",
        ),
    }
}

fn reject(status: StatusCode, message: &str) -> (StatusCode, Json<Value>) {
    (status, Json(json!({ "error": message })))
}
