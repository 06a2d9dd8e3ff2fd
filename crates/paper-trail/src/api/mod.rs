//! HTTP API: a thin dispatcher over the core.
//!
//! Handlers validate nothing beyond deserialization and delegate straight
//! to the store, pipeline, and agents. Absent results map to 404; store and
//! agent failures map to 502, distinguishable from "not found".

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::agents::{FutureWorksAgent, QnaAgent, SummarizeAgent};
use crate::client::ArxivClient;
use crate::error::{AgentError, StoreError};
use crate::ingest;
use crate::models::Paper;
use crate::store::PaperStore;

/// Shared handles for the API handlers.
#[derive(Clone)]
pub struct AppState {
    /// Paper store.
    pub store: Arc<dyn PaperStore>,

    /// Search client for ingestion.
    pub client: Arc<ArxivClient>,

    /// Question-answering agent.
    pub qna: Arc<QnaAgent>,

    /// Future-work agent.
    pub future_works: Arc<FutureWorksAgent>,

    /// Summarization agent.
    pub summarize: Arc<SummarizeAgent>,
}

/// API-boundary errors.
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    /// The requested record or year has no data.
    #[error("{0}")]
    NotFound(String),

    /// The store failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// An agent failed.
    #[error(transparent)]
    Agent(#[from] AgentError),
}

impl ApiError {
    fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Store(_) | Self::Agent(_) => StatusCode::BAD_GATEWAY,
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[derive(Debug, Deserialize)]
struct QuestionRequest {
    paper_id: String,
    question: String,
}

#[derive(Debug, Deserialize)]
struct PaperRequest {
    paper_id: String,
}

#[derive(Debug, Deserialize)]
struct YearRequest {
    year: i32,
}

#[derive(Debug, Deserialize)]
struct IngestRequest {
    topic: String,
    #[serde(default = "default_max_results")]
    max_results: usize,
}

fn default_max_results() -> usize {
    10_000
}

/// Build the API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/papers/{year}", get(papers_by_year))
        .route("/paper/{paper_id}", get(paper_by_id))
        .route("/questions", post(answer_question))
        .route("/future-works", post(future_works_for_paper))
        .route("/summaries", post(summarize_findings))
        .route("/future-works/year", post(future_works_for_year))
        .route("/key-points", post(extract_key_points))
        .route("/ingest", post(ingest_topic))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve the API until ctrl-c.
///
/// # Errors
///
/// Returns error on bind or server failure.
pub async fn serve(state: AppState, port: u16) -> anyhow::Result<()> {
    let app = router(state);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    tracing::info!("API listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

    tracing::info!("API shut down");
    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c().await.expect("Failed to install CTRL+C handler");
    tracing::info!("Received shutdown signal");
}

async fn papers_by_year(
    State(state): State<AppState>,
    Path(year): Path<i32>,
) -> Result<Json<Vec<Paper>>, ApiError> {
    let papers = require_papers(&state, year).await?;
    Ok(Json(papers))
}

async fn paper_by_id(
    State(state): State<AppState>,
    Path(paper_id): Path<String>,
) -> Result<Json<Paper>, ApiError> {
    let paper = require_paper(&state, &paper_id).await?;
    Ok(Json(paper))
}

async fn answer_question(
    State(state): State<AppState>,
    Json(request): Json<QuestionRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let paper = require_paper(&state, &request.paper_id).await?;
    let answer = state.qna.answer(&paper, &request.question).await?;
    Ok(Json(json!({ "answer": answer })))
}

async fn future_works_for_paper(
    State(state): State<AppState>,
    Json(request): Json<PaperRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let paper = require_paper(&state, &request.paper_id).await?;
    let future_work = state.future_works.suggest(&paper).await?;
    Ok(Json(json!({ "future_work": future_work })))
}

async fn summarize_findings(
    State(state): State<AppState>,
    Json(request): Json<YearRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let papers = require_papers(&state, request.year).await?;
    let findings_summary = state.summarize.summarize_findings(&papers).await?;
    Ok(Json(json!({ "findings_summary": findings_summary })))
}

async fn future_works_for_year(
    State(state): State<AppState>,
    Json(request): Json<YearRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let papers = require_papers(&state, request.year).await?;
    let future_works_summary = state.summarize.future_works(&papers).await?;
    Ok(Json(json!({ "future_works_summary": future_works_summary })))
}

async fn extract_key_points(
    State(state): State<AppState>,
    Json(request): Json<YearRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let papers = require_papers(&state, request.year).await?;
    let key_points = state.summarize.extract_key_points(&papers).await?;
    Ok(Json(json!({ "key_points": key_points })))
}

async fn ingest_topic(
    State(state): State<AppState>,
    Json(request): Json<IngestRequest>,
) -> Result<Json<ingest::IngestReport>, ApiError> {
    let report =
        ingest::ingest(&state.client, state.store.as_ref(), &request.topic, request.max_results)
            .await;
    Ok(Json(report))
}

async fn require_papers(state: &AppState, year: i32) -> Result<Vec<Paper>, ApiError> {
    let papers = state.store.find_by_year(year).await?;
    if papers.is_empty() {
        return Err(ApiError::not_found(format!("no papers found for year {year}")));
    }
    Ok(papers)
}

async fn require_paper(state: &AppState, paper_id: &str) -> Result<Paper, ApiError> {
    state
        .store
        .find_by_id(paper_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("paper {paper_id} not found")))
}
