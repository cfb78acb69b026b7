use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use nb_core::{SummarizedRecord, SummaryParams};
use nb_scrapers::rules::DEFAULT_LIMIT;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct TopNewsRequest {
    pub url: Option<String>,
    pub limit: Option<usize>,
    pub max_length: Option<usize>,
    pub min_length: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct SummarizeRequest {
    pub url: Option<String>,
    pub max_length: Option<usize>,
    pub min_length: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TopNewsResponse {
    pub articles: Vec<SummarizedRecord>,
    pub count: usize,
}

/// Error rendered as `{"error": message}` with the given status.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

const INDEX_HTML: &str = include_str!("../static/index.html");

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

fn require_url(url: Option<String>) -> Result<String, ApiError> {
    url.map(|u| u.trim().to_string())
        .filter(|u| !u.is_empty())
        .ok_or_else(|| ApiError::bad_request("No URL provided"))
}

pub async fn top_news(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<TopNewsRequest>, JsonRejection>,
) -> Result<Json<TopNewsResponse>, ApiError> {
    let Json(request) = payload?;
    let url = require_url(request.url)?;
    let limit = request.limit.unwrap_or(DEFAULT_LIMIT);
    let params = SummaryParams::new(request.max_length, request.min_length);

    info!("🦗 Fetching top {} articles from {}", limit, url);
    let articles = state.scraper.get_top_news(&url, limit).await;
    if articles.is_empty() {
        return Err(ApiError::bad_request("Could not fetch news articles"));
    }

    let articles = state.summarizer.summarize_all(articles, params).await;
    info!("✅ Summarized {} articles from {}", articles.len(), url);
    Ok(Json(TopNewsResponse {
        count: articles.len(),
        articles,
    }))
}

pub async fn summarize(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SummarizeRequest>, JsonRejection>,
) -> Result<Json<SummarizedRecord>, ApiError> {
    let Json(request) = payload?;
    let url = require_url(request.url)?;
    let params = SummaryParams::new(request.max_length, request.min_length);

    let article = state
        .scraper
        .scrape_article(&url)
        .await
        .ok_or_else(|| ApiError::bad_request("Could not scrape article"))?;

    let record = state
        .summarizer
        .summarize(&article, params)
        .await
        .ok_or_else(|| ApiError::internal("Could not generate summary"))?;

    Ok(Json(record))
}
