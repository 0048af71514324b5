//! HTTP API over the analyzer and the review store.
//!
//! The server owns one [`SentimentAnalyzer`] (pure, shared freely) and one
//! [`ReviewStore`] behind a single mutex, so id assignment in `append` is
//! atomic with respect to concurrent submissions.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use log::info;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::sync::Mutex;

use crate::analyzer::{Sentiment, SentimentAnalyzer};
use crate::store::{ReviewRecord, ReviewStore};

const DEFAULT_PRODUCT: &str = "Unknown Product";

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html>
<head><title>limbic</title></head>
<body>
  <h1>limbic</h1>
  <p>Lexicon-based sentiment analysis for product reviews.</p>
  <ul>
    <li><code>POST /analyze</code> &mdash; body <code>{"review": "...", "product": "..."}</code></li>
    <li><code>GET /reviews</code> &mdash; all analyzed reviews</li>
    <li><code>GET /stats</code> &mdash; aggregate sentiment counts</li>
    <li><code>GET /clear</code> &mdash; wipe the review store</li>
  </ul>
</body>
</html>
"#;

/// Shared application state.
///
/// # Thread Safety
///
/// - `analyzer`: pure and immutable, shared via `Arc` with no lock
/// - `store`: all mutation and reads go through one `Mutex`, keeping the
///   length/id invariant intact under concurrent requests
#[derive(Clone)]
pub struct AppState {
    analyzer: Arc<SentimentAnalyzer>,
    store: Arc<Mutex<ReviewStore>>,
}

impl AppState {
    /// Creates application state with an empty review store
    pub fn new(analyzer: SentimentAnalyzer) -> Self {
        Self {
            analyzer: Arc::new(analyzer),
            store: Arc::new(Mutex::new(ReviewStore::new())),
        }
    }
}

/// Errors surfaced by API handlers.
///
/// Handlers return these instead of panicking; the `IntoResponse` impl maps
/// each kind to a status code and an `{"error": ...}` payload.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ApiError {
    /// A required input was missing or empty; the store is left untouched.
    #[error("{0}")]
    Validation(String),

    /// Any other processing failure; no partial state is committed.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// Review text to analyze; required and non-empty after trimming
    #[serde(default)]
    pub review: String,
    /// Optional product label
    pub product: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub sentiment: Sentiment,
    pub confidence: f64,
    pub product: String,
    pub review_id: u64,
}

#[derive(Debug, Serialize)]
pub struct ReviewsResponse {
    pub reviews: Vec<ReviewRecord>,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub total_reviews: usize,
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

/// Creates the API router with all routes bound to the given state.
///
/// # Example
///
/// ```rust,no_run
/// use limbic::{AppState, BuiltinLexicon, SentimentAnalyzer};
///
/// #[tokio::main]
/// async fn main() {
///     let analyzer = SentimentAnalyzer::builder()
///         .with_lexicon(BuiltinLexicon::English)
///         .unwrap()
///         .build()
///         .unwrap();
///     let router = limbic::router(AppState::new(analyzer));
///
///     let listener = tokio::net::TcpListener::bind("0.0.0.0:5000").await.unwrap();
///     axum::serve(listener, router).await.unwrap();
/// }
/// ```
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/analyze", post(analyze_review))
        .route("/reviews", get(get_reviews))
        .route("/stats", get(get_stats))
        // Known API wart: a retrieval verb for a mutating action. Kept as a
        // GET for compatibility with existing clients; the wipe is idempotent.
        .route("/clear", get(clear_reviews))
        .with_state(state)
}

async fn home() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn analyze_review(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let review = request.review.trim().to_string();
    if review.is_empty() {
        return Err(ApiError::Validation("Review text is required".to_string()));
    }
    let product = request
        .product
        .as_deref()
        .unwrap_or(DEFAULT_PRODUCT)
        .trim()
        .to_string();

    let (sentiment, confidence) = state.analyzer.analyze(&review);

    let review_id = {
        let mut store = state.store.lock().await;
        store.append(product.clone(), review, sentiment, confidence)
    };
    info!(
        "Stored review {} for '{}': {} at {:.2}% confidence",
        review_id, product, sentiment, confidence
    );

    Ok(Json(AnalyzeResponse {
        sentiment,
        confidence,
        product,
        review_id,
    }))
}

async fn get_reviews(State(state): State<AppState>) -> Json<ReviewsResponse> {
    let store = state.store.lock().await;
    Json(ReviewsResponse {
        reviews: store.all().to_vec(),
    })
}

async fn get_stats(State(state): State<AppState>) -> Json<StatsResponse> {
    let store = state.store.lock().await;
    let stats = store.stats();
    Json(StatsResponse {
        total_reviews: stats.total,
        positive: stats.positive,
        negative: stats.negative,
        neutral: stats.neutral,
    })
}

async fn clear_reviews(State(state): State<AppState>) -> Json<serde_json::Value> {
    let mut store = state.store.lock().await;
    store.clear();
    info!("Cleared all stored reviews");
    Json(json!({ "message": "All reviews cleared" }))
}
