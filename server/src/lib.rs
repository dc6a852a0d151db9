use axum::{extract::{Path, Query, State}, http::StatusCode, routing::get, Json, Router};
use kwsearch_core::{DocumentId, Occurrence, SearchEngine, MAX_RESULTS};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[derive(Deserialize)]
pub struct SearchParams {
    pub kw1: String,
    /// Defaults to `kw1`, i.e. a single-keyword search.
    #[serde(default)]
    pub kw2: Option<String>,
    #[serde(default = "default_k")]
    pub k: usize,
}
fn default_k() -> usize { MAX_RESULTS }

#[derive(Serialize)]
pub struct SearchResponse {
    pub kw1: String,
    pub kw2: String,
    pub took_s: f64,
    pub results: Vec<DocumentId>,
}

#[derive(Serialize)]
pub struct KeywordResponse {
    pub keyword: String,
    pub occurrences: Vec<Occurrence>,
}

#[derive(Serialize)]
pub struct StatsResponse {
    pub documents: usize,
    pub keywords: usize,
}

/// The engine is fully built before serving, so handlers only read it.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<SearchEngine>,
}

pub fn build_app(engine: SearchEngine) -> Router {
    let app_state = AppState { engine: Arc::new(engine) };

    // CORS: read CORS_ALLOW_ORIGIN (comma-separated) or allow Any by default
    let cors = match std::env::var("CORS_ALLOW_ORIGIN") {
        Ok(val) => {
            let origins: Vec<_> = val
                .split(',')
                .filter_map(|s| s.trim().parse().ok())
                .collect();
            if origins.is_empty() {
                CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any)
            } else {
                CorsLayer::new().allow_origin(AllowOrigin::list(origins)).allow_methods(Any).allow_headers(Any)
            }
        }
        Err(_) => CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any),
    };

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/search", get(search_handler))
        .route("/keywords/:keyword", get(keyword_handler))
        .route("/stats", get(stats_handler))
        .with_state(app_state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

pub async fn search_handler(State(state): State<AppState>, Query(params): Query<SearchParams>) -> Json<SearchResponse> {
    let start = std::time::Instant::now();
    // index keywords are lower-case; queries are matched as given
    let kw1 = params.kw1.trim().to_lowercase();
    let kw2 = params.kw2.as_deref().map(|s| s.trim().to_lowercase()).unwrap_or_else(|| kw1.clone());
    let k = params.k.clamp(1, MAX_RESULTS);
    let results = state.engine.search_limited(&kw1, &kw2, k);
    tracing::debug!(%kw1, %kw2, hits = results.len(), "search");
    let elapsed = start.elapsed();
    Json(SearchResponse { kw1, kw2, took_s: elapsed.as_secs_f64(), results })
}

pub async fn keyword_handler(State(state): State<AppState>, Path(keyword): Path<String>) -> Result<Json<KeywordResponse>, (StatusCode, Json<serde_json::Value>)> {
    let keyword = keyword.to_lowercase();
    if !state.engine.index().contains(&keyword) {
        return Err((StatusCode::NOT_FOUND, Json(serde_json::json!({ "error": "keyword not indexed" }))));
    }
    let occurrences = state.engine.occurrences(&keyword).to_vec();
    Ok(Json(KeywordResponse { keyword, occurrences }))
}

pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let index = state.engine.index();
    Json(StatsResponse { documents: index.document_count(), keywords: index.keyword_count() })
}
