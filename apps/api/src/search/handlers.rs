//! Axum route handlers for the Search API.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::search::engine::SearchResult;
use crate::search::filters::SearchFilters;
use crate::search::saved::SavedSearch;
use crate::search::stats::{filter_stats, FilterStats};
use crate::search::suggestions::{SearchSuggestion, SuggestionKind};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,
    pub stats: FilterStats,
}

#[derive(Debug, Deserialize)]
pub struct SuggestionQuery {
    #[serde(default)]
    pub q: String,
    /// Raw label; an unrecognised kind yields no suggestions.
    #[serde(default)]
    pub kind: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestionResponse {
    pub suggestions: Vec<SearchSuggestion>,
}

#[derive(Debug, Deserialize)]
pub struct CreateSavedSearchRequest {
    pub name: String,
    #[serde(default)]
    pub filters: SearchFilters,
    #[serde(default)]
    pub alerts_enabled: bool,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

fn run_search(state: &AppState, filters: &SearchFilters) -> SearchResponse {
    let results = state.search.search(filters);
    let stats = filter_stats(&results);
    SearchResponse { results, stats }
}

/// POST /api/v1/search
pub async fn handle_search(
    State(state): State<AppState>,
    payload: Result<Json<SearchFilters>, JsonRejection>,
) -> Result<Json<SearchResponse>, AppError> {
    let Json(filters) = payload?;
    Ok(Json(run_search(&state, &filters)))
}

/// GET /api/v1/search/suggestions?q=&kind=
pub async fn handle_suggestions(
    State(state): State<AppState>,
    query: Result<Query<SuggestionQuery>, QueryRejection>,
) -> Result<Json<SuggestionResponse>, AppError> {
    let Query(params) = query?;
    let suggestions = match params.kind.as_deref().map(str::trim) {
        None | Some("") => state.search.get_suggestions(&params.q, None),
        Some(raw) => match SuggestionKind::parse(raw) {
            Some(kind) => state.search.get_suggestions(&params.q, Some(kind)),
            None => Vec::new(),
        },
    };
    Ok(Json(SuggestionResponse { suggestions }))
}

/// GET /api/v1/saved-searches
pub async fn handle_list_saved(
    State(state): State<AppState>,
) -> Result<Json<Vec<SavedSearch>>, AppError> {
    Ok(Json(state.saved_searches.list().await?))
}

/// POST /api/v1/saved-searches
pub async fn handle_create_saved(
    State(state): State<AppState>,
    payload: Result<Json<CreateSavedSearchRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SavedSearch>), AppError> {
    let Json(request) = payload?;
    let saved = state
        .saved_searches
        .create(&request.name, request.filters, request.alerts_enabled)
        .await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

/// POST /api/v1/saved-searches/:id/run
///
/// Executes the stored filters against the corpus and records the run.
pub async fn handle_run_saved(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<SearchResponse>, AppError> {
    let Path(id) = path?;
    let saved = state.saved_searches.get(id).await?;
    let response = run_search(&state, &saved.filters);
    state
        .saved_searches
        .record_run(id, response.results.len())
        .await?;
    Ok(Json(response))
}

/// DELETE /api/v1/saved-searches/:id
pub async fn handle_delete_saved(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let Path(id) = path?;
    state.saved_searches.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
