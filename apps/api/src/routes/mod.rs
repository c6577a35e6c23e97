pub mod health;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::recommendation::handlers as recommendation;
use crate::search::handlers as search;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Recommendation API
        .route(
            "/api/v1/recommendations",
            post(recommendation::handle_recommendations),
        )
        // Search API
        .route("/api/v1/search", post(search::handle_search))
        .route(
            "/api/v1/search/suggestions",
            get(search::handle_suggestions),
        )
        .route(
            "/api/v1/saved-searches",
            get(search::handle_list_saved).post(search::handle_create_saved),
        )
        .route(
            "/api/v1/saved-searches/:id",
            delete(search::handle_delete_saved),
        )
        .route(
            "/api/v1/saved-searches/:id/run",
            post(search::handle_run_saved),
        )
        .with_state(state)
}
