//! Axum route handlers for the Recommendation API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::models::{JobPosting, UserProfile};
use crate::recommendation::engine::{JobRecommendation, RecommendationEngine};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RecommendationRequest {
    pub profile: UserProfile,
    /// Postings to rank. Omitted ⇒ the service's loaded corpus.
    #[serde(default)]
    pub postings: Option<Vec<JobPosting>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub recommendations: Vec<JobRecommendation>,
    pub insight_backend: String,
}

/// POST /api/v1/recommendations
///
/// Ranks postings for the supplied profile and returns the top matches with
/// reasons and insights.
pub async fn handle_recommendations(
    State(state): State<AppState>,
    payload: Result<Json<RecommendationRequest>, JsonRejection>,
) -> Result<Json<RecommendationResponse>, AppError> {
    let Json(request) = payload?;
    let RecommendationRequest { profile, postings } = request;

    let postings: &[JobPosting] = match postings.as_deref() {
        Some(supplied) => supplied,
        None => state.search.postings(),
    };

    let engine =
        RecommendationEngine::new(profile).with_limit(state.config.recommendation_limit);
    let recommendations = engine
        .generate_with_provider(postings, state.insight_provider.as_ref())
        .await?;

    info!(
        "Generated {} recommendations from {} postings",
        recommendations.len(),
        postings.len()
    );

    Ok(Json(RecommendationResponse {
        recommendations,
        insight_backend: state.insight_provider.backend().to_string(),
    }))
}
