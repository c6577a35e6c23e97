mod config;
mod errors;
mod models;
mod recommendation;
mod routes;
mod search;
mod state;
mod store;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::models::catalog::{load_postings, sample_postings};
use crate::recommendation::insights::{InsightProvider, TemplateInsightProvider};
use crate::routes::build_router;
use crate::search::engine::SearchEngine;
use crate::search::saved::SavedSearchStore;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting JobMatch API v{}", env!("CARGO_PKG_VERSION"));

    // Posting corpus
    let postings = match &config.postings_path {
        Some(path) => load_postings(path)?,
        None => {
            info!("POSTINGS_PATH not set, using built-in sample postings");
            sample_postings()
        }
    };
    let search = Arc::new(SearchEngine::new(postings));

    // Saved searches (Redis when configured, in-memory otherwise)
    let store = store::connect(config.redis_url.as_deref())?;
    let saved_searches = SavedSearchStore::new(store);

    let insight_provider: Arc<dyn InsightProvider> = Arc::new(TemplateInsightProvider);
    info!(
        "Insight provider initialized (backend: {})",
        insight_provider.backend()
    );

    let state = AppState {
        config: config.clone(),
        search,
        saved_searches,
        insight_provider,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict allowed origins once the frontend host is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
