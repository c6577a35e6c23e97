use std::sync::Arc;

use crate::config::Config;
use crate::recommendation::insights::InsightProvider;
use crate::search::engine::SearchEngine;
use crate::search::saved::SavedSearchStore;

/// Shared application state injected into all route handlers via Axum extractors.
/// Built once in `main`; no module keeps its own global instance.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Corpus snapshot and its index. Read-only after startup.
    pub search: Arc<SearchEngine>,
    pub saved_searches: SavedSearchStore,
    /// Pluggable insight text. Default: TemplateInsightProvider.
    pub insight_provider: Arc<dyn InsightProvider>,
}
