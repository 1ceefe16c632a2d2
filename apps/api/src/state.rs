use std::sync::Arc;

use crate::config::Config;
use crate::matching::engine::JobMatcher;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable matcher. Default: KeywordJobMatcher over the configured reference tables.
    pub matcher: Arc<dyn JobMatcher>,
}
