use std::sync::Arc;

use crate::config::Config;
use crate::models::question::QuizQuestion;
use crate::roadmap::provider::RoadmapProvider;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Startup configuration, kept for handlers that need runtime settings.
    #[allow(dead_code)]
    pub config: Config,
    /// Immutable question pool the sampler draws from per request.
    pub questions: Arc<Vec<QuizQuestion>>,
    /// Pluggable roadmap source. Default: LocalRoadmapGenerator. Swap via ROADMAP_API_URL.
    pub roadmap: Arc<dyn RoadmapProvider>,
}
