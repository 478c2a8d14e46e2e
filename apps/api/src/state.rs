use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::roadmap::generator::RoadmapGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub llm: LlmClient,
    /// Pluggable roadmap generator. Production wires in `LlmClient`; tests can
    /// substitute a canned implementation.
    pub generator: Arc<dyn RoadmapGenerator>,
    pub config: Config,
}
