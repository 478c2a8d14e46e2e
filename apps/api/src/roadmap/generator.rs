//! Roadmap generation seam.
//!
//! `AppState` holds an `Arc<dyn RoadmapGenerator>`, so handlers and tests
//! never talk to the OpenAI API directly. The returned text is untrusted
//! and always goes through `ingest` before anything is persisted.

use async_trait::async_trait;

use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::roadmap::prompts::{ROADMAP_PROMPT_TEMPLATE, ROADMAP_SYSTEM};

/// Inputs to a roadmap generation call.
#[derive(Debug, Clone)]
pub struct GenerateParams {
    pub goal: String,
    pub skills: Vec<String>,
    pub hours_per_day: u32,
    pub duration_months: u32,
    pub include_weekends: bool,
}

#[async_trait]
pub trait RoadmapGenerator: Send + Sync {
    /// Returns the raw model output for a roadmap request. May fail with a
    /// network or API error, or return text that later fails ingest; both
    /// surface to the user as a retryable failure.
    async fn generate_roadmap(&self, params: &GenerateParams) -> Result<String, AppError>;
}

#[async_trait]
impl RoadmapGenerator for LlmClient {
    async fn generate_roadmap(&self, params: &GenerateParams) -> Result<String, AppError> {
        let prompt = ROADMAP_PROMPT_TEMPLATE
            .replace("{goal}", &params.goal)
            .replace("{skills}", &params.skills.join(", "))
            .replace("{hours_per_day}", &params.hours_per_day.to_string())
            .replace("{duration_months}", &params.duration_months.to_string())
            .replace("{include_weekends}", &params.include_weekends.to_string());

        Ok(self.call(ROADMAP_SYSTEM, &prompt).await?)
    }
}
